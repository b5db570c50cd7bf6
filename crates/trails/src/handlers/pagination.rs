//! Pagination helpers and types.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::store::Page;

/// Default page size, matching the five trails a list shows at once.
pub const DEFAULT_LIMIT: usize = 5;

/// Largest page a client may ask for.
pub const MAX_LIMIT: usize = 100;

pub fn default_limit() -> usize {
    DEFAULT_LIMIT
}

/// Standard pagination query parameters.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct PaginationQuery {
    /// Maximum number of results to return (capped at 100).
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Number of results to skip.
    #[serde(default)]
    pub offset: usize,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl PaginationQuery {
    /// The limit actually applied: at least 1, at most [`MAX_LIMIT`].
    pub fn effective_limit(&self) -> usize {
        self.limit.clamp(1, MAX_LIMIT)
    }
}

/// Paginated response wrapper.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total_count: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total_count,
            limit,
            offset,
        }
    }
}

impl PaginatedResponse<crate::models::Trail> {
    pub fn from_page(page: Page, query: &PaginationQuery) -> Self {
        Self::new(
            page.items,
            page.total_count,
            query.effective_limit(),
            query.offset,
        )
    }
}
