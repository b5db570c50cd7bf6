//! HTTP request handlers for the trails API.
//!
//! This module re-exports handlers from focused submodules organized by domain.

// Utility submodules
pub mod pagination;

// Handler modules
pub mod difficulty;
pub mod health;
pub mod trails;

// Re-export handlers from submodules (including utoipa __path types for OpenAPI)
pub use difficulty::{
    __path_estimate_difficulty, __path_list_levels, __path_list_terrains,
    __path_score_difficulty, estimate_difficulty, list_levels, list_terrains, score_difficulty,
};
pub use health::{__path_health_check, health_check};
pub use pagination::{PaginatedResponse, PaginationQuery};
pub use trails::{
    __path_create_trail, __path_delete_history_entry, __path_delete_trail, __path_get_trail,
    __path_list_history, __path_list_trails, __path_restore_history_entry, __path_restore_trail,
    create_trail, delete_history_entry, delete_trail, get_trail, list_history, list_trails,
    restore_history_entry, restore_trail,
};
