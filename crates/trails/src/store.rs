//! Saved trails and calculation history.
//!
//! The HTTP layer talks to a [`TrailStore`] it is handed at startup; the
//! difficulty engine never sees it. Both collections are kept newest-first.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{errors::StoreError, models::Trail};

/// Default cap on the calculation history.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

pub type SharedStore = Arc<dyn TrailStore>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrailCollection {
    /// Trails the user chose to keep.
    Saved,
    /// Every calculation, bounded.
    History,
}

impl fmt::Display for TrailCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailCollection::Saved => f.write_str("saved"),
            TrailCollection::History => f.write_str("history"),
        }
    }
}

/// One page of a collection plus its full size.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Trail>,
    pub total_count: usize,
}

#[async_trait]
pub trait TrailStore: Send + Sync {
    /// Adds a trail; fails with `Conflict` if the id is already present.
    async fn insert(&self, collection: TrailCollection, trail: Trail) -> Result<(), StoreError>;

    async fn get(&self, collection: TrailCollection, id: Uuid) -> Result<Trail, StoreError>;

    async fn list(&self, collection: TrailCollection, limit: usize, offset: usize) -> Page;

    /// Removes a trail and hands it back so the caller can offer an undo.
    async fn delete(&self, collection: TrailCollection, id: Uuid) -> Result<Trail, StoreError>;

    /// Puts a deleted trail back where its timestamp places it.
    ///
    /// Fails with `Evicted` if a full history would drop it straight away.
    async fn restore(&self, collection: TrailCollection, trail: Trail) -> Result<(), StoreError>;

    async fn count(&self, collection: TrailCollection) -> usize;
}

#[derive(Debug, Default)]
struct Collections {
    saved: Vec<Trail>,
    history: Vec<Trail>,
}

impl Collections {
    fn get(&self, collection: TrailCollection) -> &Vec<Trail> {
        match collection {
            TrailCollection::Saved => &self.saved,
            TrailCollection::History => &self.history,
        }
    }

    fn get_mut(&mut self, collection: TrailCollection) -> &mut Vec<Trail> {
        match collection {
            TrailCollection::Saved => &mut self.saved,
            TrailCollection::History => &mut self.history,
        }
    }
}

/// Process-local [`TrailStore`].
#[derive(Debug)]
pub struct InMemoryTrailStore {
    collections: RwLock<Collections>,
    history_limit: usize,
}

impl Default for InMemoryTrailStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl InMemoryTrailStore {
    pub fn new(history_limit: usize) -> Self {
        Self {
            collections: RwLock::new(Collections::default()),
            history_limit,
        }
    }

    pub fn shared(history_limit: usize) -> SharedStore {
        Arc::new(Self::new(history_limit))
    }

    async fn place(
        &self,
        collection: TrailCollection,
        trail: Trail,
        restoring: bool,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let trails = collections.get_mut(collection);

        if trails.iter().any(|t| t.id == trail.id) {
            return Err(StoreError::Conflict(trail.id));
        }

        // Newest first; on equal timestamps the later insertion goes first.
        let position = trails.partition_point(|t| t.timestamp > trail.timestamp);
        let bounded = collection == TrailCollection::History;

        if restoring && bounded && position >= self.history_limit {
            return Err(StoreError::Evicted(trail.id));
        }

        trails.insert(position, trail);

        if bounded && trails.len() > self.history_limit {
            let dropped = trails.len() - self.history_limit;
            trails.truncate(self.history_limit);
            debug!("Dropped {dropped} oldest history entries");
        }

        Ok(())
    }
}

#[async_trait]
impl TrailStore for InMemoryTrailStore {
    async fn insert(&self, collection: TrailCollection, trail: Trail) -> Result<(), StoreError> {
        let id = trail.id;
        self.place(collection, trail, false).await?;
        debug!("Stored trail {id} in {collection}");
        Ok(())
    }

    async fn get(&self, collection: TrailCollection, id: Uuid) -> Result<Trail, StoreError> {
        let collections = self.collections.read().await;
        collections
            .get(collection)
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self, collection: TrailCollection, limit: usize, offset: usize) -> Page {
        let collections = self.collections.read().await;
        let trails = collections.get(collection);
        Page {
            items: trails.iter().skip(offset).take(limit).cloned().collect(),
            total_count: trails.len(),
        }
    }

    async fn delete(&self, collection: TrailCollection, id: Uuid) -> Result<Trail, StoreError> {
        let mut collections = self.collections.write().await;
        let trails = collections.get_mut(collection);
        let position = trails
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let trail = trails.remove(position);
        info!("Removed trail {id} ({}) from {collection}", trail.name);
        Ok(trail)
    }

    async fn restore(&self, collection: TrailCollection, trail: Trail) -> Result<(), StoreError> {
        let id = trail.id;
        self.place(collection, trail, true).await?;
        info!("Restored trail {id} to {collection}");
        Ok(())
    }

    async fn count(&self, collection: TrailCollection) -> usize {
        self.collections.read().await.get(collection).len()
    }
}
