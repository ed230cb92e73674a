use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::StoreError;
use super::sequence::{EntityId, IdSequence};

/// An entity that can be stored in a [`Repository`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in not-found messages.
    const KIND: &'static str;

    /// Overwrite the record's identity.
    fn assign_id(&mut self, id: EntityId);
}

/// Keyed collection of records. Every operation is individually atomic.
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Snapshot of all records in ascending id order.
    async fn list(&self) -> Vec<T>;

    async fn get(&self, id: EntityId) -> Option<T>;

    /// Store `value` under a freshly issued id, ignoring whatever id it carried.
    async fn create(&self, value: T) -> T;

    /// Overwrite the record stored under `id`, pinning the record's id to `id`.
    async fn update(&self, id: EntityId, value: T) -> Result<T, StoreError>;

    /// Remove the record under `id`. Returns `false` if nothing was stored there.
    async fn delete(&self, id: EntityId) -> bool;
}

/// [`Repository`] kept in process memory.
///
/// Ids come from the injected [`IdSequence`] and only ever grow, so the map's key
/// order is also creation order.
pub struct InMemoryRepository<T> {
    ids: Arc<IdSequence>,
    records: RwLock<BTreeMap<EntityId, T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new(ids: Arc<IdSequence>) -> Self {
        Self {
            ids,
            records: RwLock::new(BTreeMap::new()),
        }
    }
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Vec<T> {
        self.records.read().await.values().cloned().collect()
    }

    async fn get(&self, id: EntityId) -> Option<T> {
        self.records.read().await.get(&id).cloned()
    }

    async fn create(&self, mut value: T) -> T {
        let id = self.ids.next();
        value.assign_id(id);
        self.records.write().await.insert(id, value.clone());
        value
    }

    async fn update(&self, id: EntityId, mut value: T) -> Result<T, StoreError> {
        let mut records = self.records.write().await;
        let slot = records.get_mut(&id).ok_or_else(|| StoreError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        })?;
        value.assign_id(id);
        *slot = value.clone();
        Ok(value)
    }

    async fn delete(&self, id: EntityId) -> bool {
        self.records.write().await.remove(&id).is_some()
    }
}
