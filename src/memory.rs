//! In-memory provider backed by a HashMap, for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::error::RepositoryError;
use crate::factory::RepositoryFactory;
use crate::item::RepositoryItem;
use crate::predicate::{match_all, Predicate};
use crate::read::ReadRepository;
use crate::repository::Repository;
use crate::write::WriteRepository;

/// In-memory repository backed by a HashMap.
///
/// Items are stored as serialized JSON bytes keyed by identifier.
/// Clone-friendly via Arc: clones share the same map. Iteration order of
/// bulk reads is unspecified.
///
/// Cancellation is checked once at operation entry; past that point the
/// operation runs to completion even if the signal fires meanwhile.
#[derive(Clone)]
pub struct InMemoryRepository<T: RepositoryItem> {
    storage: Arc<RwLock<HashMap<T::Identifier, Vec<u8>>>>,
}

impl<T: RepositoryItem> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RepositoryItem> InMemoryRepository<T> {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn ensure_live(
        signal: &CancellationToken,
        operation: &'static str,
    ) -> Result<(), RepositoryError> {
        if signal.is_cancelled() {
            return Err(RepositoryError::Cancelled(operation));
        }
        Ok(())
    }
}

impl<T> InMemoryRepository<T>
where
    T: RepositoryItem + Serialize + DeserializeOwned,
{
    fn encode(item: &T) -> Result<Vec<u8>, RepositoryError> {
        serde_json::to_vec(item).map_err(|err| RepositoryError::Provider(err.to_string()))
    }

    fn decode(bytes: &[u8]) -> Result<T, RepositoryError> {
        serde_json::from_slice(bytes).map_err(|err| RepositoryError::Provider(err.to_string()))
    }
}

#[async_trait]
impl<T> ReadRepository<T> for InMemoryRepository<T>
where
    T: RepositoryItem + Serialize + DeserializeOwned,
{
    async fn read_item(
        &self,
        identifier: &T::Identifier,
        signal: CancellationToken,
    ) -> Result<T, RepositoryError> {
        Self::ensure_live(&signal, "read_item")?;

        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::Provider("lock poisoned during read".into()))?;

        let bytes = storage
            .get(identifier)
            .ok_or_else(|| RepositoryError::NotFound(identifier.to_string()))?;

        Self::decode(bytes)
    }

    async fn read_all_items(
        &self,
        matching: Option<Predicate<T>>,
        signal: CancellationToken,
    ) -> Result<Vec<T>, RepositoryError> {
        Self::ensure_live(&signal, "read_all_items")?;
        let matching = matching.unwrap_or_else(match_all);

        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::Provider("lock poisoned during read".into()))?;

        let mut items = Vec::new();
        for bytes in storage.values() {
            let item = Self::decode(bytes)?;
            if matching(&item) {
                items.push(item);
            }
        }

        trace!(matched = items.len(), "read_all_items");
        Ok(items)
    }
}

#[async_trait]
impl<T> WriteRepository<T> for InMemoryRepository<T>
where
    T: RepositoryItem + Serialize + DeserializeOwned,
{
    async fn create_item(
        &self,
        item: T,
        signal: CancellationToken,
    ) -> Result<T, RepositoryError> {
        Self::ensure_live(&signal, "create_item")?;

        let identifier = item.identifier();
        let bytes = Self::encode(&item)?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::Provider("lock poisoned during write".into()))?;

        if storage.contains_key(&identifier) {
            return Err(RepositoryError::Conflict(identifier.to_string()));
        }

        trace!(identifier = %identifier, "create_item");
        storage.insert(identifier, bytes);
        Ok(item)
    }

    async fn update_item(
        &self,
        item: T,
        signal: CancellationToken,
    ) -> Result<T, RepositoryError> {
        Self::ensure_live(&signal, "update_item")?;

        let identifier = item.identifier();
        let bytes = Self::encode(&item)?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::Provider("lock poisoned during write".into()))?;

        if !storage.contains_key(&identifier) {
            return Err(RepositoryError::NotFound(identifier.to_string()));
        }

        trace!(identifier = %identifier, "update_item");
        storage.insert(identifier, bytes);
        Ok(item)
    }

    async fn delete_item(
        &self,
        item: T,
        signal: CancellationToken,
    ) -> Result<T, RepositoryError> {
        Self::ensure_live(&signal, "delete_item")?;

        let identifier = item.identifier();

        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::Provider("lock poisoned during write".into()))?;

        let bytes = storage
            .remove(&identifier)
            .ok_or_else(|| RepositoryError::NotFound(identifier.to_string()))?;

        trace!(identifier = %identifier, "delete_item");
        Self::decode(&bytes)
    }
}

/// Factory handing out capability-restricted handles over one shared map.
pub struct InMemoryRepositoryFactory<T: RepositoryItem> {
    repository: InMemoryRepository<T>,
}

impl<T> Default for InMemoryRepositoryFactory<T>
where
    T: RepositoryItem + Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InMemoryRepositoryFactory<T>
where
    T: RepositoryItem + Serialize + DeserializeOwned,
{
    /// Create a factory over a fresh empty repository.
    pub fn new() -> Self {
        Self {
            repository: InMemoryRepository::new(),
        }
    }

    /// Create a factory over an existing repository handle.
    pub fn with_repository(repository: InMemoryRepository<T>) -> Self {
        Self { repository }
    }
}

impl<T> RepositoryFactory<T> for InMemoryRepositoryFactory<T>
where
    T: RepositoryItem + Serialize + DeserializeOwned,
{
    fn create_repository(&self) -> Arc<dyn Repository<T>> {
        Arc::new(self.repository.clone())
    }

    fn create_read_only_repository(&self) -> Arc<dyn ReadRepository<T>> {
        Arc::new(self.repository.clone())
    }

    fn create_write_only_repository(&self) -> Arc<dyn WriteRepository<T>> {
        Arc::new(self.repository.clone())
    }
}
