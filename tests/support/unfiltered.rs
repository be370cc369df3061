use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use repository_patterns::{
    CancellationToken, Predicate, ReadRepository, RepositoryError, RepositoryItem,
};

/// Read-only provider over a fixed, ordered result set that ignores the
/// predicate at fetch time. The stream adapter's predicate re-check is the
/// only filter such a provider gets, which makes the short-circuit guard
/// observable. Counts bulk fetches.
pub struct UnfilteredRepository<T> {
    items: Vec<T>,
    fetches: AtomicUsize,
}

impl<T> UnfilteredRepository<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<T: RepositoryItem> ReadRepository<T> for UnfilteredRepository<T> {
    async fn read_item(
        &self,
        identifier: &T::Identifier,
        _signal: CancellationToken,
    ) -> Result<T, RepositoryError> {
        self.items
            .iter()
            .find(|item| item.identifier() == *identifier)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(identifier.to_string()))
    }

    async fn read_all_items(
        &self,
        _matching: Option<Predicate<T>>,
        _signal: CancellationToken,
    ) -> Result<Vec<T>, RepositoryError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.clone())
    }
}
