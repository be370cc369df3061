use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::RepositoryError;
use crate::item::RepositoryItem;

/// A repository that supports write operations.
///
/// Every operation takes the full item value and returns the item as the
/// provider persisted it, which may differ from the input (generated
/// fields, normalized values). All three are request/response, never
/// fire-and-forget, and all accept cancellation advisorily: an operation
/// the provider already finished completes successfully even if the signal
/// fired meanwhile.
#[async_trait]
pub trait WriteRepository<T: RepositoryItem>: Send + Sync {
    /// Persist a new item. Fails with [`RepositoryError::Conflict`] when
    /// an item with the same identity already exists.
    async fn create_item(
        &self,
        item: T,
        signal: CancellationToken,
    ) -> Result<T, RepositoryError>;

    /// Persist changes to an existing item. Fails with
    /// [`RepositoryError::NotFound`] when no matching item exists; never
    /// creates one.
    async fn update_item(
        &self,
        item: T,
        signal: CancellationToken,
    ) -> Result<T, RepositoryError>;

    /// Remove an existing item, returning the removed value. Fails with
    /// [`RepositoryError::NotFound`] when no matching item exists.
    async fn delete_item(
        &self,
        item: T,
        signal: CancellationToken,
    ) -> Result<T, RepositoryError>;
}
