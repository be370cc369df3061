use async_trait::async_trait;
use futures::future;
use futures::stream::{self, BoxStream, StreamExt};
use futures::TryFutureExt;
use tokio_util::sync::CancellationToken;

use crate::error::RepositoryError;
use crate::item::RepositoryItem;
use crate::predicate::{match_all, Predicate};

/// A repository that supports read operations.
///
/// The cancellation signal on every operation is advisory: consumers may
/// request cancellation, but the underlying storage provider is free to
/// finish first and return its result anyway.
#[async_trait]
pub trait ReadRepository<T: RepositoryItem>: Send + Sync {
    /// Read the one item matching `identifier`.
    ///
    /// The identifier must resolve to zero-or-one logical item in the
    /// backing store; how it resolves is the provider's business. A miss
    /// surfaces as [`RepositoryError::NotFound`] rather than a silently
    /// invalid item.
    async fn read_item(
        &self,
        identifier: &T::Identifier,
        signal: CancellationToken,
    ) -> Result<T, RepositoryError>;

    /// Read all items matching the predicate as a finite, materialized
    /// collection.
    ///
    /// An absent predicate means match-all; providers normalize it at
    /// operation entry. Result order is unspecified unless the provider
    /// documents one.
    async fn read_all_items(
        &self,
        matching: Option<Predicate<T>>,
        signal: CancellationToken,
    ) -> Result<Vec<T>, RepositoryError>;

    /// Read all matching items as a stream, derived entirely from
    /// [`read_all_items`](ReadRepository::read_all_items).
    ///
    /// Two phases: the full result set is fetched eagerly on first poll,
    /// then replayed one element at a time with the predicate re-applied
    /// before each yield. The first element failing the re-check ends the
    /// stream: a short-circuiting guard, not a filter. The bulk read
    /// stays the single source of truth; this is consumption-order
    /// laziness only. Finite, and restartable only by calling again.
    fn read_all_items_as_stream(
        &self,
        matching: Option<Predicate<T>>,
        signal: CancellationToken,
    ) -> BoxStream<'_, Result<T, RepositoryError>> {
        let matching = matching.unwrap_or_else(match_all);
        let recheck = matching.clone();

        self.read_all_items(Some(matching), signal)
            .map_ok(move |items| {
                stream::iter(items)
                    .take_while(move |item| future::ready(recheck(item)))
                    .map(Ok::<T, RepositoryError>)
            })
            .try_flatten_stream()
            .boxed()
    }
}
