//! Abstract contracts for a generic data-access layer following the
//! Repository pattern: read, write, combined read/write, and factory
//! traits. No storage, query execution, or concurrency logic lives here;
//! behavior belongs to the provider an implementer plugs in behind the
//! contracts.
//!
//! The one derived behavior is
//! [`ReadRepository::read_all_items_as_stream`]: a lazy, re-validating
//! stream view over the materialized bulk read. An in-memory provider is
//! included for testing and development.

mod error;
mod factory;
mod item;
mod memory;
mod predicate;
mod read;
mod repository;
mod write;

pub use error::RepositoryError;
pub use factory::RepositoryFactory;
pub use item::RepositoryItem;
pub use memory::{InMemoryRepository, InMemoryRepositoryFactory};
pub use predicate::{match_all, predicate, Predicate};
pub use read::ReadRepository;
pub use repository::Repository;
pub use write::WriteRepository;

// Re-export the cancellation signal type so implementers and consumers
// share one type without depending on tokio-util directly
pub use tokio_util::sync::CancellationToken;
