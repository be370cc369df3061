use std::sync::Arc;

use crate::item::RepositoryItem;
use crate::read::ReadRepository;
use crate::repository::Repository;
use crate::write::WriteRepository;

/// Constructs repository instances.
///
/// Only the returned capability sets are fixed here; wiring,
/// configuration, and lifetime of the provider behind each handle are the
/// implementer's choice. Implementations should own their provider handle
/// outright rather than reach for hidden process-wide state.
pub trait RepositoryFactory<T: RepositoryItem>: Send + Sync {
    /// A repository with the full read/write capability set.
    fn create_repository(&self) -> Arc<dyn Repository<T>>;

    /// A read-only repository.
    fn create_read_only_repository(&self) -> Arc<dyn ReadRepository<T>>;

    /// A write-only repository.
    fn create_write_only_repository(&self) -> Arc<dyn WriteRepository<T>>;
}
