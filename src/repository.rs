use crate::item::RepositoryItem;
use crate::read::ReadRepository;
use crate::write::WriteRepository;

/// A repository that supports both read and write operations.
///
/// Pure capability union of [`ReadRepository`] and [`WriteRepository`]; it
/// adds no operations of its own. Collectively the C.R.U.D. set:
///
/// - [`WriteRepository::create_item`]
/// - [`ReadRepository::read_item`]
/// - [`WriteRepository::update_item`]
/// - [`WriteRepository::delete_item`]
///
/// Exists so consumers needing full CRUD depend on one capability set
/// instead of two.
pub trait Repository<T: RepositoryItem>: ReadRepository<T> + WriteRepository<T> {}

// Blanket implementation: anything implementing both halves is a Repository
impl<T: RepositoryItem, R> Repository<T> for R where R: ReadRepository<T> + WriteRepository<T> {}
