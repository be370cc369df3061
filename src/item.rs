use std::fmt;
use std::hash::Hash;

/// Marks a type as storable through the repository contracts and names the
/// part of the value that serves as its key.
///
/// Items are otherwise opaque to this layer: which field backs
/// [`identifier`](RepositoryItem::identifier), and what equality means for
/// two items, is entirely the implementer's choice. The identifier must be
/// comparable so providers can key on it, and printable so failures can
/// name what was missing.
pub trait RepositoryItem: Send + Sync + Clone + 'static {
    /// The key type used for single-item lookup.
    type Identifier: Clone + Eq + Hash + fmt::Display + Send + Sync + 'static;

    /// The identifier of this item.
    fn identifier(&self) -> Self::Identifier;
}
