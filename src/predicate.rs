//! Shared predicate shape for bulk reads.

use std::sync::Arc;

/// A side-effect-free boolean test over an item.
///
/// Predicates must not mutate the item or external state; the type does not
/// enforce this, the contract does. Shared via `Arc` so the stream adapter
/// can re-apply the same predicate it handed to the bulk read.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Wrap a closure as a [`Predicate`].
pub fn predicate<T, F>(f: F) -> Predicate<T>
where
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The "always true" predicate an absent predicate normalizes to.
pub fn match_all<T>() -> Predicate<T> {
    Arc::new(|_| true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_all_accepts_everything() {
        let p = match_all::<i32>();
        assert!(p(&0));
        assert!(p(&-7));
    }

    #[test]
    fn wrapped_closure_is_applied() {
        let even = predicate(|n: &i32| n % 2 == 0);
        assert!(even(&4));
        assert!(!even(&5));
    }

    #[test]
    fn absent_predicate_normalizes_to_match_all() {
        let matching: Option<Predicate<i32>> = None;
        let matching = matching.unwrap_or_else(match_all);
        assert!(matching(&41));
    }
}
