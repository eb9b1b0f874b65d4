//! Identity contract for anything stored in a [`PrefixIndex`](crate::PrefixIndex).

use std::fmt::Debug;
use std::hash::Hash;

/// An item that can be referenced from the index.
///
/// The index only ever holds borrows of entities and compares them by
/// [`Entity::id`], so two values with the same id are the same entity as far
/// as de-duplication and self-exclusion are concerned.
pub trait Entity {
    /// Stable identifier type.
    type Id: Eq + Hash + Clone + Debug;

    /// Returns the stable identifier.
    fn id(&self) -> &Self::Id;
}

/// Case-fold a token for indexing or lookup.
///
/// Lowercasing is the only normalization applied; no accent stripping or
/// locale-aware folding.
#[inline]
pub fn fold_case(token: &str) -> String {
    token.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_case_ascii() {
        assert_eq!(fold_case("Pokhara"), "pokhara");
    }

    #[test]
    fn test_fold_case_unicode() {
        assert_eq!(fold_case("ÉVÉNEMENT"), "événement");
    }
}
