//! Types with a canonical empty value.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::BuildHasher;

/// A type with a canonical empty value.
///
/// Used by [`OptionCollectionExtension::empty_if_none`](super::OptionCollectionExtension::empty_if_none)
/// to replace `None` with an empty collection.
///
/// # Examples
///
/// ```rust
/// use convenient_collections::extension::Emptyable;
///
/// assert_eq!(String::empty(), "");
/// assert!(Vec::<u8>::empty().is_empty());
/// ```
pub trait Emptyable {
    /// Returns the empty value.
    fn empty() -> Self;
}

impl Emptyable for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Emptyable for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Emptyable for VecDeque<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<K, V, S: BuildHasher + Default> Emptyable for HashMap<K, V, S> {
    #[inline]
    fn empty() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S: BuildHasher + Default> Emptyable for HashSet<T, S> {
    #[inline]
    fn empty() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K: Ord, V> Emptyable for BTreeMap<K, V> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Ord> Emptyable for BTreeSet<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}
