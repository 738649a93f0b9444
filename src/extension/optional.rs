//! Emptiness helpers for optional collections.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use super::emptyable::Emptyable;

/// A value that may be empty.
///
/// Implemented for the std collections, strings and slices so that
/// [`OptionCollectionExtension`] can treat `None` and "empty" alike.
pub trait Collection {
    /// Returns `true` if the collection holds no elements.
    fn is_empty(&self) -> bool;

    /// Returns `true` if the collection holds at least one element.
    #[inline]
    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }
}

macro_rules! impl_collection {
    ($(impl[$($generics:tt)*] for $collection:ty;)*) => {
        $(
            impl<$($generics)*> Collection for $collection {
                #[inline]
                fn is_empty(&self) -> bool {
                    <$collection>::is_empty(self)
                }
            }
        )*
    };
}

impl_collection! {
    impl[] for str;
    impl[] for String;
    impl[T] for [T];
    impl[T] for Vec<T>;
    impl[T] for VecDeque<T>;
    impl[K, V, S] for HashMap<K, V, S>;
    impl[T, S] for HashSet<T, S>;
    impl[K, V] for BTreeMap<K, V>;
    impl[T] for BTreeSet<T>;
}

impl<C: Collection + ?Sized> Collection for &C {
    #[inline]
    fn is_empty(&self) -> bool {
        C::is_empty(self)
    }
}

/// Emptiness helpers for `Option<C>` where `C` is a [`Collection`].
///
/// # Examples
///
/// ```rust
/// use convenient_collections::extension::OptionCollectionExtension;
///
/// let missing: Option<Vec<i32>> = None;
/// let empty: Option<Vec<i32>> = Some(vec![]);
/// let filled = Some(vec![1]);
///
/// assert!(missing.is_empty_or_none());
/// assert!(empty.is_empty_or_none());
/// assert!(filled.is_not_empty_nor_none());
///
/// assert!(missing.is_equal_or_empty(&empty));
/// assert_eq!(missing.empty_if_none(), Vec::<i32>::new());
/// ```
pub trait OptionCollectionExtension<C: Collection> {
    /// Returns `true` if the value is `None` or an empty collection.
    fn is_empty_or_none(&self) -> bool;

    /// Returns `true` if the value is a non-empty collection.
    fn is_not_empty_nor_none(&self) -> bool;

    /// Maps an empty collection to `None`.
    #[must_use]
    fn none_if_empty(self) -> Self;

    /// Maps `None` to the empty collection.
    fn empty_if_none(self) -> C
    where
        C: Emptyable;

    /// Compares two optional collections, treating `None` and an empty
    /// collection as equal.
    fn is_equal_or_empty(&self, other: &Self) -> bool
    where
        C: PartialEq;
}

impl<C: Collection> OptionCollectionExtension<C> for Option<C> {
    #[inline]
    fn is_empty_or_none(&self) -> bool {
        self.as_ref().is_none_or(Collection::is_empty)
    }

    #[inline]
    fn is_not_empty_nor_none(&self) -> bool {
        !self.is_empty_or_none()
    }

    #[inline]
    fn none_if_empty(self) -> Self {
        self.filter(Collection::is_not_empty)
    }

    #[inline]
    fn empty_if_none(self) -> C
    where
        C: Emptyable,
    {
        self.unwrap_or_else(C::empty)
    }

    fn is_equal_or_empty(&self, other: &Self) -> bool
    where
        C: PartialEq,
    {
        match (self, other) {
            (None, Some(collection)) | (Some(collection), None) => collection.is_empty(),
            _ => self == other,
        }
    }
}
