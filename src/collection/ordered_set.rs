//! Insertion-ordered set with O(1) membership.
//!
//! This module provides [`OrderedSet`], a mutable collection that keeps
//! unique elements in the order they were first inserted.
//!
//! # Overview
//!
//! `OrderedSet` keeps two representations of the same content:
//! - an ordered `Vec` which is the canonical content (order, indexing,
//!   equality, hashing, serialization)
//! - a hash set used only as a membership index
//!
//! Every mutating operation updates both inside a single call. The index is
//! never exposed.
//!
//! # Failure Model
//!
//! Removing from an empty set (`remove_first`, `remove_last`) or removing a
//! batch larger than the set (`remove_first_batch`) **panics**. These are
//! programmer errors: check [`OrderedSet::len`] or [`OrderedSet::is_empty`]
//! first, or use the checked variants [`OrderedSet::pop_first`],
//! [`OrderedSet::pop_last`] and [`OrderedSet::try_remove_first_batch`].
//!
//! # Time Complexity
//!
//! | Operation            | Complexity          |
//! |----------------------|---------------------|
//! | `append`             | O(1) amortized      |
//! | `contains`           | O(1) expected       |
//! | `remove`             | O(n)                |
//! | `remove_first`       | O(n)                |
//! | `remove_first_batch` | O(n)                |
//! | `remove_last`        | O(1)                |
//! | `len` / `is_empty`   | O(1)                |
//! | `get` / indexing     | O(1)                |
//! | `clone`              | O(1) (shared until mutated) |
//!
//! # Examples
//!
//! ```rust
//! use convenient_collections::collection::OrderedSet;
//!
//! let mut set = OrderedSet::from_vec(vec![3, 1, 2, 1]);
//! assert_eq!(set.contents(), vec![3, 1, 2]);
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(&1));
//! assert!(!set.contains(&5));
//!
//! // Appending an element that is already present is a no-op
//! assert!(!set.append(3));
//! assert!(set.append(4));
//!
//! // Batch removal takes a prefix, preserving order
//! let batch = set.remove_first_batch(2);
//! assert_eq!(batch, vec![3, 1]);
//! assert_eq!(set.contents(), vec![2, 4]);
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use super::error::BatchRemovalError;
use super::{IndexHasher, ReferenceCounter};
use crate::extension::{Collection, Emptyable, compact};

/// Message for the panic raised when removing from an empty set.
const EMPTY_REMOVAL_PANIC_MESSAGE: &str = "cannot remove an element from an empty OrderedSet";

/// Message prefix for the panic raised when a batch exceeds the set length.
const BATCH_OVERFLOW_PANIC_MESSAGE: &str =
    "batch size exceeds the number of elements in the OrderedSet";

/// Canonical content plus membership index.
#[derive(Clone)]
struct OrderedSetInner<T> {
    sequence: Vec<T>,
    index: HashSet<T, IndexHasher>,
}

impl<T> OrderedSetInner<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            sequence: Vec::with_capacity(capacity),
            index: HashSet::with_capacity_and_hasher(capacity, IndexHasher::default()),
        }
    }

    fn clear(&mut self) {
        self.sequence.clear();
        self.index.clear();
    }
}

/// An insertion-ordered collection of unique elements.
///
/// Elements keep the position of their first successful insertion. A
/// second insertion of an equal element is ignored.
///
/// # Type Parameters
///
/// * `T` - The element type. Mutation requires `Clone + Eq + Hash`.
///
/// # Examples
///
/// ```rust
/// use convenient_collections::collection::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// set.append("first");
/// set.append("second");
/// set.append("first");
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set[0], "first");
/// assert_eq!(set.to_string(), "[first, second]");
/// ```
pub struct OrderedSet<T> {
    inner: ReferenceCounter<OrderedSetInner<T>>,
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(OrderedSet<i32>: Send, Sync);

impl<T> OrderedSet<T> {
    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::collection::OrderedSet;
    ///
    /// let set = OrderedSet::from_vec(vec![1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.sequence.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.sequence.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.sequence.capacity()
    }

    /// Returns the elements as a slice, in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.inner.sequence
    }

    /// Returns an iterator over references to the elements in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::collection::OrderedSet;
    ///
    /// let set = OrderedSet::from_vec(vec![3, 1, 2]);
    /// let elements: Vec<&i32> = set.iter().collect();
    /// assert_eq!(elements, vec![&3, &1, &2]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> OrderedSetIterator<'_, T> {
        OrderedSetIterator {
            inner: self.inner.sequence.iter(),
        }
    }

    /// Returns the element at `index`, or `None` when out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.sequence.get(index)
    }

    /// Returns the first element in insertion order, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.inner.sequence.first()
    }

    /// Returns the last element in insertion order, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.inner.sequence.last()
    }
}

impl<T: Clone + Eq + Hash> OrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::collection::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty set with room for at least `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: ReferenceCounter::new(OrderedSetInner::with_capacity(capacity)),
        }
    }

    /// Creates a set from `elements`, keeping the first occurrence of each
    /// element and silently dropping later duplicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::collection::OrderedSet;
    ///
    /// let set = OrderedSet::from_vec(vec!["b", "a", "b"]);
    /// assert_eq!(set.as_slice(), &["b", "a"]);
    /// ```
    #[must_use]
    pub fn from_vec(elements: Vec<T>) -> Self {
        let mut set = Self::with_capacity(elements.len());
        set.insert(elements);
        set
    }

    /// Creates a set from a sequence of optional elements.
    ///
    /// `None` entries are dropped first, then duplicates are collapsed as in
    /// [`OrderedSet::from_vec`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::collection::OrderedSet;
    ///
    /// let set = OrderedSet::from_optionals([Some(2), None, Some(1), Some(2)]);
    /// assert_eq!(set.as_slice(), &[2, 1]);
    /// ```
    #[must_use]
    pub fn from_optionals<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Option<T>>,
    {
        Self::from_vec(compact(elements))
    }

    /// Returns a snapshot of the elements in insertion order.
    ///
    /// The returned `Vec` is independent of the set: later mutation of the
    /// set does not affect it.
    #[must_use]
    pub fn contents(&self) -> Vec<T> {
        self.inner.sequence.clone()
    }

    /// Consumes the set, returning its elements in insertion order.
    ///
    /// No copy is made unless the storage is shared with a clone.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        ReferenceCounter::unwrap_or_clone(self.inner).sequence
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// This method supports borrowed forms of the element type through the
    /// `Borrow` trait. For example, with `OrderedSet<String>`, you can
    /// search using `&str` directly without allocating a new `String`.
    ///
    /// # Complexity
    ///
    /// O(1) expected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::collection::OrderedSet;
    ///
    /// let set = OrderedSet::from_vec(vec!["hello".to_string()]);
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.index.contains(element)
    }

    /// Returns the position of `element` in insertion order.
    #[must_use]
    pub fn position<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.contains(element) {
            return None;
        }
        self.inner
            .sequence
            .iter()
            .position(|item| <T as Borrow<Q>>::borrow(item) == element)
    }

    /// Appends `element` at the end if it is not already present.
    ///
    /// Returns `true` if the element was inserted. Appending an element that
    /// is already present leaves the set unchanged and returns `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::collection::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.append(1));
    /// assert!(!set.append(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn append(&mut self, element: T) -> bool {
        if self.inner.index.contains(&element) {
            return false;
        }
        let inner = self.inner_mut();
        inner.index.insert(element.clone());
        inner.sequence.push(element);
        true
    }

    /// Appends every element of `elements` in order, as repeated
    /// [`OrderedSet::append`] calls would.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::collection::OrderedSet;
    ///
    /// let mut set = OrderedSet::from_vec(vec![1, 2]);
    /// set.insert(vec![2, 3, 1, 4]);
    /// assert_eq!(set.as_slice(), &[1, 2, 3, 4]);
    /// ```
    pub fn insert<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        for element in elements {
            self.append(element);
        }
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        let inner = self.inner_mut();
        inner.sequence.reserve(additional);
        inner.index.reserve(additional);
    }

    /// Removes and returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty. Use [`OrderedSet::pop_first`] for a
    /// non-panicking variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::collection::OrderedSet;
    ///
    /// let mut set = OrderedSet::from_vec(vec!['a', 'b']);
    /// assert_eq!(set.remove_first(), 'a');
    /// assert_eq!(set.remove_last(), 'b');
    /// assert!(set.is_empty());
    /// ```
    pub fn remove_first(&mut self) -> T {
        assert!(!self.is_empty(), "{EMPTY_REMOVAL_PANIC_MESSAGE}");
        let inner = self.inner_mut();
        let element = inner.sequence.remove(0);
        inner.index.remove(&element);
        element
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty. Use [`OrderedSet::pop_last`] for a
    /// non-panicking variant.
    pub fn remove_last(&mut self) -> T {
        self.pop_last()
            .unwrap_or_else(|| panic!("{EMPTY_REMOVAL_PANIC_MESSAGE}"))
    }

    /// Removes and returns the first element, or `None` if the set is empty.
    pub fn pop_first(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(self.remove_first())
    }

    /// Removes and returns the last element, or `None` if the set is empty.
    pub fn pop_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let inner = self.inner_mut();
        let element = inner.sequence.pop()?;
        inner.index.remove(&element);
        Some(element)
    }

    /// Removes the first `batch_size` elements and returns them in order.
    ///
    /// A `batch_size` of zero returns an empty `Vec` and leaves the set
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if `batch_size` is greater than [`OrderedSet::len`]. Use
    /// [`OrderedSet::try_remove_first_batch`] for a checked variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::collection::OrderedSet;
    ///
    /// let mut set = OrderedSet::from_vec(vec![3, 1, 2]);
    /// assert_eq!(set.remove_first_batch(2), vec![3, 1]);
    /// assert_eq!(set.as_slice(), &[2]);
    /// assert!(set.remove_first_batch(0).is_empty());
    /// ```
    pub fn remove_first_batch(&mut self, batch_size: usize) -> Vec<T> {
        let available = self.len();
        assert!(
            batch_size <= available,
            "{BATCH_OVERFLOW_PANIC_MESSAGE}: requested {batch_size}, available {available}"
        );
        self.drain_prefix(batch_size)
    }

    /// Removes the first `batch_size` elements and returns them in order, or
    /// returns an error without touching the set when `batch_size` exceeds
    /// the number of elements.
    ///
    /// # Errors
    ///
    /// Returns [`BatchRemovalError`] if `batch_size > self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::collection::{BatchRemovalError, OrderedSet};
    ///
    /// let mut set = OrderedSet::from_vec(vec![1, 2, 3]);
    /// assert_eq!(
    ///     set.try_remove_first_batch(5),
    ///     Err(BatchRemovalError { requested: 5, available: 3 })
    /// );
    /// assert_eq!(set.try_remove_first_batch(1), Ok(vec![1]));
    /// ```
    pub fn try_remove_first_batch(
        &mut self,
        batch_size: usize,
    ) -> Result<Vec<T>, BatchRemovalError> {
        let available = self.len();
        if batch_size > available {
            return Err(BatchRemovalError {
                requested: batch_size,
                available,
            });
        }
        Ok(self.drain_prefix(batch_size))
    }

    /// Removes every element.
    ///
    /// When `keep_capacity` is `true` and the storage is not shared with a
    /// clone, the allocated capacity of both representations is retained.
    pub fn remove_all(&mut self, keep_capacity: bool) {
        match ReferenceCounter::get_mut(&mut self.inner) {
            Some(inner) if keep_capacity => inner.clear(),
            Some(inner) => *inner = OrderedSetInner::with_capacity(0),
            None => {
                let capacity = if keep_capacity { self.capacity() } else { 0 };
                self.inner = ReferenceCounter::new(OrderedSetInner::with_capacity(capacity));
            }
        }
    }

    /// Removes every element, releasing the allocated storage.
    #[inline]
    pub fn clear(&mut self) {
        self.remove_all(false);
    }

    /// Removes `element` if present.
    ///
    /// Returns `true` if the element was present. Removing an absent element
    /// is a no-op.
    ///
    /// This method supports borrowed forms of the element type through the
    /// `Borrow` trait.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use convenient_collections::collection::OrderedSet;
    ///
    /// let mut set = OrderedSet::from_vec(vec!["a".to_string(), "b".to_string()]);
    /// assert!(set.remove("a"));
    /// assert!(!set.remove("a"));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.contains(element) {
            return false;
        }
        let inner = self.inner_mut();
        inner.index.remove(element);
        if let Some(position) = inner
            .sequence
            .iter()
            .position(|item| <T as Borrow<Q>>::borrow(item) == element)
        {
            inner.sequence.remove(position);
        }
        true
    }

    /// Returns exclusive access to the inner storage, detaching it from any
    /// clone that shares it.
    fn inner_mut(&mut self) -> &mut OrderedSetInner<T> {
        ReferenceCounter::make_mut(&mut self.inner)
    }

    /// Removes the first `batch_size` elements. `batch_size` must not exceed
    /// the length.
    fn drain_prefix(&mut self, batch_size: usize) -> Vec<T> {
        if batch_size == 0 {
            return Vec::new();
        }
        let inner = self.inner_mut();
        let batch: Vec<T> = inner.sequence.drain(..batch_size).collect();
        for element in &batch {
            inner.index.remove(element);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "convenient_collections::ordered_set",
            removed = batch.len(),
            remaining = inner.sequence.len(),
            "removed batch from ordered set"
        );

        batch
    }

    /// Returns `true` if the sequence and the index describe the same
    /// elements and the sequence has no duplicates.
    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        self.inner.sequence.len() == self.inner.index.len()
            && self
                .inner
                .sequence
                .iter()
                .all(|element| self.inner.index.contains(element))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for OrderedSet<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: ReferenceCounter::clone(&self.inner),
        }
    }
}

impl<T: Clone + Eq + Hash> Default for OrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.inner, &other.inner)
            || self.inner.sequence == other.inner.sequence
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: Hash> Hash for OrderedSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.sequence.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T> Index<usize> for OrderedSet<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner.sequence[index]
    }
}

impl<T> AsRef<[T]> for OrderedSet<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut set = Self::with_capacity(lower);
        set.insert(iter);
        set
    }
}

impl<T: Clone + Eq + Hash> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert(iter);
    }
}

impl<T: Clone + Eq + Hash> From<Vec<T>> for OrderedSet<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: Clone + Eq + Hash, const N: usize> From<[T; N]> for OrderedSet<T> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Clone + Eq + Hash> From<OrderedSet<T>> for Vec<T> {
    #[inline]
    fn from(set: OrderedSet<T>) -> Self {
        set.into_vec()
    }
}

impl<T: Clone + Eq + Hash> Emptyable for OrderedSet<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Collection for OrderedSet<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to elements of an [`OrderedSet`], in insertion
/// order.
pub struct OrderedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for OrderedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Owning iterator over the elements of an [`OrderedSet`], in insertion
/// order.
pub struct OrderedSetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for OrderedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: Clone + Eq + Hash> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = OrderedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedSetIntoIterator {
            inner: self.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = OrderedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for OrderedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> OrderedSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

/// Upper bound on the capacity preallocated from an untrusted size hint.
#[cfg(feature = "serde")]
const MAX_PREALLOCATED_ELEMENTS: usize = 4096;

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for OrderedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Clone + Eq + Hash,
{
    type Value = OrderedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED_ELEMENTS);
        let mut set = OrderedSet::with_capacity(capacity);
        #[cfg(feature = "tracing")]
        let mut decoded = 0_usize;
        while let Some(element) = seq.next_element()? {
            #[cfg(feature = "tracing")]
            {
                decoded += 1;
            }
            set.append(element);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "convenient_collections::ordered_set",
            decoded,
            kept = set.len(),
            "deserialized ordered set"
        );

        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for OrderedSet<T>
where
    T: serde::Deserialize<'de> + Clone + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================



#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use rstest::rstest;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::span;
    use tracing::{Event, Metadata, Subscriber};

    type RecordedEvents = Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>;

    /// Subscriber that keeps the target and fields of every event.
    struct EventRecorder {
        events: RecordedEvents,
    }

    struct FieldCollector(Vec<(String, String)>);

    impl Visit for FieldCollector {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.push((field.name().to_string(), format!("{value:?}")));
        }
    }

    impl Subscriber for EventRecorder {
        fn enabled(&self, _: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _: &span::Id, _: &span::Record<'_>) {}

        fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}

        fn event(&self, event: &Event<'_>) {
            let mut collector = FieldCollector(Vec::new());
            event.record(&mut collector);
            self.events
                .lock()
                .expect("Mutex poisoned")
                .push((event.metadata().target().to_string(), collector.0));
        }

        fn enter(&self, _: &span::Id) {}

        fn exit(&self, _: &span::Id) {}
    }

    fn record_events<R>(action: impl FnOnce() -> R) -> (R, Vec<(String, Vec<(String, String)>)>) {
        let events = RecordedEvents::default();
        let recorder = EventRecorder {
            events: Arc::clone(&events),
        };
        let result = tracing::subscriber::with_default(recorder, action);
        let recorded = events.lock().expect("Mutex poisoned").clone();
        (result, recorded)
    }

    fn field<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
        fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, value)| value.as_str())
    }

    #[rstest]
    fn test_batch_removal_emits_counts() {
        let mut set = OrderedSet::from_vec(vec![1, 2, 3, 4]);
        let (batch, events) = record_events(|| set.remove_first_batch(3));

        assert_eq!(batch, vec![1, 2, 3]);
        assert_eq!(events.len(), 1);
        let (target, fields) = &events[0];
        assert_eq!(target, "convenient_collections::ordered_set");
        assert_eq!(field(fields, "removed"), Some("3"));
        assert_eq!(field(fields, "remaining"), Some("1"));
    }

    #[rstest]
    fn test_empty_batch_emits_nothing() {
        let mut set = OrderedSet::from_vec(vec![1, 2]);
        let (_, events) = record_events(|| set.remove_first_batch(0));
        assert!(events.is_empty());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_deserialization_emits_decoded_and_kept_counts() {
        let (set, events) =
            record_events(|| serde_json::from_str::<OrderedSet<i32>>("[3,1,3,2,1]").unwrap());

        assert_eq!(set.as_slice(), &[3, 1, 2]);
        assert_eq!(events.len(), 1);
        let (target, fields) = &events[0];
        assert_eq!(target, "convenient_collections::ordered_set");
        assert_eq!(field(fields, "decoded"), Some("5"));
        assert_eq!(field(fields, "kept"), Some("3"));
    }
}
