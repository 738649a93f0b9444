//! Ordered collections.
//!
//! This module provides [`OrderedSet`], a mutable collection that is at the
//! same time an insertion-ordered sequence and a uniqueness-enforcing set.
//!
//! # Value Semantics
//!
//! Cloning an [`OrderedSet`] is O(1): both clones share storage until one of
//! them is mutated, at which point the mutated clone copies its contents.
//! A mutation is never observable through another clone.
//!
//! # Examples
//!
//! ```rust
//! use convenient_collections::collection::OrderedSet;
//!
//! let mut set: OrderedSet<&str> = ["b", "a", "b", "c"].into_iter().collect();
//! assert_eq!(set.as_slice(), &["b", "a", "c"]);
//!
//! let snapshot = set.clone();
//! assert!(set.append("d"));
//! assert!(!set.append("a"));
//!
//! assert_eq!(set.len(), 4);
//! assert_eq!(snapshot.len(), 3); // Clone unchanged
//!
//! assert_eq!(set.remove_first(), "b");
//! assert_eq!(set.remove_last(), "d");
//! assert_eq!(set.as_slice(), &["a", "c"]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Membership Index Hasher
// =============================================================================

/// Hasher used by the membership index.
///
/// `fxhash` takes precedence over `ahash` when both features are enabled.
#[cfg(feature = "fxhash")]
pub(crate) type IndexHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type IndexHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type IndexHasher = std::collections::hash_map::RandomState;

mod error;
mod ordered_set;

pub use error::BatchRemovalError;
pub use ordered_set::OrderedSet;
pub use ordered_set::OrderedSetIntoIterator;
pub use ordered_set::OrderedSetIterator;

// =============================================================================
// Tests
// =============================================================================
