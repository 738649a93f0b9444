//! # convenient-collections
//!
//! An insertion-ordered, duplicate-free set together with a handful of small
//! extensions over standard sequences, optionals and numbers.
//!
//! ## Overview
//!
//! - **Ordered set**: [`collection::OrderedSet`] behaves both as a sequence
//!   (stable insertion order, indexing, prefix removal) and as a set
//!   (uniqueness, O(1) membership).
//! - **Extensions**: safe indexing, compaction of optional-bearing
//!   sequences, emptiness helpers for optional collections, numeric sign
//!   checks and clamping.
//!
//! ## Feature Flags
//!
//! - `collection`: the ordered set (default)
//! - `extension`: extension traits over std types (default)
//! - `serde`: `Serialize` / `Deserialize` for the ordered set
//! - `arc`: thread-safe shared storage (`Arc` instead of `Rc`)
//! - `fxhash` / `ahash`: faster hashers for the membership index
//! - `tracing`: trace-level events from the ordered set
//! - `full`: everything except the hasher selection
//!
//! ## Example
//!
//! ```rust
//! use convenient_collections::prelude::*;
//!
//! let mut set = OrderedSet::from_vec(vec![3, 1, 2, 1]);
//! assert_eq!(set.contents(), vec![3, 1, 2]);
//!
//! let batch = set.remove_first_batch(2);
//! assert_eq!(batch, vec![3, 1]);
//! assert_eq!(batch.lift(5), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use convenient_collections::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "extension")]
    pub use crate::extension::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "extension")]
pub mod extension;
