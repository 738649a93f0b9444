//! Extension traits over standard sequences, optionals and numbers.
//!
//! Every function here is stateless and total:
//!
//! - [`compact`] / [`CompactExtension`]: drop `None`s from a sequence
//! - [`SliceExtension`]: safe indexing, neighbour lookup, suffixes
//! - [`VecExtension`]: first-match removal
//! - [`lazy_first`]: first `Some` from a list of producers
//! - [`Collection`] / [`OptionCollectionExtension`]: emptiness of optional
//!   collections
//! - [`Emptyable`]: types with a canonical empty value
//! - [`NumericExtension`] / [`OptionNumericExtension`]: sign checks
//! - [`unify`]: clamp a value into a range
//!
//! # Examples
//!
//! ```rust
//! use convenient_collections::extension::*;
//!
//! let values = vec![Some(1), None, Some(3)];
//! assert_eq!(values.compact(), vec![1, 3]);
//!
//! let numbers = [10, 20, 30];
//! assert_eq!(numbers.lift(-1), None);
//! assert_eq!(numbers.next_after(&20), Some(&30));
//!
//! let name: Option<String> = Some(String::new());
//! assert!(name.is_empty_or_none());
//! assert_eq!(name.none_if_empty(), None);
//!
//! assert!(3_u8.is_greater_than_zero());
//! assert!(Some(0.0_f64).is_zero_or_none());
//! assert_eq!(unify(0, 42, 10), 10);
//! ```

mod emptyable;
mod numeric;
mod optional;
mod sequence;

pub use emptyable::Emptyable;
pub use numeric::NumericExtension;
pub use numeric::OptionNumericExtension;
pub use numeric::unify;
pub use optional::Collection;
pub use optional::OptionCollectionExtension;
pub use sequence::CompactExtension;
pub use sequence::SliceExtension;
pub use sequence::VecExtension;
pub use sequence::compact;
pub use sequence::lazy_first;
