//! Error types for the ordered collections.
//!
//! The panicking removal operations of [`OrderedSet`](super::OrderedSet)
//! treat an oversized request as a programmer error. The checked variant
//! [`OrderedSet::try_remove_first_batch`](super::OrderedSet::try_remove_first_batch)
//! reports the same condition as a value instead.

/// Represents a batch removal that asked for more elements than were present.
///
/// # Examples
///
/// ```rust
/// use convenient_collections::collection::BatchRemovalError;
///
/// let error = BatchRemovalError {
///     requested: 5,
///     available: 3,
/// };
/// assert_eq!(
///     format!("{}", error),
///     "cannot remove a batch of 5 elements from an OrderedSet of 3 elements"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRemovalError {
    /// The batch size that was requested.
    pub requested: usize,
    /// The number of elements present at the time of the request.
    pub available: usize,
}

impl std::fmt::Display for BatchRemovalError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "cannot remove a batch of {} elements from an OrderedSet of {} elements",
            self.requested, self.available
        )
    }
}

impl std::error::Error for BatchRemovalError {}
