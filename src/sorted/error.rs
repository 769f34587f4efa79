//! Error types for sorted list access.
//!
//! Insertion into a [`SortedList`](super::SortedList) never fails, so the
//! only errors are boundary conditions on the read and removal side.

use thiserror::Error;

/// Represents an error raised by indexed access or by removing from an empty list.
///
/// # Examples
///
/// ```rust
/// use sorted_linked_list::sorted::{SortedList, SortedListError};
///
/// let list = SortedList::from_sequence([1, 2, 3]);
/// assert_eq!(
///     list.get(3),
///     Err(SortedListError::IndexOutOfRange { index: 3, length: 3 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortedListError {
    /// The index is not smaller than the current length.
    #[error("index {index} out of range for sorted list of length {length}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the list at the time of the request.
        length: usize,
    },
    /// An element was required but the list is empty.
    #[error("sorted list is empty")]
    NoSuchElement,
}

impl SortedListError {
    pub(crate) const fn index_out_of_range(index: usize, length: usize) -> Self {
        Self::IndexOutOfRange { index, length }
    }
}
