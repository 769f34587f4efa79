//! # sorted-linked-list
//!
//! A doubly-linked list that keeps its elements in non-decreasing order
//! through every mutation.
//!
//! ## Overview
//!
//! - **Sorted insertion**: every element goes through one insertion rule,
//!   which links it in front of the first element not smaller than it
//! - **Linked-list reads and removals**: indexed access, double-ended
//!   iteration, removal by index, by value and from either end
//! - **Compatibility view**: list, deque and queue method names that all
//!   redirect to sorted insertion
//!
//! ## Feature Flags
//!
//! - `compat` (default): the [`LinkedListCompat`](sorted::LinkedListCompat) view
//! - `serde`: `Serialize`/`Deserialize` for [`SortedList`](sorted::SortedList)
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use sorted_linked_list::prelude::*;
//!
//! let mut list = sorted_list![3, 2, 1];
//! list.insert(0);
//! assert_eq!(list.to_string(), "[0, 1, 2, 3]");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use sorted_linked_list::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sorted::*;
    pub use crate::sorted_list;
}

pub mod sorted;
