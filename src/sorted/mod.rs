//! Permanently sorted linked list.
//!
//! This module provides:
//!
//! - [`SortedList`]: a doubly-linked list that inserts every element at its
//!   sorted position
//! - [`SortedListError`]: the read and removal errors
//! - [`Numeric`] / [`Text`]: element families with named constructors
//! - [`LinkedListCompat`]: a list/deque/queue shaped view (feature `compat`)
//!
//! # Examples
//!
//! ```rust
//! use sorted_linked_list::sorted::SortedList;
//!
//! let mut list = SortedList::of_numbers([3, 2, 1]);
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//!
//! list.insert(2);
//! assert_eq!(list.to_string(), "[1, 2, 2, 3]");
//!
//! assert!(list.remove_value(&2));
//! assert_eq!(list.pop_back(), Some(3));
//! assert_eq!(list.to_string(), "[1, 2]");
//! ```
//!
//! # Storage
//!
//! Nodes are kept in an arena and linked by index rather than by pointer:
//!
//! ```text
//! head -> [1] <-> [2] <-> [3] <- tail
//! ```
//!
//! Removing an element frees its slot for the next insertion.

mod arena;
mod element;
mod error;
mod list;
mod macros;

#[cfg(feature = "compat")]
mod compat;

pub use element::Numeric;
pub use element::Text;
pub use error::SortedListError;
pub use list::SortedList;
pub use list::SortedListIntoIterator;
pub use list::SortedListIterator;

#[cfg(feature = "compat")]
pub use compat::LinkedListCompat;
