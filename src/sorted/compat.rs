//! Linked-list shaped view over a [`SortedList`].
//!
//! [`LinkedListCompat`] offers the familiar list, deque, queue and stack
//! method names for code that expects them. The read and removal methods
//! behave as they would on any doubly-linked list.
//!
//! # Broken contracts
//!
//! Every method that would normally choose *where* an element goes ignores
//! that choice and performs a sorted insertion instead:
//!
//! | Method         | Usual meaning      | Here            |
//! |----------------|--------------------|-----------------|
//! | `add`          | append             | sorted insert   |
//! | `add_at`       | insert at index    | index ignored   |
//! | `offer`        | enqueue at back    | sorted insert   |
//! | `offer_first`  | insert at front    | sorted insert   |
//! | `offer_last`   | insert at back     | sorted insert   |
//! | `push`         | push onto stack    | sorted insert   |
//! | `add_first`    | insert at front    | sorted insert   |
//! | `add_last`     | insert at back     | sorted insert   |
//! | `add_all`      | append all         | sorted inserts  |
//! | `add_all_at`   | insert all at index| index ignored   |
//!
//! Code that relies on those positional guarantees will misbehave; the view
//! exists for call sites that only care about the method shape.
//!
//! # Examples
//!
//! ```rust
//! use sorted_linked_list::sorted::SortedList;
//!
//! let mut list = SortedList::of_numbers([1, 3]);
//! let mut view = list.as_linked_list();
//! view.add_first(5);
//! view.push(2);
//! assert_eq!(view.pop(), Ok(1));
//! assert_eq!(list.to_string(), "[2, 3, 5]");
//! ```

use super::error::SortedListError;
use super::list::SortedList;

impl<T: Ord> SortedList<T> {
    /// Returns a view exposing list, deque and queue method names.
    ///
    /// See [`LinkedListCompat`] for which contracts the view breaks.
    pub fn as_linked_list(&mut self) -> LinkedListCompat<'_, T> {
        LinkedListCompat { list: self }
    }
}

/// Mutable view over a [`SortedList`] with linked-list method names.
///
/// All insertion methods redirect to [`SortedList::insert`]; see the
/// [module documentation](self) for the full list of broken contracts.
#[derive(Debug)]
pub struct LinkedListCompat<'a, T> {
    list: &'a mut SortedList<T>,
}

impl<T: Ord> LinkedListCompat<'_, T> {
    // =========================================================================
    // Insertion
    // =========================================================================

    /// Inserts `element` at its sorted position rather than at the end.
    ///
    /// Always returns `true`.
    pub fn add(&mut self, element: T) -> bool {
        self.list.insert(element);
        true
    }

    /// Inserts `element` at its sorted position.
    ///
    /// `index` is ignored, whatever its value, including indices past the end.
    pub fn add_at(&mut self, index: usize, element: T) {
        tracing::trace!(index, "ignoring requested index");
        self.list.insert(element);
    }

    /// Inserts `element` at its sorted position rather than at the tail.
    ///
    /// Always returns `true`.
    pub fn offer(&mut self, element: T) -> bool {
        self.add(element)
    }

    /// Inserts `element` at its sorted position rather than at the front.
    ///
    /// Always returns `true`.
    pub fn offer_first(&mut self, element: T) -> bool {
        self.add(element)
    }

    /// Inserts `element` at its sorted position rather than at the back.
    ///
    /// Always returns `true`.
    pub fn offer_last(&mut self, element: T) -> bool {
        self.add(element)
    }

    /// Inserts `element` at its sorted position rather than on top of the stack.
    pub fn push(&mut self, element: T) {
        self.list.insert(element);
    }

    /// Inserts `element` at its sorted position rather than at the front.
    pub fn add_first(&mut self, element: T) {
        self.list.insert(element);
    }

    /// Inserts `element` at its sorted position rather than at the back.
    pub fn add_last(&mut self, element: T) {
        self.list.insert(element);
    }

    /// Inserts each item at its sorted position, in iteration order.
    ///
    /// Returns `true` if `items` was non-empty.
    pub fn add_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        self.list.insert_all(items)
    }

    /// Same as [`add_all`](Self::add_all); `index` is ignored.
    pub fn add_all_at<I>(&mut self, index: usize, items: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        tracing::trace!(index, "ignoring requested index");
        self.add_all(items)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::IndexOutOfRange`] if `index >= self.size()`.
    pub fn get(&self, index: usize) -> Result<&T, SortedListError> {
        self.list.get(index)
    }

    /// Returns the number of elements.
    pub fn size(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns `true` if an element equal to `value` is present.
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }

    /// Returns the smallest element, or `None` if empty.
    pub fn peek(&self) -> Option<&T> {
        self.list.first()
    }

    /// Returns the smallest element, or `None` if empty.
    pub fn peek_first(&self) -> Option<&T> {
        self.list.first()
    }

    /// Returns the largest element, or `None` if empty.
    pub fn peek_last(&self) -> Option<&T> {
        self.list.last()
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::NoSuchElement`] if the list is empty.
    pub fn element(&self) -> Result<&T, SortedListError> {
        self.get_first()
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::NoSuchElement`] if the list is empty.
    pub fn get_first(&self) -> Result<&T, SortedListError> {
        self.list.first().ok_or(SortedListError::NoSuchElement)
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::NoSuchElement`] if the list is empty.
    pub fn get_last(&self) -> Result<&T, SortedListError> {
        self.list.last().ok_or(SortedListError::NoSuchElement)
    }

    /// Returns the underlying list.
    pub fn as_sorted(&self) -> &SortedList<T> {
        self.list
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Removes and returns the smallest element, or `None` if empty.
    pub fn poll(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Removes and returns the smallest element, or `None` if empty.
    pub fn poll_first(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Removes and returns the largest element, or `None` if empty.
    pub fn poll_last(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// Removes and returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::NoSuchElement`] if the list is empty.
    pub fn pop(&mut self) -> Result<T, SortedListError> {
        self.remove_first()
    }

    /// Removes and returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::NoSuchElement`] if the list is empty.
    pub fn remove_first(&mut self) -> Result<T, SortedListError> {
        self.list.pop_front().ok_or(SortedListError::NoSuchElement)
    }

    /// Removes and returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::NoSuchElement`] if the list is empty.
    pub fn remove_last(&mut self) -> Result<T, SortedListError> {
        self.list.pop_back().ok_or(SortedListError::NoSuchElement)
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::IndexOutOfRange`] if `index >= self.size()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, SortedListError> {
        self.list.remove(index)
    }

    /// Removes the first element equal to `value`; `false` if absent.
    pub fn remove_object(&mut self, value: &T) -> bool {
        self.list.remove_value(value)
    }

    /// Removes the first element equal to `value`; `false` if absent.
    pub fn remove_first_occurrence(&mut self, value: &T) -> bool {
        self.list.remove_value(value)
    }

    /// Removes the last element equal to `value`; `false` if absent.
    pub fn remove_last_occurrence(&mut self, value: &T) -> bool {
        self.list.remove_last_occurrence(value)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.list.clear();
    }
}
