//! Permanently sorted doubly-linked list.
//!
//! This module provides [`SortedList`], a doubly-linked list whose elements
//! are kept in non-decreasing order through every mutation.
//!
//! # Overview
//!
//! There is exactly one way to add an element: [`SortedList::insert`]. It
//! scans from the front and links the new element in front of the first
//! element that is not smaller than it. Bulk construction and extension run
//! the same rule once per element, in iteration order.
//!
//! - O(n) insertion (linear scan, O(1) splice)
//! - O(1) insertion of a new maximum
//! - O(1) `first`, `last`, `pop_front`, `pop_back`
//! - O(n) index access, walking from the nearer end
//!
//! # Ties
//!
//! The scan stops at the first element `c` with `element <= c`, equality
//! included. A new element that is equal to existing ones therefore lands in
//! front of all of them, so equal elements appear most recent first.
//!
//! ```rust
//! use sorted_linked_list::sorted::SortedList;
//!
//! let mut list = SortedList::from_sequence([5]);
//! assert_eq!(list.insert(5), 0); // lands before the existing 5
//! assert_eq!(list.insert(6), 2);
//! assert_eq!(list.len(), 3);
//! ```
//!
//! # Examples
//!
//! ```rust
//! use sorted_linked_list::sorted::SortedList;
//!
//! let mut list = SortedList::from_sequence([3, 1]);
//! list.insert(2);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! assert_eq!(list.pop_back(), Some(3));
//! assert_eq!(list.get(1), Ok(&2));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};
use std::ops::Index;

use super::arena::{Node, NodeArena, NodeIndex};
use super::error::SortedListError;

/// A doubly-linked list that keeps its elements sorted.
///
/// Nodes are stored in an internal arena and linked by index. The list owns
/// every node; no node is ever exposed. There is no mutable access to stored
/// elements, since changing an element in place could break the ordering.
///
/// # Time Complexity
///
/// | Operation        | Complexity |
/// |------------------|------------|
/// | `new`            | O(1)       |
/// | `insert`         | O(n)       |
/// | `insert` (max)   | O(1)       |
/// | `first` / `last` | O(1)       |
/// | `get`            | O(min(i, n - i)) |
/// | `remove`         | O(min(i, n - i)) |
/// | `pop_front/back` | O(1)       |
/// | `contains`       | O(n)       |
/// | `len`            | O(1)       |
///
/// # Examples
///
/// ```rust
/// use sorted_linked_list::sorted::SortedList;
///
/// let list: SortedList<i32> = [3, 2, 1].into_iter().collect();
/// assert_eq!(list.first(), Some(&1));
/// assert_eq!(list.last(), Some(&3));
/// ```
#[derive(Clone)]
pub struct SortedList<T> {
    arena: NodeArena<T>,
    head: Option<NodeIndex>,
    tail: Option<NodeIndex>,
    /// Cached length for O(1) access.
    length: usize,
}

static_assertions::assert_impl_all!(SortedList<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(SortedList<String>: Send, Sync);
static_assertions::assert_not_impl_any!(SortedList<std::rc::Rc<i32>>: Send, Sync);

impl<T> SortedList<T> {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let list: SortedList<i32> = SortedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Creates a new empty list with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(capacity),
            head: None,
            tail: None,
            length: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the smallest element, or `None` if the list is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.head.map(|index| &self.arena.node(index).element)
    }

    /// Returns the largest element, or `None` if the list is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tail.map(|index| &self.arena.node(index).element)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::IndexOutOfRange`] if `index >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::{SortedList, SortedListError};
    ///
    /// let list = SortedList::from_sequence(["C", "B", "A"]);
    /// assert_eq!(list.get(0), Ok(&"A"));
    /// assert_eq!(
    ///     list.get(3),
    ///     Err(SortedListError::IndexOutOfRange { index: 3, length: 3 })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, SortedListError> {
        self.node_at(index)
            .map(|node_index| &self.arena.node(node_index).element)
            .ok_or_else(|| SortedListError::index_out_of_range(index, self.length))
    }

    /// Returns a double-ended iterator over the elements in sorted order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let list = SortedList::from_sequence([2, 3, 1]);
    /// assert_eq!(list.iter().collect::<Vec<_>>(), vec![&1, &2, &3]);
    /// assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![&3, &2, &1]);
    /// ```
    #[inline]
    pub const fn iter(&self) -> SortedListIterator<'_, T> {
        SortedListIterator {
            arena: &self.arena,
            front: self.head,
            back: self.tail,
            remaining: self.length,
        }
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SortedListError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, SortedListError> {
        let node_index = self
            .node_at(index)
            .ok_or_else(|| SortedListError::index_out_of_range(index, self.length))?;
        Ok(self.unlink(node_index))
    }

    /// Removes and returns the smallest element.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(head))
    }

    /// Removes and returns the largest element.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.unlink(tail))
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// Elements are visited front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let mut list = SortedList::from_sequence(1..=6);
    /// list.retain(|element| element % 2 == 0);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
    /// ```
    pub fn retain<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut current = self.head;
        while let Some(index) = current {
            let node = self.arena.node(index);
            current = node.next;
            if !predicate(&node.element) {
                self.unlink(index);
            }
        }
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.length, "clearing sorted list");
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.length = 0;
    }

    /// Finds the node at `index`, walking from whichever end is nearer.
    fn node_at(&self, index: usize) -> Option<NodeIndex> {
        if index >= self.length {
            return None;
        }
        if index < self.length / 2 {
            let mut current = self.head;
            for _ in 0..index {
                current = current.and_then(|node| self.arena.node(node).next);
            }
            current
        } else {
            let mut current = self.tail;
            for _ in 0..(self.length - 1 - index) {
                current = current.and_then(|node| self.arena.node(node).previous);
            }
            current
        }
    }

    /// Links `element` immediately before `successor`, or at the tail when
    /// `successor` is `None`.
    fn link_before(&mut self, element: T, successor: Option<NodeIndex>) {
        let previous = match successor {
            Some(successor) => self.arena.node(successor).previous,
            None => self.tail,
        };
        let index = self.arena.allocate(Node {
            element,
            previous,
            next: successor,
        });
        match previous {
            Some(previous) => self.arena.node_mut(previous).next = Some(index),
            None => self.head = Some(index),
        }
        match successor {
            Some(successor) => self.arena.node_mut(successor).previous = Some(index),
            None => self.tail = Some(index),
        }
        self.length += 1;
    }

    /// Detaches the node at `index` and returns its element.
    fn unlink(&mut self, index: NodeIndex) -> T {
        let Node {
            element,
            previous,
            next,
        } = self.arena.release(index);
        match previous {
            Some(previous) => self.arena.node_mut(previous).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.arena.node_mut(next).previous = previous,
            None => self.tail = previous,
        }
        self.length -= 1;
        element
    }
}

impl<T: Ord> SortedList<T> {
    /// Builds a list by inserting each item in iteration order.
    ///
    /// The items are inserted one at a time through [`insert`](Self::insert),
    /// so the relative order of equal items follows the tie rule rather than
    /// the input order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let list = SortedList::from_sequence(vec![3, 2, 1]);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut list = Self::new();
        list.insert_all(items);
        list
    }

    /// Inserts `element` at its sorted position and returns that position.
    ///
    /// The element is linked in front of the first existing element that is
    /// greater than or equal to it, or appended if there is none. Among equal
    /// elements the newest therefore comes first.
    ///
    /// # Complexity
    ///
    /// O(n) in general, O(1) when `element` is greater than the current last
    /// element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let mut list = SortedList::from_sequence([1, 3]);
    /// assert_eq!(list.insert(2), 1);
    /// assert_eq!(list.insert(9), 3);
    /// assert_eq!(list.insert(0), 0);
    /// ```
    pub fn insert(&mut self, element: T) -> usize {
        if self.last().is_some_and(|last| *last < element) {
            let position = self.length;
            self.link_before(element, None);
            tracing::trace!(position, length = self.length, "appended past tail");
            return position;
        }

        let mut position = 0;
        let mut current = self.head;
        while let Some(index) = current {
            let node = self.arena.node(index);
            if element <= node.element {
                break;
            }
            current = node.next;
            position += 1;
        }
        self.link_before(element, current);
        tracing::trace!(position, length = self.length, "inserted element");
        position
    }

    /// Inserts every item in iteration order.
    ///
    /// Returns `true` if at least one element was inserted, which is the case
    /// exactly when `items` was non-empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let mut list = SortedList::from_sequence([1, 4]);
    /// assert!(list.insert_all([3, 2]));
    /// assert!(!list.insert_all(Vec::new()));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    /// ```
    pub fn insert_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut inserted = 0_usize;
        for element in items {
            self.insert(element);
            inserted += 1;
        }
        if inserted > 0 {
            tracing::debug!(inserted, length = self.length, "bulk insert");
        }
        inserted > 0
    }

    /// Returns `true` if the list contains an element equal to `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.find_first(value).is_some()
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let list = SortedList::from_sequence([1, 2, 2, 3]);
    /// assert_eq!(list.index_of(&2), Some(1));
    /// assert_eq!(list.last_index_of(&2), Some(2));
    /// assert_eq!(list.index_of(&7), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.find_first(value).map(|(position, _)| position)
    }

    /// Returns the index of the last element equal to `value`.
    #[must_use]
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.find_last(value).map(|(position, _)| position)
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false` if no such element exists.
    pub fn remove_value(&mut self, value: &T) -> bool {
        match self.find_first(value) {
            Some((_, index)) => {
                self.unlink(index);
                true
            }
            None => false,
        }
    }

    /// Removes the last element equal to `value`.
    ///
    /// Returns `false` if no such element exists.
    pub fn remove_last_occurrence(&mut self, value: &T) -> bool {
        match self.find_last(value) {
            Some((_, index)) => {
                self.unlink(index);
                true
            }
            None => false,
        }
    }

    /// Forward scan that gives up once elements exceed `value`.
    fn find_first(&self, value: &T) -> Option<(usize, NodeIndex)> {
        let mut position = 0;
        let mut current = self.head;
        while let Some(index) = current {
            let node = self.arena.node(index);
            match node.element.cmp(value) {
                Ordering::Less => {}
                Ordering::Equal => return Some((position, index)),
                Ordering::Greater => return None,
            }
            current = node.next;
            position += 1;
        }
        None
    }

    /// Backward scan that gives up once elements fall below `value`.
    fn find_last(&self, value: &T) -> Option<(usize, NodeIndex)> {
        let mut position = self.length;
        let mut current = self.tail;
        while let Some(index) = current {
            position -= 1;
            let node = self.arena.node(index);
            match node.element.cmp(value) {
                Ordering::Greater => {}
                Ordering::Equal => return Some((position, index)),
                Ordering::Less => return None,
            }
            current = node.previous;
        }
        None
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// A double-ended iterator over references to elements of a [`SortedList`].
pub struct SortedListIterator<'a, T> {
    arena: &'a NodeArena<T>,
    front: Option<NodeIndex>,
    back: Option<NodeIndex>,
    remaining: usize,
}

impl<T> Clone for SortedListIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for SortedListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = arena.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for SortedListIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arena = self.arena;
        let node = arena.node(self.back?);
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T> ExactSizeIterator for SortedListIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for SortedListIterator<'_, T> {}

/// An owning iterator over elements of a [`SortedList`].
pub struct SortedListIntoIterator<T> {
    list: SortedList<T>,
}

impl<T> Iterator for SortedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T> DoubleEndedIterator for SortedListIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for SortedListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.length
    }
}

impl<T> FusedIterator for SortedListIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SortedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_sequence(iter)
    }
}

impl<T: Ord> Extend<T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T: Ord + Copy + 'a> Extend<&'a T> for SortedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.insert_all(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for SortedList<T> {
    type Item = T;
    type IntoIter = SortedListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SortedListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SortedList<T> {
    type Item = &'a T;
    type IntoIter = SortedListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for SortedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: PartialEq> PartialEq for SortedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SortedList<T> {}

impl<T: PartialOrd> PartialOrd for SortedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for SortedList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for SortedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SortedList<T> {
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

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedList<T> {
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
struct SortedListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SortedListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SortedListVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = SortedList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut list = SortedList::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            list.insert(element);
        }
        Ok(list)
    }
}

/// Deserializes any sequence, inserting each element at its sorted position.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedList<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Orders by `key` only, so `tag` tells equal elements apart.
    #[derive(Debug, Clone, Copy)]
    struct Tagged {
        key: i32,
        tag: char,
    }

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tagged {}

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    const fn tagged(key: i32, tag: char) -> Tagged {
        Tagged { key, tag }
    }

    fn to_vec<T: Clone>(list: &SortedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    fn tags(list: &SortedList<Tagged>) -> String {
        list.iter().map(|element| element.tag).collect()
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_list() {
        let list: SortedList<i32> = SortedList::new();
        assert_eq!(format!("{list}"), "[]");
    }

    #[rstest]
    fn test_display_sorted_elements() {
        let list = SortedList::from_sequence([3, 1, 2]);
        assert_eq!(format!("{list}"), "[1, 2, 3]");
    }

    #[rstest]
    fn test_debug() {
        let list = SortedList::from_sequence(["b", "a"]);
        assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
    }

    // =========================================================================
    // Insertion Tests
    // =========================================================================

    #[rstest]
    fn test_new_creates_empty() {
        let list: SortedList<i32> = SortedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.first(), None);
        assert_eq!(list.last(), None);
    }

    #[rstest]
    fn test_insert_into_empty() {
        let mut list = SortedList::new();
        assert_eq!(list.insert(42), 0);
        assert_eq!(list.first(), Some(&42));
        assert_eq!(list.last(), Some(&42));
        assert_eq!(list.len(), 1);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(2, 1)]
    #[case(4, 2)]
    #[case(6, 3)]
    fn test_insert_returns_position(#[case] element: i32, #[case] expected: usize) {
        let mut list = SortedList::from_sequence([1, 3, 5]);
        assert_eq!(list.insert(element), expected);
        assert_eq!(list.get(expected), Ok(&element));
    }

    #[rstest]
    fn test_insert_keeps_links_consistent() {
        let mut list = SortedList::new();
        for element in [5, 1, 4, 2, 3] {
            list.insert(element);
        }
        assert_eq!(to_vec(&list), vec![1, 2, 3, 4, 5]);
        assert_eq!(
            list.iter().rev().copied().collect::<Vec<_>>(),
            vec![5, 4, 3, 2, 1]
        );
    }

    #[rstest]
    fn test_equal_element_goes_before_existing() {
        let mut list = SortedList::from_sequence([tagged(5, 'a')]);
        assert_eq!(list.insert(tagged(5, 'b')), 0);
        assert_eq!(tags(&list), "ba");
    }

    #[rstest]
    fn test_equal_run_is_most_recent_first() {
        let list = SortedList::from_sequence([
            tagged(1, 'x'),
            tagged(2, 'a'),
            tagged(3, 'y'),
            tagged(2, 'b'),
            tagged(2, 'c'),
        ]);
        assert_eq!(tags(&list), "xcbay");
    }

    #[rstest]
    fn test_tail_fast_path_does_not_skip_equal_tail() {
        let mut list = SortedList::from_sequence([tagged(1, 'a'), tagged(9, 'b')]);
        assert_eq!(list.insert(tagged(9, 'c')), 1);
        assert_eq!(tags(&list), "acb");
    }

    #[rstest]
    fn test_insert_all_reports_change() {
        let mut list = SortedList::from_sequence([1, 4]);
        assert!(list.insert_all([3, 2]));
        assert!(!list.insert_all(std::iter::empty()));
        assert_eq!(to_vec(&list), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_extend_by_reference() {
        let mut list = SortedList::from_sequence([10]);
        list.extend(&[3, 30]);
        assert_eq!(to_vec(&list), vec![3, 10, 30]);
    }

    // =========================================================================
    // Read Tests
    // =========================================================================

    #[rstest]
    fn test_get_walks_from_both_ends() {
        let list: SortedList<i32> = (0..9).rev().collect();
        for index in 0..9 {
            assert_eq!(list.get(index), Ok(&i32::try_from(index).unwrap()));
        }
    }

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(usize::MAX)]
    fn test_get_out_of_range(#[case] offset: usize) {
        let list = SortedList::from_sequence([1, 2, 3]);
        let index = list.len().saturating_add(offset);
        assert_eq!(
            list.get(index),
            Err(SortedListError::IndexOutOfRange { index, length: 3 })
        );
    }

    #[rstest]
    fn test_index_operator() {
        let list = SortedList::from_sequence(["b", "c", "a"]);
        assert_eq!(list[0], "a");
        assert_eq!(list[2], "c");
    }

    #[rstest]
    #[should_panic(expected = "index 1 out of range for sorted list of length 1")]
    fn test_index_operator_panics_out_of_range() {
        let list = SortedList::from_sequence([1]);
        let _ = list[1];
    }

    #[rstest]
    fn test_contains_and_index_of() {
        let list = SortedList::from_sequence([4, 2, 2, 8]);
        assert!(list.contains(&2));
        assert!(!list.contains(&3));
        assert!(!list.contains(&9));
        assert_eq!(list.index_of(&2), Some(0));
        assert_eq!(list.last_index_of(&2), Some(1));
        assert_eq!(list.index_of(&8), Some(3));
        assert_eq!(list.last_index_of(&1), None);
    }

    #[rstest]
    fn test_iterator_meets_in_the_middle() {
        let list = SortedList::from_sequence([1, 2, 3, 4]);
        let mut iterator = list.iter();
        assert_eq!(iterator.len(), 4);
        assert_eq!(iterator.next(), Some(&1));
        assert_eq!(iterator.next_back(), Some(&4));
        assert_eq!(iterator.next(), Some(&2));
        assert_eq!(iterator.next_back(), Some(&3));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next_back(), None);
    }

    #[rstest]
    fn test_into_iter_owned_both_ends() {
        let list = SortedList::from_sequence(vec![String::from("b"), String::from("a")]);
        let mut iterator = list.into_iter();
        assert_eq!(iterator.len(), 2);
        assert_eq!(iterator.next_back(), Some(String::from("b")));
        assert_eq!(iterator.next(), Some(String::from("a")));
        assert_eq!(iterator.next(), None);
    }

    // =========================================================================
    // Removal Tests
    // =========================================================================

    #[rstest]
    fn test_remove_by_index() {
        let mut list = SortedList::from_sequence([1, 2, 3]);
        assert_eq!(list.remove(1), Ok(2));
        assert_eq!(to_vec(&list), vec![1, 3]);
        assert_eq!(
            list.remove(2),
            Err(SortedListError::IndexOutOfRange {
                index: 2,
                length: 2
            })
        );
    }

    #[rstest]
    fn test_remove_head_and_tail_relinks() {
        let mut list = SortedList::from_sequence([1, 2, 3]);
        assert_eq!(list.remove(0), Ok(1));
        assert_eq!(list.remove(1), Ok(3));
        assert_eq!(list.first(), Some(&2));
        assert_eq!(list.last(), Some(&2));
    }

    #[rstest]
    fn test_pop_front_and_back() {
        let mut list = SortedList::from_sequence([2, 1, 3]);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[rstest]
    fn test_remove_value_first_and_last_occurrence() {
        let mut list = SortedList::from_sequence([
            tagged(1, 'a'),
            tagged(1, 'b'),
            tagged(1, 'c'),
        ]);
        assert_eq!(tags(&list), "cba");
        assert!(list.remove_value(&tagged(1, '?')));
        assert_eq!(tags(&list), "ba");
        assert!(list.remove_last_occurrence(&tagged(1, '?')));
        assert_eq!(tags(&list), "b");
        assert!(!list.remove_value(&tagged(2, '?')));
        assert!(!list.remove_last_occurrence(&tagged(0, '?')));
    }

    #[rstest]
    fn test_retain() {
        let mut list: SortedList<i32> = (1..=10).collect();
        list.retain(|element| element % 3 == 0);
        assert_eq!(to_vec(&list), vec![3, 6, 9]);
        assert_eq!(list.first(), Some(&3));
        assert_eq!(list.last(), Some(&9));
    }

    #[rstest]
    fn test_clear() {
        let mut list = SortedList::from_sequence([1, 2]);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter().next(), None);
        list.insert(5);
        assert_eq!(to_vec(&list), vec![5]);
    }

    #[rstest]
    fn test_removed_slots_are_reused() {
        let mut list = SortedList::from_sequence([1, 2, 3, 4]);
        list.remove_value(&2);
        list.pop_front();
        list.insert(7);
        list.insert(0);
        assert_eq!(list.arena.slot_count(), 4);
        assert_eq!(list.arena.len(), list.len());
        assert_eq!(to_vec(&list), vec![0, 3, 4, 7]);
    }

    // =========================================================================
    // Trait Tests
    // =========================================================================

    #[rstest]
    fn test_eq_ignores_arena_layout() {
        let mut left = SortedList::from_sequence([1, 2, 3, 4]);
        left.pop_front();
        let right = SortedList::from_sequence([4, 3, 2]);
        assert_eq!(left, right);
    }

    #[rstest]
    fn test_ord_is_lexicographic() {
        let smaller = SortedList::from_sequence([1, 2]);
        let larger = SortedList::from_sequence([1, 3]);
        let prefix = SortedList::from_sequence([1]);
        assert!(smaller < larger);
        assert!(prefix < smaller);
    }

    #[rstest]
    fn test_hash_consistent_with_eq() {
        use std::collections::hash_map::DefaultHasher;

        let hash = |list: &SortedList<i32>| {
            let mut hasher = DefaultHasher::new();
            list.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(
            hash(&SortedList::from_sequence([2, 1])),
            hash(&SortedList::from_sequence([1, 2]))
        );
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original = SortedList::from_sequence([1, 3]);
        let mut copy = original.clone();
        copy.insert(2);
        assert_eq!(original.len(), 2);
        assert_eq!(to_vec(&copy), vec![1, 2, 3]);
    }
}
