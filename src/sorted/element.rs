//! Element families with dedicated constructors.
//!
//! [`SortedList::from_sequence`] works for any `Ord` element. The numeric and
//! text families get named entry points, [`SortedList::of_numbers`] and
//! [`SortedList::of_texts`], which are thin wrappers around it.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use super::list::SortedList;

/// Numeric types ordered by their natural order.
///
/// Implemented for every primitive integer type. Floating point types are not
/// `Ord` and are therefore excluded; implement this for a totally ordered
/// wrapper if needed.
pub trait Numeric: Ord + Copy {}

/// Text types ordered lexicographically by their natural order.
pub trait Text: Ord + AsRef<str> {}

macro_rules! impl_numeric {
    ($($numeric:ty),* $(,)?) => {
        $(impl Numeric for $numeric {})*
    };
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Text for String {}
impl Text for &str {}
impl Text for Box<str> {}
impl Text for Cow<'_, str> {}
impl Text for Rc<str> {}
impl Text for Arc<str> {}

impl<N: Numeric> SortedList<N> {
    /// Builds a sorted list of numbers.
    ///
    /// Accepts any iterable, including an array literal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let from_literal = SortedList::of_numbers([3, 2, 1]);
    /// let from_vec = SortedList::of_numbers(vec![3, 2, 1]);
    /// assert_eq!(from_literal, from_vec);
    /// assert_eq!(from_literal.get(0), Ok(&1));
    /// ```
    #[must_use]
    pub fn of_numbers<I>(items: I) -> Self
    where
        I: IntoIterator<Item = N>,
    {
        Self::from_sequence(items)
    }
}

impl<S: Text> SortedList<S> {
    /// Builds a sorted list of strings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_linked_list::sorted::SortedList;
    ///
    /// let list = SortedList::of_texts(["C", "B", "A"]);
    /// assert_eq!(list.to_string(), "[A, B, C]");
    /// ```
    #[must_use]
    pub fn of_texts<I>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self::from_sequence(items)
    }
}
