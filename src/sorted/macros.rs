//! Literal construction of sorted lists.

/// Creates a [`SortedList`](crate::sorted::SortedList) from a list of values.
///
/// The values are inserted one by one in the order written, exactly as
/// [`SortedList::from_sequence`](crate::sorted::SortedList::from_sequence)
/// would insert them.
///
/// # Examples
///
/// ```rust
/// use sorted_linked_list::sorted_list;
/// use sorted_linked_list::sorted::SortedList;
///
/// let numbers = sorted_list![3, 2, 1];
/// assert_eq!(numbers.to_string(), "[1, 2, 3]");
///
/// let texts = sorted_list!["C", "B", "A",];
/// assert_eq!(texts.to_string(), "[A, B, C]");
///
/// let empty: SortedList<u8> = sorted_list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! sorted_list {
    () => {
        $crate::sorted::SortedList::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sorted::SortedList::from_sequence([$($element),+])
    };
}
