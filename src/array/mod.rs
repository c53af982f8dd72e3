//! Immutable sequence helpers.
//!
//! Every function here borrows its input and returns a freshly allocated
//! [`Vec`]; nothing is mutated in place. Indices follow the clamping rules of
//! JavaScript's `Array.prototype.slice`, so an out-of-range index degrades to
//! an empty range instead of panicking.
//!
//! - [`get_first_n`]: safe prefix
//! - [`reverse_array`]: reversed copy
//! - [`reduce_indexed`]: left fold that sees the index and the whole sequence
//! - [`updater`]: replace, add and delete at an index
//! - [`make_trunc`] / [`make_trunc_with`]: truncate to a multiple of a block size

mod trunc;
pub mod updater;

pub use trunc::{DEFAULT_TRUNC_MAX, make_trunc, make_trunc_with};

/// Returns the first `count` elements, or an empty vector when `array` is absent.
///
/// # Examples
///
/// ```
/// use fnkit::array::get_first_n;
///
/// assert_eq!(get_first_n(Some(&[1, 2, 3][..]), 2), vec![1, 2]);
/// assert_eq!(get_first_n(Some(&[1, 2, 3][..]), 10), vec![1, 2, 3]);
/// assert_eq!(get_first_n::<i32>(None, 2), Vec::<i32>::new());
/// ```
pub fn get_first_n<T: Clone>(array: Option<&[T]>, count: usize) -> Vec<T> {
    array.map_or_else(Vec::new, |items| slice_range(items, 0, count))
}

/// Returns a reversed copy of `array`.
///
/// Reversing twice yields the original sequence.
///
/// # Examples
///
/// ```
/// use fnkit::array::reverse_array;
///
/// let original = vec![1, 2, 3];
/// assert_eq!(reverse_array(&original), vec![3, 2, 1]);
/// assert_eq!(reverse_array(&reverse_array(&original)), original);
/// ```
pub fn reverse_array<T: Clone>(array: &[T]) -> Vec<T> {
    array.iter().rev().cloned().collect()
}

/// Folds `items` from the left, handing the reducer the accumulator, the
/// current element, its index and the whole sequence.
///
/// This is the shape `Array.prototype.reduce` callbacks expect, and the
/// driver for reducers built by
/// [`make_join_string_reducer`](crate::ordering::make_join_string_reducer).
///
/// # Examples
///
/// ```
/// use fnkit::array::reduce_indexed;
///
/// let weighted = reduce_indexed(&[10, 20, 30], 0, |acc, value, index, _| acc + value * index);
/// assert_eq!(weighted, 80);
/// ```
pub fn reduce_indexed<T, A, F>(items: &[T], init: A, mut reducer: F) -> A
where
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    items
        .iter()
        .enumerate()
        .fold(init, |acc, (index, item)| reducer(acc, item, index, items))
}

/// Clones `items[start..end]` with both bounds clamped to the slice length.
pub(crate) fn slice_range<T: Clone>(items: &[T], start: usize, end: usize) -> Vec<T> {
    let end = end.min(items.len());
    let start = start.min(end);
    items[start..end].to_vec()
}
