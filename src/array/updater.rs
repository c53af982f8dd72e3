//! Index-based immutable updates.
//!
//! Each function takes the sequence explicitly and returns a new one of the
//! same element type:
//!
//! | function    | result                                  | length          |
//! |-------------|-----------------------------------------|-----------------|
//! | [`replace`] | `seq[..i] + [replacer] + seq[i + 1..]`  | unchanged*      |
//! | [`add`]     | `seq[..i] + adders + seq[i..]`          | `+ adders.len()`|
//! | [`delete`]  | `seq[..i] + seq[i + 1..]`               | `- 1`*          |
//!
//! \* when `i` is in range. Out-of-range indices are clamped the way
//! `slice` clamps them: `replace` appends and `delete` returns a copy.

use super::slice_range;

/// Index removed by [`delete`] when the caller has no better choice.
pub const DEFAULT_DELETE_INDEX: usize = 0;

/// Returns a copy of `sequence` with the element at `index` replaced.
///
/// # Examples
///
/// ```
/// use fnkit::array::updater::replace;
///
/// assert_eq!(replace(&[1, 2, 3], 1, 20), vec![1, 20, 3]);
/// assert_eq!(replace(&[1, 2, 3], 7, 20), vec![1, 2, 3, 20]);
/// ```
pub fn replace<T: Clone>(sequence: &[T], index: usize, replacer: T) -> Vec<T> {
    let mut updated = slice_range(sequence, 0, index);
    updated.push(replacer);
    let tail = slice_range(sequence, index.saturating_add(1), sequence.len());
    updated.extend(tail);
    updated
}

/// Returns a copy of `sequence` with `adders` inserted before `index`.
///
/// # Examples
///
/// ```
/// use fnkit::array::updater::add;
///
/// assert_eq!(add(&[1, 4], 1, [2, 3]), vec![1, 2, 3, 4]);
/// assert_eq!(add(&[1, 2], 0, [0]), vec![0, 1, 2]);
/// assert_eq!(add(&[1, 2], 9, [3]), vec![1, 2, 3]);
/// ```
pub fn add<T, I>(sequence: &[T], index: usize, adders: I) -> Vec<T>
where
    T: Clone,
    I: IntoIterator<Item = T>,
{
    let mut updated = slice_range(sequence, 0, index);
    updated.extend(adders);
    updated.extend(slice_range(sequence, index, sequence.len()));
    updated
}

/// Returns a copy of `sequence` without the element at `index`.
///
/// # Examples
///
/// ```
/// use fnkit::array::updater::{DEFAULT_DELETE_INDEX, delete};
///
/// assert_eq!(delete(&[1, 2, 3], 1), vec![1, 3]);
/// assert_eq!(delete(&[1, 2, 3], DEFAULT_DELETE_INDEX), vec![2, 3]);
/// assert_eq!(delete(&[1, 2, 3], 3), vec![1, 2, 3]);
/// ```
pub fn delete<T: Clone>(sequence: &[T], index: usize) -> Vec<T> {
    let mut updated = slice_range(sequence, 0, index);
    let tail = slice_range(sequence, index.saturating_add(1), sequence.len());
    updated.extend(tail);
    updated
}
