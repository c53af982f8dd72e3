use std::cmp::Ordering;

use crate::error::InvalidArgumentError;

/// Builds a comparator that orders elements by whether they satisfy
/// `compare_fn`.
///
/// With `is_pre == false`, satisfying elements sort **after** the others;
/// with `is_pre == true` they sort **before**. Two elements with the same
/// predicate outcome compare [`Ordering::Equal`], so a stable sort such as
/// [`slice::sort_by`] keeps their relative order.
///
/// # Errors
///
/// Returns [`InvalidArgumentError::NotCallable`] when `compare_fn` is `None`.
///
/// # Examples
///
/// ```
/// use fnkit::ordering::make_comparator;
///
/// let is_pinned = |name: &&str| name.starts_with('!');
///
/// let mut names = vec!["!b", "a", "!d", "c"];
/// names.sort_by(make_comparator(Some(is_pinned), true).unwrap());
/// assert_eq!(names, vec!["!b", "!d", "a", "c"]);
///
/// names.sort_by(make_comparator(Some(is_pinned), false).unwrap());
/// assert_eq!(names, vec!["a", "c", "!b", "!d"]);
/// ```
pub fn make_comparator<T, F>(
    compare_fn: Option<F>,
    is_pre: bool,
) -> Result<impl Fn(&T, &T) -> Ordering, InvalidArgumentError>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    let compare_fn = compare_fn.ok_or(InvalidArgumentError::NotCallable {
        function: "make_comparator",
        parameter: "compare_fn",
    })?;

    Ok(move |first: &T, second: &T| {
        let ordering = compare_fn(first).cmp(&compare_fn(second));
        if is_pre { ordering.reverse() } else { ordering }
    })
}
