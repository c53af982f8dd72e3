//! The `pipe!` macro.

/// Pipes a value through functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`, the same as `compose!(h, g, f)(x)`,
/// except that the value is applied immediately. Each function is called
/// once, so [`FnOnce`] is enough.
///
/// # Examples
///
/// ```
/// use fnkit::array::{get_first_n, reverse_array};
/// use fnkit::pipe;
///
/// let scores = vec![3, 9, 4, 7];
/// let top_two = pipe!(
///     scores,
///     |mut scores: Vec<i32>| { scores.sort_unstable(); scores },
///     |scores: Vec<i32>| reverse_array(&scores),
///     |scores: Vec<i32>| get_first_n(Some(scores.as_slice()), 2)
/// );
/// assert_eq!(top_two, vec![9, 7]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
