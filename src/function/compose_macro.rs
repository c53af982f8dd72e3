//! The `compose!` macro.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs
/// first. A single function is returned unchanged.
///
/// Every function must implement [`Fn`], and each output type must match
/// the input type of the function to its left.
///
/// # Examples
///
/// ## Building a list transformation
///
/// ```
/// use fnkit::array::{make_trunc_with, reverse_array};
/// use fnkit::compose;
/// use fnkit::diagnostic::SilentSink;
///
/// let pairs = make_trunc_with(2, 36, SilentSink);
/// let latest_pairs = compose!(
///     |items: Vec<i32>| pairs(items.as_slice()),
///     |items: Vec<i32>| reverse_array(&items)
/// );
///
/// assert_eq!(latest_pairs(vec![1, 2, 3, 4, 5]), vec![5, 4, 3, 2]);
/// ```
///
/// ## Three or more functions
///
/// ```
/// use fnkit::compose;
/// use fnkit::text::trunc_str;
///
/// let title = compose!(
///     |text: String| text.to_uppercase(),
///     |text: String| trunc_str(&text, 4).into_owned(),
///     |text: &str| text.trim().to_owned()
/// );
/// assert_eq!(title("  welcome  "), "WELC...");
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr) => {
        $function
    };

    // compose!(f, g)(x) = f(g(x))
    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
