use crate::array::reverse_array;

/// Binds a receiver and leading partial arguments to `function`, applying
/// the combined argument list in reverse.
///
/// Calling the result with `arguments` invokes
/// `function(&this_arg, reverse(partials ++ arguments))`: call-time arguments
/// end up **before** the pre-bound partials, and both groups are reversed.
/// The receiver is passed as an explicit first parameter.
///
/// # Examples
///
/// ```
/// use fnkit::function::bind_right;
///
/// struct Formatter {
///     separator: &'static str,
/// }
///
/// let join = |formatter: &Formatter, parts: Vec<&str>| parts.join(formatter.separator);
/// let path = bind_right(join, Formatter { separator: "/" }, vec!["root", "home"]);
///
/// assert_eq!(path(vec!["user", "docs"]), "docs/user/home/root");
/// assert_eq!(path(vec![]), "home/root");
/// ```
pub fn bind_right<C, A, R, F>(function: F, this_arg: C, partials: Vec<A>) -> impl Fn(Vec<A>) -> R
where
    A: Clone,
    F: Fn(&C, Vec<A>) -> R,
{
    move |arguments: Vec<A>| {
        let mut combined = partials.clone();
        combined.extend(arguments);
        function(&this_arg, reverse_array(&combined))
    }
}
