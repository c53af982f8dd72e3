use serde_json::Value;

use super::{is_truthy, property};

/// Builds a predicate over records checking the truthiness of `props`.
///
/// With `filter_every` set, every property must be truthy (vacuously true
/// for no properties); otherwise at least one must be (false for no
/// properties). Missing properties are falsy.
///
/// # Examples
///
/// ```
/// use fnkit::record::make_property_filter;
/// use serde_json::json;
///
/// let users = [
///     json!({"name": "a", "email": "a@example.com", "verified": true}),
///     json!({"name": "b", "email": "", "verified": true}),
///     json!({"name": "c"}),
/// ];
///
/// let complete = make_property_filter(true, ["email", "verified"]);
/// let reachable = make_property_filter(false, ["email", "verified"]);
///
/// assert_eq!(users.iter().filter(|user| complete(user)).count(), 1);
/// assert_eq!(users.iter().filter(|user| reachable(user)).count(), 2);
/// ```
pub fn make_property_filter<I, S>(filter_every: bool, props: I) -> impl Fn(&Value) -> bool
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let props: Vec<String> = props.into_iter().map(Into::into).collect();
    move |item: &Value| {
        let truthy = |prop: &String| property(item, prop).is_some_and(is_truthy);
        if filter_every {
            props.iter().all(truthy)
        } else {
            props.iter().any(truthy)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(true, json!({"a": 1, "b": "x"}), true)]
    #[case(true, json!({"a": 1, "b": 0}), false)]
    #[case(true, json!({"a": 1}), false)]
    #[case(false, json!({"a": 0, "b": "x"}), true)]
    #[case(false, json!({"a": null, "b": false}), false)]
    #[case(false, json!({}), false)]
    #[case(true, json!(null), false)]
    fn filters(#[case] filter_every: bool, #[case] item: Value, #[case] expected: bool) {
        let filter = make_property_filter(filter_every, ["a", "b"]);
        assert_eq!(filter(&item), expected);
    }

    #[rstest]
    #[case(true, true)]
    #[case(false, false)]
    fn no_properties(#[case] filter_every: bool, #[case] expected: bool) {
        let filter = make_property_filter(filter_every, Vec::<String>::new());
        assert_eq!(filter(&json!({"a": 1})), expected);
    }

    #[rstest]
    fn array_items_use_indices() {
        let filter = make_property_filter(true, ["0"]);
        assert!(filter(&json!(["set"])));
        assert!(!filter(&json!([""])));
    }
}
