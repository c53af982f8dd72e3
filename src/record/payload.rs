//! Composers for feed payloads: grouped lists, tab contents and follower counts.

use serde_json::{Map, Value};

use super::get_path;
use super::key_injection::{Computed, make_add_key_for_list, make_add_key_for_obj};
use super::number::{to_fixed, to_number};

/// Field holding the list that [`add_group_id`] tags by default.
pub const DEFAULT_GROUP_FIELD: &str = "list";

/// Key added to every grouped item.
pub const GROUP_ID_KEY: &str = "_groupId";

/// Key added to every tab by [`add_content_for_tabs`].
pub const TAB_CONTENT_KEY: &str = "tabContent";

/// Key added to every item by [`add_followers`].
pub const FOLLOWERS_KEY: &str = "followers";

/// Follower counts below this are kept as plain numbers.
pub const FOLLOWER_THRESHOLD: f64 = 1000.0;

/// Tags every item of `data[field]` with `_groupId = data.groupId`.
///
/// Returns `data` unchanged unless `data[field]` is an array. A missing
/// `groupId` is written as `null`.
///
/// # Examples
///
/// ```
/// use fnkit::record::{DEFAULT_GROUP_FIELD, add_group_id};
/// use serde_json::json;
///
/// let grouped = add_group_id(json!({"groupId": 7, "list": [{"id": 1}]}), DEFAULT_GROUP_FIELD);
/// assert_eq!(grouped, json!({"groupId": 7, "list": [{"id": 1, "_groupId": 7}]}));
///
/// let untouched = json!({"groupId": 7, "list": "not a list"});
/// assert_eq!(add_group_id(untouched.clone(), DEFAULT_GROUP_FIELD), untouched);
/// ```
pub fn add_group_id(data: Value, field: &str) -> Value {
    let grouped = data.get(field).and_then(Value::as_array).map(|items| {
        let group_id = data.get("groupId").cloned().unwrap_or(Value::Null);
        make_add_key_for_list(GROUP_ID_KEY, group_id, true)(items)
    });
    match grouped {
        Some(items) => make_add_key_for_obj(field, Value::Array(items), true)(data),
        None => data,
    }
}

/// Sets `tabContent` on every tab to the grouped list found under
/// `next.nextData`.
///
/// For each tab, `next.nextData` (default `{}`) goes through
/// [`add_group_id`], and its `list` (default `[]`) becomes the tab content.
///
/// # Examples
///
/// ```
/// use fnkit::record::add_content_for_tabs;
/// use serde_json::json;
///
/// let tabs = add_content_for_tabs(&[
///     json!({"next": {"nextData": {"groupId": "g", "list": [{"id": 1}]}}}),
///     json!({"title": "empty"}),
/// ]);
/// assert_eq!(tabs[0]["tabContent"], json!([{"id": 1, "_groupId": "g"}]));
/// assert_eq!(tabs[1]["tabContent"], json!([]));
/// ```
pub fn add_content_for_tabs(tabs: &[Value]) -> Vec<Value> {
    tab_contents::<fn(Value) -> Value>(tabs, None)
}

/// Like [`add_content_for_tabs`], but stores `content_handler(list)` instead
/// of the list itself.
///
/// # Examples
///
/// ```
/// use fnkit::record::add_content_for_tabs_with;
/// use serde_json::{Value, json};
///
/// let tabs = add_content_for_tabs_with(
///     &[json!({"next": {"nextData": {"list": [1, 2, 3]}}})],
///     |list: Value| json!(list.as_array().map_or(0, Vec::len)),
/// );
/// assert_eq!(tabs[0]["tabContent"], json!(3));
/// ```
pub fn add_content_for_tabs_with<H>(tabs: &[Value], content_handler: H) -> Vec<Value>
where
    H: Fn(Value) -> Value,
{
    tab_contents(tabs, Some(&content_handler))
}

fn tab_contents<H>(tabs: &[Value], content_handler: Option<&H>) -> Vec<Value>
where
    H: Fn(Value) -> Value,
{
    let content = Computed::per_item(|tab: &Value, _, _: &[Value]| {
        let next_data = get_path(tab, "next.nextData")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        let grouped = add_group_id(next_data, DEFAULT_GROUP_FIELD);
        let list = get_path(&grouped, DEFAULT_GROUP_FIELD)
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        match content_handler {
            Some(handler) => handler(list),
            None => list,
        }
    });
    make_add_key_for_list(TAB_CONTENT_KEY, content, true)(tabs)
}

/// Sets `followers` on every item from `next.followStatus.followCount`.
///
/// The count (default `0`) is coerced with [`to_number`]. Counts below
/// [`FOLLOWER_THRESHOLD`] stay numbers; everything else is rendered with
/// [`format_ten_thousands`].
///
/// # Examples
///
/// ```
/// use fnkit::record::add_followers;
/// use serde_json::json;
///
/// let items = add_followers(&[
///     json!({"next": {"followStatus": {"followCount": "500"}}}),
///     json!({"next": {"followStatus": {"followCount": "12345"}}}),
///     json!({}),
/// ]);
/// assert_eq!(items[0]["followers"], json!(500));
/// assert_eq!(items[1]["followers"], json!("1.2万"));
/// assert_eq!(items[2]["followers"], json!(0));
/// ```
pub fn add_followers(list: &[Value]) -> Vec<Value> {
    add_followers_with(list, format_ten_thousands)
}

/// Like [`add_followers`], with a caller-supplied format for large counts.
///
/// # Examples
///
/// ```
/// use fnkit::record::add_followers_with;
/// use serde_json::json;
///
/// let items = add_followers_with(
///     &[json!({"next": {"followStatus": {"followCount": 2500}}})],
///     |count| format!("{:.1}k", count / 1000.0),
/// );
/// assert_eq!(items[0]["followers"], json!("2.5k"));
/// ```
pub fn add_followers_with<F, R>(list: &[Value], format: F) -> Vec<Value>
where
    F: Fn(f64) -> R,
    R: Into<Value>,
{
    let followers = Computed::per_item(|item: &Value, _, _: &[Value]| {
        let count = get_path(item, "next.followStatus.followCount").map_or(0.0, to_number);
        if count < FOLLOWER_THRESHOLD {
            number_value(count)
        } else {
            format(count).into()
        }
    });
    make_add_key_for_list(FOLLOWERS_KEY, followers, true)(list)
}

/// Renders a count in units of ten thousand with one decimal: `12345` is `"1.2万"`.
pub fn format_ten_thousands(count: f64) -> String {
    format!("{}万", to_fixed(count / 10_000.0, 1))
}

/// Whole numbers become JSON integers, everything else a JSON float.
#[allow(clippy::cast_possible_truncation)]
fn number_value(number: f64) -> Value {
    const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;
    if number.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&number) {
        Value::from(number as i64)
    } else {
        Value::from(number)
    }
}
