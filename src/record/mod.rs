//! JSON record helpers.
//!
//! A *record* is a [`serde_json::Value`]; its object variant is the usual
//! case, but every helper accepts any value and degrades the way a
//! JavaScript object spread or property read would instead of failing.
//!
//! # Overview
//!
//! - [`make_add_key_for_list`] / [`make_add_key_for_obj`]: key injection
//! - [`add_group_id`], [`add_content_for_tabs`], [`add_followers`]: payload composers
//! - [`make_property_filter`]: every/some truthy-property predicate
//! - [`get_first`], [`get_path`], [`has_own_key`], [`is_truthy`], [`spread`]: accessors
//! - [`to_number`], [`to_fixed`]: JavaScript numeric coercion and formatting
//!
//! # Examples
//!
//! ```rust
//! use fnkit::record::{Computed, make_add_key_for_list};
//! use serde_json::{Value, json};
//!
//! let number_items = make_add_key_for_list(
//!     "position",
//!     Computed::per_item(|_: &Value, index, _: &[Value]| json!(index + 1)),
//!     true,
//! );
//! let numbered = number_items(&[json!({"name": "a"}), json!({"name": "b"})]);
//! assert_eq!(numbered, vec![
//!     json!({"name": "a", "position": 1}),
//!     json!({"name": "b", "position": 2}),
//! ]);
//! ```

mod filter;
mod key_injection;
mod number;
mod payload;

pub use filter::make_property_filter;
pub use key_injection::{
    Computed, DEFAULT_OVERWRITTEN, ItemValue, ObjectValue, make_add_key_for_list,
    make_add_key_for_obj,
};
pub use number::{to_fixed, to_number};
pub use payload::{
    DEFAULT_GROUP_FIELD, FOLLOWER_THRESHOLD, FOLLOWERS_KEY, GROUP_ID_KEY, TAB_CONTENT_KEY,
    add_content_for_tabs, add_content_for_tabs_with, add_followers, add_followers_with,
    add_group_id, format_ten_thousands,
};

use serde_json::{Map, Value};

/// Returns the first element of an array, or an empty object when there is none.
///
/// Anything that is not an array (including `None`) has no first element.
/// A present `null` element is returned as `null`.
///
/// # Examples
///
/// ```
/// use fnkit::record::get_first;
/// use serde_json::json;
///
/// assert_eq!(get_first(Some(&json!([{"id": 1}, {"id": 2}]))), json!({"id": 1}));
/// assert_eq!(get_first(Some(&json!([]))), json!({}));
/// assert_eq!(get_first(None), json!({}));
/// ```
pub fn get_first(array: Option<&Value>) -> Value {
    array
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()))
}

/// Reads a nested value by a dotted path such as `"next.nextData.list"` or
/// `"items[0].name"`.
///
/// Returns `None` as soon as a segment is missing or the current value
/// cannot be indexed.
///
/// # Examples
///
/// ```
/// use fnkit::record::get_path;
/// use serde_json::json;
///
/// let tab = json!({"next": {"items": [{"name": "first"}]}});
/// assert_eq!(get_path(&tab, "next.items[0].name"), Some(&json!("first")));
/// assert_eq!(get_path(&tab, "next.missing.name"), None);
/// ```
pub fn get_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty())
        .try_fold(value, property)
}

/// Returns whether `value` owns `key` directly.
///
/// Objects own their keys, arrays own their in-range indices. Other values
/// own nothing.
pub fn has_own_key(value: &Value, key: &str) -> bool {
    property(value, key).is_some()
}

/// JavaScript truthiness of a JSON value.
///
/// `null`, `false`, `0` and `""` are falsy; everything else, including
/// empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|float| float != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Spreads `value` into a fresh object, like `{ ...value }` in JavaScript.
///
/// Objects are copied, arrays become index-keyed objects and strings become
/// character-index-keyed objects. Every other value spreads to nothing.
///
/// # Examples
///
/// ```
/// use fnkit::record::spread;
/// use serde_json::{Value, json};
///
/// assert_eq!(Value::Object(spread(&json!(["a", "b"]))), json!({"0": "a", "1": "b"}));
/// assert_eq!(Value::Object(spread(&json!(42))), json!({}));
/// ```
pub fn spread(value: &Value) -> Map<String, Value> {
    match value {
        Value::Object(record) => record.clone(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item.clone()))
            .collect(),
        Value::String(text) => text
            .chars()
            .enumerate()
            .map(|(index, character)| (index.to_string(), Value::String(character.to_string())))
            .collect(),
        Value::Null | Value::Bool(_) | Value::Number(_) => Map::new(),
    }
}

/// Reads one own property: an object key or a canonical array index.
///
/// Strings own no properties, and arrays have no `length` key.
pub(crate) fn property<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(record) => record.get(key),
        Value::Array(items) => array_index(key).and_then(|index| items.get(index)),
        _ => None,
    }
}

/// Parses `key` as an array index, rejecting forms like `"01"` or `"+1"`.
fn array_index(key: &str) -> Option<usize> {
    key.parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == key)
}
