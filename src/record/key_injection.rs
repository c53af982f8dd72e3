//! Key injection.
//!
//! Whether the injected value is a literal or computed from the record is
//! decided by the type passed in, not inspected at runtime:
//!
//! | value                   | list form                  | object form       |
//! |-------------------------|----------------------------|-------------------|
//! | [`Value`]               | cloned for every item      | cloned            |
//! | [`Computed::per_item`]  | `f(item, index, list)`     | n/a               |
//! | [`Computed::per_object`]| n/a                        | `f(object)`       |

use serde_json::Value;

use super::{has_own_key, spread};

/// Whether injection replaces a key the record already owns, unless told otherwise.
pub const DEFAULT_OVERWRITTEN: bool = true;

/// Source of the value injected into each item of a list.
pub trait ItemValue {
    /// Produces the value for `item`, found at `index` in `list`.
    fn resolve(&self, item: &Value, index: usize, list: &[Value]) -> Value;
}

/// Source of the value injected into a single object.
pub trait ObjectValue {
    /// Produces the value for `object`.
    fn resolve(&self, object: &Value) -> Value;
}

impl ItemValue for Value {
    fn resolve(&self, _item: &Value, _index: usize, _list: &[Value]) -> Value {
        self.clone()
    }
}

impl ObjectValue for Value {
    fn resolve(&self, _object: &Value) -> Value {
        self.clone()
    }
}

/// A value computed from the record it is injected into.
///
/// Build one with [`Computed::per_item`] for list injection or
/// [`Computed::per_object`] for object injection.
#[derive(Debug, Clone, Copy)]
pub struct Computed<F>(F);

impl<F> Computed<F> {
    /// Wraps a function of `(item, index, list)`.
    pub const fn per_item(function: F) -> Self
    where
        F: Fn(&Value, usize, &[Value]) -> Value,
    {
        Self(function)
    }

    /// Wraps a function of the object itself.
    pub const fn per_object(function: F) -> Self
    where
        F: Fn(&Value) -> Value,
    {
        Self(function)
    }
}

impl<F> ItemValue for Computed<F>
where
    F: Fn(&Value, usize, &[Value]) -> Value,
{
    fn resolve(&self, item: &Value, index: usize, list: &[Value]) -> Value {
        (self.0)(item, index, list)
    }
}

impl<F> ObjectValue for Computed<F>
where
    F: Fn(&Value) -> Value,
{
    fn resolve(&self, object: &Value) -> Value {
        (self.0)(object)
    }
}

/// Creates a function that sets `key` on every item of a list.
///
/// Each item is spread into a new object (see [`spread`](super::spread)) with
/// `key` set to the resolved value. When `overwritten` is `false`, items that
/// already own `key` are carried over unchanged. The input list is never
/// modified; an absent list is an empty slice.
///
/// # Examples
///
/// ```
/// use fnkit::record::make_add_key_for_list;
/// use serde_json::json;
///
/// let mark_seen = make_add_key_for_list("seen", json!(true), false);
/// let marked = mark_seen(&[json!({"id": 1}), json!({"id": 2, "seen": false})]);
///
/// assert_eq!(marked, vec![
///     json!({"id": 1, "seen": true}),
///     json!({"id": 2, "seen": false}),
/// ]);
/// ```
pub fn make_add_key_for_list<V>(
    key: impl Into<String>,
    value: V,
    overwritten: bool,
) -> impl Fn(&[Value]) -> Vec<Value>
where
    V: ItemValue,
{
    let key = key.into();
    move |list: &[Value]| {
        list.iter()
            .enumerate()
            .map(|(index, item)| {
                if !overwritten && has_own_key(item, &key) {
                    return item.clone();
                }
                let mut record = spread(item);
                record.insert(key.clone(), value.resolve(item, index, list));
                Value::Object(record)
            })
            .collect()
    }
}

/// Creates a function that sets `key` on a single object.
///
/// Values that are neither objects nor arrays are returned unchanged, as are
/// objects already owning `key` when `overwritten` is `false`. Arrays are
/// spread into index-keyed objects first.
///
/// # Examples
///
/// ```
/// use fnkit::record::{Computed, make_add_key_for_obj};
/// use serde_json::{Value, json};
///
/// let add_total = make_add_key_for_obj(
///     "total",
///     Computed::per_object(|order: &Value| {
///         let price = order["price"].as_i64().unwrap_or(0);
///         let quantity = order["quantity"].as_i64().unwrap_or(0);
///         json!(price * quantity)
///     }),
///     true,
/// );
///
/// assert_eq!(
///     add_total(json!({"price": 3, "quantity": 4})),
///     json!({"price": 3, "quantity": 4, "total": 12})
/// );
/// assert_eq!(add_total(json!("not a record")), json!("not a record"));
/// ```
pub fn make_add_key_for_obj<V>(
    key: impl Into<String>,
    value: V,
    overwritten: bool,
) -> impl Fn(Value) -> Value
where
    V: ObjectValue,
{
    let key = key.into();
    move |object: Value| {
        let record_like = matches!(object, Value::Object(_) | Value::Array(_));
        if !record_like || (!overwritten && has_own_key(&object, &key)) {
            return object;
        }
        let resolved = value.resolve(&object);
        let mut record = match object {
            Value::Object(record) => record,
            other => spread(&other),
        };
        record.insert(key.clone(), resolved);
        Value::Object(record)
    }
}
