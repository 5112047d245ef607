use serde_json::Value;

use crate::{Layout, TTL_TABLE_KEY};

/// Look up a TTL in an array-form document.
///
/// Scans the entries in order and, within each, the `types` tags in order. The
/// first entry holding `record_type` decides the result: its integer `value`,
/// or `None` if that entry has no usable `value`. Any other malformed shape
/// also yields `None`.
#[must_use]
pub fn ttl_from_array(root: &Value, record_type: &str) -> Option<i64> {
    let entries = root.get(TTL_TABLE_KEY)?.as_array()?;
    for entry in entries {
        let Some(types) = entry.get("types").and_then(Value::as_array) else {
            continue;
        };
        for tag in types {
            if tag.as_str() == Some(record_type) {
                return entry.get("value").and_then(Value::as_i64);
            }
        }
    }
    None
}

/// Look up a TTL in an object-form document with a single keyed access.
///
/// Returns `None` if the table, the record, or its integer `value` is missing.
#[must_use]
pub fn ttl_from_object(root: &Value, record_type: &str) -> Option<i64> {
    root.get(TTL_TABLE_KEY)?
        .as_object()?
        .get(record_type)?
        .get("value")?
        .as_i64()
}

/// Every record type the TTL table encodes, in document order.
///
/// Returns `None` if the table is missing or does not match `layout`.
/// Array-form tags that are not strings are skipped.
#[must_use]
pub fn record_types(root: &Value, layout: Layout) -> Option<Vec<&str>> {
    let table = root.get(TTL_TABLE_KEY)?;
    match layout {
        Layout::Array => Some(
            table
                .as_array()?
                .iter()
                .filter_map(|entry| entry.get("types").and_then(Value::as_array))
                .flatten()
                .filter_map(Value::as_str)
                .collect(),
        ),
        Layout::Object => Some(table.as_object()?.keys().map(String::as_str).collect()),
    }
}
