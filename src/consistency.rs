use std::collections::HashSet;

use log::debug;

use crate::lookup::{record_types, ttl_from_array, ttl_from_object};
use crate::{ConsistencyError, Document, Layout, TTL_TABLE_KEY};

/// Check that both documents encode the same TTL table.
///
/// Every record type in the array form must resolve to the same TTL in the
/// object form, and the object form must not hold record types the array
/// form lacks. Returns the number of distinct record types checked.
///
/// # Errors
///
/// Returns the first [`ConsistencyError`] found, scanning the array form in
/// document order and then the object form.
pub fn check_consistency(array: &Document, object: &Document) -> Result<usize, ConsistencyError> {
    let missing = || ConsistencyError::MissingTable { key: TTL_TABLE_KEY };
    let array_types = record_types(array.root(), Layout::Array).ok_or_else(missing)?;
    let object_order = record_types(object.root(), Layout::Object).ok_or_else(missing)?;
    let object_types: HashSet<&str> = object_order.iter().copied().collect();

    let mut seen = HashSet::new();
    for record_type in array_types {
        if !seen.insert(record_type) {
            continue;
        }
        if !object_types.contains(record_type) {
            return Err(ConsistencyError::MissingInObject {
                record_type: record_type.to_owned(),
            });
        }
        let a = ttl_from_array(array.root(), record_type);
        let o = ttl_from_object(object.root(), record_type);
        if a != o {
            return Err(ConsistencyError::Mismatch {
                record_type: record_type.to_owned(),
                array: a,
                object: o,
            });
        }
    }

    if let Some(extra) = object_order.into_iter().find(|t| !seen.contains(t)) {
        return Err(ConsistencyError::MissingInArray {
            record_type: extra.to_owned(),
        });
    }

    debug!("{} record types agree across both forms", seen.len());
    Ok(seen.len())
}
