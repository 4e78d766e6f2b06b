//! Structural comparison and merge primitives over untyped JSON trees.
//!
//! These are pure functions with no I/O. They underpin both reconcilers:
//! `is_deep_subset` answers "is this overlay already present" and
//! `deep_merge` layers an overlay over existing data without disturbing
//! unrelated keys.

use serde_json::{Map, Value};

/// Check whether `needle` is structurally contained in `haystack`.
///
/// Objects recurse per needle key; every key present in the needle must
/// exist in the haystack with a recursively-subset value. Arrays must have
/// identical length and match element-wise in order; a reordered array is a
/// different value. Anything else compares by equality.
pub fn is_deep_subset(haystack: &Value, needle: &Value) -> bool {
    match (haystack, needle) {
        (Value::Object(h), Value::Object(n)) => n
            .iter()
            .all(|(key, val)| h.get(key).is_some_and(|hv| is_deep_subset(hv, val))),
        (Value::Array(h), Value::Array(n)) => {
            h.len() == n.len() && n.iter().zip(h).all(|(nv, hv)| is_deep_subset(hv, nv))
        }
        _ => haystack == needle,
    }
}

/// Check whether a top-level overlay mapping is already reflected in `haystack`.
///
/// A non-object haystack never satisfies an overlay, even an empty one.
pub fn overlay_is_applied(haystack: &Value, overlay: &Map<String, Value>) -> bool {
    match haystack {
        Value::Object(h) => overlay
            .iter()
            .all(|(key, val)| h.get(key).is_some_and(|hv| is_deep_subset(hv, val))),
        _ => false,
    }
}

/// Layer `overlay` over `base`, producing a new mapping.
///
/// Nested objects merge recursively; every other overlay value (including
/// arrays, which replace wholesale) overwrites the base value. Base keys
/// absent from the overlay are carried through unchanged.
pub fn deep_merge(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
    let mut result = base.clone();
    for (key, over_val) in overlay {
        match (base.get(key), over_val) {
            (Some(Value::Object(base_obj)), Value::Object(over_obj)) => {
                result.insert(key.clone(), Value::Object(deep_merge(base_obj, over_obj)));
            }
            _ => {
                result.insert(key.clone(), over_val.clone());
            }
        }
    }
    result
}

/// Navigate a dot-delimited path through nested mappings.
///
/// Returns `None` if any segment is missing or lands on a non-mapping.
pub fn get_nested_value<'a>(obj: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = obj.get(segments.next()?)?;
    for key in segments {
        current = current.as_object()?.get(key)?;
    }
    Some(current)
}

/// Set a value at a dot-delimited path, creating intermediate mappings.
///
/// A missing or non-mapping intermediate segment is replaced with an empty
/// mapping so the path always resolves.
pub fn set_nested_value(obj: &mut Map<String, Value>, path: &str, value: Value) {
    let mut keys: Vec<&str> = path.split('.').collect();
    let Some(last) = keys.pop() else {
        return;
    };
    let mut current = obj;
    for key in keys {
        let slot = current
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        current = match slot {
            Value::Object(map) => map,
            _ => unreachable!("intermediate path segment is always a mapping"),
        };
    }
    current.insert(last.to_string(), value);
}
