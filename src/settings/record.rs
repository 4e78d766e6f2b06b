//! Field-level patching for id-keyed record arrays.
//!
//! Some settings values hold an array of records (e.g. Cursor's composer
//! modes) where exactly one record, identified by its `id` field, needs a
//! handful of fields overwritten. The patcher never synthesizes a missing
//! record and leaves every other record untouched, in original order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A targeted update to one record in an id-keyed record array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPatch {
    /// Value of the `id` field identifying the record to patch.
    pub id: String,
    /// Fields to overwrite (or add) on the matched record.
    pub set: Map<String, Value>,
}

/// Check whether the patch is already reflected in the record array.
///
/// False if no record matches the id; otherwise every patched field must
/// compare equal by value.
pub fn is_record_patch_applied(records: &[Value], patch: &RecordPatch) -> bool {
    let Some(record) = records
        .iter()
        .find(|r| record_id(r) == Some(patch.id.as_str()))
    else {
        return false;
    };
    patch
        .set
        .iter()
        .all(|(key, val)| record.get(key) == Some(val))
}

/// Produce a new record array with the matched record patched.
///
/// Records whose id does not match pass through unchanged. If no record
/// matches, the array is returned as-is; callers must ensure the record
/// pre-exists.
pub fn apply_record_patch(records: &[Value], patch: &RecordPatch) -> Vec<Value> {
    records
        .iter()
        .map(|record| {
            if record_id(record) == Some(patch.id.as_str()) {
                let mut patched = record.as_object().cloned().unwrap_or_default();
                for (key, val) in &patch.set {
                    patched.insert(key.clone(), val.clone());
                }
                Value::Object(patched)
            } else {
                record.clone()
            }
        })
        .collect()
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}
