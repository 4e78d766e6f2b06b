//! Reconciler for settings stored inside a SQLite key/value table.
//!
//! The target row's value column holds a JSON document; the overlay merges
//! into a sub-object addressed by a dot-delimited path, with an optional
//! record-array patch applied inside that sub-object. Unlike the plain-file
//! reconciler, a missing database is never created: the store belongs to the
//! host application and fabricating it would only confuse that application.

use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use serde_json::{Map, Value};

use crate::settings::merge::{deep_merge, get_nested_value, overlay_is_applied, set_nested_value};
use crate::settings::record::{apply_record_patch, is_record_patch_applied};
use crate::settings::target::{SqliteTarget, resolve_target_path};
use crate::{Error, Result};

/// Check whether the target row already contains the overlay (and record
/// patch, when one is specified).
///
/// Every failure on this path, from a missing database to unparseable row
/// JSON, collapses to `false`.
pub fn is_sqlite_applied(target: &SqliteTarget) -> bool {
    check_applied(target).unwrap_or(false)
}

fn check_applied(target: &SqliteTarget) -> Result<bool> {
    let db_path = resolve_target_path(&target.db_path);
    if !db_path.exists() {
        return Ok(false);
    }
    let conn = Connection::open_with_flags(&db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    let Some(raw) = read_row(&conn, &target.table, &target.key)? else {
        return Ok(false);
    };
    let data: Map<String, Value> = serde_json::from_str(&raw)?;
    let Some(sub) = get_nested_value(&data, &target.merge_path) else {
        return Ok(false);
    };
    let merge_applied = overlay_is_applied(sub, &target.merge);
    if let Some(patch) = &target.record_patch {
        // A missing record array is authoritative "not applied".
        let Some(records) = sub.get(&target.array_field).and_then(Value::as_array) else {
            return Ok(false);
        };
        return Ok(merge_applied && is_record_patch_applied(records, patch));
    }
    Ok(merge_applied)
}

/// Merge the overlay (and optional record patch) into the target row.
///
/// Fails with [`Error::StoreNotFound`] if the database file does not exist.
/// A missing row starts from an empty document and is inserted; an existing
/// row is updated in place. The connection is released on every exit path
/// when it drops.
pub fn apply_sqlite(target: &SqliteTarget) -> Result<()> {
    let db_path = resolve_target_path(&target.db_path);
    if !db_path.exists() {
        return Err(Error::StoreNotFound(db_path));
    }
    let conn = Connection::open(&db_path)?;
    let row = read_row(&conn, &target.table, &target.key)?;

    let mut data: Map<String, Value> = match &row {
        Some(raw) => serde_json::from_str(raw)?,
        None => Map::new(),
    };

    let sub = get_nested_value(&data, &target.merge_path)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();
    let mut merged = deep_merge(&sub, &target.merge);

    if let Some(patch) = &target.record_patch {
        let patched = merged
            .get(&target.array_field)
            .and_then(Value::as_array)
            .map(|records| apply_record_patch(records, patch));
        if let Some(patched) = patched {
            merged.insert(target.array_field.clone(), Value::Array(patched));
        }
    }

    set_nested_value(&mut data, &target.merge_path, Value::Object(merged));
    let new_value = serde_json::to_string(&data)?;

    if row.is_some() {
        let sql = format!("UPDATE {} SET value = ?1 WHERE key = ?2", target.table);
        conn.execute(&sql, params![new_value, target.key])?;
    } else {
        let sql = format!("INSERT INTO {} (key, value) VALUES (?1, ?2)", target.table);
        conn.execute(&sql, params![target.key, new_value])?;
    }
    Ok(())
}

/// Read the value column for a key, if the row exists.
///
/// Table names cannot be bound as parameters, so the table is interpolated;
/// targets come from the static catalogue, not user input.
fn read_row(conn: &Connection, table: &str, key: &str) -> Result<Option<String>> {
    let sql = format!("SELECT value FROM {table} WHERE key = ?1");
    let value = conn
        .query_row(&sql, params![key], |row| row.get::<_, String>(0))
        .optional()?;
    Ok(value)
}
