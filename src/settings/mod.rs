//! Settings reconciliation engine.
//!
//! Brings a settings target's actual state in line with its desired overlay.
//! Two target kinds exist: plain JSON files on disk and rows inside a SQLite
//! key/value table whose value column is JSON. The dispatcher routes by
//! variant; adding a third target kind means adding one more match arm here
//! without touching the existing reconcilers.

pub mod json_file;
pub mod merge;
pub mod record;
pub mod sqlite_store;
pub mod target;

pub use merge::{deep_merge, get_nested_value, is_deep_subset, set_nested_value};
pub use record::{RecordPatch, apply_record_patch, is_record_patch_applied};
pub use target::{JsonTarget, Scope, SettingsTarget, SqliteTarget, resolve_target_path};

use crate::Result;

/// Check whether a target's overlay is already reflected in its backing
/// file or store. Never fails; any unreadable state means "not applied".
pub fn is_already_applied(target: &SettingsTarget) -> bool {
    match target {
        SettingsTarget::Json(t) => json_file::is_json_applied(t),
        SettingsTarget::Sqlite(t) => sqlite_store::is_sqlite_applied(t),
    }
}

/// Apply a target's overlay to its backing file or store.
pub fn apply(target: &SettingsTarget) -> Result<()> {
    match target {
        SettingsTarget::Json(t) => json_file::apply_json(t),
        SettingsTarget::Sqlite(t) => sqlite_store::apply_sqlite(t),
    }
}
