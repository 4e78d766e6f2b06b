//! Settings target descriptions.
//!
//! A target describes where a desired configuration overlay must end up:
//! either a plain JSON file on disk, or a row inside a SQLite key/value
//! table whose value column is itself a JSON document.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::settings::record::RecordPatch;

/// Where a settings file lives relative to the user's work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Inside the current project directory.
    Project,
    /// In the user's home or application data directory.
    Global,
}

/// A plain JSON settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonTarget {
    pub scope: Scope,
    /// File path; a leading `~/` expands to the home directory, anything
    /// else resolves relative to the current working directory.
    pub file_path: String,
    /// Overlay to deep-merge into the file's top-level object.
    pub merge: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A JSON document stored as the value of a row in a SQLite key/value table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqliteTarget {
    pub scope: Scope,
    /// Path to the SQLite database file.
    pub db_path: String,
    /// Table with a text `key` column and a text `value` column.
    pub table: String,
    /// Row key whose value holds the JSON document.
    pub key: String,
    /// Dot-delimited path to the sub-object inside the row's JSON value.
    pub merge_path: String,
    /// Overlay to deep-merge at the sub-object.
    pub merge: Map<String, Value>,
    /// Name of the record array field inside the sub-object that
    /// `record_patch` applies to.
    #[serde(default = "default_array_field")]
    pub array_field: String,
    /// Optional field-level patch for one record of the array field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_patch: Option<RecordPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_array_field() -> String {
    "modes4".to_string()
}

/// Tagged union over the two target kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SettingsTarget {
    Json(JsonTarget),
    Sqlite(SqliteTarget),
}

impl SettingsTarget {
    /// Short kind tag for display.
    pub fn kind(&self) -> &'static str {
        match self {
            SettingsTarget::Json(_) => "json",
            SettingsTarget::Sqlite(_) => "sqlite",
        }
    }

    /// Human-readable label, falling back to the kind tag.
    pub fn label(&self) -> &str {
        let description = match self {
            SettingsTarget::Json(t) => t.description.as_deref(),
            SettingsTarget::Sqlite(t) => t.description.as_deref(),
        };
        description.unwrap_or_else(|| self.kind())
    }
}

/// Resolve a target path specification to an absolute path.
///
/// A leading `~/` expands to the user's home directory; relative paths
/// resolve against the current working directory.
pub fn resolve_target_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    let path = PathBuf::from(path);
    if path.is_absolute() {
        return path;
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_home_relative_path() {
        let resolved = resolve_target_path("~/.claude/settings.json");
        let home = dirs::home_dir().unwrap();
        assert_eq!(resolved, home.join(".claude/settings.json"));
    }

    #[test]
    fn test_resolve_relative_path_against_cwd() {
        let resolved = resolve_target_path(".claude/settings.local.json");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with(".claude/settings.local.json"));
    }

    #[test]
    fn test_resolve_absolute_path_unchanged() {
        let resolved = resolve_target_path("/tmp/settings.json");
        assert_eq!(resolved, PathBuf::from("/tmp/settings.json"));
    }

    #[test]
    fn test_target_label_falls_back_to_kind() {
        let target = SettingsTarget::Json(JsonTarget {
            scope: Scope::Project,
            file_path: ".claude/settings.local.json".to_string(),
            merge: Map::new(),
            description: None,
        });
        assert_eq!(target.label(), "json");
    }

    #[test]
    fn test_sqlite_target_deserializes_with_default_array_field() {
        let target: SettingsTarget = serde_json::from_value(json!({
            "kind": "sqlite",
            "scope": "global",
            "dbPath": "~/.config/Cursor/User/globalStorage/state.vscdb",
            "table": "ItemTable",
            "key": "composer.state",
            "mergePath": "composerState",
            "merge": {},
            "recordPatch": {"id": "agent", "set": {"autoRun": true}},
            "description": "Cursor composer state"
        }))
        .unwrap();
        let SettingsTarget::Sqlite(t) = target else {
            panic!("expected sqlite target");
        };
        assert_eq!(t.array_field, "modes4");
        assert_eq!(t.record_patch.unwrap().id, "agent");
    }

    #[test]
    fn test_json_target_round_trip() {
        let target = SettingsTarget::Json(JsonTarget {
            scope: Scope::Global,
            file_path: "~/.claude/settings.json".to_string(),
            merge: match json!({"permissions": {"allow": ["Read(**)"]}}) {
                Value::Object(map) => map,
                _ => unreachable!(),
            },
            description: Some("Claude settings".to_string()),
        });
        let encoded = serde_json::to_value(&target).unwrap();
        assert_eq!(encoded["kind"], "json");
        assert_eq!(encoded["filePath"], "~/.claude/settings.json");
        let decoded: SettingsTarget = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, target);
    }
}
