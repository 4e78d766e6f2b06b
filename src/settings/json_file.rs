//! Reconciler for plain JSON settings files.
//!
//! The applied-check never fails: a missing or unparseable file simply means
//! "not applied". At apply time an unparseable file is discarded and rebuilt
//! from the overlay; this is a deliberate overwrite-on-corruption policy.

use std::fs;

use serde_json::{Map, Value};

use crate::Result;
use crate::settings::merge::{deep_merge, overlay_is_applied};
use crate::settings::target::{JsonTarget, resolve_target_path};

/// Check whether the target file already contains the overlay.
pub fn is_json_applied(target: &JsonTarget) -> bool {
    let path = resolve_target_path(&target.file_path);
    let Ok(raw) = fs::read_to_string(&path) else {
        return false;
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(data) => overlay_is_applied(&data, &target.merge),
        Err(_) => false,
    }
}

/// Deep-merge the overlay into the target file, creating it if absent.
///
/// Unrelated keys in an existing file survive the merge. Output is indented
/// JSON with a trailing newline.
pub fn apply_json(target: &JsonTarget) -> Result<()> {
    let path = resolve_target_path(&target.file_path);
    let existing: Map<String, Value> = match fs::read_to_string(&path) {
        // Invalid JSON is overwritten rather than merged.
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        Err(_) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            Map::new()
        }
    };
    let merged = deep_merge(&existing, &target.merge);
    let mut out = serde_json::to_string_pretty(&merged)?;
    out.push('\n');
    fs::write(&path, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::target::Scope;
    use serde_json::json;
    use tempfile::TempDir;

    fn target_for(dir: &TempDir, file: &str, merge: Value) -> JsonTarget {
        JsonTarget {
            scope: Scope::Project,
            file_path: dir.path().join(file).to_string_lossy().into_owned(),
            merge: match merge {
                Value::Object(map) => map,
                other => panic!("expected object, got {other}"),
            },
            description: None,
        }
    }

    #[test]
    fn test_absent_file_not_applied() {
        let dir = TempDir::new().unwrap();
        let target = target_for(&dir, "settings.json", json!({"a": 1}));
        assert!(!is_json_applied(&target));
    }

    #[test]
    fn test_apply_creates_file_with_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let target = target_for(
            &dir,
            "nested/dir/settings.json",
            json!({"permissions": {"allow": ["Read(**)"]}}),
        );

        apply_json(&target).unwrap();

        let raw = fs::read_to_string(dir.path().join("nested/dir/settings.json")).unwrap();
        assert!(raw.ends_with('\n'));
        // Indented output, not compact.
        assert!(raw.contains("\n  "));
        let data: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(data, json!({"permissions": {"allow": ["Read(**)"]}}));
        assert!(is_json_applied(&target));
    }

    #[test]
    fn test_apply_preserves_unrelated_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"permissions":{"allow":["Read(**)"],"deny":["X"]},"theme":"dark"}"#,
        )
        .unwrap();
        let target = target_for(
            &dir,
            "settings.json",
            json!({"permissions": {"allow": ["Read(**)", "Write(**)"]}}),
        );

        apply_json(&target).unwrap();

        let data: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            data,
            json!({
                "permissions": {"allow": ["Read(**)", "Write(**)"], "deny": ["X"]},
                "theme": "dark"
            })
        );
    }

    #[test]
    fn test_corrupt_file_not_applied_and_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json at all").unwrap();
        let target = target_for(&dir, "settings.json", json!({"a": {"b": 1}}));

        assert!(!is_json_applied(&target));
        apply_json(&target).unwrap();

        let data: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(data, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let target = target_for(&dir, "settings.json", json!({"a": {"b": [1, 2]}}));

        apply_json(&target).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        assert!(is_json_applied(&target));

        apply_json(&target).unwrap();
        let second = fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
        assert!(is_json_applied(&target));
    }

    #[test]
    fn test_partial_overlay_not_applied() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"permissions":{"allow":["Read(**)"]}}"#).unwrap();
        let target = target_for(
            &dir,
            "settings.json",
            json!({"permissions": {"allow": ["Read(**)", "Write(**)"]}}),
        );
        assert!(!is_json_applied(&target));
    }
}
