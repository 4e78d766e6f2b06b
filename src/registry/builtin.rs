//! Built-in agent catalogue.

use serde_json::{Map, Value, json};

use crate::registry::types::{AgentDef, CliAgentDef, SettingsAgentDef};
use crate::settings::{JsonTarget, RecordPatch, Scope, SettingsTarget, SqliteTarget};

fn overlay(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn cli(cmd: &str, display_name: &str, line: &str) -> AgentDef {
    AgentDef::Cli(CliAgentDef {
        cmd: cmd.to_string(),
        display_name: Some(display_name.to_string()),
        lines: vec![line.to_string()],
        cmd_aliases: None,
    })
}

/// Cursor has no bypass flag; its agent mode is configured through a CLI
/// config file and the composer state blob inside state.vscdb.
fn cursor() -> AgentDef {
    AgentDef::Settings(SettingsAgentDef {
        cmd: "cursor".to_string(),
        display_name: Some("Cursor".to_string()),
        cmd_aliases: None,
        targets: vec![
            SettingsTarget::Json(JsonTarget {
                scope: Scope::Global,
                file_path: "~/.cursor/cli-config.json".to_string(),
                merge: overlay(json!({
                    "permissions": {
                        "allow": ["Read(**)", "Write(**)", "Shell(**)"]
                    }
                })),
                description: Some("Cursor CLI permissions (~/.cursor/cli-config.json)".to_string()),
            }),
            SettingsTarget::Sqlite(SqliteTarget {
                scope: Scope::Global,
                db_path: "~/.config/Cursor/User/globalStorage/state.vscdb".to_string(),
                table: "ItemTable".to_string(),
                key: "src.vs.platform.reactivestorage.browser.reactiveStorageServiceImpl.persistentStorage.applicationUser".to_string(),
                merge_path: "composerState".to_string(),
                merge: Map::new(),
                array_field: "modes4".to_string(),
                record_patch: Some(RecordPatch {
                    id: "agent".to_string(),
                    set: overlay(json!({"autoRun": true, "fullAutoRun": true})),
                }),
                description: Some("Cursor agent auto-run (state.vscdb)".to_string()),
            }),
        ],
    })
}

/// All built-in agents, in display order.
pub fn builtin_agents() -> Vec<AgentDef> {
    vec![
        cli("claude", "Claude Code", "claude --dangerously-skip-permissions"),
        cli(
            "codex",
            "Codex CLI",
            "codex --dangerously-bypass-approvals-and-sandbox",
        ),
        AgentDef::Cli(CliAgentDef {
            cmd: "gemini".to_string(),
            display_name: Some("Gemini CLI".to_string()),
            lines: vec!["gemini --yolo".to_string()],
            cmd_aliases: Some(vec!["gemini-cli".to_string()]),
        }),
        cli("openhands", "OpenHands", "openhands --always-approve"),
        cli("aider", "Aider", "aider --yes-always"),
        cursor(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_have_unique_cmds() {
        let agents = builtin_agents();
        for (i, a) in agents.iter().enumerate() {
            for b in &agents[i + 1..] {
                assert_ne!(a.cmd(), b.cmd());
            }
        }
    }

    #[test]
    fn test_cli_builtins_have_lines() {
        for agent in builtin_agents() {
            if let AgentDef::Cli(def) = agent {
                assert!(!def.lines.is_empty(), "{} has no lines", def.cmd);
            }
        }
    }

    #[test]
    fn test_cursor_is_settings_based() {
        let agents = builtin_agents();
        let cursor = agents.iter().find(|a| a.cmd() == "cursor").unwrap();
        let AgentDef::Settings(def) = cursor else {
            panic!("cursor should be settings-based");
        };
        assert_eq!(def.targets.len(), 2);
        let SettingsTarget::Sqlite(store) = &def.targets[1] else {
            panic!("second cursor target should be the sqlite store");
        };
        assert_eq!(store.merge_path, "composerState");
        assert_eq!(store.array_field, "modes4");
        assert_eq!(store.record_patch.as_ref().unwrap().id, "agent");
    }

    #[test]
    fn test_gemini_alias() {
        let agents = builtin_agents();
        let gemini = agents.iter().find(|a| a.matches("gemini-cli")).unwrap();
        assert_eq!(gemini.cmd(), "gemini");
    }
}
