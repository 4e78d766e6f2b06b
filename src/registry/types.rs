//! Agent definition types.
//!
//! An agent is either direct-invocation (one or more ready-to-run bypass
//! command lines) or settings-based (a set of settings targets reconciled
//! before the agent's own command runs). Custom agents registered by the
//! user are direct-invocation only, for backward compatibility with the
//! on-disk `agents.json` schema.

use serde::{Deserialize, Serialize};

use crate::settings::SettingsTarget;

/// A direct-invocation agent: ready-to-run approval-bypass command lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliAgentDef {
    /// Primary command name (e.g. "claude").
    pub cmd: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Bypass command lines; the first is executed by `bankai run`.
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd_aliases: Option<Vec<String>>,
}

/// A settings-based agent: targets to reconcile instead of CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsAgentDef {
    pub cmd: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmd_aliases: Option<Vec<String>>,
    /// Settings targets that must be reconciled for bypass to take effect.
    pub targets: Vec<SettingsTarget>,
}

impl SettingsAgentDef {
    /// Display name, falling back to the command name.
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.cmd)
    }
}

/// Discriminated union over the two agent behaviors.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentDef {
    Cli(CliAgentDef),
    Settings(SettingsAgentDef),
}

impl AgentDef {
    /// Primary command name.
    pub fn cmd(&self) -> &str {
        match self {
            AgentDef::Cli(def) => &def.cmd,
            AgentDef::Settings(def) => &def.cmd,
        }
    }

    /// Display name, falling back to the command name.
    pub fn name(&self) -> &str {
        let display = match self {
            AgentDef::Cli(def) => def.display_name.as_deref(),
            AgentDef::Settings(def) => def.display_name.as_deref(),
        };
        display.unwrap_or_else(|| self.cmd())
    }

    /// Alternate command names.
    pub fn aliases(&self) -> &[String] {
        let aliases = match self {
            AgentDef::Cli(def) => def.cmd_aliases.as_deref(),
            AgentDef::Settings(def) => def.cmd_aliases.as_deref(),
        };
        aliases.unwrap_or_default()
    }

    /// Whether this agent answers to the given command name or alias.
    pub fn matches(&self, cmd: &str) -> bool {
        self.cmd() == cmd || self.aliases().iter().any(|a| a == cmd)
    }
}
