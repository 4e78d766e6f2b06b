//! Persistence for user-registered custom agents.
//!
//! Custom agents live in a JSON array at `<config dir>/agents.json`.
//! The config directory defaults to the platform config dir plus `bankai`;
//! `BANKAI_CONFIG_DIR` overrides it, which keeps integration tests isolated
//! from the user's real configuration.

use std::fs;
use std::path::{Path, PathBuf};

use crate::registry::types::CliAgentDef;
use crate::{Error, Result};

/// Directory holding bankai's own configuration.
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("BANKAI_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bankai")
}

/// Path to the custom agents file.
pub fn agents_file() -> PathBuf {
    config_dir().join("agents.json")
}

/// Load custom agents; an absent file means an empty registry.
pub fn load_custom_agents(path: &Path) -> Result<Vec<CliAgentDef>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Write the custom agents file, creating its directory if needed.
pub fn save_custom_agents(agents: &[CliAgentDef], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut out = serde_json::to_string_pretty(agents)?;
    out.push('\n');
    fs::write(path, out)?;
    Ok(())
}

/// Register a new custom agent. Duplicate command names are rejected.
pub fn add_agent(agent: CliAgentDef, path: &Path) -> Result<()> {
    let mut agents = load_custom_agents(path)?;
    if agents.iter().any(|a| a.cmd == agent.cmd) {
        return Err(Error::AgentExists(agent.cmd));
    }
    agents.push(agent);
    save_custom_agents(&agents, path)
}

/// Replacement fields for an existing custom agent.
///
/// `display_name` and `cmd_aliases` are replaced outright; `None` clears
/// them.
#[derive(Debug, Clone)]
pub struct AgentUpdate {
    pub display_name: Option<String>,
    pub lines: Vec<String>,
    pub cmd_aliases: Option<Vec<String>>,
}

/// Update an existing custom agent in place.
pub fn update_agent(cmd: &str, update: AgentUpdate, path: &Path) -> Result<()> {
    let mut agents = load_custom_agents(path)?;
    let Some(agent) = agents.iter_mut().find(|a| a.cmd == cmd) else {
        return Err(Error::AgentNotFound(cmd.to_string()));
    };
    agent.display_name = update.display_name;
    agent.lines = update.lines;
    agent.cmd_aliases = update.cmd_aliases;
    save_custom_agents(&agents, path)
}

/// Remove a custom agent by command name.
pub fn remove_agent(cmd: &str, path: &Path) -> Result<()> {
    let agents = load_custom_agents(path)?;
    let before = agents.len();
    let filtered: Vec<CliAgentDef> = agents.into_iter().filter(|a| a.cmd != cmd).collect();
    if filtered.len() == before {
        return Err(Error::AgentNotFound(cmd.to_string()));
    }
    save_custom_agents(&filtered, path)
}
