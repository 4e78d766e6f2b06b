//! Agent resolution: custom definitions layered over builtins.

use std::path::Path;

use crate::Result;
use crate::registry::builtin::builtin_agents;
use crate::registry::custom::load_custom_agents;
use crate::registry::types::AgentDef;

/// Resolve an agent by command name or alias.
///
/// Custom agents win over builtins so a user can override a built-in
/// definition by registering the same command name.
pub fn resolve_agent(cmd: &str, custom_path: &Path) -> Result<Option<AgentDef>> {
    let custom = load_custom_agents(custom_path)?;
    for agent in custom {
        let agent = AgentDef::Cli(agent);
        if agent.matches(cmd) {
            return Ok(Some(agent));
        }
    }
    Ok(builtin_agents().into_iter().find(|a| a.matches(cmd)))
}

/// Resolve the full catalogue: builtins first, with custom definitions
/// replacing a builtin of the same command name in place and new custom
/// agents appended.
pub fn resolve_all(custom_path: &Path) -> Result<Vec<AgentDef>> {
    let mut agents = builtin_agents();
    for custom in load_custom_agents(custom_path)? {
        let custom = AgentDef::Cli(custom);
        match agents.iter_mut().find(|a| a.cmd() == custom.cmd()) {
            Some(slot) => *slot = custom,
            None => agents.push(custom),
        }
    }
    Ok(agents)
}
