//! Agent registry: built-in catalogue plus user-registered custom agents.
//!
//! Resolution order: custom agents (by command name or alias) win over
//! builtins, so users can override a built-in definition by registering the
//! same command name with `bankai add`.

pub mod builtin;
pub mod custom;
pub mod resolve;
pub mod types;

pub use builtin::builtin_agents;
pub use custom::{
    AgentUpdate, add_agent, agents_file, config_dir, load_custom_agents, remove_agent,
    save_custom_agents, update_agent,
};
pub use resolve::{resolve_agent, resolve_all};
pub use types::{AgentDef, CliAgentDef, SettingsAgentDef};
