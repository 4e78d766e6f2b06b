//! Terminal output formatting for agent definitions.

use colored::Colorize;

use crate::registry::types::AgentDef;

/// Format an agent for printing: a bold cyan header followed by its bypass
/// command lines, or its settings target labels for settings-based agents.
pub fn format_output(agent: &AgentDef) -> String {
    let header = format!("# {}", agent.name()).cyan().bold().to_string();
    match agent {
        AgentDef::Cli(def) => {
            let lines = def
                .lines
                .iter()
                .map(|line| line.green().to_string())
                .collect::<Vec<_>>()
                .join("\n");
            format!("{header}\n{lines}")
        }
        AgentDef::Settings(def) => {
            let targets = def
                .targets
                .iter()
                .map(|t| t.label())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{header}\n{}", format!("[settings: {targets}]").magenta())
        }
    }
}
