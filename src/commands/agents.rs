//! List the agent catalogue.

use colored::Colorize;

use crate::Result;
use crate::detect::filter_installed;
use crate::registry::types::AgentDef;
use crate::registry::{agents_file, resolve_all};

pub fn list_agents(installed_only: bool) -> Result<()> {
    let mut agents = resolve_all(&agents_file())?;

    if installed_only {
        agents = filter_installed(agents);
        if agents.is_empty() {
            println!(
                "{}",
                "No supported agents detected on this system.".yellow()
            );
            return Ok(());
        }
    }

    for agent in &agents {
        let name = if agent.name() != agent.cmd() {
            format!(
                "{} {}",
                agent.cmd().bold(),
                format!("({})", agent.name()).dimmed()
            )
        } else {
            agent.cmd().bold().to_string()
        };

        match agent {
            AgentDef::Settings(def) => {
                let targets = def
                    .targets
                    .iter()
                    .map(|t| t.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!(
                    "  {name}  ->  {}",
                    format!("[settings: {targets}]").magenta()
                );
            }
            AgentDef::Cli(def) => {
                let lines = def
                    .lines
                    .iter()
                    .map(|line| line.green().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("  {name}  ->  {lines}");
            }
        }
    }
    Ok(())
}
