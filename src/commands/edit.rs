//! Interactively edit an existing custom agent.

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::registry::{AgentUpdate, agents_file, load_custom_agents, resolve_agent, update_agent};
use crate::{Error, Result};

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

pub fn edit_agent_command(cmd: &str) -> Result<()> {
    let path = agents_file();
    let custom = load_custom_agents(&path)?;
    let Some(existing) = custom.iter().find(|a| a.cmd == cmd) else {
        // Distinguish "that's a builtin" from "never heard of it".
        if resolve_agent(cmd, &path)?.is_some() {
            return Err(Error::BuiltinAgent(cmd.to_string()));
        }
        return Err(Error::AgentNotFound(cmd.to_string()));
    };

    let theme = ColorfulTheme::default();
    let display_name: String = Input::with_theme(&theme)
        .with_prompt("Display name")
        .default(existing.display_name.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    let lines_raw: String = Input::with_theme(&theme)
        .with_prompt("Bypass command(s), comma-separated")
        .default(existing.lines.join(", "))
        .interact_text()?;
    let aliases_raw: String = Input::with_theme(&theme)
        .with_prompt("Aliases, comma-separated")
        .default(
            existing
                .cmd_aliases
                .as_ref()
                .map(|a| a.join(", "))
                .unwrap_or_default(),
        )
        .allow_empty(true)
        .interact_text()?;

    let aliases = split_list(&aliases_raw);
    update_agent(
        cmd,
        AgentUpdate {
            display_name: (!display_name.is_empty()).then_some(display_name),
            lines: split_list(&lines_raw),
            cmd_aliases: (!aliases.is_empty()).then_some(aliases),
        },
        &path,
    )?;
    println!("{}", format!("Updated agent \"{cmd}\".").green());
    Ok(())
}
