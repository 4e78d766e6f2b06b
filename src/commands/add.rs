//! Register a custom agent, from flags or interactively.

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::registry::types::CliAgentDef;
use crate::registry::{add_agent, agents_file};
use crate::{Error, Result};

#[derive(Debug, Default)]
pub struct AddOpts {
    pub cmd: Option<String>,
    pub lines: Vec<String>,
    pub display_name: Option<String>,
    pub aliases: Vec<String>,
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

pub fn add_agent_command(opts: AddOpts) -> Result<()> {
    let theme = ColorfulTheme::default();
    let (cmd, lines, display_name, aliases) = match opts.cmd {
        Some(cmd) => (cmd, opts.lines, opts.display_name, opts.aliases),
        // Interactive mode when --cmd is not provided.
        None => {
            let cmd: String = Input::with_theme(&theme)
                .with_prompt("Command name (e.g. myagent)")
                .interact_text()?;
            let display_name: String = Input::with_theme(&theme)
                .with_prompt("Display name (optional, press Enter to skip)")
                .allow_empty(true)
                .interact_text()?;
            let lines_raw: String = Input::with_theme(&theme)
                .with_prompt("Bypass command(s), comma-separated")
                .interact_text()?;
            let aliases_raw: String = Input::with_theme(&theme)
                .with_prompt("Aliases, comma-separated (optional, press Enter to skip)")
                .allow_empty(true)
                .interact_text()?;
            let display_name = (!display_name.is_empty()).then_some(display_name);
            (cmd, split_list(&lines_raw), display_name, split_list(&aliases_raw))
        }
    };

    if lines.is_empty() {
        return Err(Error::InvalidInput(
            "at least one --line is required".to_string(),
        ));
    }

    let agent = CliAgentDef {
        cmd: cmd.clone(),
        display_name,
        lines,
        cmd_aliases: (!aliases.is_empty()).then_some(aliases),
    };

    add_agent(agent, &agents_file())?;
    println!("{}", format!("Added custom agent \"{cmd}\".").green());
    Ok(())
}
