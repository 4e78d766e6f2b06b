//! Interactive agent selection when no agent name is given.

use colored::Colorize;
use dialoguer::{Select, theme::ColorfulTheme};

use crate::Result;
use crate::detect::filter_installed;
use crate::format::format_output;
use crate::registry::{agents_file, resolve_all};

pub fn select_agent() -> Result<()> {
    let all = resolve_all(&agents_file())?;
    let installed = filter_installed(all.clone());

    let (agents, label) = if installed.is_empty() {
        (all, "No agents detected, showing all supported agents")
    } else {
        (installed, "Detected agents on this system")
    };

    println!("{}", label.dimmed());

    let items: Vec<&str> = agents.iter().map(|a| a.name()).collect();
    let chosen = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select an agent")
        .items(&items)
        .default(0)
        .interact()?;

    println!();
    println!("{}", format_output(&agents[chosen]));
    Ok(())
}
