//! Interactive flow for applying a settings-based agent's targets.
//!
//! Shows per-target applied status, lets the user pick an unapplied target
//! (or takes the only one), confirms, then applies. The applied-check is
//! presented to the user before the apply; the window between check and
//! apply is an accepted race, mitigated by that confirmation.

use colored::Colorize;
use dialoguer::{Confirm, Select, theme::ColorfulTheme};

use crate::Result;
use crate::registry::types::SettingsAgentDef;
use crate::settings::{self, SettingsTarget};

pub fn apply_settings_agent(agent: &SettingsAgentDef) -> Result<()> {
    println!("{}", format!("# {}", agent.name()).cyan().bold());
    println!(
        "{}\n",
        "This agent uses settings files instead of CLI flags.".dimmed()
    );

    let statuses: Vec<(&SettingsTarget, bool)> = agent
        .targets
        .iter()
        .map(|target| (target, settings::is_already_applied(target)))
        .collect();

    if statuses.iter().all(|(_, applied)| *applied) {
        println!("{}", "All settings are already applied:".green());
        for (target, _) in &statuses {
            println!("{}", format!("  * {}", target.label()).green());
        }
        return Ok(());
    }

    for (target, applied) in &statuses {
        if *applied {
            println!(
                "{}",
                format!("  * {} (already applied)", target.label()).green()
            );
        } else {
            println!(
                "{}",
                format!("  o {} (not applied)", target.label()).yellow()
            );
        }
    }
    println!();

    let unapplied: Vec<&SettingsTarget> = statuses
        .iter()
        .filter(|(_, applied)| !applied)
        .map(|(target, _)| *target)
        .collect();

    let theme = ColorfulTheme::default();
    let target = if unapplied.len() == 1 {
        unapplied[0]
    } else {
        let items: Vec<&str> = unapplied.iter().map(|t| t.label()).collect();
        let chosen = Select::with_theme(&theme)
            .with_prompt("Select a target to apply")
            .items(&items)
            .default(0)
            .interact()?;
        unapplied[chosen]
    };

    let confirmed = Confirm::with_theme(&theme)
        .with_prompt(format!("Apply settings to {}?", target.label()))
        .default(true)
        .interact()?;
    if !confirmed {
        println!("{}", "Cancelled.".dimmed());
        return Ok(());
    }

    settings::apply(target)?;
    println!(
        "{}",
        format!("\nApplied settings to {}", target.label()).green()
    );

    if matches!(target, SettingsTarget::Sqlite(_)) {
        println!(
            "{}",
            "\nRestart the application for changes to take effect.".yellow()
        );
    }
    Ok(())
}
