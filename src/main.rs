//! Bankai CLI - print approval-bypass startup commands for coding agent CLIs.

use bankai::cli::{Cli, Commands};
use bankai::commands;
use bankai::commands::add::AddOpts;
use clap::Parser;
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();
    match run_command(cli) {
        Ok(code) => {
            if code != 0 {
                process::exit(code);
            }
        }
        Err(err) => {
            eprintln!("{}", format!("Error: {err}").red());
            process::exit(1);
        }
    }
}

fn run_command(cli: Cli) -> bankai::Result<i32> {
    match cli.command {
        Some(Commands::Agents { installed }) => {
            commands::agents::list_agents(installed)?;
            Ok(0)
        }
        Some(Commands::Add {
            cmd,
            lines,
            display_name,
            aliases,
        }) => {
            commands::add::add_agent_command(AddOpts {
                cmd,
                lines,
                display_name,
                aliases,
            })?;
            Ok(0)
        }
        Some(Commands::Edit { cmd }) => {
            commands::edit::edit_agent_command(&cmd)?;
            Ok(0)
        }
        Some(Commands::Remove { cmd }) => {
            commands::remove::remove_agent_command(&cmd)?;
            Ok(0)
        }
        Some(Commands::Run { cmd, args }) => commands::run::run_agent(&cmd, &args),
        None => match cli.cmd.or(cli.agent) {
            Some(cmd) => {
                commands::print::print_agent(&cmd)?;
                Ok(0)
            }
            None => {
                commands::select::select_agent()?;
                Ok(0)
            }
        },
    }
}
