//! Launch an agent with its approval bypass in place.

use std::process::Command;

use colored::Colorize;

use crate::commands::apply_settings::apply_settings_agent;
use crate::registry::types::AgentDef;
use crate::registry::{agents_file, resolve_agent};
use crate::{Error, Result};

/// Spawn a whitespace-split command line with inherited stdio and return the
/// child's exit code. A spawn failure reports and maps to exit code 1 rather
/// than an error; the command line itself came from the catalogue, not us.
fn exec_line(line: &str, extra_args: &[String]) -> Result<i32> {
    let mut parts = line.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(Error::InvalidInput(format!("empty command line: {line:?}")));
    };
    match Command::new(program).args(parts).args(extra_args).status() {
        Ok(status) => Ok(status.code().unwrap_or(1)),
        Err(err) => {
            eprintln!("{}", format!("Failed to start: {err}").red());
            Ok(1)
        }
    }
}

/// Resolve and launch an agent; returns the exit code to propagate.
pub fn run_agent(cmd: &str, extra_args: &[String]) -> Result<i32> {
    let Some(agent) = resolve_agent(cmd, &agents_file())? else {
        return Err(Error::UnknownAgent(cmd.to_string()));
    };

    match &agent {
        AgentDef::Settings(def) => {
            // Reconcile settings first, then launch the agent's own command.
            apply_settings_agent(def)?;
            exec_line(&def.cmd, extra_args)
        }
        AgentDef::Cli(def) => {
            let Some(line) = def.lines.first() else {
                return Err(Error::InvalidInput(format!(
                    "agent \"{}\" has no command lines",
                    def.cmd
                )));
            };
            exec_line(line, extra_args)
        }
    }
}
