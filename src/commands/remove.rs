//! Remove a custom agent.

use colored::Colorize;

use crate::Result;
use crate::registry::{agents_file, remove_agent};

pub fn remove_agent_command(cmd: &str) -> Result<()> {
    remove_agent(cmd, &agents_file())?;
    println!("{}", format!("Removed agent \"{cmd}\".").green());
    Ok(())
}
