//! Print the bypass command line for one agent.

use crate::format::format_output;
use crate::registry::{agents_file, resolve_agent};
use crate::{Error, Result};

pub fn print_agent(cmd: &str) -> Result<()> {
    let Some(agent) = resolve_agent(cmd, &agents_file())? else {
        return Err(Error::UnknownAgent(cmd.to_string()));
    };
    println!("{}", format_output(&agent));
    Ok(())
}
