//! CLI argument definitions for bankai.

use clap::{Parser, Subcommand};

/// Bankai - print approval-bypass startup commands for coding agent CLIs.
///
/// With an agent name, prints that agent's bypass command line. With no
/// arguments, offers an interactive selection of detected agents.
#[derive(Parser, Debug)]
#[command(name = "bankai")]
#[command(author, version, about = "Print approval-bypass startup commands for coding agent CLIs", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Agent command to look up
    pub cmd: Option<String>,

    /// Agent command to look up (alternative to the positional form)
    #[arg(short = 'a', long = "agent")]
    pub agent: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all supported agents
    Agents {
        /// Only show agents detected on this system
        #[arg(long)]
        installed: bool,
    },

    /// Register a custom agent
    Add {
        /// Command name
        #[arg(long)]
        cmd: Option<String>,

        /// Bypass command line(s)
        #[arg(long = "line")]
        lines: Vec<String>,

        /// Display name
        #[arg(long)]
        display_name: Option<String>,

        /// Command aliases
        #[arg(long = "alias")]
        aliases: Vec<String>,
    },

    /// Edit an existing custom agent
    Edit {
        /// Command name of the custom agent
        cmd: String,
    },

    /// Remove a custom agent
    Remove {
        /// Command name of the custom agent
        cmd: String,
    },

    /// Launch an agent with its approval bypass in place
    Run {
        /// Agent command to launch
        cmd: String,

        /// Extra arguments appended to the agent's command line
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}
