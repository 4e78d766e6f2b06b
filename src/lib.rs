//! Bankai - a launcher for coding agent CLIs that skips approval prompts.
//!
//! This library provides the core functionality for the `bankai` CLI tool:
//! an agent registry (built-in and user-registered agents), detection of
//! installed agent executables, and the settings-reconciliation engine that
//! applies persistent configuration edits for agents that use settings files
//! instead of command-line flags.

pub mod cli;
pub mod commands;
pub mod detect;
pub mod format;
pub mod registry;
pub mod settings;

/// Library-level error type for bankai operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Database not found: {}", .0.display())]
    StoreNotFound(std::path::PathBuf),

    #[error("Unsupported agent: \"{0}\". Run `bankai agents` to see available agents, or `bankai add` to register a custom one")]
    UnknownAgent(String),

    #[error("Agent \"{0}\" already exists. Use `bankai edit` to update it")]
    AgentExists(String),

    #[error("Custom agent \"{0}\" not found")]
    AgentNotFound(String),

    #[error("\"{0}\" is a built-in agent. Use `bankai add` to create a custom override")]
    BuiltinAgent(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for bankai operations.
pub type Result<T> = std::result::Result<T, Error>;
