//! Command implementations for the bankai CLI.
//!
//! Each module holds the business logic for one subcommand; argument
//! parsing lives in [`crate::cli`] and dispatch in `main.rs`.

pub mod add;
pub mod agents;
pub mod apply_settings;
pub mod edit;
pub mod print;
pub mod remove;
pub mod run;
pub mod select;
