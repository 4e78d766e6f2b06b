//! Common test utilities for bankai integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't touch the
//! user's real `~/.config/bankai/` directory.

#![allow(dead_code)]

use assert_cmd::Command;
pub use tempfile::TempDir;

/// A test environment with an isolated config directory.
///
/// The `bankai()` method returns a `Command` that sets `BANKAI_CONFIG_DIR`
/// per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub config_dir: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with isolated directories.
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the bankai binary with an isolated config dir.
    pub fn bankai(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_bankai"));
        cmd.env("BANKAI_CONFIG_DIR", self.config_dir.path());
        cmd.env("HOME", self.home_dir.path());
        cmd
    }

    /// Path to the custom agents file inside the isolated config dir.
    pub fn agents_file(&self) -> std::path::PathBuf {
        self.config_dir.path().join("agents.json")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
