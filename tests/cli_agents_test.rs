//! Integration tests for the agents listing command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_agents_lists_builtins() {
    let env = TestEnv::new();
    env.bankai()
        .arg("agents")
        .assert()
        .success()
        .stdout(predicate::str::contains("claude"))
        .stdout(predicate::str::contains("codex"))
        .stdout(predicate::str::contains("gemini --yolo"))
        .stdout(predicate::str::contains("cursor"));
}

#[test]
fn test_agents_installed_with_empty_path() {
    let env = TestEnv::new();
    // An empty PATH means no agent executables can be found.
    env.bankai()
        .args(["agents", "--installed"])
        .env("PATH", env.home_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No supported agents detected on this system.",
        ));
}

#[test]
fn test_agents_includes_custom_agent() {
    let env = TestEnv::new();
    env.bankai()
        .args(["add", "--cmd", "myagent", "--line", "myagent --force"])
        .assert()
        .success();

    env.bankai()
        .arg("agents")
        .assert()
        .success()
        .stdout(predicate::str::contains("myagent"))
        .stdout(predicate::str::contains("myagent --force"));
}
