//! Detection of installed agent executables.

use std::process::{Command, Stdio};

use crate::registry::types::AgentDef;

/// Check whether a command resolves on PATH.
pub fn is_installed(cmd: &str) -> bool {
    Command::new("sh")
        .arg("-c")
        .arg(format!("command -v {cmd}"))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Keep only agents whose primary command is installed.
pub fn filter_installed(agents: Vec<AgentDef>) -> Vec<AgentDef> {
    agents
        .into_iter()
        .filter(|agent| is_installed(agent.cmd()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::types::CliAgentDef;

    #[test]
    fn test_is_installed_finds_sh() {
        assert!(is_installed("sh"));
    }

    #[test]
    fn test_is_installed_rejects_nonsense() {
        assert!(!is_installed("definitely-not-a-real-command-42"));
    }

    #[test]
    fn test_filter_installed() {
        let agents = vec![
            AgentDef::Cli(CliAgentDef {
                cmd: "sh".to_string(),
                display_name: None,
                lines: vec!["sh".to_string()],
                cmd_aliases: None,
            }),
            AgentDef::Cli(CliAgentDef {
                cmd: "definitely-not-a-real-command-42".to_string(),
                display_name: None,
                lines: vec!["x".to_string()],
                cmd_aliases: None,
            }),
        ];
        let installed = filter_installed(agents);
        assert_eq!(installed.len(), 1);
        assert_eq!(installed[0].cmd(), "sh");
    }
}
