//! Command execution
//!
//! Runs an external program to completion and captures what it printed.
//! The executor is a trait so the control surface can be exercised against
//! canned outputs instead of real processes.

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{ClientError, Result};

/// Exit status and captured streams of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, or -1 when the process was killed by a signal
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Short diagnostic: stderr if there is any, otherwise stdout
    pub fn summary(&self) -> &str {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr;
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout;
        }
        "<no output>"
    }
}

/// Runs external programs
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Runs `program` with `args` and waits for it to exit
    ///
    /// A non-zero exit is not an error at this level; it is reported through
    /// [`CommandOutput::exit_code`]. Errors are reserved for programs that
    /// could not be started.
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput>;
}

/// Executor spawning real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExecutor;

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        let output = Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| ClientError::Spawn {
                program: program.to_string(),
                source,
            })?;

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[tokio::test]
    async fn test_captures_streams_and_exit_code() {
        let output = ProcessExecutor
            .run("sh", &sh("echo out; echo err >&2; exit 3"))
            .await
            .unwrap();

        assert_eq!(output.exit_code, 3);
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
        assert!(!output.success());
        assert_eq!(output.summary(), "err");
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let err = ProcessExecutor
            .run("ferry-test-no-such-program", &[])
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Spawn { .. }));
    }

    #[test]
    fn test_summary_falls_back_to_stdout() {
        let output = CommandOutput {
            exit_code: 1,
            stdout: " usage: fts-transfer-status\n".to_string(),
            stderr: "  \n".to_string(),
        };
        assert_eq!(output.summary(), "usage: fts-transfer-status");

        let silent = CommandOutput {
            exit_code: 1,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert_eq!(silent.summary(), "<no output>");
    }
}
