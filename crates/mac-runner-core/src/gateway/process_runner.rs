use crate::{CoreError, CoreResult};

use std::{panic::Location, process::Stdio};

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Captured output channels of a finished external process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Everything the process wrote to standard output.
    pub stdout: String,
    /// Everything the process wrote to standard error.
    pub stderr: String,
}

impl ProcessOutput {
    /// Output with the given stdout and an empty error channel.
    pub fn stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Output with the given error channel content and no stdout.
    pub fn stderr(stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Runs a shell command string to completion and captures its output.
///
/// The seam between the automation core and the operating system. Tests swap
/// in a scripted implementation; production uses [`ShellRunner`].
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Execute `command` and wait for it to exit.
    async fn run(&self, command: &str) -> CoreResult<ProcessOutput>;
}

/// Executes commands through `sh -c` using `tokio::process`.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    /// Create a runner that invokes commands through `shell -c`.
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new("sh")
    }
}

#[async_trait]
impl ProcessRunner for ShellRunner {
    #[instrument(skip(self))]
    async fn run(&self, command: &str) -> CoreResult<ProcessOutput> {
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| CoreError::Spawn {
                command: command.to_string(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(status = ?output.status, "Process exited");

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
