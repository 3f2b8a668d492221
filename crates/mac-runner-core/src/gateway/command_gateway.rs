//! External command gateway.
//!
//! Every automation step that touches the operating system goes through
//! [`Gateway::exec`], which owns two policies: the error channel decides
//! success, and a settle delay follows every successful invocation.

use crate::{CoreError, CoreResult, gateway::ProcessRunner};

use std::{panic::Location, sync::Arc, time::Duration};

use error_location::ErrorLocation;
use tracing::{info, instrument};

/// Invokes external processes and interprets their output channels.
#[derive(Clone)]
pub struct Gateway {
    runner: Arc<dyn ProcessRunner>,
    default_settle: Duration,
}

impl Gateway {
    /// Create a gateway over `runner` with the given default settle delay.
    pub fn new(runner: Arc<dyn ProcessRunner>, default_settle: Duration) -> Self {
        Self {
            runner,
            default_settle,
        }
    }

    /// Settle delay applied by [`Gateway::exec_default`].
    pub fn default_settle(&self) -> Duration {
        self.default_settle
    }

    /// Run `command`, then sleep for `settle` before yielding its stdout.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::CommandFailed`] if the process wrote anything to
    /// its error channel, whatever its exit status was.
    #[instrument(skip(self))]
    pub async fn exec(&self, command: &str, settle: Duration) -> CoreResult<String> {
        info!(command, "Command");

        let output = self.runner.run(command).await?;

        let stderr = output.stderr.trim();
        if !stderr.is_empty() {
            return Err(CoreError::CommandFailed {
                command: command.to_string(),
                stderr: stderr.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !settle.is_zero() {
            tokio::time::sleep(settle).await;
        }

        Ok(output.stdout)
    }

    /// [`Gateway::exec`] with the default settle delay.
    pub async fn exec_default(&self, command: &str) -> CoreResult<String> {
        self.exec(command, self.default_settle).await
    }
}

impl std::fmt::Debug for Gateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gateway")
            .field("default_settle", &self.default_settle)
            .finish_non_exhaustive()
    }
}
