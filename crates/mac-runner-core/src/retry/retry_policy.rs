use crate::{CoreError, CoreResult};

use std::{future::Future, panic::Location, time::Duration};

use error_location::ErrorLocation;
use tracing::{debug, instrument, warn};

/// Attempt budget for verified writes.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Bounded retry-until-verified policy.
///
/// Each attempt performs a write followed by a readback. The policy stops as
/// soon as the readback satisfies the caller's predicate. Errors raised by an
/// individual attempt are logged and the next attempt starts; only running
/// out of attempts fails the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of write+read attempts.
    pub max_attempts: u32,
    /// Pause between an unsuccessful attempt and the next one.
    pub attempt_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            attempt_delay: Duration::ZERO,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with an explicit budget and inter-attempt delay.
    pub fn new(max_attempts: u32, attempt_delay: Duration) -> Self {
        Self {
            max_attempts,
            attempt_delay,
        }
    }

    /// Run `write` then `read` until `matches(readback)` holds.
    ///
    /// Returns the 1-based attempt number that verified the write.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RetryExhausted`] naming `command` once every
    /// attempt has been used without a matching readback.
    #[instrument(skip(self, write, read, matches), fields(max_attempts = self.max_attempts))]
    pub async fn verify<W, WFut, R, RFut, M>(
        &self,
        command: &str,
        mut write: W,
        mut read: R,
        matches: M,
    ) -> CoreResult<u32>
    where
        W: FnMut() -> WFut,
        WFut: Future<Output = CoreResult<()>>,
        R: FnMut() -> RFut,
        RFut: Future<Output = CoreResult<String>>,
        M: Fn(&str) -> bool,
    {
        for attempt in 1..=self.max_attempts {
            let outcome = match write().await {
                Ok(()) => read().await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(readback) if matches(&readback) => {
                    debug!(attempt, "Readback verified");
                    return Ok(attempt);
                }
                Ok(readback) => {
                    debug!(attempt, readback = %readback.trim(), "Readback did not match");
                }
                Err(e) => {
                    warn!(attempt, error = %e, "Attempt failed, retrying");
                }
            }

            if attempt < self.max_attempts && !self.attempt_delay.is_zero() {
                tokio::time::sleep(self.attempt_delay).await;
            }
        }

        Err(CoreError::RetryExhausted {
            command: command.to_string(),
            attempts: self.max_attempts,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Compare a readback with the expected value, ignoring surrounding whitespace.
pub fn trimmed_eq(readback: &str, expected: &str) -> bool {
    readback.trim() == expected.trim()
}
