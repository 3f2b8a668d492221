use crate::config::default_max_attempts;

use serde::{Deserialize, Serialize};

/// Verified preference write retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Write+read attempts before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Pause between failed attempts, in milliseconds.
    #[serde(default)]
    pub attempt_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            attempt_delay_ms: 0,
        }
    }
}
