use crate::config::{
    default_screen_capture_settle_ms, default_settle_ms, default_video_poll_ms,
    default_write_settle_ms,
};

use serde::{Deserialize, Serialize};

/// Settle delays and polling intervals, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Pause after every external command.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    /// Pause after a preference write, before reading it back.
    #[serde(default = "default_write_settle_ms")]
    pub write_settle_ms: u64,
    /// Pause before a whole-screen capture.
    #[serde(default = "default_screen_capture_settle_ms")]
    pub screen_capture_settle_ms: u64,
    /// How often to check whether a video recording has started.
    #[serde(default = "default_video_poll_ms")]
    pub video_poll_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
            write_settle_ms: default_write_settle_ms(),
            screen_capture_settle_ms: default_screen_capture_settle_ms(),
            video_poll_ms: default_video_poll_ms(),
        }
    }
}
