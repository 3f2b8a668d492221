use crate::retry::RetryPolicy;

use std::time::Duration;

/// Settle delay after an ordinary gateway invocation.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(1000);

/// Settle delay after a preference write, before it is read back.
pub const DEFAULT_WRITE_SETTLE: Duration = Duration::from_millis(100);

/// Pause before a whole-screen capture so prior UI changes finish drawing.
pub const DEFAULT_SCREEN_CAPTURE_SETTLE: Duration = Duration::from_millis(2000);

/// How often the video backend checks whether recording has begun.
pub const DEFAULT_VIDEO_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Timing and retry tuning shared by every step a [`Runner`](crate::Runner) builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerSettings {
    /// Delay after each gateway invocation unless a step overrides it.
    pub settle: Duration,
    /// Delay after a preference write.
    pub write_settle: Duration,
    /// Delay before a whole-screen capture.
    pub screen_capture_settle: Duration,
    /// Readiness poll interval for the default video backend.
    pub video_poll_interval: Duration,
    /// Policy for verified preference writes.
    pub retry: RetryPolicy,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            settle: DEFAULT_SETTLE,
            write_settle: DEFAULT_WRITE_SETTLE,
            screen_capture_settle: DEFAULT_SCREEN_CAPTURE_SETTLE,
            video_poll_interval: DEFAULT_VIDEO_POLL_INTERVAL,
            retry: RetryPolicy::default(),
        }
    }
}
