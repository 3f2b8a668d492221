use std::{path::PathBuf, time::Instant};

use uuid::Uuid;

/// Lifecycle of a screen recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureSession {
    /// No recording in progress.
    Idle,
    /// A recording is being written.
    Recording {
        /// Unique session ID for log correlation.
        session_id: Uuid,
        /// When recording started.
        started_at: Instant,
        /// Temporary file the backend writes frames into.
        artifact: PathBuf,
    },
}

impl CaptureSession {
    /// Whether a recording is in progress.
    pub fn is_recording(&self) -> bool {
        matches!(self, CaptureSession::Recording { .. })
    }
}
