use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Automation errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// An external command wrote to its error channel.
    ///
    /// The error channel is authoritative: this is raised even when the
    /// process exited with status zero.
    #[error("Command [{command}] failed: {stderr} {location}")]
    CommandFailed {
        /// The shell command that was executed.
        command: String,
        /// Trimmed content of the error channel.
        stderr: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The external process could not be spawned or awaited.
    #[error("Failed to execute [{command}]: {source} {location}")]
    Spawn {
        /// The shell command that was executed.
        command: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A verified write never read back the expected value.
    #[error("[{command}] failed after {attempts} attempts {location}")]
    RetryExhausted {
        /// The write command that was retried.
        command: String,
        /// Number of attempts performed.
        attempts: u32,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Moving a captured video artifact to its destination failed.
    #[error("Failed to move {from:?} to {to:?}: {source} {location}")]
    FileReplacement {
        /// Temporary artifact produced by the capture backend.
        from: PathBuf,
        /// Caller-specified destination.
        to: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The video capture backend failed.
    #[error("Video backend error: {reason} {location}")]
    VideoBackend {
        /// Description of the backend failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Screen geometry could not be queried.
    #[error("Screen unavailable: {reason} {location}")]
    ScreenUnavailable {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
