//! mac-runner Core Library
//!
//! Builds and runs ordered macOS automation pipelines: application and
//! window control, verified preference writes, screenshots and screen
//! recordings.
//!
//! # Example
//!
//! ```no_run
//! use mac_runner_core::{CoreResult, Runner, RunnerSettings};
//!
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> CoreResult<()> {
//!     let runner = Runner::new(RunnerSettings::default());
//!
//!     runner
//!         .set_default("com.apple.dock", "autohide", "-bool true", "1")
//!         .kill_app("Dock")
//!         .open_app("Finder", "")
//!         .wait(Duration::from_millis(500))
//!         .capture_screen("out.png");
//!
//!     runner.run().await
//! }
//! ```

mod capture;
mod error;
mod gateway;
mod pipeline;
mod retry;
mod screen;

pub use {
    capture::{CaptureSession, FfmpegBackend, VideoBackend, VideoOptions},
    error::CoreError,
    error::Result as CoreResult,
    gateway::{Gateway, ProcessOutput, ProcessRunner, ShellRunner},
    pipeline::{
        DEFAULT_SCREEN_CAPTURE_SETTLE, DEFAULT_SETTLE, DEFAULT_VIDEO_POLL_INTERVAL,
        DEFAULT_WRITE_SETTLE, Runner, RunnerSettings,
    },
    retry::{DEFAULT_MAX_ATTEMPTS, RetryPolicy, trimmed_eq},
    screen::{DOCK_HEIGHT, MENU_BAR_HEIGHT, Rect, ScreenSize, screen_size, usable_area},
};

#[cfg(test)]
mod tests;
