//! Screen recording through ffmpeg's avfoundation input.
//!
//! ffmpeg writes into a temporary `.mp4`. Recording counts as started once
//! that file has content, and is stopped by sending `q` on stdin so the
//! container is finalized. ffmpeg runs with `-loglevel error`; its stderr is
//! only read when it exits before recording starts.

use crate::{
    CoreError, CoreResult,
    capture::{CaptureSession, VideoBackend, VideoOptions},
};

use std::{
    panic::Location,
    path::{Path, PathBuf},
    process::Stdio,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    process::{Child, Command},
};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// [`VideoBackend`] driving an `ffmpeg` child process.
#[derive(Debug)]
pub struct FfmpegBackend {
    program: PathBuf,
    poll_interval: Duration,
    session: CaptureSession,
    child: Option<Child>,
}

impl FfmpegBackend {
    /// Create a backend running `program`, polling readiness every `poll_interval`.
    pub fn new(program: impl Into<PathBuf>, poll_interval: Duration) -> Self {
        Self {
            program: program.into(),
            poll_interval,
            session: CaptureSession::Idle,
            child: None,
        }
    }

    /// Current recording state.
    pub fn session(&self) -> &CaptureSession {
        &self.session
    }

    /// ffmpeg arguments recording `options` into `artifact`.
    pub fn arguments(options: &VideoOptions, artifact: &Path) -> Vec<String> {
        let mut args = vec![
            "-y".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-f".to_string(),
            "avfoundation".to_string(),
            "-framerate".to_string(),
            options.fps.to_string(),
            "-capture_cursor".to_string(),
            u8::from(options.show_cursor).to_string(),
            "-capture_mouse_clicks".to_string(),
            u8::from(options.highlight_clicks).to_string(),
            "-i".to_string(),
            format!("{}:none", options.screen),
        ];

        if let Some(area) = options.crop_area {
            args.push("-vf".to_string());
            args.push(format!(
                "crop={}:{}:{}:{}",
                area.width, area.height, area.x, area.y
            ));
        }

        args.push("-pix_fmt".to_string());
        args.push("yuv420p".to_string());
        args.push(artifact.display().to_string());

        args
    }

    /// Whatever an exited child wrote to stderr, trimmed.
    async fn drain_stderr(child: &mut Child) -> String {
        let Some(mut stderr) = child.stderr.take() else {
            return String::new();
        };

        let mut output = Vec::new();
        if let Err(e) = stderr.read_to_end(&mut output).await {
            warn!(error = %e, "Failed to read ffmpeg stderr");
        }
        String::from_utf8_lossy(&output).trim().to_string()
    }

    #[track_caller]
    fn backend_error(reason: impl Into<String>) -> CoreError {
        CoreError::VideoBackend {
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
impl VideoBackend for FfmpegBackend {
    #[instrument(skip(self))]
    async fn start(&mut self, options: &VideoOptions) -> CoreResult<()> {
        if self.session.is_recording() {
            return Err(Self::backend_error("a recording is already in progress"));
        }

        let session_id = Uuid::new_v4();
        let artifact = std::env::temp_dir().join(format!("mac-runner-{session_id}.mp4"));

        let child = Command::new(&self.program)
            .args(Self::arguments(options, &artifact))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Self::backend_error(format!("Failed to spawn {:?}: {}", self.program, e)))?;

        info!(session_id = %session_id, artifact = ?artifact, "Video recording started");

        self.child = Some(child);
        self.session = CaptureSession::Recording {
            session_id,
            started_at: Instant::now(),
            artifact,
        };

        Ok(())
    }

    #[instrument(skip(self))]
    async fn wait_until_ready(&mut self) -> CoreResult<()> {
        let CaptureSession::Recording { artifact, .. } = &self.session else {
            return Err(Self::backend_error("no active recording"));
        };
        let artifact = artifact.clone();

        loop {
            if let Ok(metadata) = tokio::fs::metadata(&artifact).await
                && metadata.len() > 0
            {
                debug!(artifact = ?artifact, "Video file ready");
                return Ok(());
            }

            if let Some(child) = self.child.as_mut()
                && let Ok(Some(status)) = child.try_wait()
            {
                let stderr = Self::drain_stderr(child).await;
                self.child = None;
                self.session = CaptureSession::Idle;

                let reason = if stderr.is_empty() {
                    format!("ffmpeg exited before recording started: {status}")
                } else {
                    format!("ffmpeg exited before recording started: {status}: {stderr}")
                };
                return Err(Self::backend_error(reason));
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    #[instrument(skip(self))]
    async fn stop(&mut self) -> CoreResult<PathBuf> {
        let session = std::mem::replace(&mut self.session, CaptureSession::Idle);
        let CaptureSession::Recording {
            session_id,
            started_at,
            artifact,
        } = session
        else {
            return Err(Self::backend_error("no active recording"));
        };

        let Some(mut child) = self.child.take() else {
            return Err(Self::backend_error("recording process is gone"));
        };

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(b"q").await {
                warn!(error = %e, "Failed to ask ffmpeg to stop, killing it");
                if let Err(e) = child.start_kill() {
                    warn!(error = %e, "Failed to kill ffmpeg");
                }
            }
        }

        let status = child
            .wait()
            .await
            .map_err(|e| Self::backend_error(format!("Failed to wait for ffmpeg: {}", e)))?;

        info!(
            session_id = %session_id,
            duration_ms = started_at.elapsed().as_millis(),
            status = %status,
            "Video recording stopped"
        );

        Ok(artifact)
    }
}
