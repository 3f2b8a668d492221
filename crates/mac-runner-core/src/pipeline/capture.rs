//! Screenshot and screen recording steps.

use crate::{
    capture::{VideoOptions, replace_file},
    pipeline::Runner,
    screen::Rect,
};

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use tracing::{error, info};

impl Runner {
    /// Queue a whole-screen capture into `output`.
    ///
    /// The step waits for the screen capture settle delay, then launches
    /// `screencapture` in a detached task and resolves without waiting for
    /// it. A failing capture is logged, not propagated. [`Runner::run`]
    /// does not return before the capture has finished.
    pub fn capture_screen(&self, output: impl AsRef<Path>) -> Runner {
        let gateway = self.gateway.clone();
        let detached = self.detached.clone();
        let settle = self.settings.screen_capture_settle;
        let command = format!("screencapture {}", output.as_ref().display());

        self.register(move || {
            let gateway = gateway.clone();
            let detached = detached.clone();
            let command = command.clone();

            async move {
                tokio::time::sleep(settle).await;

                detached.spawn(async move {
                    if let Err(e) = gateway.exec_default(&command).await {
                        error!(command = %command, error = %e, "Screen capture failed");
                    }
                });

                Ok(())
            }
        })
    }

    /// Queue a capture of the screen region `area` into `output`.
    pub fn capture_screen_rect(&self, area: Rect, output: impl AsRef<Path>) -> Runner {
        self.exec_step(
            format!(
                "screencapture -R{},{},{},{} {}",
                area.x,
                area.y,
                area.width,
                area.height,
                output.as_ref().display()
            ),
            self.gateway.default_settle(),
        )
    }

    /// Queue a capture of the first window of `name` into `output`.
    ///
    /// The window id is resolved through AppleScript when the step runs.
    /// With `disable_shadow` the window's drop shadow is left out.
    pub fn capture_app(&self, name: &str, output: impl AsRef<Path>, disable_shadow: bool) -> Runner {
        let gateway = self.gateway.clone();
        let query = format!("osascript -e 'tell app \"{name}\" to id of window 1'");
        let output = output.as_ref().display().to_string();
        let shadow = if disable_shadow { "-o " } else { "" };

        self.register(move || {
            let gateway = gateway.clone();
            let query = query.clone();
            let output = output.clone();

            async move {
                let window_id = gateway.exec(&query, Duration::ZERO).await?;
                let command = format!("screencapture {shadow}-l{} {output}", window_id.trim());
                gateway.exec_default(&command).await?;
                Ok(())
            }
        })
    }

    /// Queue the start of a screen recording.
    ///
    /// The step resolves once the backend reports that frames are being
    /// written. There is no timeout.
    pub fn start_video(&self, options: VideoOptions) -> Runner {
        let video = Arc::clone(&self.video);

        self.register(move || {
            let video = Arc::clone(&video);
            let options = options.clone();

            async move {
                info!(fps = options.fps, screen = %options.screen, "Start video recording");
                let mut backend = video.lock().await;
                backend.start(&options).await?;
                backend.wait_until_ready().await
            }
        })
    }

    /// Queue the end of the screen recording, saving it to `output`.
    ///
    /// An existing file at `output` is replaced.
    pub fn stop_video(&self, output: impl AsRef<Path>) -> Runner {
        let video = Arc::clone(&self.video);
        let output: PathBuf = output.as_ref().to_path_buf();

        self.register(move || {
            let video = Arc::clone(&video);
            let output = output.clone();

            async move {
                info!(output = ?output, "Stop video recording");
                let artifact = video.lock().await.stop().await?;
                replace_file(&artifact, &output).await
            }
        })
    }
}
