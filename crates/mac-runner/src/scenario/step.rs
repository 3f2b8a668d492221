use mac_runner_core::{Rect, Runner, VideoOptions};

use std::{path::PathBuf, time::Duration};

use serde::Deserialize;

fn default_true() -> bool {
    true
}

fn default_fps() -> u32 {
    VideoOptions::default().fps
}

fn default_screen() -> String {
    VideoOptions::default().screen
}

/// Region recorded by a `start_video` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CropArea {
    /// Distance from the left edge of the screen.
    pub x: i32,
    /// Distance from the top edge of the screen.
    pub y: i32,
    /// Width of the region.
    pub width: u32,
    /// Height of the region.
    pub height: u32,
}

impl From<CropArea> for Rect {
    fn from(area: CropArea) -> Self {
        Rect::new(area.x, area.y, area.width, area.height)
    }
}

/// One `[[steps]]` entry of a scenario file, tagged by `action`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case", deny_unknown_fields)]
pub enum Step {
    /// Verified preference write.
    SetDefault {
        /// Preference domain, e.g. `com.apple.dock`.
        domain: String,
        /// Preference key.
        key: String,
        /// Arguments passed to `defaults write` after the key.
        params: String,
        /// Value `defaults read` must return.
        expected: String,
    },
    /// Log a preference value.
    ReadDefault {
        /// Preference domain.
        domain: String,
        /// Preference key.
        key: String,
    },
    /// Delete a preference value.
    DeleteDefault {
        /// Preference domain.
        domain: String,
        /// Preference key.
        key: String,
    },
    /// Launch an application.
    OpenApp {
        /// Application name.
        name: String,
        /// Extra arguments for `open`.
        #[serde(default)]
        params: String,
    },
    /// Bring an application to the foreground.
    ActivateApp {
        /// Application name.
        name: String,
    },
    /// Terminate an application.
    KillApp {
        /// Process name.
        name: String,
    },
    /// Place the first window of an application.
    MoveAndResizeApp {
        /// Application name.
        name: String,
        /// Left edge.
        x: i32,
        /// Top edge.
        y: i32,
        /// Window width.
        width: u32,
        /// Window height.
        height: u32,
    },
    /// Capture the whole screen.
    CaptureScreen {
        /// Image file to write.
        output: PathBuf,
    },
    /// Capture a region of the screen.
    CaptureScreenRect {
        /// Left edge.
        x: i32,
        /// Top edge.
        y: i32,
        /// Region width.
        width: u32,
        /// Region height.
        height: u32,
        /// Image file to write.
        output: PathBuf,
    },
    /// Capture the first window of an application.
    CaptureApp {
        /// Application name.
        name: String,
        /// Image file to write.
        output: PathBuf,
        /// Leave the window shadow out.
        #[serde(default = "default_true")]
        disable_shadow: bool,
    },
    /// Start recording the screen.
    StartVideo {
        /// Frames per second.
        #[serde(default = "default_fps")]
        fps: u32,
        /// Draw the cursor.
        #[serde(default = "default_true")]
        show_cursor: bool,
        /// Highlight clicks.
        #[serde(default)]
        highlight_clicks: bool,
        /// Record only this region.
        #[serde(default)]
        crop: Option<CropArea>,
        /// avfoundation device.
        #[serde(default = "default_screen")]
        screen: String,
    },
    /// Stop recording and save the video.
    StopVideo {
        /// Video file to write.
        output: PathBuf,
    },
    /// Pause.
    Wait {
        /// Milliseconds to wait.
        ms: u64,
    },
}

impl Step {
    /// Append this step to `runner`'s queue.
    pub fn register(&self, runner: &Runner) -> Runner {
        match self {
            Step::SetDefault {
                domain,
                key,
                params,
                expected,
            } => runner.set_default(domain, key, params, expected),
            Step::ReadDefault { domain, key } => runner.read_default(domain, key),
            Step::DeleteDefault { domain, key } => runner.delete_default(domain, key),
            Step::OpenApp { name, params } => runner.open_app(name, params),
            Step::ActivateApp { name } => runner.activate_app(name),
            Step::KillApp { name } => runner.kill_app(name),
            Step::MoveAndResizeApp {
                name,
                x,
                y,
                width,
                height,
            } => runner.move_and_resize_app(name, Rect::new(*x, *y, *width, *height)),
            Step::CaptureScreen { output } => runner.capture_screen(output),
            Step::CaptureScreenRect {
                x,
                y,
                width,
                height,
                output,
            } => runner.capture_screen_rect(Rect::new(*x, *y, *width, *height), output),
            Step::CaptureApp {
                name,
                output,
                disable_shadow,
            } => runner.capture_app(name, output, *disable_shadow),
            Step::StartVideo {
                fps,
                show_cursor,
                highlight_clicks,
                crop,
                screen,
            } => runner.start_video(VideoOptions {
                fps: *fps,
                show_cursor: *show_cursor,
                highlight_clicks: *highlight_clicks,
                crop_area: crop.map(Rect::from),
                screen: screen.clone(),
            }),
            Step::StopVideo { output } => runner.stop_video(output),
            Step::Wait { ms } => runner.wait(Duration::from_millis(*ms)),
        }
    }
}
