use crate::screen::Rect;

/// Frame rate used when none is configured.
pub const DEFAULT_FPS: u32 = 30;

/// avfoundation device recorded when none is configured.
pub const DEFAULT_SCREEN: &str = "Capture screen 0";

/// Options for a screen recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoOptions {
    /// Frames per second.
    pub fps: u32,
    /// Draw the mouse cursor into the recording.
    pub show_cursor: bool,
    /// Highlight mouse clicks.
    pub highlight_clicks: bool,
    /// Record only this region of the screen.
    pub crop_area: Option<Rect>,
    /// avfoundation video device name or index.
    pub screen: String,
}

impl Default for VideoOptions {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            show_cursor: true,
            highlight_clicks: false,
            crop_area: None,
            screen: DEFAULT_SCREEN.to_string(),
        }
    }
}
