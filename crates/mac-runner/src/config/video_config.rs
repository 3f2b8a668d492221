use crate::config::default_ffmpeg_path;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Screen recording backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoConfig {
    /// ffmpeg executable, looked up on `PATH` when relative.
    #[serde(default = "default_ffmpeg_path")]
    pub ffmpeg_path: PathBuf,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: default_ffmpeg_path(),
        }
    }
}
