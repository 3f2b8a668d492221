#[allow(clippy::module_inception)]
mod config;
mod retry_config;
mod timing_config;
mod video_config;

pub(crate) use {
    config::Config, retry_config::RetryConfig, timing_config::TimingConfig,
    video_config::VideoConfig,
};

pub(crate) const DEFAULT_SETTLE_MS: u64 = 1000;
pub(crate) const DEFAULT_WRITE_SETTLE_MS: u64 = 100;
pub(crate) const DEFAULT_SCREEN_CAPTURE_SETTLE_MS: u64 = 2000;
pub(crate) const DEFAULT_VIDEO_POLL_MS: u64 = 100;
pub(crate) const DEFAULT_MAX_ATTEMPTS: u32 = mac_runner_core::DEFAULT_MAX_ATTEMPTS;
pub(crate) const DEFAULT_FFMPEG_PATH: &str = "ffmpeg";

pub(crate) fn default_settle_ms() -> u64 {
    DEFAULT_SETTLE_MS
}

pub(crate) fn default_write_settle_ms() -> u64 {
    DEFAULT_WRITE_SETTLE_MS
}

pub(crate) fn default_screen_capture_settle_ms() -> u64 {
    DEFAULT_SCREEN_CAPTURE_SETTLE_MS
}

pub(crate) fn default_video_poll_ms() -> u64 {
    DEFAULT_VIDEO_POLL_MS
}

pub(crate) fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

pub(crate) fn default_ffmpeg_path() -> std::path::PathBuf {
    std::path::PathBuf::from(DEFAULT_FFMPEG_PATH)
}
