mod apps;
mod capture;
mod defaults;
mod delay;
mod runner;
mod settings;

pub use {
    runner::Runner,
    settings::{
        DEFAULT_SCREEN_CAPTURE_SETTLE, DEFAULT_SETTLE, DEFAULT_VIDEO_POLL_INTERVAL,
        DEFAULT_WRITE_SETTLE, RunnerSettings,
    },
};
