mod capture_session;
mod ffmpeg_backend;
mod file_replace;
mod video_backend;
mod video_options;

pub(crate) use file_replace::replace_file;

pub use {
    capture_session::CaptureSession, ffmpeg_backend::FfmpegBackend, video_backend::VideoBackend,
    video_options::VideoOptions,
};
