//! Scripted backends for exercising pipelines without touching the OS.

use crate::{
    CoreError, CoreResult, ProcessOutput, ProcessRunner, Runner, RunnerSettings, VideoBackend,
    VideoOptions,
};

use std::{
    panic::Location,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::time::Instant;

type Script = Box<dyn Fn(&str) -> ProcessOutput + Send + Sync>;

/// Records every command and answers with scripted output.
pub(crate) struct ScriptedRunner {
    calls: Mutex<Vec<(Instant, String)>>,
    script: Script,
}

impl ScriptedRunner {
    /// Every command succeeds with empty output.
    pub(crate) fn succeeding() -> Arc<Self> {
        Self::with_script(|_| ProcessOutput::default())
    }

    /// Answer each command with `script(command)`.
    pub(crate) fn with_script(
        script: impl Fn(&str) -> ProcessOutput + Send + Sync + 'static,
    ) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            script: Box::new(script),
        })
    }

    /// Commands in the order they were run.
    #[allow(clippy::unwrap_used)]
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, command)| command.clone())
            .collect()
    }

    /// Commands with the (paused) clock reading at which each started.
    #[allow(clippy::unwrap_used)]
    pub(crate) fn timed_calls(&self) -> Vec<(Instant, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for ScriptedRunner {
    #[allow(clippy::unwrap_used)]
    async fn run(&self, command: &str) -> CoreResult<ProcessOutput> {
        self.calls
            .lock()
            .unwrap()
            .push((Instant::now(), command.to_string()));
        Ok((self.script)(command))
    }
}

/// Video backend that writes `content` into a fresh artifact on stop.
pub(crate) struct FakeVideoBackend {
    dir: PathBuf,
    content: &'static str,
    recording: bool,
    pub(crate) events: Arc<Mutex<Vec<&'static str>>>,
}

impl FakeVideoBackend {
    pub(crate) fn new(dir: impl Into<PathBuf>, content: &'static str) -> Self {
        Self {
            dir: dir.into(),
            content,
            recording: false,
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl VideoBackend for FakeVideoBackend {
    #[allow(clippy::unwrap_used)]
    async fn start(&mut self, _options: &VideoOptions) -> CoreResult<()> {
        self.events.lock().unwrap().push("start");
        self.recording = true;
        Ok(())
    }

    #[allow(clippy::unwrap_used)]
    async fn wait_until_ready(&mut self) -> CoreResult<()> {
        self.events.lock().unwrap().push("ready");
        Ok(())
    }

    #[allow(clippy::unwrap_used)]
    async fn stop(&mut self) -> CoreResult<PathBuf> {
        if !self.recording {
            return Err(CoreError::VideoBackend {
                reason: "no active recording".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.recording = false;
        self.events.lock().unwrap().push("stop");

        let artifact = self.dir.join("artifact.mp4");
        std::fs::write(&artifact, self.content).unwrap();
        Ok(artifact)
    }
}

/// Runner over `process` with a fake video backend writing into the temp dir.
pub(crate) fn runner_with(process: &Arc<ScriptedRunner>) -> Runner {
    Runner::with_backends(
        RunnerSettings::default(),
        process.clone(),
        Box::new(FakeVideoBackend::new(std::env::temp_dir(), "")),
    )
}
