//! Command builder and sequential executor.
//!
//! A [`Runner`] is a handle onto a shared, append-only queue of commands.
//! Every builder method appends one command and returns another handle onto
//! the same queue, so steps can be chained or added through any handle.

use crate::{
    CoreResult,
    capture::{FfmpegBackend, VideoBackend},
    gateway::{Gateway, ProcessRunner, ShellRunner},
    pipeline::RunnerSettings,
};

use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use tokio::task::JoinSet;
use tracing::{debug, error, info, instrument};

pub(crate) type CommandFuture = Pin<Box<dyn Future<Output = CoreResult<()>> + Send>>;

/// One queued, parameterless automation action.
///
/// `Fn` rather than `FnOnce`: the queue survives [`Runner::run`] and may be
/// executed again.
pub(crate) type Command = Arc<dyn Fn() -> CommandFuture + Send + Sync>;

/// Builder and executor for an ordered automation pipeline.
///
/// Cloning a `Runner` yields another handle onto the same queue.
#[derive(Clone)]
pub struct Runner {
    commands: Arc<Mutex<Vec<Command>>>,
    pub(crate) detached: DetachedTasks,
    pub(crate) gateway: Gateway,
    pub(crate) video: Arc<tokio::sync::Mutex<Box<dyn VideoBackend>>>,
    pub(crate) settings: RunnerSettings,
}

impl Runner {
    /// Create a runner backed by `sh` and the ffmpeg video backend.
    pub fn new(settings: RunnerSettings) -> Self {
        Self::with_backends(
            settings,
            Arc::new(ShellRunner::default()),
            Box::new(FfmpegBackend::new("ffmpeg", settings.video_poll_interval)),
        )
    }

    /// Create a runner over explicit process and video backends.
    pub fn with_backends(
        settings: RunnerSettings,
        process_runner: Arc<dyn ProcessRunner>,
        video_backend: Box<dyn VideoBackend>,
    ) -> Self {
        Self {
            commands: Arc::new(Mutex::new(Vec::new())),
            detached: DetachedTasks::default(),
            gateway: Gateway::new(process_runner, settings.settle),
            video: Arc::new(tokio::sync::Mutex::new(video_backend)),
            settings,
        }
    }

    /// Settings every step of this runner is built with.
    pub fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    /// Append `step` to the queue and return a handle onto the same queue.
    pub fn register<F, Fut>(&self, step: F) -> Runner
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CoreResult<()>> + Send + 'static,
    {
        let command: Command = Arc::new(move || Box::pin(step()) as CommandFuture);
        self.queue().push(command);
        self.clone()
    }

    /// Number of queued commands.
    pub fn len(&self) -> usize {
        self.queue().len()
    }

    /// Whether no command has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.queue().is_empty()
    }

    /// Execute every queued command in registration order.
    ///
    /// Each command completes before the next one starts. The first failure
    /// is returned as-is and no later command is invoked. Effects of the
    /// commands that already ran are not undone.
    ///
    /// Detached work launched by the steps (see [`Runner::capture_screen`])
    /// is drained before `run` returns, on success and on failure alike.
    ///
    /// The queue is not cleared: calling `run` again executes every step
    /// again, including those that already succeeded. Build a fresh runner
    /// for each automation run.
    #[instrument(skip(self))]
    pub async fn run(&self) -> CoreResult<()> {
        // Snapshot so the queue lock is never held across an await.
        let commands: Vec<Command> = self.queue().clone();
        let total = commands.len();

        info!(total, "Running commands");

        for (index, command) in commands.iter().enumerate() {
            debug!(index, total, "Running command");

            if let Err(e) = command().await {
                error!(index, total, error = %e, "Command failed, aborting run");
                self.wait_detached().await;
                return Err(e);
            }
        }

        self.wait_detached().await;

        info!(total, "All commands completed");

        Ok(())
    }

    /// Wait for every detached task launched so far.
    ///
    /// Steps never wait on these tasks themselves; a task that panics or is
    /// cancelled is logged.
    pub async fn wait_detached(&self) {
        self.detached.drain().await;
    }

    /// Queue a gateway invocation whose stdout is discarded.
    pub(crate) fn exec_step(&self, command: String, settle: Duration) -> Runner {
        let gateway = self.gateway.clone();
        self.register(move || {
            let gateway = gateway.clone();
            let command = command.clone();
            async move {
                gateway.exec(&command, settle).await?;
                Ok(())
            }
        })
    }

    fn queue(&self) -> MutexGuard<'_, Vec<Command>> {
        // A poisoned queue still holds valid commands.
        self.commands.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Tasks launched by steps that resolve without awaiting them.
#[derive(Clone, Default)]
pub(crate) struct DetachedTasks(Arc<Mutex<JoinSet<()>>>);

impl DetachedTasks {
    /// Launch `task` without awaiting it.
    pub(crate) fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks().spawn(task);
    }

    /// Await every task launched so far.
    async fn drain(&self) {
        // Taken out so the lock is not held across an await.
        let mut tasks = std::mem::take(&mut *self.tasks());

        if !tasks.is_empty() {
            debug!(pending = tasks.len(), "Waiting for detached tasks");
        }

        while let Some(result) = tasks.join_next().await {
            if let Err(e) = result {
                error!(error = %e, "Detached task did not complete");
            }
        }
    }

    fn tasks(&self) -> MutexGuard<'_, JoinSet<()>> {
        self.0.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for Runner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runner")
            .field("commands", &self.len())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
