use crate::{CoreResult, capture::VideoOptions};

use std::path::PathBuf;

use async_trait::async_trait;

/// A screen recorder that writes into a temporary artifact.
///
/// Callers must alternate `start`/`stop`. Starting while a recording is
/// already running is backend-defined.
#[async_trait]
pub trait VideoBackend: Send {
    /// Begin recording with `options`.
    async fn start(&mut self, options: &VideoOptions) -> CoreResult<()>;

    /// Resolve once the recording has actually begun producing output.
    async fn wait_until_ready(&mut self) -> CoreResult<()>;

    /// Finish the recording and return the temporary artifact path.
    async fn stop(&mut self) -> CoreResult<PathBuf>;
}
