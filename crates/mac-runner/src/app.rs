use crate::{AppResult, Cli, config::Config, scenario::Scenario};

use mac_runner_core::{FfmpegBackend, Runner, ShellRunner};

use std::sync::Arc;

use tracing::{info, instrument};

/// Load configuration and scenario, then run the scenario to completion.
#[instrument(skip(cli), fields(scenario = ?cli.scenario))]
pub(crate) async fn run(cli: Cli) -> AppResult<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let scenario = Scenario::load(&cli.scenario)?;

    if cli.check {
        info!(steps = scenario.steps.len(), "Scenario is valid");
        return Ok(());
    }

    let runner = build_runner(&config);
    scenario.register(&runner).run().await?;

    info!(steps = scenario.steps.len(), "Scenario finished");

    Ok(())
}

/// A runner executing through `sh` and the configured ffmpeg.
pub(crate) fn build_runner(config: &Config) -> Runner {
    let settings = config.runner_settings();

    Runner::with_backends(
        settings,
        Arc::new(ShellRunner::default()),
        Box::new(FfmpegBackend::new(
            &config.video.ffmpeg_path,
            settings.video_poll_interval,
        )),
    )
}
