//! mac-runner: scripted macOS automation for repeatable screenshots and recordings.

mod app;
mod cli;
mod config;
mod error;
mod scenario;

pub(crate) use {
    cli::Cli,
    error::{AppError, Result as AppResult},
};

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "mac_runner=debug,mac_runner_core=debug";

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(app::run(cli)) {
        error!(error = %e, "Scenario failed");
        std::process::exit(1);
    }
}
