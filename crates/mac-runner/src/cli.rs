use std::path::PathBuf;

use clap::Parser;

/// Run a scripted macOS automation scenario.
#[derive(Debug, Parser)]
#[command(name = "mac-runner", version)]
pub struct Cli {
    /// Scenario file listing the steps to run.
    pub scenario: PathBuf,

    /// Configuration file to use instead of the per-user one.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Parse the configuration and scenario, then exit without running.
    #[arg(long)]
    pub check: bool,
}
