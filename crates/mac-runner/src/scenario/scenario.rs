//! Scenario files: an ordered list of automation steps in TOML.
//!
//! ```toml
//! [[steps]]
//! action = "open_app"
//! name = "Finder"
//!
//! [[steps]]
//! action = "wait"
//! ms = 500
//!
//! [[steps]]
//! action = "capture_screen"
//! output = "out.png"
//! ```

use crate::{AppError, AppResult, scenario::Step};

use mac_runner_core::Runner;

use std::{fs, panic::Location, path::Path};

use error_location::ErrorLocation;
use serde::Deserialize;
use tracing::{info, instrument};

/// An ordered list of steps loaded from a scenario file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Steps in execution order.
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Read and parse a scenario file.
    #[track_caller]
    #[instrument]
    pub fn load(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| AppError::ScenarioError {
            reason: format!("Failed to read scenario {:?}: {}", path, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let scenario = Self::from_toml(&contents)?;

        info!(scenario = ?path, steps = scenario.steps.len(), "Scenario loaded");

        Ok(scenario)
    }

    /// Parse a scenario from TOML text.
    #[track_caller]
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ScenarioError {
            reason: format!("Failed to parse scenario: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Queue every step on `runner`, in file order.
    pub fn register(&self, runner: &Runner) -> Runner {
        for step in &self.steps {
            step.register(runner);
        }
        runner.clone()
    }
}
