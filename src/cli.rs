//! CLI command implementations for Snakegrid.

pub(crate) mod batch;
pub(crate) mod default;
pub(crate) mod run;
pub(crate) mod validate;

mod output;

use clap::ValueEnum;
use snakegrid::FoodMode;
use std::error::Error;
use std::fmt;

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Output format for the `batch` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BatchFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV format.
    Csv,
}

/// Food placement selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FoodArg {
    /// Never place food.
    None,
    /// First empty cell in row-major order.
    First,
    /// Seeded random empty cell.
    Random,
}

impl From<FoodArg> for FoodMode {
    fn from(arg: FoodArg) -> Self {
        match arg {
            FoodArg::None => FoodMode::None,
            FoodArg::First => FoodMode::First,
            FoodArg::Random => FoodMode::Random,
        }
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<snakegrid::LoadError> for CliError {
    fn from(e: snakegrid::LoadError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<snakegrid::sim::ConfigError> for CliError {
    fn from(e: snakegrid::sim::ConfigError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}
