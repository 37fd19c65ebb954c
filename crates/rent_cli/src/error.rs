//! CLI error types.

use rent_schedule::ScheduleError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `rent-schedule` commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is incomplete
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Lease terms were rejected by the schedule builder
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV rendering failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
