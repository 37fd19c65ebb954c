//! Command-line front end for lease rent schedules
//!
//! Loads lease terms from a TOML file, `RENT_*` environment variables, and
//! flags, then renders the resulting schedule as a table, JSON, or CSV.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
