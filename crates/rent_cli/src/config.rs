//! CLI configuration management
//!
//! Handles loading lease terms and output settings from TOML files,
//! `RENT_*` environment variables, and command-line flags.
//!
//! # File layout
//!
//! ```toml
//! format = "json"
//! log_level = "debug"
//!
//! [terms]
//! base_monthly_rent = "1850.00"
//! lease_start_date = "2023-02-20"
//! window_start_date = "2023-01-01"
//! window_end_date = "2023-12-31"
//! day_of_month_rent_due = 31
//! rent_rate_change_frequency = 12
//! rent_change_rate = "0.03"
//! prorate_first_month = true
//! ```
//!
//! Dates are quoted `YYYY-MM-DD` strings; amounts and rates are best quoted
//! so they are read as exact decimals.

use rent_schedule::terms::{DEFAULT_CHANGE_FREQUENCY, DEFAULT_DUE_DAY};
use rent_schedule::{Date, RentTerms};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable names, all prefixed with `RENT_`.
pub mod env_keys {
    /// Starting monthly rent
    pub const BASE_MONTHLY_RENT: &str = "RENT_BASE_MONTHLY_RENT";
    /// Lease start date
    pub const LEASE_START_DATE: &str = "RENT_LEASE_START_DATE";
    /// Reporting window start
    pub const WINDOW_START_DATE: &str = "RENT_WINDOW_START_DATE";
    /// Reporting window end
    pub const WINDOW_END_DATE: &str = "RENT_WINDOW_END_DATE";
    /// Day of month rent is due
    pub const DUE_DAY: &str = "RENT_DUE_DAY";
    /// Months between rent changes
    pub const CHANGE_FREQUENCY: &str = "RENT_CHANGE_FREQUENCY";
    /// Signed rent change rate
    pub const CHANGE_RATE: &str = "RENT_CHANGE_RATE";
    /// First-month proration switch
    pub const PRORATE_FIRST_MONTH: &str = "RENT_PRORATE_FIRST_MONTH";
    /// Output format
    pub const FORMAT: &str = "RENT_FORMAT";
    /// Log level
    pub const LOG_LEVEL: &str = "RENT_LOG_LEVEL";
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, csv")]
    InvalidFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("Missing required lease term: {0}")]
    MissingTerm(&'static str),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output formats for rendered results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partially specified lease terms.
///
/// Each configuration layer contributes a draft; later layers overwrite the
/// fields they set. [`RentTermsDraft::into_terms`] fills optional fields with
/// their defaults and rejects drafts missing a required one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RentTermsDraft {
    pub base_monthly_rent: Option<Decimal>,
    pub lease_start_date: Option<Date>,
    pub window_start_date: Option<Date>,
    pub window_end_date: Option<Date>,
    pub day_of_month_rent_due: Option<u32>,
    pub rent_rate_change_frequency: Option<u32>,
    pub rent_change_rate: Option<Decimal>,
    pub prorate_first_month: Option<bool>,
}

impl RentTermsDraft {
    /// Overwrites every field that `other` sets.
    pub fn overlay(&mut self, other: &RentTermsDraft) {
        self.base_monthly_rent = other.base_monthly_rent.or(self.base_monthly_rent);
        self.lease_start_date = other.lease_start_date.or(self.lease_start_date);
        self.window_start_date = other.window_start_date.or(self.window_start_date);
        self.window_end_date = other.window_end_date.or(self.window_end_date);
        self.day_of_month_rent_due = other.day_of_month_rent_due.or(self.day_of_month_rent_due);
        self.rent_rate_change_frequency = other
            .rent_rate_change_frequency
            .or(self.rent_rate_change_frequency);
        self.rent_change_rate = other.rent_change_rate.or(self.rent_change_rate);
        self.prorate_first_month = other.prorate_first_month.or(self.prorate_first_month);
    }

    /// Completes the draft into [`RentTerms`].
    ///
    /// Rent and the three dates are required; everything else falls back to
    /// the library defaults.
    pub fn into_terms(self) -> Result<RentTerms, ConfigError> {
        let base = self
            .base_monthly_rent
            .ok_or(ConfigError::MissingTerm("base_monthly_rent"))?;
        let lease_start = self
            .lease_start_date
            .ok_or(ConfigError::MissingTerm("lease_start_date"))?;
        let window_start = self
            .window_start_date
            .ok_or(ConfigError::MissingTerm("window_start_date"))?;
        let window_end = self
            .window_end_date
            .ok_or(ConfigError::MissingTerm("window_end_date"))?;

        Ok(RentTerms::new(base, lease_start, window_start, window_end)
            .with_due_day(self.day_of_month_rent_due.unwrap_or(DEFAULT_DUE_DAY))
            .with_change_frequency(
                self.rent_rate_change_frequency
                    .unwrap_or(DEFAULT_CHANGE_FREQUENCY),
            )
            .with_change_rate(self.rent_change_rate.unwrap_or(Decimal::ZERO))
            .with_prorate_first_month(self.prorate_first_month.unwrap_or(false)))
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Lease terms gathered so far
    pub terms: RentTermsDraft,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

fn parse_env<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::EnvError(format!("{}={}: {}", key, value, e)))
}

fn parse_env_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::EnvError(format!(
            "{}={}: expected true or false",
            key, value
        ))),
    }
}

impl CliConfig {
    /// Create a new CliConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply `RENT_*` environment variables
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// Only variables that are present overwrite the current values.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut env_terms = RentTermsDraft::default();

        if let Some(v) = lookup(env_keys::BASE_MONTHLY_RENT) {
            env_terms.base_monthly_rent = Some(parse_env(env_keys::BASE_MONTHLY_RENT, &v)?);
        }
        if let Some(v) = lookup(env_keys::LEASE_START_DATE) {
            env_terms.lease_start_date = Some(parse_env(env_keys::LEASE_START_DATE, &v)?);
        }
        if let Some(v) = lookup(env_keys::WINDOW_START_DATE) {
            env_terms.window_start_date = Some(parse_env(env_keys::WINDOW_START_DATE, &v)?);
        }
        if let Some(v) = lookup(env_keys::WINDOW_END_DATE) {
            env_terms.window_end_date = Some(parse_env(env_keys::WINDOW_END_DATE, &v)?);
        }
        if let Some(v) = lookup(env_keys::DUE_DAY) {
            env_terms.day_of_month_rent_due = Some(parse_env(env_keys::DUE_DAY, &v)?);
        }
        if let Some(v) = lookup(env_keys::CHANGE_FREQUENCY) {
            env_terms.rent_rate_change_frequency = Some(parse_env(env_keys::CHANGE_FREQUENCY, &v)?);
        }
        if let Some(v) = lookup(env_keys::CHANGE_RATE) {
            env_terms.rent_change_rate = Some(parse_env(env_keys::CHANGE_RATE, &v)?);
        }
        if let Some(v) = lookup(env_keys::PRORATE_FIRST_MONTH) {
            env_terms.prorate_first_month = Some(parse_env_bool(env_keys::PRORATE_FIRST_MONTH, &v)?);
        }
        self.terms.overlay(&env_terms);

        if let Some(v) = lookup(env_keys::FORMAT) {
            self.format = OutputFormat::from_str(&v)?;
        }
        if let Some(v) = lookup(env_keys::LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&v)?;
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(log_level) = cli.log_level {
            self.log_level = log_level;
        }
        if cli.verbose && self.log_level > LogLevel::Debug {
            self.log_level = LogLevel::Debug;
        }
        self.terms.overlay(&cli.terms);
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Raise logging to at least debug
    pub verbose: bool,
    /// Lease terms given as flags
    pub terms: RentTermsDraft,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli);

    Ok(config)
}
