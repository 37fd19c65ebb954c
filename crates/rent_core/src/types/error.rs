//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `ScheduleError`: Errors from rent schedule validation

use thiserror::Error;

use super::time::Date;

/// Date-related errors.
///
/// Provides structured error handling for date construction and parsing
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use rent_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2023, month: 2, day: 29 };
/// assert_eq!(format!("{}", err), "Invalid date: 2023-2-29");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Rent schedule errors.
///
/// The schedule builder validates exactly one precondition before doing any
/// work; every other input is accepted as given (out-of-range due days are
/// clamped rather than rejected).
///
/// # Examples
/// ```
/// use rent_core::types::{Date, ScheduleError};
///
/// let err = ScheduleError::InvalidDateRange {
///     lease_start: Date::from_ymd(2023, 4, 1).unwrap(),
///     window_end: Date::from_ymd(2023, 3, 31).unwrap(),
/// };
/// assert_eq!(
///     format!("{}", err),
///     "Lease start date 2023-04-01 should occur before window end date 2023-03-31"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Lease start is on or after the end of the reporting window.
    #[error("Lease start date {lease_start} should occur before window end date {window_end}")]
    InvalidDateRange {
        /// Lease start date supplied by the caller
        lease_start: Date,
        /// Window end date supplied by the caller
        window_end: Date,
    },
}
