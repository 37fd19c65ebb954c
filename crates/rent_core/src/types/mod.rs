//! Core calendar, money, and error types.
//!
//! This module provides:
//! - `time`: The `Date` wrapper, month-length lookup, clamped month addition, and the due-date stepper
//! - `money`: Fixed-point rounding of rent amounts
//! - `error`: Structured error types for date construction and schedule validation
//!
//! # Re-exports
//!
//! For convenience, commonly used items are re-exported at this module level:
//! - [`Date`], [`next_rent_due_date`] from `time`
//! - [`round_rent`], [`round_rent_saturating`], [`round_to`], [`MAX_RENT`], [`RENT_PRECISION_POINTS`] from `money`
//! - [`DateError`], [`ScheduleError`] from `error`

pub mod error;
pub mod money;
pub mod time;

// Re-export commonly used types at module level
pub use error::{DateError, ScheduleError};
pub use money::{round_rent, round_rent_saturating, round_to, MAX_RENT, RENT_PRECISION_POINTS};
pub use time::{next_rent_due_date, Date};
