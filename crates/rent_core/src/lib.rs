//! # rent_core: Calendar and Money Foundation for Lease Rent Schedules
//!
//! ## Foundation Layer Role
//!
//! rent_core is the bottom layer of the workspace, providing:
//! - Time types: `Date` with month-end aware calendar arithmetic (`types::time`)
//! - The due-date stepper: [`next_rent_due_date`] (`types::time`)
//! - Fixed-point rent rounding: [`round_rent`] (`types::money`)
//! - Error types: `DateError`, `ScheduleError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - chrono: Date arithmetic
//! - rust_decimal: Exact base-10 money arithmetic
//! - thiserror: Error derives
//! - serde: Serialisation support (optional, on by default)
//!
//! ## Usage Examples
//!
//! ```rust
//! use rent_core::types::{next_rent_due_date, round_rent, Date};
//! use rust_decimal::Decimal;
//!
//! // Rent due on the 31st clamps to the end of February
//! let reference = Date::from_ymd(2025, 2, 10).unwrap();
//! let due = next_rent_due_date(reference, 31, false);
//! assert_eq!(due, Date::from_ymd(2025, 2, 28).unwrap());
//!
//! // Month addition clamps instead of rolling over
//! let jan_31 = Date::from_ymd(2024, 1, 31).unwrap();
//! assert_eq!(jan_31.add_months(1), Date::from_ymd(2024, 2, 29).unwrap());
//!
//! // Amounts are rounded half away from zero to two places
//! let amount = round_rent(Decimal::new(266_665, 4));
//! assert_eq!(amount.to_string(), "26.67");
//! ```

#![warn(missing_docs)]

pub mod types;

pub use types::{next_rent_due_date, round_rent, Date, DateError, ScheduleError, MAX_RENT};
