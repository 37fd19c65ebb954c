//! # rent_schedule: Billing-Cycle Rent Schedules
//!
//! Walks a reporting window one billing cycle at a time and reports, for
//! each due date, whether the unit was vacant and how much rent was due.
//!
//! ## Components
//!
//! - Due-date stepping: [`next_rent_due_date`] (from `rent_core`)
//! - Proration: [`proration::calculate_prorated_rent`] on a fixed 30-day month
//! - Rent-change policy: [`policy::can_change_rent`], [`policy::should_update_monthly_rent`]
//! - Schedule builder: [`builder::calculate_monthly_rent`]
//!
//! ## Usage Examples
//!
//! ```rust
//! use rent_schedule::{calculate_monthly_rent, Date, RentTerms};
//! use rust_decimal_macros::dec;
//!
//! let terms = RentTerms::new(
//!     dec!(100),
//!     Date::from_ymd(2023, 1, 1).unwrap(),
//!     Date::from_ymd(2023, 1, 1).unwrap(),
//!     Date::from_ymd(2023, 3, 31).unwrap(),
//! )
//! .with_due_day(1)
//! .with_change_frequency(1)
//! .with_change_rate(dec!(0.1));
//!
//! let records = calculate_monthly_rent(&terms).unwrap();
//! let amounts: Vec<String> = records.iter().map(|r| r.rent_amount.to_string()).collect();
//! assert_eq!(amounts, ["100.00", "110.00", "121.00"]);
//! assert!(records.iter().all(|r| !r.vacancy));
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod policy;
pub mod proration;
pub mod record;
pub mod terms;

pub use builder::calculate_monthly_rent;
pub use policy::{calculate_new_monthly_rent, can_change_rent, should_update_monthly_rent};
pub use proration::{calculate_prorated_rent, DAYS_PER_PRORATION_MONTH};
pub use record::{MonthlyRentRecord, MonthlyRentRecords};
pub use terms::RentTerms;

pub use rent_core::{next_rent_due_date, round_rent, Date, DateError, ScheduleError, MAX_RENT};
