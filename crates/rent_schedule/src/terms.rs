//! Lease terms that drive a rent schedule.

use rent_core::types::{Date, ScheduleError};
use rust_decimal::Decimal;

/// Default day of month on which rent is due.
pub const DEFAULT_DUE_DAY: u32 = 1;

/// Default number of months between rent changes.
pub const DEFAULT_CHANGE_FREQUENCY: u32 = 1;

/// Input terms for [`calculate_monthly_rent`](crate::calculate_monthly_rent).
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `day_of_month_rent_due` | 1 | Clamped to each month's length |
/// | `rent_rate_change_frequency` | 1 | Months between rent changes |
/// | `rent_change_rate` | 0 | Signed fraction, `0.1` = +10% |
/// | `prorate_first_month` | false | Prorate the first occupied cycle |
///
/// # Examples
///
/// ```rust
/// use rent_schedule::{Date, RentTerms};
/// use rust_decimal_macros::dec;
///
/// let terms = RentTerms::new(
///     dec!(1000),
///     Date::from_ymd(2023, 2, 20).unwrap(),
///     Date::from_ymd(2023, 1, 1).unwrap(),
///     Date::from_ymd(2023, 12, 31).unwrap(),
/// )
/// .with_due_day(15)
/// .with_change_frequency(6)
/// .with_change_rate(dec!(0.03))
/// .with_prorate_first_month(true);
///
/// assert!(terms.validate().is_ok());
/// assert_eq!(terms.day_of_month_rent_due, 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RentTerms {
    /// Starting monthly rent, before any change is applied.
    pub base_monthly_rent: Decimal,

    /// Date the tenant's lease starts. Must precede `window_end_date`.
    pub lease_start_date: Date,

    /// First date of the reporting window (inclusive).
    pub window_start_date: Date,

    /// Last date of the reporting window (inclusive).
    pub window_end_date: Date,

    /// Day of month rent is due (1-31, clamped per month).
    #[cfg_attr(feature = "serde", serde(default = "default_due_day"))]
    pub day_of_month_rent_due: u32,

    /// Months between rent changes. 0 applies a change on every eligible cycle.
    #[cfg_attr(feature = "serde", serde(default = "default_change_frequency"))]
    pub rent_rate_change_frequency: u32,

    /// Signed change rate as a fraction: positive raises rent while occupied,
    /// negative lowers it while vacant.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rent_change_rate: Decimal,

    /// Bill the first occupied cycle for the days actually occupied.
    #[cfg_attr(feature = "serde", serde(default))]
    pub prorate_first_month: bool,
}

#[cfg(feature = "serde")]
fn default_due_day() -> u32 {
    DEFAULT_DUE_DAY
}

#[cfg(feature = "serde")]
fn default_change_frequency() -> u32 {
    DEFAULT_CHANGE_FREQUENCY
}

impl RentTerms {
    /// Creates terms with the required dates and rent; everything else defaults.
    pub fn new(
        base_monthly_rent: Decimal,
        lease_start_date: Date,
        window_start_date: Date,
        window_end_date: Date,
    ) -> Self {
        Self {
            base_monthly_rent,
            lease_start_date,
            window_start_date,
            window_end_date,
            day_of_month_rent_due: DEFAULT_DUE_DAY,
            rent_rate_change_frequency: DEFAULT_CHANGE_FREQUENCY,
            rent_change_rate: Decimal::ZERO,
            prorate_first_month: false,
        }
    }

    /// Sets the day of month rent is due.
    pub fn with_due_day(mut self, day: u32) -> Self {
        self.day_of_month_rent_due = day;
        self
    }

    /// Sets the number of months between rent changes.
    pub fn with_change_frequency(mut self, months: u32) -> Self {
        self.rent_rate_change_frequency = months;
        self
    }

    /// Sets the signed rent change rate.
    pub fn with_change_rate(mut self, rate: Decimal) -> Self {
        self.rent_change_rate = rate;
        self
    }

    /// Enables or disables first-month proration.
    pub fn with_prorate_first_month(mut self, prorate: bool) -> Self {
        self.prorate_first_month = prorate;
        self
    }

    /// Validates the terms.
    ///
    /// The only precondition is that the lease starts strictly before the
    /// window ends.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.lease_start_date >= self.window_end_date {
            return Err(ScheduleError::InvalidDateRange {
                lease_start: self.lease_start_date,
                window_end: self.window_end_date,
            });
        }
        Ok(())
    }
}
