//! Time types and calendar arithmetic for rent schedules.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - Month-length lookup and clamped month addition
//! - The due-date stepper used to walk billing cycles
//!
//! Month addition never rolls over into the following month: adding one
//! month to January 31st yields the last day of February. Leap years fall
//! out of the month-length lookup rather than a dedicated rule.
//!
//! # Examples
//!
//! ```
//! use rent_core::types::time::{next_rent_due_date, Date};
//!
//! let reference = Date::from_ymd(2024, 2, 10).unwrap();
//!
//! // Rent due on the 31st lands on February 29th in a leap year
//! let due = next_rent_due_date(reference, 31, false);
//! assert_eq!(due, Date::from_ymd(2024, 2, 29).unwrap());
//! ```

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

const MONTHS_PER_YEAR: i64 = 12;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Dates are local calendar dates with no time-of-day or time-zone
/// component. Serialises as ISO 8601 (`YYYY-MM-DD`).
///
/// # Examples
///
/// ```
/// use rent_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2023, 2, 5).unwrap();
/// assert_eq!(date.year(), 2023);
/// assert_eq!(date.month(), 2);
/// assert_eq!(date.day(), 5);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2023-02-05".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2023, 1, 1).unwrap();
/// let end = Date::from_ymd(2023, 1, 11).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use rent_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2023, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use rent_core::types::time::Date;
    ///
    /// let date = Date::parse("2023-03-31").unwrap();
    /// assert_eq!(date.day(), 31);
    ///
    /// assert!(Date::parse("2023-04-31").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns true if this date's year has a February 29th.
    ///
    /// # Examples
    ///
    /// ```
    /// use rent_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 6, 1).unwrap().is_leap_year());
    /// assert!(!Date::from_ymd(2100, 6, 1).unwrap().is_leap_year());
    /// assert!(Date::from_ymd(2000, 6, 1).unwrap().is_leap_year());
    /// ```
    pub fn is_leap_year(&self) -> bool {
        days_in_month(self.year(), 2) == 29
    }

    /// Returns the number of days in this date's month (28-31).
    ///
    /// # Examples
    ///
    /// ```
    /// use rent_core::types::time::Date;
    ///
    /// assert_eq!(Date::from_ymd(2023, 2, 10).unwrap().days_in_month(), 28);
    /// assert_eq!(Date::from_ymd(2024, 2, 10).unwrap().days_in_month(), 29);
    /// assert_eq!(Date::from_ymd(2025, 4, 10).unwrap().days_in_month(), 30);
    /// ```
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the first day of this date's month.
    pub fn first_of_month(&self) -> Date {
        self.with_day_clamped(1)
    }

    /// Returns the last day of this date's month.
    pub fn last_of_month(&self) -> Date {
        self.with_day_clamped(self.days_in_month())
    }

    /// Returns this date with the day-of-month replaced by `day`, clamped to
    /// `1..=days_in_month()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rent_core::types::time::Date;
    ///
    /// let april = Date::from_ymd(2025, 4, 10).unwrap();
    /// assert_eq!(april.with_day_clamped(31), Date::from_ymd(2025, 4, 30).unwrap());
    /// assert_eq!(april.with_day_clamped(0), Date::from_ymd(2025, 4, 1).unwrap());
    /// ```
    pub fn with_day_clamped(&self, day: u32) -> Date {
        let day = day.clamp(1, self.days_in_month());
        // Always valid: the day lies inside the current month.
        self.0.with_day(day).map(Date).unwrap_or(*self)
    }

    /// Adds whole months, keeping the day-of-month where possible.
    ///
    /// When the target month is shorter than the current day-of-month the
    /// result is the last day of the target month. Saturates at the last
    /// representable date.
    ///
    /// # Examples
    ///
    /// ```
    /// use rent_core::types::time::Date;
    ///
    /// let jan_31 = Date::from_ymd(2023, 1, 31).unwrap();
    /// assert_eq!(jan_31.add_months(1), Date::from_ymd(2023, 2, 28).unwrap());
    /// assert_eq!(jan_31.add_months(3), Date::from_ymd(2023, 4, 30).unwrap());
    /// assert_eq!(jan_31.add_months(12), Date::from_ymd(2024, 1, 31).unwrap());
    /// ```
    pub fn add_months(&self, months: u32) -> Date {
        let index = self.year() as i64 * MONTHS_PER_YEAR + (self.month() as i64 - 1) + months as i64;
        let year = index.div_euclid(MONTHS_PER_YEAR);
        let month = (index.rem_euclid(MONTHS_PER_YEAR) + 1) as u32;

        let first = i32::try_from(year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, month, 1));

        match first {
            Some(first) => Date(first).with_day_clamped(self.day()),
            None => Date(NaiveDate::MAX),
        }
    }

    /// Returns the next rent due date on or after this date.
    ///
    /// See [`next_rent_due_date`].
    pub fn next_due_date(&self, due_day: u32, include_current: bool) -> Date {
        next_rent_due_date(*self, due_day, include_current)
    }
}

/// Returns the number of days in the given month.
///
/// Computed from the distance between the first day of the month and the
/// first day of the following month, so February follows the Gregorian
/// leap-year rules of the underlying calendar.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        // December of the last representable year
        _ => 31,
    }
}

/// Calculates the next occurrence of a rent due day.
///
/// Rules, applied in order:
/// 1. If `include_current` is set and `date` already falls on the due day
///    (clamped to this month's length), `date` is returned unchanged.
/// 2. If `date` falls before this month's (clamped) due day, that day of the
///    current month is returned.
/// 3. Otherwise the due day of the following month is returned, clamped to
///    that month's length.
///
/// With `include_current == false` the result is always strictly after
/// `date`, except at the last representable date where it saturates.
///
/// A `due_day` of 0 is treated as 1; anything above the month length is
/// clamped, so 31 means "last day of the month".
///
/// # Examples
///
/// ```
/// use rent_core::types::time::{next_rent_due_date, Date};
///
/// let d = |y, m, d| Date::from_ymd(y, m, d).unwrap();
///
/// assert_eq!(next_rent_due_date(d(2025, 2, 15), 15, true), d(2025, 2, 15));
/// assert_eq!(next_rent_due_date(d(2025, 2, 15), 15, false), d(2025, 3, 15));
/// assert_eq!(next_rent_due_date(d(2025, 2, 28), 31, false), d(2025, 3, 31));
/// assert_eq!(next_rent_due_date(d(2025, 2, 28), 31, true), d(2025, 2, 28));
/// ```
pub fn next_rent_due_date(date: Date, due_day: u32, include_current: bool) -> Date {
    let due_day = due_day.max(1);
    let valid_day = due_day.min(date.days_in_month());
    let current_day = date.day();

    if include_current && current_day == valid_day {
        return date;
    }

    if current_day < valid_day {
        return date.with_day_clamped(valid_day);
    }

    date.first_of_month().add_months(1).with_day_clamped(due_day)
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    // Date construction tests

    #[test]
    fn test_date_from_ymd_valid() {
        let date = d(2023, 3, 31);
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 31);
    }

    #[test]
    fn test_date_from_ymd_invalid() {
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 4, 31).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert_eq!(
            Date::from_ymd(2023, 4, 31),
            Err(DateError::InvalidDate {
                year: 2023,
                month: 4,
                day: 31
            })
        );
    }

    #[test]
    fn test_date_parse_and_display() {
        let date: Date = "2023-02-05".parse().unwrap();
        assert_eq!(date, d(2023, 2, 5));
        assert_eq!(format!("{}", date), "2023-02-05");

        assert!(Date::parse("2023/02/05").is_err());
        assert!(Date::parse("not-a-date").is_err());
    }

    #[test]
    fn test_date_parse_trims_whitespace() {
        assert_eq!(Date::parse(" 2024-02-29\n").unwrap(), d(2024, 2, 29));
    }

    #[test]
    fn test_date_subtraction_and_ordering() {
        assert_eq!(d(2023, 3, 1) - d(2023, 2, 1), 28);
        assert_eq!(d(2024, 3, 1) - d(2024, 2, 1), 29);
        assert!(d(2023, 1, 31) < d(2023, 2, 1));
    }

    // Month length tests

    #[test]
    fn test_days_in_month() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (index, days) in expected.iter().enumerate() {
            assert_eq!(d(2023, index as u32 + 1, 1).days_in_month(), *days);
        }
        assert_eq!(d(2024, 2, 1).days_in_month(), 29);
    }

    #[test]
    fn test_leap_years() {
        assert!(d(2024, 1, 1).is_leap_year());
        assert!(d(2000, 1, 1).is_leap_year());
        assert!(!d(2023, 1, 1).is_leap_year());
        assert!(!d(1900, 1, 1).is_leap_year());
    }

    #[test]
    fn test_first_and_last_of_month() {
        assert_eq!(d(2024, 2, 17).first_of_month(), d(2024, 2, 1));
        assert_eq!(d(2024, 2, 17).last_of_month(), d(2024, 2, 29));
        assert_eq!(d(2023, 12, 5).last_of_month(), d(2023, 12, 31));
    }

    // add_months tests

    #[test]
    fn test_add_months_keeps_day() {
        assert_eq!(d(2025, 2, 1).add_months(1), d(2025, 3, 1));
        assert_eq!(d(2025, 2, 1).add_months(2), d(2025, 4, 1));
        assert_eq!(d(2025, 2, 1).add_months(0), d(2025, 2, 1));
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(d(2023, 1, 31).add_months(1), d(2023, 2, 28));
        assert_eq!(d(2024, 1, 31).add_months(1), d(2024, 2, 29));
        assert_eq!(d(2025, 3, 31).add_months(1), d(2025, 4, 30));
        assert_eq!(d(2024, 2, 29).add_months(12), d(2025, 2, 28));
    }

    #[test]
    fn test_add_months_crosses_years() {
        assert_eq!(d(2025, 11, 15).add_months(2), d(2026, 1, 15));
        assert_eq!(d(2025, 12, 31).add_months(1), d(2026, 1, 31));
        assert_eq!(d(2025, 2, 1).add_months(25), d(2027, 3, 1));
    }

    #[test]
    fn test_add_months_saturates() {
        let last = Date::from(NaiveDate::MAX);
        assert_eq!(last.add_months(1), last);
    }

    // Due-date stepper tests

    #[test]
    fn test_next_due_returns_same_date_when_included() {
        assert_eq!(next_rent_due_date(d(2025, 2, 15), 15, true), d(2025, 2, 15));
    }

    #[test]
    fn test_next_due_later_in_same_month() {
        assert_eq!(next_rent_due_date(d(2025, 2, 10), 15, false), d(2025, 2, 15));
    }

    #[test]
    fn test_next_due_rolls_to_next_month() {
        assert_eq!(next_rent_due_date(d(2025, 2, 20), 15, false), d(2025, 3, 15));
    }

    #[test]
    fn test_next_due_exclusive_never_returns_same_date() {
        assert_eq!(next_rent_due_date(d(2025, 2, 15), 15, false), d(2025, 3, 15));
    }

    #[test]
    fn test_next_due_clamps_short_months() {
        assert_eq!(next_rent_due_date(d(2025, 2, 10), 31, false), d(2025, 2, 28));
        assert_eq!(next_rent_due_date(d(2024, 2, 10), 31, false), d(2024, 2, 29));
        assert_eq!(next_rent_due_date(d(2025, 4, 10), 31, false), d(2025, 4, 30));
    }

    #[test]
    fn test_next_due_from_clamped_month_end() {
        assert_eq!(next_rent_due_date(d(2025, 2, 28), 31, false), d(2025, 3, 31));
        assert_eq!(next_rent_due_date(d(2025, 2, 28), 31, true), d(2025, 2, 28));
    }

    #[test]
    fn test_next_due_december_to_january() {
        assert_eq!(next_rent_due_date(d(2025, 12, 29), 31, false), d(2025, 12, 31));
        assert_eq!(next_rent_due_date(d(2025, 12, 31), 31, false), d(2026, 1, 31));
        assert_eq!(next_rent_due_date(d(2025, 12, 20), 15, false), d(2026, 1, 15));
    }

    #[test]
    fn test_next_due_thirty_to_thirty_one_day_month() {
        assert_eq!(next_rent_due_date(d(2025, 4, 30), 31, false), d(2025, 5, 31));
    }

    #[test]
    fn test_next_due_day_zero_behaves_like_first() {
        assert_eq!(next_rent_due_date(d(2025, 2, 10), 0, false), d(2025, 3, 1));
        assert_eq!(next_rent_due_date(d(2025, 3, 1), 0, true), d(2025, 3, 1));
    }

    #[test]
    fn test_next_due_day_above_thirty_one_clamps() {
        assert_eq!(next_rent_due_date(d(2025, 4, 10), 45, false), d(2025, 4, 30));
    }

    #[test]
    fn test_next_due_method_matches_function() {
        let date = d(2023, 1, 31);
        assert_eq!(date.next_due_date(31, false), next_rent_due_date(date, 31, false));
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_date_serialises_as_iso_string() {
            let json = serde_json::to_string(&d(2023, 2, 5)).unwrap();
            assert_eq!(json, "\"2023-02-05\"");

            let parsed: Date = serde_json::from_str("\"2024-02-29\"").unwrap();
            assert_eq!(parsed, d(2024, 2, 29));
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn date_strategy() -> impl Strategy<Value = Date> {
            (1900i32..2200i32, 1u32..13u32, 1u32..32u32).prop_filter_map(
                "valid date",
                |(year, month, day)| Date::from_ymd(year, month, day).ok(),
            )
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_next_due_exclusive_is_strictly_later(
                date in date_strategy(),
                due_day in 1u32..32u32,
            ) {
                let next = next_rent_due_date(date, due_day, false);
                prop_assert!(next > date);
                prop_assert!(next - date <= 62);
            }

            #[test]
            fn test_next_due_lands_on_clamped_due_day(
                date in date_strategy(),
                due_day in 1u32..32u32,
                include_current in any::<bool>(),
            ) {
                let next = next_rent_due_date(date, due_day, include_current);
                prop_assert!(next >= date);
                prop_assert_eq!(next.day(), due_day.min(next.days_in_month()));
            }

            #[test]
            fn test_add_months_stays_in_target_month(
                date in date_strategy(),
                months in 0u32..120u32,
            ) {
                let shifted = date.add_months(months);
                let month_index = |x: Date| x.year() as i64 * 12 + x.month() as i64;
                prop_assert_eq!(month_index(shifted) - month_index(date), months as i64);
                prop_assert_eq!(shifted.day(), date.day().min(shifted.days_in_month()));
            }

            #[test]
            fn test_add_months_is_monotonic(
                date in date_strategy(),
                months in 0u32..120u32,
            ) {
                prop_assert!(date.add_months(months) <= date.add_months(months + 1));
            }
        }
    }
}
