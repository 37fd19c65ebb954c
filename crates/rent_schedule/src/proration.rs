//! First-month proration on a fixed 30-day month.
//!
//! Proration works on day-of-month arithmetic against a 30-day month
//! regardless of the calendar month's real length. A lease starting on the
//! 5th with rent due on the 15th is billed `(15 - 5) / 30` of a month in
//! February just as in March.

use rent_core::types::{next_rent_due_date, round_rent, Date};
use rust_decimal::Decimal;

/// Month length used as the proration denominator.
pub const DAYS_PER_PRORATION_MONTH: u32 = 30;

/// Calculates the rent owed for the first, partially occupied month.
///
/// - A lease starting on the 1st of its month pays the full rent.
/// - Otherwise the due date inside the lease-start month is located
///   (clamped to the month's length). A lease starting before it pays for
///   the days up to the due date; a lease starting on or after it pays the
///   full month less the days already elapsed since the due date.
///
/// The result is rounded to two fractional digits.
///
/// # Examples
///
/// ```
/// use rent_schedule::proration::calculate_prorated_rent;
/// use rent_schedule::Date;
/// use rust_decimal_macros::dec;
///
/// // (15 - 5) / 30 of a month
/// let start = Date::from_ymd(2025, 2, 5).unwrap();
/// assert_eq!(calculate_prorated_rent(dec!(1000), start, 15), dec!(333.33));
///
/// // 1 - (20 - 15) / 30 of a month
/// let start = Date::from_ymd(2025, 2, 20).unwrap();
/// assert_eq!(calculate_prorated_rent(dec!(1000), start, 15), dec!(833.33));
/// ```
pub fn calculate_prorated_rent(monthly_rent: Decimal, lease_start_date: Date, rent_due_day: u32) -> Decimal {
    let month_beginning = lease_start_date.first_of_month();
    if lease_start_date == month_beginning {
        return round_rent(monthly_rent);
    }

    let rent_due_date = next_rent_due_date(month_beginning, rent_due_day, true);
    let days_per_month = Decimal::from(DAYS_PER_PRORATION_MONTH);
    let start_day = Decimal::from(lease_start_date.day());
    let due_day = Decimal::from(rent_due_date.day());

    let occupied_proportion = if lease_start_date < rent_due_date {
        (due_day - start_day) / days_per_month
    } else {
        Decimal::ONE - (start_day - due_day) / days_per_month
    };

    round_rent(occupied_proportion * monthly_rent)
}
