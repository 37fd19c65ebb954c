//! Schedule builder: walks the reporting window one billing cycle at a time.
//!
//! ## Algorithm
//!
//! 1. Reject terms whose lease starts on or after the window end.
//! 2. The first cycle is the first due date on or after the window start,
//!    or the lease start if that comes earlier.
//! 3. Each cycle up to and including the window end emits one record:
//!    - the first cycle reached on or after the lease start becomes the
//!      first occupied cycle: vacancy clears, its due date is moved to the
//!      lease start, and its amount is the (optionally prorated) rent;
//!    - the rent-change policy may then move the running rent;
//!    - the next cycle is the next due day strictly after the current date,
//!      so cycles resume on the due-day grid after a lease-start override.
//!
//! The first-occupied amount is carried by [`CyclePhase::FirstOccupied`] and
//! consumed by the record it belongs to.

use rent_core::types::{next_rent_due_date, round_rent_saturating, Date, ScheduleError};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::policy::{calculate_new_monthly_rent, can_change_rent, should_update_monthly_rent};
use crate::proration::calculate_prorated_rent;
use crate::record::{MonthlyRentRecord, MonthlyRentRecords};
use crate::terms::RentTerms;

/// Occupancy phase of the cycle being processed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CyclePhase {
    /// Lease has not started by the current due date.
    Scanning,
    /// Current cycle is the first occupied one and bills `amount`.
    FirstOccupied { amount: Decimal },
    /// Lease running; cycles bill the running rent.
    SteadyState,
}

/// Calculates vacancy, rent amount, and due date for every billing cycle in
/// the terms' reporting window.
///
/// # Errors
///
/// Returns [`ScheduleError::InvalidDateRange`] if the lease does not start
/// strictly before the window end. No other input is rejected.
///
/// # Examples
///
/// ```rust
/// use rent_schedule::{calculate_monthly_rent, Date, RentTerms};
/// use rust_decimal_macros::dec;
///
/// let d = |y, m, d| Date::from_ymd(y, m, d).unwrap();
///
/// // Lease starts on Feb 5th, rent due on the last day of each month
/// let terms = RentTerms::new(dec!(100), d(2023, 2, 5), d(2023, 1, 1), d(2023, 3, 31))
///     .with_due_day(31)
///     .with_change_rate(dec!(0.1));
///
/// let records = calculate_monthly_rent(&terms).unwrap();
/// let dates: Vec<Date> = records.iter().map(|r| r.rent_due_date).collect();
/// assert_eq!(dates, [d(2023, 1, 31), d(2023, 2, 5), d(2023, 2, 28), d(2023, 3, 31)]);
/// assert!(records[0].vacancy);
/// assert_eq!(records[3].rent_amount, dec!(110));
/// ```
pub fn calculate_monthly_rent(terms: &RentTerms) -> Result<MonthlyRentRecords, ScheduleError> {
    terms.validate()?;

    let lease_start = terms.lease_start_date;
    let window_end = terms.window_end_date;
    let due_day = terms.day_of_month_rent_due;
    let rate = terms.rent_change_rate;
    let frequency = terms.rent_rate_change_frequency;

    let mut rent_due_date = next_rent_due_date(terms.window_start_date, due_day, true);
    if lease_start < rent_due_date {
        rent_due_date = lease_start;
    }

    let mut vacancy = lease_start > rent_due_date;
    let mut monthly_rent = round_rent_saturating(terms.base_monthly_rent);
    let mut phase = CyclePhase::Scanning;
    let mut change_anchor: Option<Date> = None;
    let mut records = MonthlyRentRecords::new();

    while rent_due_date <= window_end {
        if phase == CyclePhase::Scanning && lease_start <= rent_due_date {
            vacancy = false;
            let amount = if terms.prorate_first_month {
                calculate_prorated_rent(monthly_rent, lease_start, due_day)
            } else {
                monthly_rent
            };
            phase = CyclePhase::FirstOccupied { amount };
            rent_due_date = lease_start;
        }

        if can_change_rent(vacancy, rate) {
            match change_anchor {
                None => change_anchor = Some(rent_due_date),
                Some(anchor) if should_update_monthly_rent(rent_due_date, anchor, frequency) => {
                    change_anchor = Some(anchor.add_months(frequency));
                    let previous = monthly_rent;
                    monthly_rent = calculate_new_monthly_rent(monthly_rent, rate);
                    debug!(
                        date = %rent_due_date,
                        from = %previous,
                        to = %monthly_rent,
                        vacancy,
                        "rent changed"
                    );
                }
                Some(_) => {}
            }
        }

        let rent_amount = match phase {
            CyclePhase::FirstOccupied { amount } => {
                phase = CyclePhase::SteadyState;
                amount
            }
            CyclePhase::Scanning | CyclePhase::SteadyState => monthly_rent,
        };

        debug!(date = %rent_due_date, amount = %rent_amount, vacancy, "billing cycle");
        records.push(MonthlyRentRecord {
            vacancy,
            rent_amount,
            rent_due_date,
        });

        // The stepper saturates at the last representable date and stops
        // advancing there; a window ending on that date terminates here.
        let next = next_rent_due_date(rent_due_date, due_day, false);
        if next <= rent_due_date {
            break;
        }
        rent_due_date = next;
    }

    info!(
        lease_start = %lease_start,
        window_start = %terms.window_start_date,
        window_end = %window_end,
        cycles = records.len(),
        final_rent = %monthly_rent,
        "rent schedule built"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rent_core::types::MAX_RENT;
    use rust_decimal_macros::dec;

    fn d(year: i32, month: u32, day: u32) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    fn summary(records: &[MonthlyRentRecord]) -> Vec<(bool, Decimal, Date)> {
        records
            .iter()
            .map(|r| (r.vacancy, r.rent_amount, r.rent_due_date))
            .collect()
    }

    #[test]
    fn test_rejects_lease_starting_on_window_end() {
        let terms = RentTerms::new(dec!(100), d(2023, 3, 31), d(2023, 1, 1), d(2023, 3, 31));
        assert_eq!(
            calculate_monthly_rent(&terms),
            Err(ScheduleError::InvalidDateRange {
                lease_start: d(2023, 3, 31),
                window_end: d(2023, 3, 31),
            })
        );
    }

    #[test]
    fn test_rejects_lease_starting_after_window_end() {
        let terms = RentTerms::new(dec!(100), d(2023, 5, 1), d(2023, 1, 1), d(2023, 3, 31));
        assert!(calculate_monthly_rent(&terms).is_err());
    }

    #[test]
    fn test_zero_rate_keeps_base_rent() {
        let terms = RentTerms::new(dec!(750), d(2023, 1, 1), d(2023, 1, 1), d(2023, 6, 30));
        let records = calculate_monthly_rent(&terms).unwrap();

        assert_eq!(records.len(), 6);
        assert!(records.iter().all(|r| r.rent_amount == dec!(750)));
    }

    #[test]
    fn test_lease_before_window_start_becomes_first_record() {
        // First regular due date is Jan 15th; the lease started in December
        let terms = RentTerms::new(dec!(100), d(2022, 12, 20), d(2023, 1, 1), d(2023, 2, 28))
            .with_due_day(15)
            .with_change_rate(dec!(0.1));
        let records = calculate_monthly_rent(&terms).unwrap();

        assert_eq!(
            summary(&records),
            vec![
                (false, dec!(100), d(2022, 12, 20)),
                (false, dec!(100), d(2023, 1, 15)),
                (false, dec!(110), d(2023, 2, 15)),
            ]
        );
    }

    #[test]
    fn test_window_shorter_than_one_cycle_yields_single_record() {
        let terms = RentTerms::new(dec!(100), d(2023, 1, 1), d(2023, 1, 1), d(2023, 1, 10))
            .with_due_day(15);
        let records = calculate_monthly_rent(&terms).unwrap();

        assert_eq!(summary(&records), vec![(false, dec!(100), d(2023, 1, 1))]);
    }

    #[test]
    fn test_lease_after_every_due_date_stays_vacant() {
        let terms = RentTerms::new(dec!(100), d(2023, 3, 20), d(2023, 1, 1), d(2023, 3, 31))
            .with_change_rate(dec!(0.1));
        let records = calculate_monthly_rent(&terms).unwrap();

        assert_eq!(
            summary(&records),
            vec![
                (true, dec!(100), d(2023, 1, 1)),
                (true, dec!(100), d(2023, 2, 1)),
                (true, dec!(100), d(2023, 3, 1)),
            ]
        );
    }

    #[test]
    fn test_zero_prorated_amount_is_consumed_once() {
        let terms = RentTerms::new(dec!(300), d(2023, 1, 31), d(2023, 1, 1), d(2023, 3, 5))
            .with_due_day(1)
            .with_prorate_first_month(true);
        let records = calculate_monthly_rent(&terms).unwrap();

        // 1 - (31 - 1) / 30 = 0
        assert_eq!(
            summary(&records),
            vec![
                (true, dec!(300), d(2023, 1, 1)),
                (false, dec!(0), d(2023, 1, 31)),
                (false, dec!(300), d(2023, 2, 1)),
                (false, dec!(300), d(2023, 3, 1)),
            ]
        );
    }

    #[test]
    fn test_proration_uses_rent_reduced_while_vacant() {
        // Zero frequency: every eligible cycle after the anchor changes rent
        let terms = RentTerms::new(dec!(100), d(2023, 3, 10), d(2023, 1, 1), d(2023, 4, 30))
            .with_due_day(15)
            .with_change_frequency(0)
            .with_change_rate(dec!(-0.1))
            .with_prorate_first_month(true);
        let records = calculate_monthly_rent(&terms).unwrap();

        assert_eq!(
            summary(&records),
            vec![
                (true, dec!(100), d(2023, 1, 15)),
                (true, dec!(90), d(2023, 2, 15)),
                // (15 - 10) / 30 of the reduced rent
                (false, dec!(15), d(2023, 3, 10)),
                (false, dec!(90), d(2023, 3, 15)),
                (false, dec!(90), d(2023, 4, 15)),
            ]
        );
    }

    #[test]
    fn test_base_rent_is_emitted_rounded() {
        let terms = RentTerms::new(dec!(99.999), d(2023, 1, 1), d(2023, 1, 1), d(2023, 2, 28));
        let records = calculate_monthly_rent(&terms).unwrap();

        assert!(records.iter().all(|r| r.rent_amount.to_string() == "100.00"));
    }

    #[test]
    fn test_long_window_rent_saturates_instead_of_overflowing() {
        // 720 monthly increases of 10% exceed the decimal range
        let terms = RentTerms::new(dec!(1000), d(2000, 1, 1), d(2000, 1, 1), d(2060, 1, 1))
            .with_change_rate(dec!(0.1));
        let records = calculate_monthly_rent(&terms).unwrap();

        assert_eq!(records.len(), 721);
        assert_eq!(records.last().unwrap().rent_amount, MAX_RENT);
        assert!(records.iter().all(|r| r.rent_amount.scale() == 2));
        assert!(records.windows(2).all(|w| w[0].rent_amount <= w[1].rent_amount));
    }

    #[test]
    fn test_huge_base_rent_is_capped() {
        let terms = RentTerms::new(Decimal::MAX, d(2023, 1, 1), d(2023, 1, 1), d(2023, 3, 31))
            .with_change_rate(dec!(0.5));
        let records = calculate_monthly_rent(&terms).unwrap();

        assert!(records.iter().all(|r| r.rent_amount == MAX_RENT));
    }

    #[test]
    fn test_window_ending_on_last_representable_date_terminates() {
        let last = Date::from(chrono::NaiveDate::MAX);
        let lease_start = d(last.year(), 11, 1);
        let terms = RentTerms::new(dec!(100), lease_start, lease_start, last).with_due_day(31);
        let records = calculate_monthly_rent(&terms).unwrap();

        assert_eq!(
            summary(&records),
            vec![
                (false, dec!(100), lease_start),
                (false, dec!(100), d(last.year(), 11, 30)),
                (false, dec!(100), last),
            ]
        );
    }

    #[test]
    fn test_is_idempotent() {
        let terms = RentTerms::new(dec!(1234.56), d(2024, 2, 29), d(2024, 1, 1), d(2025, 12, 31))
            .with_due_day(31)
            .with_change_frequency(4)
            .with_change_rate(dec!(0.025))
            .with_prorate_first_month(true);

        assert_eq!(calculate_monthly_rent(&terms), calculate_monthly_rent(&terms));
    }
}
