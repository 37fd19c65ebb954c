//! Rent-change policy.
//!
//! Two independent predicates decide whether the running rent moves on a
//! given cycle:
//! - eligibility: the sign of the rate must match occupancy (decreases
//!   accrue while vacant, increases while occupied);
//! - cadence: at least `frequency` months have passed since the last change.

use rent_core::types::{round_rent_saturating, Date, MAX_RENT};
use rust_decimal::Decimal;

/// Checks whether the vacancy state and change rate allow a rent change.
///
/// A zero rate never changes rent.
///
/// # Examples
///
/// ```
/// use rent_schedule::policy::can_change_rent;
/// use rust_decimal_macros::dec;
///
/// assert!(can_change_rent(false, dec!(0.1)));
/// assert!(can_change_rent(true, dec!(-0.1)));
/// assert!(!can_change_rent(true, dec!(0.1)));
/// assert!(!can_change_rent(false, dec!(0)));
/// ```
pub fn can_change_rent(vacancy: bool, rent_change_rate: Decimal) -> bool {
    let should_decrease = vacancy && rent_change_rate < Decimal::ZERO;
    let should_increase = !vacancy && rent_change_rate > Decimal::ZERO;

    should_decrease || should_increase
}

/// Checks whether enough months have passed since the last change.
///
/// Returns true once `current_date` reaches `last_change_date` plus
/// `frequency_months`, with month addition clamped to month end.
///
/// # Examples
///
/// ```
/// use rent_schedule::policy::should_update_monthly_rent;
/// use rent_schedule::Date;
///
/// let last = Date::from_ymd(2025, 2, 1).unwrap();
/// assert!(!should_update_monthly_rent(Date::from_ymd(2025, 3, 1).unwrap(), last, 2));
/// assert!(should_update_monthly_rent(Date::from_ymd(2025, 4, 1).unwrap(), last, 2));
/// ```
pub fn should_update_monthly_rent(current_date: Date, last_change_date: Date, frequency_months: u32) -> bool {
    current_date >= last_change_date.add_months(frequency_months)
}

/// Applies a signed change rate to the rent and rounds the result.
///
/// The result saturates at [`MAX_RENT`] in magnitude, so rent compounded
/// over long windows levels off at the cap instead of overflowing.
///
/// # Examples
///
/// ```
/// use rent_schedule::policy::calculate_new_monthly_rent;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_new_monthly_rent(dec!(110), dec!(0.1)), dec!(121));
/// assert_eq!(calculate_new_monthly_rent(dec!(95), dec!(-0.05)), dec!(90.25));
/// ```
pub fn calculate_new_monthly_rent(monthly_rent: Decimal, rent_change_rate: Decimal) -> Decimal {
    let factor = Decimal::ONE.checked_add(rent_change_rate);
    match factor.and_then(|f| monthly_rent.checked_mul(f)) {
        Some(rent) => round_rent_saturating(rent),
        None => {
            let negative = monthly_rent.is_sign_negative() != factor.is_some_and(|f| f.is_sign_negative());
            if negative {
                -MAX_RENT
            } else {
                MAX_RENT
            }
        }
    }
}
