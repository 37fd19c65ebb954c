//! Fixed-point rounding for rent amounts.
//!
//! Rent amounts are carried as [`rust_decimal::Decimal`] so that rate
//! changes and prorations are computed in base 10 and rounded exactly once
//! per step. Rounding is half away from zero, and the result always carries
//! exactly [`RENT_PRECISION_POINTS`] fractional digits (`100` becomes
//! `100.00`), which keeps serialised and displayed amounts uniform.
//!
//! A 96-bit mantissa holds at most [`MAX_RENT`] at two fractional digits.
//! Compounded rent is clamped to that bound by [`round_rent_saturating`].

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits kept on every rent amount.
pub const RENT_PRECISION_POINTS: u32 = 2;

/// Largest rent amount representable with [`RENT_PRECISION_POINTS`]
/// fractional digits (`792281625142643375935439503.35`).
pub const MAX_RENT: Decimal = Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, RENT_PRECISION_POINTS);

/// Rounds `value` to `precision` fractional digits, half away from zero.
///
/// The returned value always has a scale of exactly `precision`.
///
/// # Examples
///
/// ```
/// use rent_core::types::money::round_to;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_to(Decimal::new(12345, 3), 2).to_string(), "12.35");
/// assert_eq!(round_to(Decimal::new(-12345, 3), 2).to_string(), "-12.35");
/// assert_eq!(round_to(Decimal::from(7), 2).to_string(), "7.00");
/// ```
pub fn round_to(value: Decimal, precision: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(precision);
    rounded
}

/// Rounds a rent amount to [`RENT_PRECISION_POINTS`] fractional digits.
///
/// # Examples
///
/// ```
/// use rent_core::types::money::round_rent;
/// use rust_decimal::Decimal;
///
/// let third = Decimal::from(1000) / Decimal::from(3);
/// assert_eq!(round_rent(third).to_string(), "333.33");
/// ```
pub fn round_rent(value: Decimal) -> Decimal {
    round_to(value, RENT_PRECISION_POINTS)
}

/// Rounds a rent amount after clamping it to `-MAX_RENT..=MAX_RENT`.
///
/// Unlike [`round_rent`], the result keeps a scale of exactly
/// [`RENT_PRECISION_POINTS`] for every input.
///
/// # Examples
///
/// ```
/// use rent_core::types::money::{round_rent_saturating, MAX_RENT};
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_rent_saturating(Decimal::MAX), MAX_RENT);
/// assert_eq!(round_rent_saturating(Decimal::new(1005, 3)).to_string(), "1.01");
/// ```
pub fn round_rent_saturating(value: Decimal) -> Decimal {
    round_rent(value.clamp(-MAX_RENT, MAX_RENT))
}
