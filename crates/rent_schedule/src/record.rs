//! Per-cycle output records.

use rent_core::types::Date;
use rust_decimal::Decimal;

/// Vacancy, rent amount, and due date for one billing cycle.
///
/// Serialises with camelCase keys:
///
/// ```rust
/// use rent_schedule::{Date, MonthlyRentRecord};
/// use rust_decimal_macros::dec;
///
/// let record = MonthlyRentRecord {
///     vacancy: false,
///     rent_amount: dec!(110.00),
///     rent_due_date: Date::from_ymd(2023, 3, 31).unwrap(),
/// };
/// let json = serde_json::to_string(&record).unwrap();
/// assert_eq!(json, r#"{"vacancy":false,"rentAmount":"110.00","rentDueDate":"2023-03-31"}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MonthlyRentRecord {
    /// True if the unit was unoccupied on this cycle's due date.
    pub vacancy: bool,
    /// Charge for this cycle, two fractional digits.
    pub rent_amount: Decimal,
    /// Date the charge is due.
    pub rent_due_date: Date,
}

/// Chronologically ordered schedule.
pub type MonthlyRentRecords = Vec<MonthlyRentRecord>;
