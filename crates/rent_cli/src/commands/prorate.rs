//! Prorate command implementation
//!
//! Reports the first-month rent for a lease starting mid-cycle.

use rent_schedule::{calculate_prorated_rent, Date};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use crate::config::OutputFormat;
use crate::output::render_value;
use crate::Result;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProratedRentRow {
    monthly_rent: Decimal,
    lease_start_date: Date,
    due_day: u32,
    prorated_rent: Decimal,
}

/// Run the prorate command
pub fn run<W: Write>(
    monthly_rent: Decimal,
    lease_start: Date,
    due_day: u32,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let prorated = calculate_prorated_rent(monthly_rent, lease_start, due_day);
    debug!(%monthly_rent, lease_start = %lease_start, due_day, %prorated, "Prorated first month");

    let row = ProratedRentRow {
        monthly_rent,
        lease_start_date: lease_start,
        due_day,
        prorated_rent: prorated,
    };
    render_value("Prorated rent", &prorated.to_string(), &row, format, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_prorate_table() {
        let mut buf = Vec::new();
        run(dec!(1000), "2025-02-05".parse().unwrap(), 15, OutputFormat::Table, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Prorated rent: 333.33\n");
    }

    #[test]
    fn test_prorate_csv() {
        let mut buf = Vec::new();
        run(dec!(1000), "2025-02-20".parse().unwrap(), 15, OutputFormat::Csv, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "monthlyRent,leaseStartDate,dueDay,proratedRent\n1000,2025-02-20,15,833.33\n"
        );
    }
}
