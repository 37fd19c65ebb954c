//! Schedule command implementation
//!
//! Completes the layered lease terms, builds the rent schedule, and renders
//! it.

use rent_schedule::calculate_monthly_rent;
use std::io::Write;
use tracing::info;

use crate::config::CliConfig;
use crate::output::render_schedule;
use crate::Result;

/// Run the schedule command
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<()> {
    let terms = config.terms.clone().into_terms()?;

    info!(
        base_monthly_rent = %terms.base_monthly_rent,
        lease_start = %terms.lease_start_date,
        window_start = %terms.window_start_date,
        window_end = %terms.window_end_date,
        due_day = terms.day_of_month_rent_due,
        change_frequency = terms.rent_rate_change_frequency,
        change_rate = %terms.rent_change_rate,
        prorate = terms.prorate_first_month,
        "Building rent schedule"
    );

    let records = calculate_monthly_rent(&terms)?;
    render_schedule(&records, config.format, out)
}
