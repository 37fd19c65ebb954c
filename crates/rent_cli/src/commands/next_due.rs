//! Next-due command implementation
//!
//! Reports the next occurrence of a rent due day after a reference date.

use rent_schedule::{next_rent_due_date, Date};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use crate::config::OutputFormat;
use crate::output::render_value;
use crate::Result;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NextDueRow {
    reference_date: Date,
    due_day: u32,
    include_current: bool,
    next_due_date: Date,
}

/// Run the next-due command
pub fn run<W: Write>(
    date: Date,
    due_day: u32,
    include_current: bool,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let next = next_rent_due_date(date, due_day, include_current);
    debug!(reference = %date, due_day, include_current, next = %next, "Next due date");

    let row = NextDueRow {
        reference_date: date,
        due_day,
        include_current,
        next_due_date: next,
    };
    render_value("Next due date", &next.to_string(), &row, format, out)
}
