//! Rendering of command results as table, JSON, or CSV.

use rent_schedule::MonthlyRentRecord;
use serde::Serialize;
use std::io::Write;

use crate::config::OutputFormat;
use crate::Result;

/// Writes a rent schedule in the requested format.
pub fn render_schedule<W: Write>(
    records: &[MonthlyRentRecord],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Table => write_schedule_table(records, out),
        OutputFormat::Json => write_json(records, out),
        OutputFormat::Csv => write_csv(records, out),
    }
}

/// Writes a single keyed result, e.g. a due date or a prorated amount.
///
/// Tables print `label: value`; JSON and CSV serialise `row` as-is.
pub fn render_value<W, T>(label: &str, value: &str, row: &T, format: OutputFormat, out: &mut W) -> Result<()>
where
    W: Write,
    T: Serialize,
{
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}: {}", label, value)?;
            Ok(())
        }
        OutputFormat::Json => write_json(row, out),
        OutputFormat::Csv => write_csv(std::slice::from_ref(row), out),
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(value: &T, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write, T: Serialize>(rows: &[T], out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_schedule_table<W: Write>(records: &[MonthlyRentRecord], out: &mut W) -> Result<()> {
    let amount_width = records
        .iter()
        .map(|r| r.rent_amount.to_string().len())
        .max()
        .unwrap_or(0)
        .max("Rent".len());
    let rule = |left: &str, mid: &str, right: &str| {
        format!(
            "{}{}{}{}{}{}{}",
            left,
            "─".repeat(12),
            mid,
            "─".repeat(9),
            mid,
            "─".repeat(amount_width + 2),
            right
        )
    };

    writeln!(out, "{}", rule("┌", "┬", "┐"))?;
    writeln!(out, "│ {:<10} │ {:<7} │ {:>w$} │", "Due Date", "Vacant", "Rent", w = amount_width)?;
    writeln!(out, "{}", rule("├", "┼", "┤"))?;
    for record in records {
        writeln!(
            out,
            "│ {:<10} │ {:<7} │ {:>w$} │",
            record.rent_due_date.to_string(),
            if record.vacancy { "yes" } else { "no" },
            record.rent_amount.to_string(),
            w = amount_width
        )?;
    }
    writeln!(out, "{}", rule("└", "┴", "┘"))?;
    Ok(())
}
