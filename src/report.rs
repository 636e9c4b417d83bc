//! Report rendering for slice comparisons

use std::io::{self, Write};

use anyhow::Result;

use crate::compare::SliceComparison;
use crate::config::ReportFormat;

/// Render a comparison to the given writer.
///
/// `limit` is the requested slice length and serves as the fixed denominator
/// of the text report, even when fewer rows were available.
pub fn render(
    comparison: &SliceComparison,
    limit: usize,
    format: ReportFormat,
    writer: &mut dyn Write,
) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(comparison, limit, writer),
        ReportFormat::Json => write_json(comparison, writer),
    }
}

/// Render a comparison to standard output
pub fn render_to_stdout(
    comparison: &SliceComparison,
    limit: usize,
    format: ReportFormat,
) -> Result<()> {
    let stdout = io::stdout();
    render(comparison, limit, format, &mut stdout.lock())
}

fn write_text(comparison: &SliceComparison, limit: usize, writer: &mut dyn Write) -> Result<()> {
    writeln!(
        writer,
        "Rows identical in MBP slice: {} / {}",
        comparison.matching_rows, limit
    )?;
    Ok(())
}

fn write_json(comparison: &SliceComparison, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, comparison)?;
    writeln!(writer)?;
    Ok(())
}
