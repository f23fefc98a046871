//! Change report output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use tracing::info;

use depmerge_model::{REPORT_COLUMNS, ReportRow};

use crate::common::{ReportFormat, ensure_parent};

/// Write the change report to `path`.
pub fn write_report(path: &Path, rows: &[ReportRow], format: ReportFormat) -> Result<()> {
    ensure_parent(path)?;
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_report_to(BufWriter::new(file), rows, format)
        .with_context(|| format!("write report {}", path.display()))?;
    info!(
        path = %path.display(),
        rows = rows.len(),
        format = format.extension(),
        "wrote change report"
    );
    Ok(())
}

/// Write the change report to any writer.
///
/// CSV output always starts with the header row, even without data rows.
pub fn write_report_to<W: Write>(
    mut writer: W,
    rows: &[ReportRow],
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Csv => {
            let mut csv = WriterBuilder::new()
                .has_headers(false)
                .terminator(Terminator::Any(b'\n'))
                .from_writer(writer);
            csv.write_record(REPORT_COLUMNS)?;
            for row in rows {
                csv.serialize(row)?;
            }
            csv.flush()?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
    }
    Ok(())
}
