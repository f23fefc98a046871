//! Shared naming and format definitions for report outputs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Default file name of the canonical document.
pub const CANONICAL_FILE_NAME: &str = "cleaned_dependents.xml";

/// Change report file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Date-stamped report file name, e.g. `cleaned_xml_report_20260119.csv`.
pub fn report_file_name(date: NaiveDate, format: ReportFormat) -> String {
    format!(
        "cleaned_xml_report_{}.{}",
        date.format("%Y%m%d"),
        format.extension()
    )
}

/// Create the parent directory of `path` if it has one.
pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
    }
    Ok(())
}
