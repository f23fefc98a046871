//! Output generation for canonicalization runs.
//!
//! - **Canonical XML**: the rebuilt `<dependents>` document
//! - **Change report**: one row per canonical value, as CSV or JSON

mod common;
mod report;
mod xml;

pub use common::{CANONICAL_FILE_NAME, ReportFormat, report_file_name};
pub use report::{write_report, write_report_to};
pub use xml::write_canonical_xml;
