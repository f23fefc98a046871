//! Data model for option/dependent documents.
//!
//! The types here are shared by every stage of the canonicalization
//! pipeline: the parsed input document, the intermediate flattened items and
//! merged groups, and the per-value change report.

pub mod document;
pub mod group;
pub mod report;
pub mod summary;

pub use document::{DependentRef, OptionDocument, OptionRecord};
pub use group::{DependentSet, FlatItem, GroupId, MergedGroup, ValueDependentMap};
pub use report::{ChangeStatus, REPORT_COLUMNS, ReportRow};
pub use summary::{DocumentCounts, ReconcileCounts, RunSummary};
