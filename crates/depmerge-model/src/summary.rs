use serde::Serialize;

use crate::document::OptionDocument;
use crate::report::ReportRow;

/// Size of one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentCounts {
    pub options: usize,
    pub dependents: usize,
    pub distinct_values: usize,
}

impl DocumentCounts {
    pub fn of(document: &OptionDocument) -> Self {
        Self {
            options: document.option_count(),
            dependents: document.dependent_count(),
            distinct_values: document.distinct_value_count(),
        }
    }
}

/// Outcome of group reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileCounts {
    /// Canonical groups that kept an original identifier.
    pub reused_ids: usize,
    /// Distinct identifiers minted for canonical groups.
    pub new_ids: usize,
    pub rows: usize,
    pub group_modified: usize,
    pub dependency_modified: usize,
}

impl ReconcileCounts {
    pub fn tally_rows(&mut self, rows: &[ReportRow]) {
        self.rows = rows.len();
        self.group_modified = rows
            .iter()
            .filter(|row| row.group_status.is_modified())
            .count();
        self.dependency_modified = rows
            .iter()
            .filter(|row| row.dependency_status.is_modified())
            .count();
    }
}

/// Before/after counts for one canonicalization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub original: DocumentCounts,
    pub canonical: DocumentCounts,
    pub reconcile: ReconcileCounts,
}
