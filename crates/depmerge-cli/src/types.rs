use std::path::PathBuf;

use depmerge_model::{ReconcileCounts, ReportRow, RunSummary};

#[derive(Debug)]
pub struct CanonicalizeResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub xml: String,
    pub rows: Vec<ReportRow>,
    pub summary: RunSummary,
    /// `None` on a dry run.
    pub canonical_xml: Option<PathBuf>,
    /// `None` on a dry run or with `--no-report`.
    pub report: Option<PathBuf>,
}

#[derive(Debug)]
pub struct ReconcileResult {
    pub original: PathBuf,
    pub canonical: PathBuf,
    pub rows: Vec<ReportRow>,
    pub counts: ReconcileCounts,
    pub report: PathBuf,
}
