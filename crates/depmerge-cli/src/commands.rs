use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use depmerge_core::{CanonicalOutput, XmlOptions, canonicalize_text, reconcile_texts};
use depmerge_ingest::read_text;
use depmerge_report::{
    CANONICAL_FILE_NAME, ReportFormat, report_file_name, write_canonical_xml, write_report,
};

use crate::cli::{CanonicalizeArgs, ReconcileArgs};
use crate::types::{CanonicalizeResult, ReconcileResult};

/// Where and what to write after a canonicalization run.
#[derive(Debug, Clone)]
pub struct OutputConfig<'a> {
    pub output_dir: &'a Path,
    pub report_format: ReportFormat,
    pub write_report: bool,
    pub dry_run: bool,
}

/// Paths actually written by [`write_outputs`].
#[derive(Debug, Default)]
pub struct WrittenOutputs {
    pub canonical_xml: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

pub fn run_canonicalize(args: &CanonicalizeArgs) -> Result<CanonicalizeResult> {
    let span = info_span!("canonicalize_file", input = %args.input.display());
    let _guard = span.enter();

    let text = read_text(&args.input).context("read input document")?;
    let xml_options = XmlOptions {
        indent: args.indent,
        declaration: args.xml_declaration,
    };
    let output = canonicalize_text(&text, &xml_options)
        .with_context(|| format!("canonicalize {}", args.input.display()))?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| default_output_dir(&args.input));
    let written = write_outputs(
        &output,
        &OutputConfig {
            output_dir: &output_dir,
            report_format: args.report_format.into(),
            write_report: !args.no_report,
            dry_run: args.dry_run,
        },
    )?;

    let CanonicalOutput {
        xml, rows, summary, ..
    } = output;
    Ok(CanonicalizeResult {
        input: args.input.clone(),
        output_dir,
        xml,
        rows,
        summary,
        canonical_xml: written.canonical_xml,
        report: written.report,
    })
}

/// Write the canonical XML and, unless disabled, the change report.
///
/// A dry run writes nothing.
pub fn write_outputs(output: &CanonicalOutput, config: &OutputConfig<'_>) -> Result<WrittenOutputs> {
    if config.dry_run {
        info!(output_dir = %config.output_dir.display(), "dry run, no files written");
        return Ok(WrittenOutputs::default());
    }
    let xml_path = config.output_dir.join(CANONICAL_FILE_NAME);
    write_canonical_xml(&xml_path, &output.xml)?;
    let report = if config.write_report {
        let path = config
            .output_dir
            .join(report_file_name(Local::now().date_naive(), config.report_format));
        write_report(&path, &output.rows, config.report_format)?;
        Some(path)
    } else {
        None
    };
    Ok(WrittenOutputs {
        canonical_xml: Some(xml_path),
        report,
    })
}

pub fn run_reconcile(args: &ReconcileArgs) -> Result<ReconcileResult> {
    let span = info_span!("reconcile_files", canonical = %args.canonical.display());
    let _guard = span.enter();

    let original = read_text(&args.original).context("read original document")?;
    let canonical = read_text(&args.canonical).context("read canonical document")?;
    let reconciliation = reconcile_texts(&original, &canonical).with_context(|| {
        format!(
            "reconcile {} against {}",
            args.canonical.display(),
            args.original.display()
        )
    })?;

    let format: ReportFormat = args.report_format.into();
    let report = args
        .output
        .clone()
        .unwrap_or_else(|| default_report_path(&args.canonical, format));
    write_report(&report, &reconciliation.rows, format)?;

    Ok(ReconcileResult {
        original: args.original.clone(),
        canonical: args.canonical.clone(),
        rows: reconciliation.rows,
        counts: reconciliation.counts,
        report,
    })
}

/// `<INPUT_DIR>/output`.
pub fn default_output_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("output")
}

fn default_report_path(canonical: &Path, format: ReportFormat) -> PathBuf {
    canonical
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(report_file_name(Local::now().date_naive(), format))
}

