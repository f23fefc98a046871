//! End-to-end canonicalization: raw XML text in, canonical XML text and the
//! change report out.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use depmerge_ingest::parse_document_named;
use depmerge_model::{DocumentCounts, MergedGroup, OptionDocument, ReportRow, RunSummary};

use crate::flatten::flatten_options;
use crate::merge::merge_groups;
use crate::rebuild::{XmlOptions, rebuild_xml};
use crate::reconcile::{Reconciliation, reconcile};
use crate::unify::unify_dependents;

/// Canonical form of one document.
#[derive(Debug, Clone)]
pub struct Canonicalized {
    pub xml: String,
    pub groups: Vec<MergedGroup>,
}

/// Everything produced by one canonicalization run.
#[derive(Debug, Clone)]
pub struct CanonicalOutput {
    pub xml: String,
    pub groups: Vec<MergedGroup>,
    pub rows: Vec<ReportRow>,
    pub summary: RunSummary,
}

/// Canonicalize a parsed document.
pub fn canonicalize(document: &OptionDocument, options: &XmlOptions) -> Result<Canonicalized> {
    let flattened = flatten_options(&document.options);
    debug!(
        items = flattened.items.len(),
        dependents = flattened.dependent_names.len(),
        names = flattened.name_values.len(),
        "flattened options"
    );
    let unified = unify_dependents(&flattened.items);
    debug!(values = unified.len(), "unified dependents");
    let groups = merge_groups(&flattened.items, &unified);
    debug!(groups = groups.len(), "merged groups");
    let xml = rebuild_xml(
        &document.root_attributes,
        &groups,
        &flattened.dependent_names,
        options,
    )
    .context("rebuild canonical xml")?;
    Ok(Canonicalized { xml, groups })
}

/// Canonicalize raw document text and reconcile the result against it.
///
/// Nothing is produced if the input is not well-formed XML.
pub fn canonicalize_text(text: &str, options: &XmlOptions) -> Result<CanonicalOutput> {
    let span = info_span!("canonicalize");
    let _guard = span.enter();
    let start = Instant::now();

    let original = parse_document_named(text, "original document")
        .context("parse original document")?;
    let Canonicalized { xml, groups } = canonicalize(&original, options)?;
    let canonical = parse_document_named(&xml, "canonical document")
        .context("re-parse canonical document")?;
    let Reconciliation { rows, counts, .. } = reconcile(&original, &canonical);

    let summary = RunSummary {
        original: DocumentCounts::of(&original),
        canonical: DocumentCounts::of(&canonical),
        reconcile: counts,
    };
    info!(
        original_options = summary.original.options,
        canonical_options = summary.canonical.options,
        rows = rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "canonicalization complete"
    );
    Ok(CanonicalOutput {
        xml,
        groups,
        rows,
        summary,
    })
}

/// Reconcile two existing documents: an original and its canonical form.
pub fn reconcile_texts(original: &str, canonical: &str) -> Result<Reconciliation> {
    let span = info_span!("reconcile");
    let _guard = span.enter();
    let original = parse_document_named(original, "original document")
        .context("parse original document")?;
    let canonical = parse_document_named(canonical, "canonical document")
        .context("parse canonical document")?;
    let reconciliation = reconcile(&original, &canonical);
    info!(
        rows = reconciliation.rows.len(),
        new_ids = reconciliation.counts.new_ids,
        "reconciliation complete"
    );
    Ok(reconciliation)
}
