use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use depmerge_model::{ChangeStatus, REPORT_COLUMNS, ReconcileCounts, ReportRow};

use depmerge_cli::types::{CanonicalizeResult, ReconcileResult};

pub fn print_canonicalize_summary(
    result: &CanonicalizeResult,
    preview: Option<usize>,
    show_rows: bool,
) {
    println!("Input: {}", result.input.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Original"),
        header_cell("Canonical"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let original = result.summary.original;
    let canonical = result.summary.canonical;
    for (label, before, after) in [
        ("Option Count", original.options, canonical.options),
        ("Dependent Count", original.dependents, canonical.dependents),
        (
            "Distinct Values",
            original.distinct_values,
            canonical.distinct_values,
        ),
    ] {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(before),
            delta_cell(before, after),
        ]);
    }
    println!("{table}");
    println!("{}", reconcile_line(&result.summary.reconcile));

    if let Some(lines) = preview {
        println!();
        println!("Canonical XML:");
        println!("{}", preview_text(&result.xml, lines));
    }
    if show_rows {
        print_rows(&result.rows);
    }

    match (&result.canonical_xml, &result.report) {
        (None, None) => println!("Dry run: nothing written to {}", result.output_dir.display()),
        (xml, report) => {
            if let Some(path) = xml {
                println!("Canonical XML: {}", path.display());
            }
            if let Some(path) = report {
                println!("Change report: {}", path.display());
            }
        }
    }
}

pub fn print_reconcile_summary(result: &ReconcileResult, show_rows: bool) {
    println!("Original: {}", result.original.display());
    println!("Canonical: {}", result.canonical.display());
    println!("{}", reconcile_line(&result.counts));
    if show_rows {
        print_rows(&result.rows);
    }
    println!("Change report: {}", result.report.display());
}

fn print_rows(rows: &[ReportRow]) {
    if rows.is_empty() {
        println!("No report rows.");
        return;
    }
    let mut table = Table::new();
    table.set_header(REPORT_COLUMNS.iter().map(|name| header_cell(name)));
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in rows {
        let cells = row.cells();
        table.add_row(cells.into_iter().enumerate().map(|(index, text)| {
            match index {
                6 => status_cell(row.group_status),
                7 => status_cell(row.dependency_status),
                _ if text.is_empty() => dim_cell("-"),
                _ => Cell::new(text),
            }
        }));
    }
    println!();
    println!("{table}");
}

fn reconcile_line(counts: &ReconcileCounts) -> String {
    format!(
        "Groups: {} kept an original id, {} new ids. Rows: {} total, {} regrouped, {} with changed dependents.",
        counts.reused_ids,
        counts.new_ids,
        counts.rows,
        counts.group_modified,
        counts.dependency_modified
    )
}

/// First `lines` lines of `xml`, with `...` appended when truncated.
pub(crate) fn preview_text(xml: &str, lines: usize) -> String {
    let total = xml.lines().count();
    let mut text = xml.lines().take(lines).collect::<Vec<_>>().join("\n");
    if total > lines {
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str("...");
    }
    text
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn delta_cell(before: usize, after: usize) -> Cell {
    if after < before {
        Cell::new(after).fg(Color::Green).add_attribute(Attribute::Bold)
    } else if after > before {
        Cell::new(after).fg(Color::Yellow)
    } else {
        Cell::new(after)
    }
}

fn status_cell(status: ChangeStatus) -> Cell {
    match status {
        ChangeStatus::Modified => Cell::new(status).fg(Color::Yellow),
        ChangeStatus::NonModified => dim_cell(status),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
