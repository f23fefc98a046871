//! Integration tests for report and canonical XML output.

use std::fs;

use depmerge_model::{ChangeStatus, GroupId, REPORT_COLUMNS, ReportRow};
use depmerge_report::{ReportFormat, write_canonical_xml, write_report, write_report_to};

fn rows() -> Vec<ReportRow> {
    vec![
        ReportRow {
            serial: 1,
            value: "1".to_string(),
            original_name: "A".to_string(),
            final_group_name: "A,B".to_string(),
            original_group_id: Some(GroupId::new(1)),
            final_group_id: GroupId::new(4),
            group_status: ChangeStatus::Modified,
            dependency_status: ChangeStatus::NonModified,
            original_dependents: "d1:X".to_string(),
            final_dependents: "d1:X".to_string(),
        },
        ReportRow {
            serial: 2,
            value: "9".to_string(),
            original_name: String::new(),
            final_group_name: "A,B".to_string(),
            original_group_id: None,
            final_group_id: GroupId::new(4),
            group_status: ChangeStatus::Modified,
            dependency_status: ChangeStatus::Modified,
            original_dependents: String::new(),
            final_dependents: "d1:X;d2:Y".to_string(),
        },
    ]
}

fn render(rows: &[ReportRow], format: ReportFormat) -> String {
    let mut buffer = Vec::new();
    write_report_to(&mut buffer, rows, format).expect("write report");
    String::from_utf8(buffer).expect("utf-8 report")
}

#[test]
fn csv_report_snapshot() {
    insta::assert_snapshot!(render(&rows(), ReportFormat::Csv).trim_end(), @r#"
    Sr No,Value ID,Original Value Name,Final Group Name,Original Group ID,Final Group ID,Group Status,Dependency Status,Original Dependents,Final Dependents
    1,1,A,"A,B",G1,G4,Modified,Non-modified,d1:X,d1:X
    2,9,,"A,B",,G4,Modified,Modified,,d1:X;d2:Y
    "#);
}

#[test]
fn empty_csv_report_still_has_header() {
    let text = render(&[], ReportFormat::Csv);
    assert_eq!(text, format!("{}\n", REPORT_COLUMNS.join(",")));
}

#[test]
fn json_report_uses_column_names() {
    let text = render(&rows(), ReportFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    let rows = value.as_array().expect("array of rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Sr No"], 1);
    assert_eq!(rows[0]["Original Group ID"], "G1");
    assert_eq!(rows[1]["Original Group ID"], "");
    assert_eq!(rows[1]["Group Status"], "Modified");
    assert_eq!(rows[0]["Dependency Status"], "Non-modified");
}

#[test]
fn writes_files_into_new_directories() {
    let dir = tempfile::tempdir().expect("temp dir");
    let xml_path = dir.path().join("out").join("cleaned_dependents.xml");
    let report_path = dir.path().join("out").join("report.csv");

    write_canonical_xml(&xml_path, "<dependents/>\n").expect("write xml");
    write_report(&report_path, &rows(), ReportFormat::Csv).expect("write report");

    assert_eq!(
        fs::read_to_string(&xml_path).expect("read xml"),
        "<dependents/>\n"
    );
    let report = fs::read_to_string(&report_path).expect("read report");
    assert_eq!(report.lines().count(), 3);
}
