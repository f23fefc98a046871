//! Integration tests for option document parsing.

use std::fs;

use depmerge_ingest::{IngestError, parse_document, read_document};
use depmerge_model::DependentRef;

#[test]
fn parses_options_and_dependents() {
    let text = r#"<dependents version="2" kind="list">
  <option name="A, B" value="1,1">
    <dependent id="d1" name="X"/>
    <dependent id="d2" name="Y"/>
  </option>
  <option name="C" value="2"><dependent id="d1" name="X"/></option>
</dependents>"#;
    let document = parse_document(text).expect("parse document");

    assert_eq!(document.root_tag, "dependents");
    assert_eq!(
        document.root_attributes,
        vec![
            ("version".to_string(), "2".to_string()),
            ("kind".to_string(), "list".to_string()),
        ]
    );
    assert_eq!(document.options.len(), 2);
    let first = &document.options[0];
    assert_eq!(first.names, vec!["A", "B"]);
    assert_eq!(first.values, vec!["1", "1"]);
    assert_eq!(
        first.dependents,
        vec![DependentRef::new("d1", "X"), DependentRef::new("d2", "Y")]
    );
}

#[test]
fn missing_attributes_read_as_empty() {
    let text = r#"<root><option><dependent/></option><option name="A"/></root>"#;
    let document = parse_document(text).expect("parse document");

    assert_eq!(document.root_tag, "root");
    assert!(document.options[0].names.is_empty());
    assert!(document.options[0].values.is_empty());
    assert_eq!(document.options[0].dependents, vec![DependentRef::new("", "")]);
    assert_eq!(document.options[1].names, vec!["A"]);
    assert!(document.options[1].dependents.is_empty());
}

#[test]
fn ignores_nested_and_foreign_elements() {
    let text = r#"<dependents>
  <!-- comment -->
  <group><option name="hidden" value="0"/></group>
  <option name="A" value="1">
    <note><dependent id="deep" name="Z"/></note>
    <dependent id="d1" name="X"/>
  </option>
</dependents>"#;
    let document = parse_document(text).expect("parse document");

    assert_eq!(document.options.len(), 1);
    assert_eq!(document.options[0].dependents, vec![DependentRef::new("d1", "X")]);
}

#[test]
fn malformed_xml_is_a_parse_error() {
    let error = parse_document("<dependents><option name=\"A\"></dependents>")
        .expect_err("unclosed option must fail");
    assert!(matches!(error, IngestError::XmlParse { .. }));
    assert!(error.to_string().starts_with("malformed XML in input"));
}

#[test]
fn empty_input_is_a_parse_error() {
    assert!(matches!(
        parse_document(""),
        Err(IngestError::XmlParse { .. })
    ));
}

#[test]
fn reads_document_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("input.xml");
    fs::write(&path, r#"<dependents><option name="A" value="1"/></dependents>"#)
        .expect("write input");

    let document = read_document(&path).expect("read document");
    assert_eq!(document.options.len(), 1);

    let missing = read_document(&dir.path().join("missing.xml")).expect_err("missing file");
    assert!(matches!(missing, IngestError::FileNotFound { .. }));
}

#[test]
fn root_attributes_keep_prefixes_and_declarations() {
    let text = r#"<dependents xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="x.xsd" xml:lang="en" lang="fr"/>"#;
    let document = parse_document(text).expect("parse document");

    assert_eq!(
        document.root_attributes,
        vec![
            (
                "xmlns:xsi".to_string(),
                "http://www.w3.org/2001/XMLSchema-instance".to_string()
            ),
            ("xsi:noNamespaceSchemaLocation".to_string(), "x.xsd".to_string()),
            ("xml:lang".to_string(), "en".to_string()),
            ("lang".to_string(), "fr".to_string()),
        ]
    );
}

#[test]
fn namespaced_options_and_dependents_are_not_records() {
    let text = r#"<dependents xmlns:x="urn:x">
  <x:option name="hidden" value="0"/>
  <option name="A" value="1">
    <x:dependent id="foreign" name="F"/>
    <dependent id="d1" name="X"/>
  </option>
</dependents>"#;
    let document = parse_document(text).expect("parse document");

    assert_eq!(document.options.len(), 1);
    assert_eq!(document.options[0].names, vec!["A"]);
    assert_eq!(document.options[0].dependents, vec![DependentRef::new("d1", "X")]);
}

#[test]
fn parse_error_message_does_not_repeat_the_cause() {
    let error = parse_document("<a><b></a>").expect_err("mismatched tags");
    let cause = std::error::Error::source(&error)
        .expect("parser error as source")
        .to_string();
    assert_eq!(error.to_string(), "malformed XML in input");
    assert!(!error.to_string().contains(&cause));
}
