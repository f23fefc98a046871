//! Canonical XML serialization of merged groups.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use depmerge_model::MergedGroup;

/// Root element of every canonical document.
pub const CANONICAL_ROOT_TAG: &str = "dependents";

/// `type` attribute written on every canonical `<dependent>`.
pub const DEPENDENT_TYPE: &str = "0";

/// Formatting options for canonical XML. Formatting never changes meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlOptions {
    /// Spaces per nesting level; zero writes everything on one line.
    pub indent: usize,
    /// Emit an `<?xml ...?>` declaration.
    pub declaration: bool,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: false,
        }
    }
}

/// Serialize merged groups as a canonical `<dependents>` document.
///
/// `root_attributes` are copied verbatim onto the root element. Dependent
/// identifiers come out in lexicographic order; names resolve through
/// `dependent_names` and fall back to the empty string.
pub fn rebuild_xml(
    root_attributes: &[(String, String)],
    groups: &[MergedGroup],
    dependent_names: &BTreeMap<String, String>,
    options: &XmlOptions,
) -> Result<String> {
    let mut xml = if options.indent > 0 {
        Writer::new_with_indent(Vec::new(), b' ', options.indent)
    } else {
        Writer::new(Vec::new())
    };
    if options.declaration {
        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .context("write xml declaration")?;
    }

    let mut root = BytesStart::new(CANONICAL_ROOT_TAG);
    for (name, value) in root_attributes {
        root.push_attribute((name.as_str(), value.as_str()));
    }
    if groups.is_empty() {
        xml.write_event(Event::Empty(root))
            .context("write empty root")?;
        return finish(xml);
    }
    xml.write_event(Event::Start(root)).context("write root")?;

    for group in groups {
        let names = group.joined_names();
        let values = group.joined_values();
        let mut option = BytesStart::new("option");
        option.push_attribute(("name", names.as_str()));
        option.push_attribute(("value", values.as_str()));
        if group.dependents.is_empty() {
            xml.write_event(Event::Empty(option))
                .with_context(|| format!("write option {names}"))?;
            continue;
        }
        xml.write_event(Event::Start(option))
            .with_context(|| format!("write option {names}"))?;
        for id in &group.dependents {
            let name = dependent_names.get(id).map_or("", String::as_str);
            let mut dependent = BytesStart::new("dependent");
            dependent.push_attribute(("type", DEPENDENT_TYPE));
            dependent.push_attribute(("id", id.as_str()));
            dependent.push_attribute(("name", name));
            dependent.push_attribute(("reset", "false"));
            dependent.push_attribute(("retainonedit", "false"));
            xml.write_event(Event::Empty(dependent))
                .with_context(|| format!("write dependent {id}"))?;
        }
        xml.write_event(Event::End(BytesEnd::new("option")))
            .context("close option")?;
    }

    xml.write_event(Event::End(BytesEnd::new(CANONICAL_ROOT_TAG)))
        .context("close root")?;
    finish(xml)
}

fn finish(xml: Writer<Vec<u8>>) -> Result<String> {
    let mut text = String::from_utf8(xml.into_inner()).context("canonical xml is not utf-8")?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use depmerge_model::DependentSet;

    use super::*;

    fn group(names: &[&str], values: &[&str], dependents: &[&str]) -> MergedGroup {
        let set: DependentSet = dependents.iter().map(|s| s.to_string()).collect();
        let mut group = MergedGroup::new(set, 0);
        for name in names {
            group.push_name(name);
        }
        for value in values {
            group.push_value(value);
        }
        group
    }

    fn names(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect()
    }

    #[test]
    fn dependents_are_sorted_and_unknown_names_empty() {
        let xml = rebuild_xml(
            &[],
            &[group(&["A"], &["1"], &["d2", "d10", "d1"])],
            &names(&[("d1", "X"), ("d2", "Y")]),
            &XmlOptions::default(),
        )
        .expect("rebuild");
        let d1 = xml.find("id=\"d1\"").expect("d1");
        let d10 = xml.find("id=\"d10\"").expect("d10");
        let d2 = xml.find("id=\"d2\"").expect("d2");
        assert!(d1 < d10 && d10 < d2);
        assert!(xml.contains(r#"id="d10" name="""#));
    }

    #[test]
    fn empty_document_is_a_self_closed_root() {
        let xml = rebuild_xml(
            &[("version".to_string(), "3".to_string())],
            &[],
            &BTreeMap::new(),
            &XmlOptions::default(),
        )
        .expect("rebuild");
        assert_eq!(xml, "<dependents version=\"3\"/>\n");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let xml = rebuild_xml(
            &[],
            &[group(&["A&B"], &["<1>"], &[])],
            &BTreeMap::new(),
            &XmlOptions::default(),
        )
        .expect("rebuild");
        assert!(xml.contains("A&amp;B"));
        assert!(xml.contains("&lt;1&gt;"));
    }

    #[test]
    fn unindented_output_is_single_line() {
        let xml = rebuild_xml(
            &[],
            &[group(&["A"], &["1"], &["d1"])],
            &names(&[("d1", "X")]),
            &XmlOptions {
                indent: 0,
                declaration: true,
            },
        )
        .expect("rebuild");
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert_eq!(xml.trim_end().lines().count(), 1);
    }
}
