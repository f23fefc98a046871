//! XML → [`OptionDocument`] parsing.

use std::path::Path;

use roxmltree::{Attribute, Document, Node, ParsingOptions};
use tracing::{debug, warn};

use depmerge_model::{DependentRef, OptionDocument, OptionRecord};

use crate::error::{IngestError, Result};
use crate::tokens::split_field;

const OPTION_TAG: &str = "option";
const DEPENDENT_TAG: &str = "dependent";
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Parse option document text.
pub fn parse_document(text: &str) -> Result<OptionDocument> {
    parse_document_named(text, "input")
}

/// Parse option document text, naming its origin in errors and logs.
pub fn parse_document_named(text: &str, origin: &str) -> Result<OptionDocument> {
    let parse_options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let xml = Document::parse_with_options(text, parse_options).map_err(|source| {
        IngestError::XmlParse {
            origin: origin.to_string(),
            source,
        }
    })?;
    let root = xml.root_element();
    let root_attributes = qualified_root_attributes(root);
    let options: Vec<OptionRecord> = root
        .children()
        .filter(|node| is_plain_element(*node, OPTION_TAG))
        .map(|node| read_option(node, origin))
        .collect();
    debug!(
        origin,
        root_tag = root.tag_name().name(),
        option_count = options.len(),
        "parsed option document"
    );
    Ok(OptionDocument {
        root_tag: root.tag_name().name().to_string(),
        root_attributes,
        options,
    })
}

/// Read an option document's raw text from disk.
pub fn read_text(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse an option document from disk.
pub fn read_document(path: &Path) -> Result<OptionDocument> {
    let text = read_text(path)?;
    parse_document_named(&text, &path.display().to_string())
}

fn read_option(node: Node<'_, '_>, origin: &str) -> OptionRecord {
    let dependents = node
        .children()
        .filter(|child| is_plain_element(*child, DEPENDENT_TAG))
        .map(|child| {
            let id = child.attribute("id").unwrap_or_default();
            if id.is_empty() {
                warn!(
                    origin,
                    position = %node.document().text_pos_at(child.range().start),
                    "dependent without id"
                );
            }
            DependentRef::new(id, child.attribute("name").unwrap_or_default())
        })
        .collect();
    OptionRecord {
        names: split_field(node.attribute("name").unwrap_or_default()),
        values: split_field(node.attribute("value").unwrap_or_default()),
        dependents,
    }
}

/// Element named `tag` outside any namespace.
fn is_plain_element(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && node.tag_name().namespace().is_none() && node.tag_name().name() == tag
}

/// Namespace declarations followed by attributes, all by qualified name.
fn qualified_root_attributes(root: Node<'_, '_>) -> Vec<(String, String)> {
    let mut attributes: Vec<(String, String)> = root
        .namespaces()
        .filter(|namespace| namespace.uri() != XML_NAMESPACE)
        .map(|namespace| {
            let name = match namespace.name() {
                Some(prefix) => format!("xmlns:{prefix}"),
                None => "xmlns".to_string(),
            };
            (name, namespace.uri().to_string())
        })
        .collect();
    attributes.extend(
        root.attributes()
            .map(|attr| (qualified_name(root, &attr), attr.value().to_string())),
    );
    attributes
}

fn qualified_name(root: Node<'_, '_>, attr: &Attribute<'_, '_>) -> String {
    let prefix = match attr.namespace() {
        None => None,
        Some(XML_NAMESPACE) => Some("xml"),
        Some(uri) => root
            .namespaces()
            .find(|namespace| namespace.uri() == uri && namespace.name().is_some())
            .and_then(|namespace| namespace.name()),
    };
    match prefix {
        Some(prefix) => format!("{prefix}:{}", attr.name()),
        None => attr.name().to_string(),
    }
}
