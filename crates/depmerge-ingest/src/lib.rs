//! Option document ingestion.
//!
//! Reads raw XML text into an [`OptionDocument`](depmerge_model::OptionDocument)
//! and splits the comma-separated `name`/`value` attributes into tokens.

pub mod document;
pub mod error;
pub mod tokens;

pub use document::{parse_document, parse_document_named, read_document, read_text};
pub use error::{IngestError, Result};
pub use tokens::split_field;
