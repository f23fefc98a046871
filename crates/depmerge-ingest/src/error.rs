//! Error types for option document ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an option document.
///
/// Structural looseness (missing attributes, mismatched name/value counts)
/// is never an error; only unreadable files and malformed XML are.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("XML file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not well-formed XML.
    #[error("malformed XML in {origin}")]
    XmlParse {
        origin: String,
        #[source]
        source: roxmltree::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
