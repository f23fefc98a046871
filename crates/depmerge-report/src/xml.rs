use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::common::ensure_parent;

/// Write canonical XML text to `path`, creating parent directories.
pub fn write_canonical_xml(path: &Path, xml: &str) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, xml).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), bytes = xml.len(), "wrote canonical xml");
    Ok(())
}
