//! Capture file: where the raw dispatcher persists the decoded response body.
//!
//! Single-writer, write-once lifecycle. The file is truncated and rewritten
//! on every run; concurrent runs racing on the same path are not supported.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Truncates/creates `path` and writes `text` verbatim.
pub fn write_capture(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)
        .with_context(|| format!("failed to write capture file {}", path.display()))?;
    tracing::info!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
