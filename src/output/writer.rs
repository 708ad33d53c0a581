// src/output/writer.rs

//! Persists the merged document to its output file.

use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Writes `document` to `path`, creating any missing parent directories.
///
/// Called once, after the whole document has been assembled in memory, so a
/// failed merge never leaves a partial file behind.
///
/// # Errors
/// Returns an I/O error if a parent directory cannot be created or the file
/// cannot be written.
pub fn persist(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))?;
    }
    fs::write(path, document).map_err(|e| io_error_with_path(e, path))?;
    debug!("Wrote {} bytes to {}", document.len(), path.display());
    Ok(())
}
