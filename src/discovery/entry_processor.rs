// src/discovery/entry_processor.rs

use super::DiscoveryOptions;
use crate::core_types::{path_to_slash, FileInfo};
use crate::errors::Result;
use crate::filtering::is_markdown;
use ignore::DirEntry;
use log::{debug, trace};
use std::path::Path;

/// Processes a single directory entry from the walk.
///
/// Returns `Ok(Some(FileInfo))` for a regular `.md` file that is not ignored,
/// `Ok(None)` for anything filtered out (the root itself, directories,
/// symlinks, other extensions, ignored paths).
///
/// # Errors
/// A walker error or a metadata failure is returned immediately; discovery
/// does not skip over unreadable entries.
pub(super) fn process_direntry(
    entry_result: Result<DirEntry, ignore::Error>,
    root: &Path,
    opts: &DiscoveryOptions,
) -> Result<Option<FileInfo>> {
    let entry = entry_result?;

    if entry.depth() == 0 {
        return Ok(None);
    }

    let absolute_path = entry.path();
    trace!("Processing entry: {}", absolute_path.display());

    // --- 1. Regular files only (symlinks are not followed) ---
    if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
        trace!("Skipping non-file entry: {}", absolute_path.display());
        return Ok(None);
    }

    // --- 2. Markdown extension ---
    if !is_markdown(absolute_path) {
        trace!("Skipping non-Markdown file: {}", absolute_path.display());
        return Ok(None);
    }

    // --- 3. Ignore patterns ---
    let relative_path = absolute_path
        .strip_prefix(root)
        .unwrap_or(absolute_path)
        .to_path_buf();
    if !opts.ignore.is_empty() && opts.ignore.is_ignored(&path_to_slash(&relative_path)) {
        debug!("Skipping ignored file: {}", relative_path.display());
        return Ok(None);
    }

    // --- 4. Timestamps ---
    let metadata = entry.metadata()?;
    let modified = metadata
        .modified()
        .map_err(|e| crate::errors::io_error_with_path(e, absolute_path))?;
    let created = metadata.created().unwrap_or(modified);

    Ok(Some(FileInfo {
        absolute_path: absolute_path.to_path_buf(),
        relative_path,
        created,
        modified,
    }))
}
