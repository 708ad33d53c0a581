//! Discovers Markdown files under the input directory.
use crate::core_types::FileInfo;
use crate::errors::{io_error_with_path, Result};
use crate::filtering::IgnoreSet;
use log::debug;
use std::io;
use std::path::Path;

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::build_walker;

/// Options controlling a single discovery run.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// Whether to descend into subdirectories.
    pub recursive: bool,
    /// Patterns whose matches are skipped (files) or pruned (directories).
    pub ignore: IgnoreSet,
}

/// Walks `root` and returns every Markdown file that is not ignored.
///
/// The walk is sequential. Directories whose relative path plus a trailing
/// `/` matches an ignore pattern are not descended into. The returned order
/// carries no guarantee; ordering is the next stage's job.
///
/// # Errors
/// Returns an error if `root` is not a readable directory, or as soon as any
/// entry cannot be enumerated. No partial result is returned.
///
/// # Examples
///
/// ```
/// use mdmerge::discovery::{discover_files, DiscoveryOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempdir()?;
/// fs::write(dir.path().join("intro.md"), "# Intro")?;
/// fs::write(dir.path().join("notes.txt"), "not markdown")?;
///
/// let opts = DiscoveryOptions { recursive: true, ..Default::default() };
/// let files = discover_files(dir.path(), &opts)?;
/// assert_eq!(files.len(), 1);
/// assert_eq!(files[0].relative_path_string(), "intro.md");
/// # Ok(())
/// # }
/// ```
pub fn discover_files(root: &Path, opts: &DiscoveryOptions) -> Result<Vec<FileInfo>> {
    let metadata = std::fs::metadata(root).map_err(|e| io_error_with_path(e, root))?;
    if !metadata.is_dir() {
        return Err(io_error_with_path(
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            root,
        ));
    }

    let mut files = Vec::new();
    for entry_result in build_walker(root, opts) {
        if let Some(file_info) = process_direntry(entry_result, root, opts)? {
            files.push(file_info);
        }
    }

    debug!(
        "Discovery complete. Found {} Markdown files under {}",
        files.len(),
        root.display()
    );
    Ok(files)
}
