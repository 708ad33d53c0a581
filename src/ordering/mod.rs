//! Orders discovered files according to the configured strategy.

use crate::config::OrderStrategy;
use crate::core_types::FileInfo;
use crate::errors::Result;
use log::debug;
use std::collections::HashMap;
use std::path::Path;

mod manifest;
mod natural;

pub use manifest::{normalize_manifest_path, IndexManifest};
pub use natural::natural_cmp;

/// Returns `files` in the order selected by `strategy`.
///
/// * `Filename`: stable natural sort of the relative paths.
/// * `Created`: stable sort by creation time, oldest first.
/// * `Index`: order listed in `root/index.json`, unlisted files appended in
///   filename order.
///
/// # Errors
/// Only the `Index` strategy can fail, when the manifest is missing or invalid.
///
/// # Examples
///
/// ```
/// use mdmerge::config::OrderStrategy;
/// use mdmerge::core_types::FileInfo;
/// use mdmerge::ordering::order_files;
/// use std::path::{Path, PathBuf};
/// use std::time::SystemTime;
///
/// let files: Vec<FileInfo> = ["file2.md", "file10.md", "file1.md"]
///     .iter()
///     .map(|name| FileInfo {
///         absolute_path: PathBuf::from("/docs").join(name),
///         relative_path: PathBuf::from(name),
///         created: SystemTime::UNIX_EPOCH,
///         modified: SystemTime::UNIX_EPOCH,
///     })
///     .collect();
///
/// let ordered = order_files(files, OrderStrategy::Filename, Path::new("/docs")).unwrap();
/// let names: Vec<String> = ordered.iter().map(|f| f.relative_path_string()).collect();
/// assert_eq!(names, ["file1.md", "file2.md", "file10.md"]);
/// ```
pub fn order_files(
    files: Vec<FileInfo>,
    strategy: OrderStrategy,
    root: &Path,
) -> Result<Vec<FileInfo>> {
    debug!("Ordering {} files by '{}'", files.len(), strategy);
    match strategy {
        OrderStrategy::Filename => Ok(order_by_filename(files)),
        OrderStrategy::Created => Ok(order_by_created(files)),
        OrderStrategy::Index => {
            let manifest = IndexManifest::load(root)?;
            Ok(order_by_manifest(files, &manifest))
        }
    }
}

fn order_by_filename(mut files: Vec<FileInfo>) -> Vec<FileInfo> {
    files.sort_by(|a, b| natural_cmp(&a.relative_path_string(), &b.relative_path_string()));
    files
}

fn order_by_created(mut files: Vec<FileInfo>) -> Vec<FileInfo> {
    files.sort_by_key(|f| f.created);
    files
}

/// Applies a parsed manifest to the discovered files.
pub fn order_by_manifest(files: Vec<FileInfo>, manifest: &IndexManifest) -> Vec<FileInfo> {
    let mut remaining: HashMap<String, FileInfo> = files
        .into_iter()
        .map(|f| (f.relative_path_string(), f))
        .collect();

    for excluded in manifest.exclude.iter().flatten() {
        if remaining.remove(&normalize_manifest_path(excluded)).is_some() {
            debug!("Manifest excludes '{}'", excluded);
        }
    }

    let mut ordered = Vec::with_capacity(remaining.len());
    for listed in &manifest.order {
        match remaining.remove(&normalize_manifest_path(listed)) {
            Some(file) => ordered.push(file),
            None => debug!("Manifest entry '{}' has no matching file, skipping", listed),
        }
    }

    let tail = order_by_filename(remaining.into_values().collect());
    if !tail.is_empty() {
        debug!("Appending {} files not listed in the manifest", tail.len());
    }
    ordered.extend(tail);
    ordered
}
