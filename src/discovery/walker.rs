// src/discovery/walker.rs

use super::DiscoveryOptions;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::Path;

/// Configures and builds a sequential `ignore::Walk` over `root`.
///
/// All of the walker's standard filters (hidden files, `.gitignore`, …) are
/// disabled: only the recursion flag and the custom ignore patterns decide
/// what is visited. Entries are sorted by file name so traversal is
/// deterministic.
pub(super) fn build_walker(root: &Path, opts: &DiscoveryOptions) -> ignore::Walk {
    let mut walker_builder = WalkBuilder::new(root);
    walker_builder
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));
    debug!("Configuring WalkBuilder: standard_filters disabled, sorted by file name.");

    if !opts.recursive {
        // Max depth 1 means only the immediate children of the root.
        walker_builder.max_depth(Some(1));
        debug!("Recursion disabled (max depth: 1).");
    } else {
        debug!("Recursion enabled (no max depth).");
    }

    // Directory pruning only happens when there is something to match against.
    if !opts.ignore.is_empty() {
        debug!(
            "Adding directory pruning filter for {} ignore patterns.",
            opts.ignore.len()
        );
        let root = root.to_path_buf();
        let ignore_set = opts.ignore.clone();

        walker_builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
            if !is_dir || entry.depth() == 0 {
                return true;
            }
            let Ok(relative_path) = entry.path().strip_prefix(&root) else {
                return true;
            };
            let candidate = format!(
                "{}/",
                crate::core_types::path_to_slash(relative_path)
            );
            if ignore_set.is_ignored(&candidate) {
                debug!("Pruning ignored directory '{}'", candidate);
                return false;
            }
            trace!("Descending into '{}'", candidate);
            true
        });
    }

    walker_builder.build()
}
