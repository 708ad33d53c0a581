// src/output/mod.rs

//! Assembles the merged document.
//!
//! [`merge`] drives the whole pipeline: path resolution, discovery,
//! ordering, per-file processing, anchor deduplication, table of contents
//! and the optional write to disk. Everything it accumulates lives for one
//! call only, so concurrent merges never share state.

use crate::config::{resolve_paths, Config, ResolvedPaths};
use crate::constants::MAX_HEADING_LEVEL;
use crate::core_types::{FileInfo, MergeNode, TocEntry};
use crate::discovery::{discover_files, DiscoveryOptions};
use crate::errors::{Error, Result};
use crate::filtering::IgnoreSet;
use crate::ordering::order_files;
use crate::processing::{format_dir_name, process_file, slugify};
use log::{debug, info};
use std::collections::HashSet;
use std::path::PathBuf;

pub mod toc;
pub mod writer;

/// Merges every Markdown file under `config.input_dir` into one document.
///
/// The document is returned and, when `config.output_path` is set, also
/// written there (parent directories are created as needed). If the output
/// file lies inside the input directory it is left out of discovery.
///
/// # Errors
/// * [`Error::NoFilesFound`] if discovery yields nothing. No file is written.
/// * [`Error::ManifestNotFound`] for the `index` strategy without a usable
///   `index.json`.
/// * [`Error::Io`] / [`Error::Walk`] for any filesystem failure.
pub fn merge(config: &Config) -> Result<String> {
    let paths = resolve_paths(config)?;
    debug!(
        "Merging {} (output dir: {})",
        paths.input_dir.display(),
        paths.output_dir.display()
    );

    let ordered = collect_files(config, &paths)?;
    let nodes = build_merge_nodes(&ordered);

    // Entries and bodies stay index-aligned; the anchor marker is rendered
    // from the entry once anchors are final.
    let mut entries: Vec<TocEntry> = Vec::with_capacity(nodes.len());
    let mut bodies: Vec<String> = Vec::with_capacity(nodes.len());
    for node in &nodes {
        match node {
            MergeNode::Directory { depth, name } => {
                let title = format_dir_name(name);
                let level = (depth + 1 + config.heading_offset).min(MAX_HEADING_LEVEL);
                bodies.push(format!("{} {}", "#".repeat(level), title));
                entries.push(TocEntry {
                    anchor: slugify(&title),
                    title,
                    source: format!("{}/", name),
                    depth: *depth,
                    is_directory: true,
                });
            }
            MergeNode::File { depth, file } => {
                let processed =
                    process_file(file, depth + config.heading_offset, &paths.output_dir)?;
                bodies.push(processed.content);
                entries.push(TocEntry {
                    title: processed.title,
                    anchor: processed.anchor,
                    source: file.relative_path_string(),
                    depth: *depth,
                    is_directory: false,
                });
            }
        }
    }

    let entries = toc::unique_anchors(entries);
    let sections: Vec<String> = entries
        .iter()
        .zip(bodies)
        .map(|(entry, body)| format!("<a id=\"{}\"></a>\n\n{}", entry.anchor, body))
        .collect();

    let mut document = String::new();
    if config.toc {
        document.push_str(&toc::generate_toc(&entries));
        document.push_str("\n\n");
    }
    document.push_str(&sections.join(&config.separator));

    if let Some(output_path) = &paths.output_path {
        writer::persist(output_path, &document)?;
    }
    info!(
        "Merged {} files ({} sections)",
        ordered.len(),
        entries.len()
    );
    Ok(document)
}

/// Discovers and orders the files a merge of `config` would include.
///
/// The output file is added to the ignore patterns when it lies inside the
/// input directory.
pub(crate) fn collect_files(config: &Config, paths: &ResolvedPaths) -> Result<Vec<FileInfo>> {
    let mut patterns = config.ignore_patterns.clone();
    if let Some(rel) = &paths.self_ignore {
        patterns.push(rel.clone());
    }
    let discovery_opts = DiscoveryOptions {
        recursive: config.recursive,
        ignore: IgnoreSet::new(&patterns),
    };

    let files = discover_files(&paths.input_dir, &discovery_opts)?;
    if files.is_empty() {
        return Err(Error::NoFilesFound {
            dir: paths.input_dir.clone(),
        });
    }
    order_files(files, config.order, &paths.input_dir)
}

/// Turns the ordered file list into the sequence of sections to render.
///
/// When every file sits at the input root the result is one file node per
/// file. Otherwise a directory node is inserted for each ancestor directory
/// the first time one of its files appears, so the caller's ordering is
/// preserved and no directory is announced twice.
///
/// # Examples
///
/// ```
/// use mdmerge::core_types::{FileInfo, MergeNode};
/// use mdmerge::output::build_merge_nodes;
/// use std::path::PathBuf;
/// use std::time::SystemTime;
///
/// let files: Vec<FileInfo> = ["guide/setup.md", "readme.md"]
///     .iter()
///     .map(|rel| FileInfo {
///         absolute_path: PathBuf::from("/docs").join(rel),
///         relative_path: PathBuf::from(rel),
///         created: SystemTime::UNIX_EPOCH,
///         modified: SystemTime::UNIX_EPOCH,
///     })
///     .collect();
///
/// let nodes = build_merge_nodes(&files);
/// assert_eq!(nodes.len(), 3);
/// assert!(matches!(&nodes[0], MergeNode::Directory { depth: 0, name } if name == "guide"));
/// assert!(matches!(nodes[1], MergeNode::File { depth: 1, .. }));
/// assert!(matches!(nodes[2], MergeNode::File { depth: 0, .. }));
/// ```
pub fn build_merge_nodes(ordered: &[FileInfo]) -> Vec<MergeNode<'_>> {
    if ordered.iter().all(|file| file.depth() == 0) {
        return ordered
            .iter()
            .map(|file| MergeNode::File { depth: 0, file })
            .collect();
    }

    let mut nodes = Vec::with_capacity(ordered.len());
    let mut seen_dirs: HashSet<PathBuf> = HashSet::new();
    for file in ordered {
        if let Some(parent) = file.relative_path.parent() {
            let mut accumulated = PathBuf::new();
            for (depth, component) in parent.components().enumerate() {
                accumulated.push(component);
                if seen_dirs.insert(accumulated.clone()) {
                    nodes.push(MergeNode::Directory {
                        depth,
                        name: component.as_os_str().to_string_lossy().into_owned(),
                    });
                }
            }
        }
        nodes.push(MergeNode::File {
            depth: file.depth(),
            file,
        });
    }
    nodes
}
