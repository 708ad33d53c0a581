//! Defines core data structures used throughout the merge pipeline.
//!
//! `FileInfo` is produced by discovery and never mutated afterwards.
//! `MergeNode` and `TocEntry` are transient values built during assembly.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A Markdown file discovered under the input directory.
///
/// # Examples
///
/// ```
/// use mdmerge::core_types::FileInfo;
/// use std::path::PathBuf;
/// use std::time::SystemTime;
///
/// let file_info = FileInfo {
///     absolute_path: PathBuf::from("/docs/guide/intro.md"),
///     relative_path: PathBuf::from("guide/intro.md"),
///     created: SystemTime::UNIX_EPOCH,
///     modified: SystemTime::UNIX_EPOCH,
/// };
///
/// assert_eq!(file_info.depth(), 1);
/// assert_eq!(file_info.relative_path_string(), "guide/intro.md");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// The absolute path to the file on the filesystem.
    pub absolute_path: PathBuf,
    /// The path relative to the input directory. This is the stable identity
    /// used for ordering, ignore matching and manifest lookups.
    pub relative_path: PathBuf,
    /// Creation (birth) time. Falls back to `modified` where the platform
    /// does not report a birth time.
    pub created: SystemTime,
    /// Last modification time.
    pub modified: SystemTime,
}

impl FileInfo {
    /// The relative path rendered with `/` separators on every platform.
    pub fn relative_path_string(&self) -> String {
        path_to_slash(&self.relative_path)
    }

    /// Number of directory segments between the input root and this file's
    /// containing directory. Root files have depth 0.
    pub fn depth(&self) -> usize {
        self.relative_path
            .parent()
            .map(|parent| parent.components().count())
            .unwrap_or(0)
    }
}

/// A unit of assembly: either a synthesized directory heading or a file section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeNode<'a> {
    /// Heading for a directory, emitted once before the first file it contains.
    Directory {
        /// Depth of the directory itself (top-level directories are depth 0).
        depth: usize,
        /// Raw directory name (last path segment).
        name: String,
    },
    /// A source file's section.
    File {
        /// Depth of the file's containing directory.
        depth: usize,
        /// The file to merge.
        file: &'a FileInfo,
    },
}

/// One line of the table of contents. Entries are kept in the same order as
/// the document sections they point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Display title.
    pub title: String,
    /// URL-safe fragment identifier, unique across the document once
    /// [`unique_anchors`](crate::output::toc::unique_anchors) has run.
    pub anchor: String,
    /// Relative path of the source file, or `"<dir>/"` for directories.
    pub source: String,
    /// Nesting depth (0 = top level).
    pub depth: usize,
    /// True if this entry represents a directory heading rather than a file.
    pub is_directory: bool,
}

/// Renders a path with `/` separators regardless of the host platform.
pub(crate) fn path_to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
