//! Handles the per-file transformation stage of the merge pipeline.
//!
//! Every transformation here is a pure function over text, except
//! [`process_file`], which reads the file and chains them: relative
//! references are rewritten, the title is extracted, then headings are
//! shifted. The title is taken before the shift so that a leading `# `
//! heading is still recognised.

use crate::core_types::FileInfo;
use crate::errors::Result;
use log::debug;
use std::path::Path;

mod content_reader;
mod headings;
mod links;
mod title;

pub use headings::offset_headings;
pub use links::rewrite_paths;
pub use title::{extract_title, format_dir_name, slugify};

use content_reader::read_file_content;

/// A file's content after every per-file transformation, ready to be placed
/// in the merged document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    /// Display title (first `# ` heading or derived from the file name).
    pub title: String,
    /// Slug of `title`. Not yet deduplicated against other sections.
    pub anchor: String,
    /// Content with references rewritten and headings shifted.
    pub content: String,
}

/// Reads `file` and prepares it for merging.
///
/// `heading_offset` is the total shift to apply (nesting depth plus any
/// global offset). `output_dir` is the directory the merged document will
/// live in.
///
/// # Errors
/// Returns an I/O error if the file cannot be read as UTF-8.
pub fn process_file(
    file: &FileInfo,
    heading_offset: usize,
    output_dir: &Path,
) -> Result<ProcessedFile> {
    let raw = read_file_content(&file.absolute_path)?;
    let source_dir = file.absolute_path.parent().unwrap_or(output_dir);

    let rewritten = rewrite_paths(&raw, source_dir, output_dir);
    let title = extract_title(&rewritten, &file.relative_path_string());
    let anchor = slugify(&title);
    let content = offset_headings(&rewritten, heading_offset);

    debug!(
        "Processed '{}' (title: '{}', heading offset: {})",
        file.relative_path.display(),
        title,
        heading_offset
    );
    Ok(ProcessedFile {
        title,
        anchor,
        content,
    })
}
