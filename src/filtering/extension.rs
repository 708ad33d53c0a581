// src/filtering/extension.rs

use crate::constants::MARKDOWN_EXTENSION;
use std::path::Path;

/// Checks whether a path names a Markdown file.
///
/// The check is case-sensitive on the file name: `notes.md` passes,
/// `NOTES.MD` and `notes.markdown` do not.
///
/// # Examples
///
/// ```
/// use mdmerge::filtering::is_markdown;
/// use std::path::Path;
///
/// assert!(is_markdown(Path::new("docs/intro.md")));
/// assert!(!is_markdown(Path::new("docs/INTRO.MD")));
/// assert!(!is_markdown(Path::new("docs/image.png")));
/// ```
pub fn is_markdown(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(MARKDOWN_EXTENSION))
        .unwrap_or(false)
}
