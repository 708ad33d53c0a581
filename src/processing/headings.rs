// src/processing/headings.rs

use crate::constants::MAX_HEADING_LEVEL;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// An ATX heading marker at the start of a line: 1-6 hashes followed by a space or tab.
static HEADING_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(#{1,6})([ \t])").unwrap());

/// Shifts every ATX heading in `content` down by `offset` levels, capping at
/// level 6.
///
/// Lines with seven or more hashes are not headings and are left alone, as
/// is a bare `#` with no following text.
///
/// # Examples
///
/// ```
/// use mdmerge::processing::offset_headings;
///
/// assert_eq!(offset_headings("# Title\n## Sub", 1), "## Title\n### Sub");
/// assert_eq!(offset_headings("###### Deep", 3), "###### Deep");
/// assert_eq!(offset_headings("# Same", 0), "# Same");
/// ```
pub fn offset_headings(content: &str, offset: usize) -> String {
    if offset == 0 {
        return content.to_string();
    }
    HEADING_MARKER
        .replace_all(content, |caps: &Captures| {
            let level = (caps[1].len() + offset).min(MAX_HEADING_LEVEL);
            format!("{}{}", "#".repeat(level), &caps[2])
        })
        .into_owned()
}
