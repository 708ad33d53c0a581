// src/processing/title.rs

use crate::constants::MARKDOWN_EXTENSION;
use once_cell::sync::Lazy;
use regex::Regex;

// First level-one heading anywhere in the document.
static H1_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").unwrap());

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static HYPHEN_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Extracts a display title for a file.
///
/// Uses the text of the first `# ` heading in `content`, trimmed. Pass the
/// content *before* any heading offset is applied. Without such a heading
/// the title is derived from the file name the same way
/// [`format_dir_name`] derives directory titles.
///
/// # Examples
///
/// ```
/// use mdmerge::processing::extract_title;
///
/// assert_eq!(extract_title("intro\n# My Title\n\ntext", "x.md"), "My Title");
/// assert_eq!(extract_title("no heading here", "guides/my-first_file.md"), "My First File");
/// ```
pub fn extract_title(content: &str, relative_path: &str) -> String {
    if let Some(caps) = H1_TITLE.captures(content) {
        let title = caps[1].trim();
        if !title.is_empty() {
            return title.to_string();
        }
    }

    let basename = relative_path
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(relative_path);
    title_from_name(strip_markdown_extension(basename))
}

/// Title for a directory heading: the directory name with `-`/`_` turned
/// into spaces and each word capitalized.
pub fn format_dir_name(name: &str) -> String {
    title_from_name(name)
}

/// Replaces `-` and `_` with spaces and upper-cases the first character of
/// every word.
fn title_from_name(name: &str) -> String {
    let spaced = name.replace(['-', '_'], " ");
    let mut titled = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        let is_word = c.is_alphanumeric();
        if is_word && at_word_start {
            titled.extend(c.to_uppercase());
        } else {
            titled.push(c);
        }
        at_word_start = !is_word;
    }
    titled
}

/// Strips a trailing `.md` (any case).
fn strip_markdown_extension(name: &str) -> &str {
    let ext_len = MARKDOWN_EXTENSION.len();
    match name.len().checked_sub(ext_len) {
        Some(cut)
            if name.is_char_boundary(cut)
                && name[cut..].eq_ignore_ascii_case(MARKDOWN_EXTENSION) =>
        {
            &name[..cut]
        }
        _ => name,
    }
}

/// Turns a title into a URL-safe anchor.
///
/// Lower-cases, removes everything that is not a word character, whitespace
/// or `-`, turns whitespace runs into `-`, collapses repeated `-` and trims
/// leading/trailing `-`.
///
/// # Examples
///
/// ```
/// use mdmerge::processing::slugify;
///
/// assert_eq!(slugify("Hello, World!"), "hello-world");
/// assert_eq!(slugify("  Phase 1 -- Setup  "), "phase-1-setup");
/// ```
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let cleaned = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&cleaned, "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}
