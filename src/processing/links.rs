// src/processing/links.rs

//! Rewrites relative references so they still resolve once a file's content
//! is relocated into the merged document.
//!
//! The rewrite is textual. Four syntaxes are handled, in this fixed pass
//! order:
//!
//! 1. Markdown images `![alt](target)`
//! 2. Markdown links `[text](target)` that are not images
//! 3. HTML `<img ... src="target">`
//! 4. HTML `<a ... href="target">`
//!
//! Images run before links, and the link pass explicitly skips any match
//! preceded by `!`, so an image target is never rewritten twice.
//! References inside code fences or inline code are rewritten like any
//! other text.

use crate::config::path_resolve::relative_path;
use crate::core_types::path_to_slash;
use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::Path;

static MARKDOWN_IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

// Captures an optional leading `!` so image syntax can be recognised and left alone.
static MARKDOWN_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(!?)\[([^\]]*)\]\(([^)]+)\)").unwrap());

static HTML_IMG_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(<img\s[^>]*src=["'])([^"']+)(["'])"#).unwrap()
});

static HTML_A_HREF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(<a\s[^>]*href=["'])([^"']+)(["'])"#).unwrap()
});

/// Target prefixes that are never rewritten.
const SKIPPED_PREFIXES: [&str; 5] = ["http://", "https://", "//", "#", "data:"];

/// Rewrites relative references in `content`, which lives in `source_dir`,
/// so they resolve from `output_dir`.
///
/// Returns the content unchanged when both directories are the same.
///
/// # Examples
///
/// ```
/// use mdmerge::processing::rewrite_paths;
/// use std::path::Path;
///
/// let out = rewrite_paths("[x](./a.md#frag)", Path::new("/r/sub"), Path::new("/r"));
/// assert_eq!(out, "[x](sub/a.md#frag)");
///
/// let untouched = rewrite_paths("![x](https://a/b.png)", Path::new("/r/sub"), Path::new("/r"));
/// assert_eq!(untouched, "![x](https://a/b.png)");
/// ```
pub fn rewrite_paths(content: &str, source_dir: &Path, output_dir: &Path) -> String {
    if source_dir == output_dir {
        return content.to_string();
    }

    let prefix = path_to_slash(&relative_path(output_dir, source_dir));
    if prefix.is_empty() {
        return content.to_string();
    }
    trace!(
        "Rewriting references from {} with prefix '{}'",
        source_dir.display(),
        prefix
    );

    // Pass 1: images.
    let content = MARKDOWN_IMAGE.replace_all(content, |caps: &Captures| {
        format!("![{}]({})", &caps[1], rewrite_target(&caps[2], &prefix))
    });

    // Pass 2: links, leaving the images from pass 1 as they are.
    let content = MARKDOWN_LINK.replace_all(&content, |caps: &Captures| {
        if &caps[1] == "!" {
            return caps[0].to_string();
        }
        format!("[{}]({})", &caps[2], rewrite_target(&caps[3], &prefix))
    });

    // Pass 3: <img src>.
    let content = HTML_IMG_SRC.replace_all(&content, |caps: &Captures| {
        format!(
            "{}{}{}",
            &caps[1],
            rewrite_target(&caps[2], &prefix),
            &caps[3]
        )
    });

    // Pass 4: <a href>.
    let content = HTML_A_HREF.replace_all(&content, |caps: &Captures| {
        format!(
            "{}{}{}",
            &caps[1],
            rewrite_target(&caps[2], &prefix),
            &caps[3]
        )
    });

    content.into_owned()
}

/// Rewrites a single reference target against `prefix`.
fn rewrite_target(target: &str, prefix: &str) -> String {
    if SKIPPED_PREFIXES.iter().any(|p| target.starts_with(p)) {
        return target.to_string();
    }

    let (path_part, fragment) = match target.find('#') {
        Some(idx) => target.split_at(idx),
        None => (target, ""),
    };
    if path_part.is_empty() {
        return target.to_string();
    }

    format!("{}{}", join_posix(prefix, path_part), fragment)
}

/// Joins two `/`-separated paths and normalizes the result: empty and `.`
/// segments are dropped, `..` folds into a preceding segment, and a trailing
/// `/` on `tail` is preserved.
fn join_posix(base: &str, tail: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(tail.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(last) if *last != "..") {
                    segments.pop();
                } else {
                    segments.push(segment);
                }
            }
            other => segments.push(other),
        }
    }

    let mut joined = segments.join("/");
    if joined.is_empty() {
        joined.push('.');
    }
    if tail.ends_with('/') && !joined.ends_with('/') {
        joined.push('/');
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(content: &str, source: &str, output: &str) -> String {
        rewrite_paths(content, Path::new(source), Path::new(output))
    }

    #[test]
    fn test_rewrites_markdown_image() {
        assert_eq!(
            rewrite("![alt](./images/diagram.png)", "/project/docs/sub", "/project/docs"),
            "![alt](sub/images/diagram.png)"
        );
    }

    #[test]
    fn test_rewrites_markdown_link() {
        assert_eq!(
            rewrite("[link](./other.md)", "/project/docs/sub", "/project/docs"),
            "[link](sub/other.md)"
        );
    }

    #[test]
    fn test_rewrites_html_img_and_anchor() {
        assert_eq!(
            rewrite(r#"<img src="./photo.jpg">"#, "/project/docs/sub", "/project/docs"),
            r#"<img src="sub/photo.jpg">"#
        );
        assert_eq!(
            rewrite(
                r#"<a class='x' href='./page.md'>link</a>"#,
                "/project/docs/sub",
                "/project/docs"
            ),
            r#"<a class='x' href='sub/page.md'>link</a>"#
        );
    }

    #[test]
    fn test_image_is_not_rewritten_twice() {
        assert_eq!(
            rewrite("![a](img.png) and [b](doc.md)", "/r/sub", "/r"),
            "![a](sub/img.png) and [b](sub/doc.md)"
        );
    }

    #[test]
    fn test_skip_list_targets_unchanged() {
        for target in [
            "![img](https://example.com/photo.jpg)",
            "[x](http://example.com)",
            "[x](//cdn.example.com/a.js)",
            "[section](#heading)",
            "![img](data:image/png;base64,abc)",
        ] {
            assert_eq!(rewrite(target, "/project/sub", "/project"), target);
        }
    }

    #[test]
    fn test_fragment_is_preserved() {
        assert_eq!(
            rewrite("[link](./page.md#section)", "/project/docs/sub", "/project/docs"),
            "[link](sub/page.md#section)"
        );
    }

    #[test]
    fn test_same_directory_is_noop() {
        let content = "![img](./photo.jpg)";
        assert_eq!(rewrite(content, "/project/docs", "/project/docs"), content);
    }

    #[test]
    fn test_output_outside_source_tree_uses_parent_segments() {
        assert_eq!(
            rewrite("[a](../shared/a.md)", "/r/docs/guide", "/r/out"),
            "[a](../docs/shared/a.md)"
        );
    }

    #[test]
    fn test_join_posix() {
        assert_eq!(join_posix("sub", "./a.md"), "sub/a.md");
        assert_eq!(join_posix("sub", "../a.md"), "a.md");
        assert_eq!(join_posix("sub", ".."), ".");
        assert_eq!(join_posix("../x", "dir/"), "../x/dir/");
    }
}
