// src/filtering/ignore_pattern.rs

use log::{trace, warn};
use regex::Regex;

/// A compiled glob-like ignore pattern.
///
/// The grammar is deliberately small:
/// * `**` matches any run of characters, including `/`
/// * `*` matches any run of characters except `/`
/// * `?` matches exactly one character other than `/`
///
/// Every other character matches itself. Matching is anchored: the pattern
/// must cover the whole (slash-normalized) relative path.
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    source: String,
    literal: Regex,
    any_depth: Regex,
}

impl IgnorePattern {
    /// Compiles `pattern` together with its `**/`-prefixed twin, so that a
    /// bare basename pattern also matches at any depth.
    ///
    /// # Errors
    /// Fails only if the translated expression exceeds the regex size limit.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            source: pattern.to_string(),
            literal: glob_to_regex(pattern)?,
            any_depth: glob_to_regex(&format!("**/{}", pattern))?,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Checks a slash-normalized relative path against the pattern.
    pub fn matches(&self, relative_path: &str) -> bool {
        self.literal.is_match(relative_path) || self.any_depth.is_match(relative_path)
    }
}

/// Translates the glob grammar into an anchored regular expression.
fn glob_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut expr = String::with_capacity(pattern.len() * 2 + 2);
    expr.push('^');
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        let token = match c {
            '*' if chars.peek() == Some(&'*') => {
                chars.next();
                ".*"
            }
            '*' => "[^/]*",
            '?' => "[^/]",
            other => {
                literal.push(other);
                continue;
            }
        };
        expr.push_str(&regex::escape(&literal));
        literal.clear();
        expr.push_str(token);
    }
    expr.push_str(&regex::escape(&literal));
    expr.push('$');

    trace!("Compiled ignore glob '{}' to regex '{}'", pattern, expr);
    Regex::new(&expr)
}

/// A set of ignore patterns evaluated against relative paths.
///
/// # Examples
///
/// ```
/// use mdmerge::filtering::IgnoreSet;
///
/// let set = IgnoreSet::new(&["draft-*".to_string(), "archive/**".to_string()]);
/// assert!(set.is_ignored("draft-1.md"));
/// assert!(set.is_ignored("notes/draft-2.md"));
/// assert!(set.is_ignored("archive/old/a.md"));
/// assert!(!set.is_ignored("final.md"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreSet {
    /// Compiles every pattern. A pattern that fails to compile is logged and
    /// skipped.
    pub fn new(patterns: &[String]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|p| match IgnorePattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!("Invalid ignore pattern '{}': {}", p, e);
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if any pattern matches `relative_path`. Backslashes are
    /// normalized to `/` before matching.
    pub fn is_ignored(&self, relative_path: &str) -> bool {
        let normalized = relative_path.replace('\\', "/");
        match self.patterns.iter().find(|p| p.matches(&normalized)) {
            Some(pattern) => {
                trace!("'{}' matches ignore pattern '{}'", normalized, pattern.as_str());
                true
            }
            None => false,
        }
    }
}
