// src/config/parsing.rs

/// Normalizes ignore patterns: drops empty entries and rewrites the platform
/// separator to `/` so patterns match the normalized relative paths produced
/// by discovery. Surrounding whitespace is part of the pattern.
pub(super) fn normalize_ignore_patterns(patterns: Option<Vec<String>>) -> Vec<String> {
    patterns
        .unwrap_or_default()
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.replace(std::path::MAIN_SEPARATOR, "/"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_patterns() {
        let patterns = Some(vec![
            "merged.md".to_string(),
            String::new(),
            "archive/**".to_string(),
        ]);
        assert_eq!(
            normalize_ignore_patterns(patterns),
            vec!["merged.md".to_string(), "archive/**".to_string()]
        );
        assert!(normalize_ignore_patterns(None).is_empty());
    }

    #[test]
    fn test_whitespace_is_kept_verbatim() {
        let patterns = Some(vec![" notes.md".to_string(), "draft.md ".to_string()]);
        assert_eq!(
            normalize_ignore_patterns(patterns),
            vec![" notes.md".to_string(), "draft.md ".to_string()]
        );
    }
}
