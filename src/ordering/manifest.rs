// src/ordering/manifest.rs

use crate::constants::INDEX_MANIFEST_FILENAME;
use crate::errors::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// The `index.json` manifest consulted by the `index` ordering strategy.
///
/// ```json
/// { "order": ["intro.md", "guide/setup.md"], "exclude": ["drafts/todo.md"] }
/// ```
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexManifest {
    /// Relative paths in the order they should appear.
    pub order: Vec<String>,
    /// Relative paths to drop entirely. Matched exactly, not as globs.
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

impl IndexManifest {
    /// Reads and parses `index.json` from `root`.
    ///
    /// # Errors
    /// Returns [`Error::ManifestNotFound`] naming the expected path if the
    /// file is missing, unreadable or not valid manifest JSON.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(INDEX_MANIFEST_FILENAME);
        let raw = std::fs::read_to_string(&path).map_err(|e| Error::ManifestNotFound {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let manifest: IndexManifest =
            serde_json::from_str(&raw).map_err(|e| Error::ManifestNotFound {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        debug!(
            "Loaded manifest {} ({} ordered, {} excluded)",
            path.display(),
            manifest.order.len(),
            manifest.exclude.as_ref().map_or(0, Vec::len)
        );
        Ok(manifest)
    }
}

/// Normalizes a manifest entry so it can be compared with a discovered
/// file's slash-separated relative path: separators become `/`, `.` segments
/// are dropped and `..` folds into its parent.
pub fn normalize_manifest_path(entry: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in entry.split(['/', '\\']) {
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
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_valid_manifest() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("index.json"),
            r#"{"order":["gamma.md","alpha.md"],"exclude":["draft.md"],"output":"ignored.md"}"#,
        )?;
        let manifest = IndexManifest::load(dir.path())?;
        assert_eq!(manifest.order, vec!["gamma.md", "alpha.md"]);
        assert_eq!(manifest.exclude, Some(vec!["draft.md".to_string()]));
        Ok(())
    }

    #[test]
    fn test_exclude_is_optional() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("index.json"), r#"{"order":[]}"#)?;
        let manifest = IndexManifest::load(dir.path())?;
        assert!(manifest.order.is_empty());
        assert_eq!(manifest.exclude, None);
        Ok(())
    }

    #[test]
    fn test_missing_manifest_names_path() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let err = IndexManifest::load(dir.path()).unwrap_err();
        match &err {
            Error::ManifestNotFound { path, .. } => {
                assert_eq!(path, &dir.path().join("index.json"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("index.json not found"));
        Ok(())
    }

    #[test]
    fn test_invalid_manifest_is_not_found_error() -> anyhow::Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("index.json"), "{ not json")?;
        assert!(matches!(
            IndexManifest::load(dir.path()),
            Err(Error::ManifestNotFound { .. })
        ));

        fs::write(dir.path().join("index.json"), r#"{"exclude":[]}"#)?;
        assert!(matches!(
            IndexManifest::load(dir.path()),
            Err(Error::ManifestNotFound { .. })
        ));
        Ok(())
    }

    #[test]
    fn test_normalize_manifest_path() {
        assert_eq!(normalize_manifest_path("./a.md"), "a.md");
        assert_eq!(normalize_manifest_path("sub\\b.md"), "sub/b.md");
        assert_eq!(normalize_manifest_path("sub//x/../b.md"), "sub/b.md");
        assert_eq!(normalize_manifest_path("../outside.md"), "../outside.md");
    }
}
