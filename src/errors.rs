//! Defines library-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can abort a merge, offering more context than a bare `std::io::Error`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A specialized `Result` type for `mdmerge` library operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can abort a merge run.
///
/// Every variant is fatal: no partial document is returned or written.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Error reported by the directory walker while enumerating the input tree.
    #[error("Failed to walk input directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Invalid configuration value or combination.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No Markdown files were discovered under the input directory.
    #[error("No .md files found in {}", dir.display())]
    NoFilesFound {
        /// The resolved input directory that was searched.
        dir: PathBuf,
    },

    /// The `index` ordering strategy was selected but the manifest is missing or invalid.
    #[error(
        "index.json not found or invalid at {}. Required for \"index\" ordering strategy. ({reason})",
        path.display()
    )]
    ManifestNotFound {
        /// The path where the manifest was expected.
        path: PathBuf,
        /// Why the manifest could not be used.
        reason: String,
    },
}

/// Errors raised while validating configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// An option was given a value it does not accept.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The option (or field) name.
        option: String,
        /// Human-readable reason.
        reason: String,
    },
    /// A required option was not supplied.
    #[error("Missing required option: {0}")]
    MissingValue(&'static str),
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
///
/// # Returns
/// An `Error::Io` variant containing the path string and the source error.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/path.md");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = io_error_with_path(source_error, &path);

        match error {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/path.md"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Error::Io"),
        }
    }

    #[test]
    fn test_no_files_found_names_directory() {
        let error = Error::NoFilesFound {
            dir: PathBuf::from("/docs/empty"),
        };
        let message = error.to_string();
        assert!(message.contains("No .md files found"));
        assert!(message.contains("/docs/empty"));
    }

    #[test]
    fn test_manifest_error_names_path() {
        let error = Error::ManifestNotFound {
            path: PathBuf::from("/docs/index.json"),
            reason: "missing".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("index.json not found"));
        assert!(message.contains("/docs/index.json"));
    }

    #[test]
    fn test_config_error_is_transparent() {
        let error: Error = ConfigError::InvalidValue {
            option: "--order".to_string(),
            reason: "unknown strategy 'random'".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Invalid value for --order: unknown strategy 'random'"
        );
    }
}
