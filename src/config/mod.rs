//! Defines the core `Config` struct and related types for merge configuration.
//!
//! This module consolidates all the settings supplied by a front end (the CLI
//! or a library caller), making them available to the merge pipeline in a
//! structured and type-safe manner. A `Config` is read-only for a whole run.

use crate::constants::DEFAULT_SEPARATOR;
use crate::errors::ConfigError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub use builder::ConfigBuilder;
mod builder;
mod builder_logic;
mod parsing;
pub mod path_resolve;

pub use path_resolve::{resolve_paths, ResolvedPaths};

/// Strategy used to order discovered files before merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OrderStrategy {
    /// Natural (numeric-aware) sort by relative path.
    #[default]
    Filename,
    /// Ascending by file creation time.
    Created,
    /// Explicit order from `index.json` at the input root.
    Index,
}

impl OrderStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStrategy::Filename => "filename",
            OrderStrategy::Created => "created",
            OrderStrategy::Index => "index",
        }
    }
}

impl fmt::Display for OrderStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStrategy {
    type Err = ConfigError;

    /// Parses a strategy name. The set of strategies is closed, so anything
    /// other than `filename`, `created` or `index` is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use mdmerge::config::OrderStrategy;
    ///
    /// assert_eq!("index".parse::<OrderStrategy>().unwrap(), OrderStrategy::Index);
    /// assert!("random".parse::<OrderStrategy>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "filename" => Ok(OrderStrategy::Filename),
            "created" => Ok(OrderStrategy::Created),
            "index" => Ok(OrderStrategy::Index),
            other => Err(ConfigError::InvalidValue {
                option: "order".to_string(),
                reason: format!(
                    "unknown strategy '{}' (expected \"filename\", \"created\" or \"index\")",
                    other
                ),
            }),
        }
    }
}

/// Holds every setting of a merge run.
///
/// Paths are stored as given; they are resolved to absolute form when the
/// merge starts (see [`resolve_paths`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory containing the `.md` files to merge.
    pub input_dir: PathBuf,
    /// Where to write the merged document. `None` means "return it only".
    pub output_path: Option<PathBuf>,
    /// How discovered files are ordered.
    pub order: OrderStrategy,
    /// Whether to prepend a table of contents.
    pub toc: bool,
    /// Whether to descend into subdirectories.
    pub recursive: bool,
    /// String placed between sections.
    pub separator: String,
    /// Global heading offset added on top of the per-file depth offset.
    pub heading_offset: usize,
    /// Glob-like patterns (relative to `input_dir`) of files/directories to skip.
    pub ignore_patterns: Vec<String>,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_path: None,
            order: OrderStrategy::Filename,
            toc: true,
            recursive: true,
            separator: DEFAULT_SEPARATOR.to_string(),
            heading_offset: 0,
            ignore_patterns: Vec::new(),
        }
    }
}
