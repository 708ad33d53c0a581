//! `mdmerge` is a library and command-line tool for merging a directory of
//! Markdown files into a single document.
//!
//! The merged document keeps working as a document: relative links and
//! images are rewritten to resolve from the output location, headings are
//! shifted to reflect how deeply each file was nested, every section gets a
//! unique anchor, and an optional numbered table of contents points at them.
//!
//! As a library, it provides a small pipeline:
//! 1.  **Discover**: find the `.md` files under the input directory and put
//!     them in order (by name, creation time, or an `index.json` manifest).
//! 2.  **Merge**: transform each file and assemble the final document,
//!     optionally writing it to disk.
//!
//! The building blocks ([`processing`], [`output::toc`], [`ordering`]) are
//! public as well and can be used on their own.
//!
//! # Example: Library Usage
//!
//! ```
//! use mdmerge::{discover, merge, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a temporary directory with some files.
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("01-intro.md"), "# Introduction\n\nHello.").unwrap();
//! fs::create_dir(temp_dir.path().join("guide")).unwrap();
//! fs::write(temp_dir.path().join("guide").join("setup.md"), "# Setup\n\n## Steps").unwrap();
//!
//! // 2. Create a Config object programmatically using the builder.
//! let config = ConfigBuilder::new()
//!     .input_dir(temp_dir.path())
//!     .build()
//!     .unwrap();
//!
//! // 3. Inspect which files would be merged, in order.
//! let files = discover(&config).unwrap();
//! let names: Vec<String> = files.iter().map(|f| f.relative_path_string()).collect();
//! assert_eq!(names, ["01-intro.md", "guide/setup.md"]);
//!
//! // 4. Merge them into a single document.
//! let document = merge(&config).unwrap();
//! assert!(document.starts_with("# Table of Contents\n\n1. [Introduction](#introduction)"));
//! assert!(document.contains("<a id=\"guide\"></a>\n\n# Guide"));
//! assert!(document.contains("## Setup\n\n### Steps"));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod ordering;
pub mod output;
pub mod prelude;
pub mod processing;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder, OrderStrategy};
pub use core_types::{FileInfo, TocEntry};
pub use errors::{Error, Result};
pub use output::merge;

/// Discovers and orders the files a merge with `config` would include.
///
/// This is the first half of [`merge`], without reading any file content.
/// Useful for previewing a merge. As with `merge`, an output file located
/// inside the input directory is left out.
///
/// # Errors
/// Returns [`Error::NoFilesFound`] when nothing matches, and propagates
/// discovery and manifest errors.
pub fn discover(config: &Config) -> Result<Vec<FileInfo>> {
    let paths = config::resolve_paths(config)?;
    output::collect_files(config, &paths)
}
