//! The `mdmerge` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types and functions from
//! the `mdmerge` library.
//!
//! # Example
//!
//! ```
//! use mdmerge::prelude::*;
//! # fn main() -> Result<()> {
//! # let dir = tempfile::tempdir().unwrap();
//! # std::fs::write(dir.path().join("a.md"), "# A").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .input_dir(dir.path())
//!     .order(OrderStrategy::Filename)
//!     .build()?;
//! let document = merge(&config)?;
//! assert_eq!(slugify("A"), "a");
//! assert!(document.contains("[A](#a)"));
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder, OrderStrategy};
pub use crate::core_types::{FileInfo, MergeNode, TocEntry};
pub use crate::discovery::{discover_files, DiscoveryOptions};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{is_markdown, IgnorePattern, IgnoreSet};
pub use crate::ordering::{natural_cmp, order_files, IndexManifest};
pub use crate::output::toc::{generate_toc, unique_anchors};
pub use crate::output::{build_merge_nodes, merge};
pub use crate::processing::{
    extract_title, format_dir_name, offset_headings, process_file, rewrite_paths, slugify,
    ProcessedFile,
};
pub use crate::discover;
