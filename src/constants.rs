// src/constants.rs

/// Default separator placed between merged sections (a horizontal rule block).
pub const DEFAULT_SEPARATOR: &str = "\n---\n\n";

/// Extension (case-sensitive) of the files collected by discovery.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Name of the ordering manifest read from the input root by the `index` strategy.
pub const INDEX_MANIFEST_FILENAME: &str = "index.json";

/// Heading emitted at the top of the generated table of contents.
pub const TOC_HEADER: &str = "# Table of Contents";

/// Deepest Markdown heading level; offsets never push a heading past it.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Indentation applied per depth level in the table of contents.
pub const TOC_INDENT: &str = "   ";
