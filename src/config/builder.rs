// src/config/builder.rs

use super::{
    builder_logic::validate_builder_options, parsing::normalize_ignore_patterns, Config,
    OrderStrategy,
};
use crate::cli::Cli;
use crate::constants::DEFAULT_SEPARATOR;
use crate::errors::{ConfigError, Result};
use std::path::PathBuf;

/// A builder for creating a `Config` programmatically.
///
/// Unset options fall back to the documented defaults: `filename` order,
/// table of contents on, recursion on, a horizontal-rule separator, no
/// heading offset and no ignore patterns.
///
/// # Examples
///
/// ```
/// use mdmerge::config::{ConfigBuilder, OrderStrategy};
///
/// let config = ConfigBuilder::new()
///     .input_dir("docs")
///     .order(OrderStrategy::Index)
///     .heading_offset(1)
///     .ignore_patterns(vec!["drafts/**".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.order, OrderStrategy::Index);
/// assert!(config.toc);
/// assert_eq!(config.heading_offset, 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(super) input_dir: Option<PathBuf>,
    pub(super) output_path: Option<PathBuf>,
    pub(super) order: Option<OrderStrategy>,
    pub(super) toc: Option<bool>,
    pub(super) recursive: Option<bool>,
    pub(super) separator: Option<String>,
    pub(super) heading_offset: Option<usize>,
    pub(super) ignore_patterns: Option<Vec<String>>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with no options set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `ConfigBuilder` pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input_dir: Some(PathBuf::from(cli.directory)),
            output_path: cli.output.map(PathBuf::from),
            order: Some(cli.order),
            toc: Some(!cli.no_toc),
            recursive: Some(!cli.no_recursive),
            separator: Some(cli.separator),
            heading_offset: Some(cli.heading_offset),
            ignore_patterns: cli.ignore,
        }
    }

    /// Sets the directory containing the Markdown files.
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = Some(dir.into());
        self
    }

    /// Sets the output file. Without it the merged document is only returned.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Sets the ordering strategy.
    pub fn order(mut self, order: OrderStrategy) -> Self {
        self.order = Some(order);
        self
    }

    /// Enables or disables the table of contents.
    pub fn toc(mut self, toc: bool) -> Self {
        self.toc = Some(toc);
        self
    }

    /// Enables or disables recursion into subdirectories.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }

    /// Sets the string placed between sections.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Sets the global heading offset.
    pub fn heading_offset(mut self, offset: usize) -> Self {
        self.heading_offset = Some(offset);
        self
    }

    /// Sets the ignore patterns.
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = Some(patterns);
        self
    }

    /// Builds the final `Config` from the builder's settings.
    ///
    /// # Errors
    /// Returns a configuration error if the input directory is missing or
    /// empty.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        let input_dir = self
            .input_dir
            .ok_or(ConfigError::MissingValue("input directory"))?;

        Ok(Config {
            input_dir,
            output_path: self.output_path,
            order: self.order.unwrap_or_default(),
            toc: self.toc.unwrap_or(true),
            recursive: self.recursive.unwrap_or(true),
            separator: self
                .separator
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
            heading_offset: self.heading_offset.unwrap_or(0),
            ignore_patterns: normalize_ignore_patterns(self.ignore_patterns),
        })
    }
}
