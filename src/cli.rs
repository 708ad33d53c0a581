// src/cli.rs

use crate::config::OrderStrategy;
use crate::constants::DEFAULT_SEPARATOR;
use clap::Parser;

/// Merge a directory of Markdown files into a single document.
///
/// mdmerge walks a directory, orders the `.md` files it finds, rewrites
/// relative links and images so they still resolve from the output location,
/// shifts headings to reflect the directory nesting, and joins everything
/// into one document with an optional numbered table of contents.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the Markdown files to merge.
    pub directory: String,

    /// Write the merged document to this file instead of stdout.
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// How to order the files before merging.
    #[arg(long, value_enum, value_name = "STRATEGY", default_value_t = OrderStrategy::Filename)]
    pub order: OrderStrategy,

    /// Do not prepend a table of contents.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_toc: bool,

    /// Only merge files directly inside DIRECTORY.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_recursive: bool,

    /// Text inserted between sections.
    #[arg(long, value_name = "STRING", default_value = DEFAULT_SEPARATOR, allow_hyphen_values = true)]
    pub separator: String,

    /// Extra levels to add to every heading (capped at level 6).
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub heading_offset: usize,

    /// Skip files/directories matching these glob patterns (relative to DIRECTORY, repeatable).
    #[arg(long, value_name = "PATTERN", num_args = 1..)]
    pub ignore: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["mdmerge", "docs"]);
        assert_eq!(cli.directory, "docs");
        assert_eq!(cli.output, None);
        assert_eq!(cli.order, OrderStrategy::Filename);
        assert!(!cli.no_toc);
        assert!(!cli.no_recursive);
        assert_eq!(cli.separator, "\n---\n\n");
        assert_eq!(cli.heading_offset, 0);
        assert_eq!(cli.ignore, None);
    }

    #[test]
    fn test_rejects_unknown_order() {
        assert!(Cli::try_parse_from(["mdmerge", "docs", "--order", "random"]).is_err());
    }

    #[test]
    fn test_rejects_negative_heading_offset() {
        assert!(Cli::try_parse_from(["mdmerge", "docs", "--heading-offset", "-1"]).is_err());
    }

    #[test]
    fn test_directory_is_required() {
        assert!(Cli::try_parse_from(["mdmerge"]).is_err());
    }

    #[test]
    fn test_separator_may_start_with_hyphens() {
        let cli = Cli::parse_from(["mdmerge", "docs", "--separator", "---"]);
        assert_eq!(cli.separator, "---");
    }
}
