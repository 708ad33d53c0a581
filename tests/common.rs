// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn mdmerge_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mdmerge"))
}

/// Writes `content` to `dir/relative_path`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(
    dir: &Path,
    relative_path: &str,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = dir.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(())
}

/// Two root files and one subdirectory with an image reference.
#[allow(dead_code)]
pub fn setup_basic(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    create_file(
        dir,
        "hardware-requirements.md",
        "# Hardware Requirements\n\n## Server Specifications\n\n- 4 CPU cores\n",
    )?;
    create_file(
        dir,
        "project-schedule.md",
        "# Project Schedule\n\n## Phase 1\n\nKickoff.\n",
    )?;
    create_file(
        dir,
        "materials/seq.md",
        "# Sequence Diagram\n\n![Sequence](./diagrams/sequence.svg)\n",
    )?;
    create_file(dir, "materials/diagrams/sequence.svg", "<svg/>")?;
    Ok(())
}

/// Two chapters, one of them with a nested `details` directory, plus a root file.
#[allow(dead_code)]
pub fn setup_nested(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    create_file(dir, "intro.md", "# Introduction\n\nWelcome.\n")?;
    create_file(dir, "chapter-1/overview.md", "# Overview\n\nFirst chapter.\n")?;
    create_file(
        dir,
        "chapter-1/details/spec.md",
        "# Specification\n\n## Requirements\n\nMust merge.\n",
    )?;
    create_file(dir, "chapter-2/summary.md", "# Summary\n\nDone.\n")?;
    Ok(())
}

/// Three flat files plus an `index.json` listing gamma, alpha, beta.
#[allow(dead_code)]
pub fn setup_with_index(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    create_file(dir, "alpha.md", "# Alpha\n\nAlpha content\n")?;
    create_file(dir, "beta.md", "# Beta\n\nBeta content\n")?;
    create_file(dir, "gamma.md", "# Gamma\n\nGamma content\n")?;
    create_file(
        dir,
        "index.json",
        r#"{ "order": ["gamma.md", "alpha.md", "beta.md"] }"#,
    )?;
    Ok(())
}
