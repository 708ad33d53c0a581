mod common;

use assert_cmd::prelude::*;
use common::{create_file, mdmerge_cmd, setup_with_index};
use predicates::prelude::*;
use std::thread;
use std::time::Duration;
use tempfile::tempdir;

fn positions(haystack: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| haystack.find(n).unwrap_or_else(|| panic!("'{}' not in output", n)))
        .collect()
}

#[test]
fn test_filename_order_is_natural() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "file10.md", "# Ten")?;
    create_file(temp.path(), "file2.md", "# Two")?;
    create_file(temp.path(), "file1.md", "# One")?;

    let output = mdmerge_cmd().arg(temp.path()).arg("--no-toc").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;

    let pos = positions(&stdout, &["# One", "# Two", "# Ten"]);
    assert!(pos[0] < pos[1] && pos[1] < pos[2]);

    temp.close()?;
    Ok(())
}

#[test]
fn test_filename_order_follows_collation() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "setup.md", "# Setup Main")?;
    create_file(temp.path(), "setup-notes.md", "# Setup Notes")?;
    create_file(temp.path(), "setup_guide.md", "# Setup Guide")?;
    create_file(temp.path(), "zeta.md", "# Zeta")?;
    create_file(temp.path(), "école.md", "# Ecole")?;
    create_file(temp.path(), "a1.md", "# A One")?;
    create_file(temp.path(), "a_1.md", "# A Underscore One")?;

    let output = mdmerge_cmd().arg(temp.path()).arg("--no-toc").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;

    let pos = positions(
        &stdout,
        &[
            "# A Underscore One",
            "# A One",
            "# Ecole",
            "# Setup Guide",
            "# Setup Notes",
            "# Setup Main",
            "# Zeta",
        ],
    );
    assert!(pos.windows(2).all(|w| w[0] < w[1]), "positions: {:?}", pos);

    temp.close()?;
    Ok(())
}

#[test]
fn test_index_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    setup_with_index(temp.path())?;

    let output = mdmerge_cmd()
        .arg(temp.path())
        .args(["--order", "index"])
        .output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;

    let pos = positions(&stdout, &["Gamma content", "Alpha content", "Beta content"]);
    assert!(pos[0] < pos[1] && pos[1] < pos[2]);
    assert!(stdout.contains("1. [Gamma](#gamma)\n2. [Alpha](#alpha)\n3. [Beta](#beta)"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_index_exclude_and_unlisted_tail() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "alpha.md", "# Alpha")?;
    create_file(temp.path(), "beta.md", "# Beta")?;
    create_file(temp.path(), "draft.md", "# Draft")?;
    create_file(temp.path(), "zeta.md", "# Zeta")?;
    create_file(
        temp.path(),
        "index.json",
        r#"{ "order": ["zeta.md", "missing.md"], "exclude": ["draft.md"] }"#,
    )?;

    mdmerge_cmd()
        .arg(temp.path())
        .args(["--order", "index"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. [Zeta](#zeta)\n2. [Alpha](#alpha)\n3. [Beta](#beta)\n\n",
        ))
        .stdout(predicate::str::contains("Draft").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_index_order_flat_has_no_directory_headings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    setup_with_index(temp.path())?;

    mdmerge_cmd()
        .arg(temp.path())
        .args(["--order", "index", "--no-toc"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^# Gamma$")?)
        .stdout(predicate::str::is_match(r"(?m)^# Alpha$")?)
        .stdout(predicate::str::contains("With Index").not());

    temp.close()?;
    Ok(())
}

#[test]
fn test_created_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "zz-first.md", "# Written First")?;
    // Coarse timestamp granularity on some filesystems.
    thread::sleep(Duration::from_millis(1100));
    create_file(temp.path(), "aa-second.md", "# Written Second")?;

    let output = mdmerge_cmd()
        .arg(temp.path())
        .args(["--order", "created", "--no-toc"])
        .output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;

    let pos = positions(&stdout, &["# Written First", "# Written Second"]);
    assert!(pos[0] < pos[1]);

    temp.close()?;
    Ok(())
}

#[test]
fn test_directory_headings_follow_index_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "guide/setup.md", "# Setup")?;
    create_file(temp.path(), "readme.md", "# Readme")?;
    create_file(temp.path(), "guide/usage.md", "# Usage")?;
    create_file(
        temp.path(),
        "index.json",
        r#"{ "order": ["readme.md", "guide/usage.md", "guide/setup.md"] }"#,
    )?;

    mdmerge_cmd()
        .arg(temp.path())
        .args(["--order", "index"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# Table of Contents\n\n\
             1. [Readme](#readme)\n\
             2. [Guide](#guide)\n   \
             1. [Usage](#usage)\n   \
             2. [Setup](#setup)\n\n",
        ));

    temp.close()?;
    Ok(())
}
