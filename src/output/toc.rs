// src/output/toc.rs

//! Anchor deduplication and table-of-contents rendering.

use crate::constants::{TOC_HEADER, TOC_INDENT};
use crate::core_types::TocEntry;
use log::trace;
use std::collections::{HashMap, HashSet};

/// Makes every anchor in `entries` unique, keeping their order.
///
/// The first occurrence of an anchor keeps it; later repeats get `-1`,
/// `-2`, … appended. A suffixed candidate that is already taken (for
/// example a heading literally titled "Intro 1") is bumped further, so the
/// pass never produces a duplicate and running it again changes nothing.
///
/// # Examples
///
/// ```
/// use mdmerge::core_types::TocEntry;
/// use mdmerge::output::toc::unique_anchors;
///
/// let entry = |anchor: &str| TocEntry {
///     title: "Intro".into(),
///     anchor: anchor.into(),
///     source: "intro.md".into(),
///     depth: 0,
///     is_directory: false,
/// };
/// let unique = unique_anchors(vec![entry("intro"), entry("intro"), entry("intro")]);
/// let anchors: Vec<&str> = unique.iter().map(|e| e.anchor.as_str()).collect();
/// assert_eq!(anchors, ["intro", "intro-1", "intro-2"]);
/// ```
pub fn unique_anchors(entries: Vec<TocEntry>) -> Vec<TocEntry> {
    let mut used: HashSet<String> = HashSet::with_capacity(entries.len());
    let mut repeats: HashMap<String, usize> = HashMap::new();

    entries
        .into_iter()
        .map(|mut entry| {
            let count = repeats.entry(entry.anchor.clone()).or_insert(0);
            let mut candidate = entry.anchor.clone();
            while used.contains(&candidate) {
                *count += 1;
                candidate = format!("{}-{}", entry.anchor, count);
            }
            if candidate != entry.anchor {
                trace!("Anchor '{}' already used, renamed to '{}'", entry.anchor, candidate);
            }
            used.insert(candidate.clone());
            entry.anchor = candidate;
            entry
        })
        .collect()
}

/// Renders the table of contents for `entries`.
///
/// Each entry becomes a numbered list item indented by three spaces per
/// depth level. Numbering restarts whenever a shallower entry closes a
/// nested run.
///
/// # Examples
///
/// ```
/// use mdmerge::core_types::TocEntry;
/// use mdmerge::output::toc::generate_toc;
///
/// let entry = |title: &str, anchor: &str, depth| TocEntry {
///     title: title.into(),
///     anchor: anchor.into(),
///     source: String::new(),
///     depth,
///     is_directory: false,
/// };
/// let toc = generate_toc(&[entry("Intro", "intro", 0), entry("Setup", "setup", 1)]);
/// assert_eq!(toc, "# Table of Contents\n\n1. [Intro](#intro)\n   1. [Setup](#setup)");
/// ```
pub fn generate_toc(entries: &[TocEntry]) -> String {
    let mut lines = vec![TOC_HEADER.to_string(), String::new()];
    let mut counters: Vec<usize> = Vec::new();

    for entry in entries {
        counters.resize(entry.depth + 1, 0);
        counters[entry.depth] += 1;
        lines.push(format!(
            "{}{}. [{}](#{})",
            TOC_INDENT.repeat(entry.depth),
            counters[entry.depth],
            entry.title,
            entry.anchor
        ));
    }
    lines.join("\n")
}
