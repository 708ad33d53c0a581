// src/filtering/mod.rs

//! Provides standalone functions for file filtering logic.
//!
//! These are used by the discovery stage to decide which entries are kept
//! and which directories are pruned. They are exposed publicly to allow for
//! their use in other contexts.

mod extension;
mod ignore_pattern;

pub use extension::is_markdown;
pub use ignore_pattern::{IgnorePattern, IgnoreSet};
