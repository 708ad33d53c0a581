// src/config/path_resolve.rs

//! Resolves the configured input and output paths to absolute form.
//!
//! Resolution is lexical: `.` and `..` segments are folded without touching
//! the filesystem, so an output path that does not exist yet resolves the
//! same way as one that does.

use super::Config;
use crate::core_types::path_to_slash;
use crate::errors::{io_error_with_path, Result};
use log::debug;
use std::path::{Component, Path, PathBuf};

/// The absolute paths a merge run operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Absolute input directory.
    pub input_dir: PathBuf,
    /// Absolute output file, if one was configured.
    pub output_path: Option<PathBuf>,
    /// Directory the merged document lives in; relative links are rewritten
    /// to resolve from here. Equals `input_dir` when no output is configured.
    pub output_dir: PathBuf,
    /// Input-relative path of the output file when it lies inside the input
    /// tree. Discovery treats it as an extra ignore entry.
    pub self_ignore: Option<String>,
}

/// Resolves the paths of `config` against the current working directory.
///
/// # Errors
/// Returns an I/O error if the current working directory cannot be read.
pub fn resolve_paths(config: &Config) -> Result<ResolvedPaths> {
    let input_dir = absolutize(&config.input_dir)?;
    let output_path = config
        .output_path
        .as_deref()
        .map(absolutize)
        .transpose()?;

    let output_dir = output_path
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input_dir.clone());

    let self_ignore = output_path.as_deref().and_then(|out| {
        out.strip_prefix(&input_dir)
            .ok()
            .filter(|rel| !rel.as_os_str().is_empty())
            .map(path_to_slash)
    });
    if let Some(rel) = &self_ignore {
        debug!("Output file lies inside the input directory; ignoring '{}'", rel);
    }

    Ok(ResolvedPaths {
        input_dir,
        output_path,
        output_dir,
        self_ignore,
    })
}

/// Makes `path` absolute (joining it onto the current directory if needed)
/// and folds `.`/`..` segments.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|e| io_error_with_path(e, "."))?;
        cwd.join(path)
    };
    Ok(normalize_lexically(&joined))
}

/// Folds `.` and `..` segments without consulting the filesystem.
/// A `..` that would climb above the root (or above the start of a relative
/// path) is kept as-is.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().map(|c| c.as_os_str()).collect()
}

/// Lexical relative path from directory `from` to directory `to`, both
/// absolute and normalized. Returns an empty path when they are equal.
///
/// # Examples
///
/// ```
/// use mdmerge::config::path_resolve::relative_path;
/// use std::path::Path;
///
/// assert_eq!(relative_path(Path::new("/r"), Path::new("/r/sub")), Path::new("sub"));
/// assert_eq!(relative_path(Path::new("/r/out"), Path::new("/r/src")), Path::new("../src"));
/// assert_eq!(relative_path(Path::new("/r"), Path::new("/r")), Path::new(""));
/// ```
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from.components().collect();
    let to: Vec<Component> = to.components().collect();
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut result = PathBuf::new();
    for _ in common..from.len() {
        result.push("..");
    }
    for component in &to[common..] {
        result.push(component.as_os_str());
    }
    result
}
