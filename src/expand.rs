//! Path expansion.
//!
//! Turns a single path spec from the manifest (literal file, directory, or
//! glob pattern) into an ordered list of concrete, supported source files.
//! Ordering is deterministic: glob matches are sorted by path string, and
//! directory scans sort each level's children by name before descending, so
//! the whole subtree comes out in lexicographic order with directories and
//! files interleaved.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::{BindError, Result};

/// Kind of source a file path refers to, judged by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A PDF document; pages are appended as-is.
    Pdf,
    /// A raster image; embedded as a single PDF page.
    Image,
}

/// Classify a path by its extension, case-insensitively.
///
/// Returns `None` for anything outside the supported set
/// (`.pdf`, `.png`, `.jpg`, `.jpeg`, `.tiff`, `.bmp`).
pub fn classify(path: &Path) -> Option<SourceKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => Some(SourceKind::Pdf),
        "png" | "jpg" | "jpeg" | "tiff" | "bmp" => Some(SourceKind::Image),
        _ => None,
    }
}

/// Expand one path spec into an ordered list of concrete file paths.
///
/// * A literal existing file yields that single path.
/// * A directory yields its immediate child files, or (with `recursive`) all
///   descendant files in lexicographic subtree order.
/// * Anything else is treated as a glob pattern; matches are sorted by path
///   string.
///
/// Unsupported files found during a directory scan are skipped with a
/// warning; a spec naming them directly is an error so the caller can count
/// the skip.
///
/// # Errors
///
/// * [`BindError::PathNotFound`] if the spec resolves to nothing.
/// * [`BindError::UnsupportedFileType`] if the spec is a literal unsupported
///   file, or a pattern whose every match is unsupported.
pub fn expand(spec: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let path = Path::new(spec);

    if path.is_file() {
        debug!("Single file path: {spec}");
        if classify(path).is_none() {
            return Err(BindError::unsupported_file_type(path.to_path_buf()));
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if path.is_dir() {
        debug!(
            "Scanning directory {spec} {}",
            if recursive { "recursively" } else { "non-recursively" }
        );
        return Ok(scan_directory(path, recursive));
    }

    expand_pattern(spec)
}

/// Collect supported files under a directory in deterministic order.
fn scan_directory(dir: &Path, recursive: bool) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry under {}: {err}", dir.display());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if classify(entry.path()).is_none() {
            warn!("Skipping unsupported file type: {}", entry.path().display());
            continue;
        }
        files.push(entry.into_path());
    }

    debug!("Found {} file(s) in {}", files.len(), dir.display());
    files
}

/// Expand a glob pattern, sorted lexicographically by path string.
fn expand_pattern(spec: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(spec).map_err(|err| {
        warn!("Invalid glob pattern {spec}: {err}");
        BindError::path_not_found(spec)
    })?;

    let mut files = Vec::new();
    let mut matched = 0usize;
    for entry in paths {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                warn!("Skipping unreadable glob match for {spec}: {err}");
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        matched += 1;
        if classify(&path).is_none() {
            warn!("Skipping unsupported file type: {}", path.display());
            continue;
        }
        files.push(path);
    }

    if files.is_empty() {
        // Distinguish "nothing matched" from "every match was unsupported".
        if matched > 0 {
            warn!("Pattern {spec} matched {matched} file(s), none supported");
            return Err(BindError::unsupported_file_type(PathBuf::from(spec)));
        }
        return Err(BindError::path_not_found(spec));
    }

    files.sort();
    Ok(files)
}
