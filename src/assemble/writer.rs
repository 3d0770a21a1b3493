//! Output file writing.
//!
//! Collision handling happens before any assembly work so a doomed run fails
//! fast; the write itself goes through a temporary sibling file renamed into
//! place, so an interrupted save never leaves a truncated PDF at the
//! requested path.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use lopdf::Document;

use crate::config::CollisionPolicy;
use crate::error::{BindError, Result};

/// Decide the actual output path given the requested path and the collision
/// policy.
///
/// # Errors
///
/// Returns [`BindError::OutputExists`] when the path exists and the policy
/// is [`CollisionPolicy::Abort`].
pub fn resolve_collision(path: &Path, policy: CollisionPolicy) -> Result<PathBuf> {
    if !path.exists() {
        return Ok(path.to_path_buf());
    }

    match policy {
        CollisionPolicy::Overwrite => {
            warn!("Output exists, overwriting: {}", path.display());
            Ok(path.to_path_buf())
        }
        CollisionPolicy::Rename => {
            let renamed = next_available_path(path);
            warn!(
                "Output exists, writing to {} instead",
                renamed.display()
            );
            Ok(renamed)
        }
        CollisionPolicy::Abort => Err(BindError::output_exists(path.to_path_buf())),
    }
}

/// Probe `stem_1.ext`, `stem_2.ext`, ... next to the requested path until a
/// free name is found.
fn next_available_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let extension = path.extension().map(|e| e.to_string_lossy().into_owned());
    let parent = path.parent().unwrap_or_else(|| Path::new(""));

    for n in 1u32.. {
        let name = match &extension {
            Some(ext) => format!("{stem}_{n}.{ext}"),
            None => format!("{stem}_{n}"),
        };
        let candidate = parent.join(name);
        if !candidate.exists() {
            return candidate;
        }
    }
    unreachable!("ran out of rename candidates")
}

/// Compress and save the assembled document to `path`.
///
/// The document is first written to `<path>.tmp` and then renamed over the
/// final path.
///
/// # Errors
///
/// Returns [`BindError::FailedToCreateOutput`] if the file (or a missing
/// parent directory) cannot be created, [`BindError::FailedToWrite`] if
/// serialization or the final rename fails.
pub fn write_document(mut doc: Document, path: &Path) -> Result<()> {
    doc.compress();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| BindError::FailedToCreateOutput {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let file = fs::File::create(&tmp_path).map_err(|source| BindError::FailedToCreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let write_result = doc
        .save_to(&mut writer)
        .map_err(|err| io::Error::other(err.to_string()))
        .and_then(|_| writer.flush());

    if let Err(source) = write_result {
        // Best effort; the failure we report is the write failure.
        let _ = fs::remove_file(&tmp_path);
        return Err(BindError::FailedToWrite {
            path: path.to_path_buf(),
            source,
        });
    }

    fs::rename(&tmp_path, path).map_err(|source| BindError::FailedToWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote output: {}", path.display());
    Ok(())
}
