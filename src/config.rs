//! Configuration for pdfbind.
//!
//! A run is described by a JSON manifest (which files to assemble, with which
//! transform options) plus a [`Job`] derived from CLI arguments (where to
//! write, what to do on output collisions). The manifest is parsed once and
//! validated up front so option typos surface before any file is opened.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

use crate::error::{BindError, Result};
use crate::options::TransformSet;

/// One entry in the manifest's `files` array.
///
/// A bare string is a leaf path spec with no options; an object bundles one
/// or more path specs with a shared option set.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SourceEntry {
    /// A single path spec (file, directory, or glob pattern), no options.
    Path(String),
    /// A group of path specs sharing one option set.
    Group {
        /// Path specs, expanded in declared order.
        files: Vec<String>,
        /// Option names applied to every file resolved from this group.
        #[serde(default)]
        options: Vec<String>,
    },
}

/// Parsed manifest: the ordered list of source entries.
///
/// Unknown top-level keys are ignored; a missing `files` key is a
/// configuration error.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Source entries in declaration order.
    pub files: Vec<SourceEntry>,
}

impl Manifest {
    /// Load and validate a manifest from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read, is not valid
    /// JSON, lacks the `files` key, contains a group with an empty `files`
    /// array, or names an unrecognized option.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| BindError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest: Manifest =
            serde_json::from_str(&text).map_err(|source| BindError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        manifest.validate()?;
        info!("Loaded configuration from {}", path.display());
        Ok(manifest)
    }

    /// Validate the manifest structure and option names.
    ///
    /// Runs the transform resolver over every group so that an option typo is
    /// fatal before any path expansion or conversion work begins.
    pub fn validate(&self) -> Result<()> {
        for entry in &self.files {
            if let SourceEntry::Group { files, options } = entry {
                if files.is_empty() {
                    return Err(BindError::invalid_config(
                        "Group entry has an empty 'files' array",
                    ));
                }
                TransformSet::resolve(options)?;
            }
        }
        Ok(())
    }
}

/// What to do when the requested output path already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Truncate and replace the existing file.
    Overwrite,
    /// Probe `stem_1.pdf`, `stem_2.pdf`, ... until a free path is found.
    Rename,
    /// Fail with `OutputExists` and write nothing.
    #[default]
    Abort,
}

impl FromStr for CollisionPolicy {
    type Err = BindError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "rename" => Ok(Self::Rename),
            "abort" => Ok(Self::Abort),
            _ => Err(BindError::invalid_config(format!(
                "Invalid collision policy: {s}. Must be one of: overwrite, rename, abort"
            ))),
        }
    }
}

/// Complete, validated configuration for one assembly run.
#[derive(Debug, Clone)]
pub struct Job {
    /// Path to the JSON manifest.
    pub manifest: PathBuf,

    /// Requested output PDF path.
    pub output: PathBuf,

    /// Behavior when the output path already exists.
    pub collision: CollisionPolicy,
}

impl Job {
    /// Validate the job for logical inconsistencies.
    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(BindError::invalid_config("Output path is empty"));
        }
        if self.output == self.manifest {
            return Err(BindError::invalid_config(format!(
                "Output file cannot be the same as the config file: {}",
                self.output.display()
            )));
        }
        Ok(())
    }
}
