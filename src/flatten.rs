//! Manifest flattening.
//!
//! Walks the manifest's entry list in declaration order and resolves it into
//! a fully-ordered list of work items: concrete (file, transform set) pairs
//! ready for conversion. Flattening is purely structural; it touches the
//! filesystem only to resolve paths, never to open file contents.

use std::path::PathBuf;

use log::{info, warn};

use crate::config::SourceEntry;
use crate::error::{BindError, Result};
use crate::expand;
use crate::options::TransformSet;

/// One resolved (file, transform-set) pair, consumed exactly once by the
/// page converter. Ordering among work items is significant and preserved
/// end-to-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    /// Concrete path to the source file.
    pub path: PathBuf,
    /// Transforms to apply to every page from this file.
    pub transforms: TransformSet,
}

/// Result of flattening: the ordered work items plus the path specs that
/// were skipped (matched nothing, or only unsupported files).
#[derive(Debug, Default)]
pub struct Flattened {
    /// Work items in final assembly order.
    pub items: Vec<WorkItem>,
    /// Path specs skipped during expansion.
    pub missing: Vec<String>,
}

/// Flatten the manifest entries into ordered work items.
///
/// Sibling entries keep declaration order; paths produced from one spec keep
/// the expander's internal ordering; a group's specs are expanded in declared
/// order. A spec that resolves to nothing, or only to unsupported files, is
/// logged and skipped, never fatal.
///
/// # Errors
///
/// Returns [`BindError::UnrecognizedOption`] if a group names an unknown
/// option (a configuration error, fatal before any conversion work).
pub fn flatten(entries: &[SourceEntry]) -> Result<Flattened> {
    let mut out = Flattened::default();

    for entry in entries {
        match entry {
            SourceEntry::Path(spec) => {
                info!("Processing path entry: {spec}");
                expand_into(spec, TransformSet::default(), &mut out);
            }
            SourceEntry::Group { files, options } => {
                let transforms = TransformSet::resolve(options)?;
                if !options.is_empty() {
                    info!("Processing group with options: {options:?}");
                }
                for spec in files {
                    expand_into(spec, transforms, &mut out);
                }
            }
        }
    }

    Ok(out)
}

/// Expand one spec and append the results, tagging each path with the
/// entry's transform set.
fn expand_into(spec: &str, transforms: TransformSet, out: &mut Flattened) {
    match expand::expand(spec, transforms.recursive) {
        Ok(paths) => {
            out.items.extend(paths.into_iter().map(|path| WorkItem {
                path,
                transforms,
            }));
        }
        Err(BindError::PathNotFound { spec }) => {
            warn!("Path matches nothing, skipping: {spec}");
            out.missing.push(spec);
        }
        Err(err) => {
            // UnsupportedFileType for a spec naming only unsupported files;
            // per-item policy, skip and count it.
            warn!("Skipping {spec}: {err}");
            out.missing.push(spec.to_string());
        }
    }
}
