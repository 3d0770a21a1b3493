//! Page conversion.
//!
//! Turns one work item into a ready-to-append PDF document: PDF sources are
//! loaded as-is, images are wrapped as a single PDF page, and the item's
//! transform set is applied to every page either way.

pub mod image;
pub mod pdf;
pub mod transform;

use log::{debug, info};
use lopdf::Document;

use crate::error::{BindError, Result};
use crate::expand::{self, SourceKind};
use crate::flatten::WorkItem;

/// Convert one work item into a document whose pages are ready to append.
///
/// # Errors
///
/// * [`BindError::UnsupportedFileType`] for extensions outside the supported
///   set (the expander should have filtered these already; re-checked here).
/// * [`BindError::Conversion`] wrapping any decode, load, or transform
///   failure.
pub fn convert(item: &WorkItem) -> Result<Document> {
    let kind = expand::classify(&item.path)
        .ok_or_else(|| BindError::unsupported_file_type(item.path.clone()))?;

    let mut doc = match kind {
        SourceKind::Pdf => {
            debug!("Loading PDF: {}", item.path.display());
            pdf::load(&item.path)?
        }
        SourceKind::Image => {
            info!("Converting image to PDF page: {}", item.path.display());
            image::load(&item.path)?
        }
    };

    if !item.transforms.is_identity() {
        debug!(
            "Applying transforms {:?} to {}",
            item.transforms,
            item.path.display()
        );
        transform::apply(&mut doc, &item.transforms)
            .map_err(|err| BindError::conversion(item.path.clone(), err.to_string()))?;
    }

    Ok(doc)
}
