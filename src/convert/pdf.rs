//! PDF source loading.

use std::path::Path;

use lopdf::Document;

use crate::error::{BindError, Result};

/// Load a PDF source file.
///
/// # Errors
///
/// Returns [`BindError::Conversion`] if the file cannot be parsed or is
/// encrypted (encrypted PDFs are out of scope).
pub fn load(path: &Path) -> Result<Document> {
    let doc = Document::load(path)
        .map_err(|err| BindError::conversion(path.to_path_buf(), err.to_string()))?;

    if doc.is_encrypted() {
        return Err(BindError::conversion(
            path.to_path_buf(),
            "encrypted PDFs are not supported",
        ));
    }

    Ok(doc)
}
