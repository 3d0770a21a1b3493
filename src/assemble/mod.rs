//! Output document assembly.
//!
//! The assembler owns a skeleton document (catalog plus an empty page tree)
//! and appends converted source documents one at a time, in order. Each
//! append renumbers the incoming objects past the current ceiling, moves them
//! into the output, and splices the incoming pages under the output's root
//! `Pages` node. Source catalogs and intermediate page-tree nodes become
//! unreachable and are pruned when the document is finalized.

pub mod writer;

use log::debug;
use lopdf::{Document, Object, ObjectId, dictionary};

use crate::error::{BindError, Result};

/// Incrementally builds the single output PDF.
pub struct Assembler {
    doc: Document,
    pages_id: ObjectId,
    page_count: usize,
}

impl Assembler {
    /// Create an empty output document: a catalog pointing at a page tree
    /// with no kids.
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");

        let pages_id = doc.new_object_id();
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => Vec::<Object>::new(),
            "Count" => 0,
        };
        doc.objects.insert(pages_id, pages.into());

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        Self {
            doc,
            pages_id,
            page_count: 0,
        }
    }

    /// Append every page of `source` to the output, preserving the source's
    /// internal page order. Returns the number of pages appended.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Assembly`] if the source or output page tree is
    /// structurally broken.
    pub fn append(&mut self, mut source: Document) -> Result<usize> {
        source.renumber_objects_with(self.doc.max_id + 1);
        self.doc.max_id = source.max_id;

        let page_ids: Vec<ObjectId> = source.get_pages().into_values().collect();
        self.doc.objects.extend(source.objects);

        // Reparent the incoming pages onto the output's root page tree so
        // inherited attributes resolve against the output, not a pruned
        // source node.
        for page_id in &page_ids {
            let page = self
                .doc
                .get_object_mut(*page_id)
                .and_then(Object::as_dict_mut)
                .map_err(|err| BindError::assembly(format!("broken source page: {err}")))?;
            page.set("Parent", self.pages_id);
        }

        let pages = self
            .doc
            .get_object_mut(self.pages_id)
            .and_then(Object::as_dict_mut)
            .map_err(|err| BindError::assembly(format!("broken output page tree: {err}")))?;
        let kids = pages
            .get_mut(b"Kids")
            .and_then(Object::as_array_mut)
            .map_err(|err| BindError::assembly(format!("broken output page tree: {err}")))?;
        kids.extend(page_ids.iter().map(|id| Object::Reference(*id)));

        self.page_count += page_ids.len();
        pages.set("Count", self.page_count as i64);

        debug!("Appended {} pages, total {}", page_ids.len(), self.page_count);
        Ok(page_ids.len())
    }

    /// Total pages appended so far.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Finalize the output: drop unreachable objects (source catalogs,
    /// orphaned page-tree nodes) and renumber into a dense id space.
    pub fn into_document(self) -> Document {
        let mut doc = self.doc;
        doc.prune_objects();
        doc.renumber_objects();
        doc
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}
