//! Shared helpers for integration tests.
//!
//! Fixtures are generated on the fly: small real PDFs built with lopdf and
//! PNGs built with the image crate, written into per-test temp directories.

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use pdfbind::{CollisionPolicy, Job};

/// Write a minimal valid PDF with `pages` pages of the given width.
///
/// Distinct widths let tests verify page ordering in assembled output.
pub fn write_test_pdf(path: &Path, pages: usize, width: i64) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut kids: Vec<Object> = Vec::new();
    for _ in 0..pages {
        let content = Content {
            operations: vec![Operation::new("BT", vec![]), Operation::new("ET", vec![])],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), 792.into()],
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Count" => pages as i64,
        "Kids" => kids,
    };
    doc.objects.insert(pages_id, pages_dict.into());

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

/// Write a solid-color RGB PNG.
pub fn write_test_png(path: &Path, width: u32, height: u32) {
    RgbImage::from_pixel(width, height, Rgb([200, 100, 50]))
        .save(path)
        .unwrap();
}

/// Write a JSON manifest file.
pub fn write_manifest(path: &Path, manifest: &serde_json::Value) {
    fs::write(path, serde_json::to_string_pretty(manifest).unwrap()).unwrap();
}

/// Build a job with the default (abort) collision policy.
pub fn job(manifest: &Path, output: &Path) -> Job {
    Job {
        manifest: manifest.to_path_buf(),
        output: output.to_path_buf(),
        collision: CollisionPolicy::Abort,
    }
}

/// Load an output PDF and return its page count.
pub fn page_count(path: &Path) -> usize {
    Document::load(path).unwrap().get_pages().len()
}

/// Load an output PDF and return each page's MediaBox width, in page order.
pub fn page_widths(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            media_box[2].as_i64().unwrap()
        })
        .collect()
}

/// Path as a string for embedding into manifest JSON.
pub fn spec(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}
