//! Image-to-PDF conversion.
//!
//! Decodes a raster image and wraps it as a single-page PDF document sized to
//! the image (1 px = 1 pt). The pixel data is embedded as a DeviceRGB image
//! XObject drawn over the full page. Alpha channels are discarded by
//! converting to RGB before embedding; no compositing against a background is
//! performed.

use std::path::Path;

use log::debug;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::error::{BindError, Result};

/// Decode an image file into a single-page PDF document.
///
/// # Errors
///
/// Returns [`BindError::Conversion`] for decode failures (corrupt or
/// truncated image data) or content-stream encoding failures.
pub fn load(path: &Path) -> Result<Document> {
    let img = image::open(path)
        .map_err(|err| BindError::conversion(path.to_path_buf(), err.to_string()))?;

    if img.color().has_alpha() {
        debug!("Discarding alpha channel: {}", path.display());
    }
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    build_page_document(width, height, rgb.into_raw())
        .map_err(|err| BindError::conversion(path.to_path_buf(), err.to_string()))
}

/// Build a one-page document around raw RGB8 pixel data.
fn build_page_document(width: u32, height: u32, pixels: Vec<u8>) -> anyhow::Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        pixels,
    ));

    // Scale the unit image square to fill the page.
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Real(width as f32),
                    0.into(),
                    0.into(),
                    Object::Real(height as f32),
                    0.into(),
                    0.into(),
                ],
            ),
            Operation::new("Do", vec!["Im0".into()]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let resources_id = doc.add_object(dictionary! {
        "XObject" => dictionary! { "Im0" => image_id },
    });

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            (width as i64).into(),
            (height as i64).into(),
        ],
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, pages_dict.into());

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    Ok(doc)
}
