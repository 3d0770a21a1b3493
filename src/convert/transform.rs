//! Page-level geometric transforms.
//!
//! Rotation is expressed through the page's `/Rotate` attribute so viewers do
//! the work; no pixel or content rewriting happens. Flips have no PDF page
//! attribute, so they prepend a `cm` mirror matrix to the page's content
//! stream, anchored to the page's MediaBox so the content stays on the page.

use anyhow::{Context, anyhow, bail};
use lopdf::content::Operation;
use lopdf::{Document, Object, ObjectId};

use crate::options::{Rotation, TransformSet};

/// Apply a transform set to every page of a document.
pub fn apply(doc: &mut Document, transforms: &TransformSet) -> anyhow::Result<()> {
    let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();

    for page_id in page_ids {
        if let Some(rotation) = transforms.rotation {
            rotate_page(doc, page_id, rotation)?;
        }
        if transforms.flip_h || transforms.flip_v {
            flip_page(doc, page_id, transforms.flip_h, transforms.flip_v)?;
        }
    }

    Ok(())
}

/// Fold a counter-clockwise rotation into the page's `/Rotate` value.
///
/// `/Rotate` is clockwise, so a counter-clockwise request subtracts. The
/// result is normalized into 0..360 and any inherited value is materialized
/// onto the page dictionary itself.
fn rotate_page(doc: &mut Document, page_id: ObjectId, rotation: Rotation) -> anyhow::Result<()> {
    let current = inherited_rotation(doc, page_id)?;
    let new = (current - rotation.as_degrees()).rem_euclid(360);

    let page = doc
        .get_object_mut(page_id)
        .and_then(Object::as_dict_mut)
        .context("page object is not a dictionary")?;
    page.set("Rotate", Object::Integer(new));

    Ok(())
}

/// Read the effective `/Rotate` of a page, walking the Parent chain for
/// inherited values. Missing means 0.
fn inherited_rotation(doc: &Document, page_id: ObjectId) -> anyhow::Result<i64> {
    let mut current = page_id;
    loop {
        let dict = doc
            .get_object(current)
            .and_then(Object::as_dict)
            .map_err(|err| anyhow!("broken page tree: {err}"))?;

        if let Ok(value) = dict.get(b"Rotate") {
            return Ok(resolve(doc, value)?
                .as_i64()
                .map_err(|err| anyhow!("non-integer /Rotate: {err}"))?);
        }

        match dict.get(b"Parent") {
            Ok(parent) => {
                current = parent
                    .as_reference()
                    .map_err(|err| anyhow!("non-reference /Parent: {err}"))?;
            }
            Err(_) => return Ok(0),
        }
    }
}

/// Prepend a mirror matrix to the page's content stream.
fn flip_page(
    doc: &mut Document,
    page_id: ObjectId,
    flip_h: bool,
    flip_v: bool,
) -> anyhow::Result<()> {
    let [x0, y0, x1, y1] = media_box(doc, page_id)?;

    // Mirror about the box's center line on each requested axis.
    let a = if flip_h { -1.0 } else { 1.0 };
    let d = if flip_v { -1.0 } else { 1.0 };
    let e = if flip_h { x0 + x1 } else { 0.0 };
    let f = if flip_v { y0 + y1 } else { 0.0 };

    let mut content = doc
        .get_and_decode_page_content(page_id)
        .context("failed to decode page content")?;
    content.operations.insert(
        0,
        Operation::new(
            "cm",
            vec![
                Object::Real(a),
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(d),
                Object::Real(e),
                Object::Real(f),
            ],
        ),
    );

    let encoded = content.encode().context("failed to encode page content")?;
    doc.change_page_content(page_id, encoded)
        .context("failed to replace page content")?;

    Ok(())
}

/// Read the effective MediaBox of a page, walking the Parent chain for
/// inherited values.
fn media_box(doc: &Document, page_id: ObjectId) -> anyhow::Result<[f32; 4]> {
    let mut current = page_id;
    loop {
        let dict = doc
            .get_object(current)
            .and_then(Object::as_dict)
            .map_err(|err| anyhow!("broken page tree: {err}"))?;

        if let Ok(value) = dict.get(b"MediaBox") {
            let array = resolve(doc, value)?
                .as_array()
                .map_err(|err| anyhow!("non-array /MediaBox: {err}"))?;
            if array.len() != 4 {
                bail!("/MediaBox has {} elements, expected 4", array.len());
            }
            let mut corners = [0.0f32; 4];
            for (slot, obj) in corners.iter_mut().zip(array) {
                *slot = number(resolve(doc, obj)?)?;
            }
            return Ok(corners);
        }

        match dict.get(b"Parent") {
            Ok(parent) => {
                current = parent
                    .as_reference()
                    .map_err(|err| anyhow!("non-reference /Parent: {err}"))?;
            }
            Err(_) => bail!("page has no /MediaBox"),
        }
    }
}

/// Follow an indirect reference to its target, or return the object as-is.
fn resolve<'a>(doc: &'a Document, object: &'a Object) -> anyhow::Result<&'a Object> {
    match object {
        Object::Reference(id) => doc
            .get_object(*id)
            .map_err(|err| anyhow!("dangling reference: {err}")),
        direct => Ok(direct),
    }
}

fn number(object: &Object) -> anyhow::Result<f32> {
    match object {
        Object::Integer(value) => Ok(*value as f32),
        Object::Real(value) => Ok(*value),
        other => bail!("expected a number, got {other:?}"),
    }
}
