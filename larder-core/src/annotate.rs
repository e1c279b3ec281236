//! Drawing detected ingredients onto the source photo.

use std::collections::HashMap;
use std::io::Cursor;

use ab_glyph::{FontRef, PxScale};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::error::AnnotateError;
use crate::types::DetectedItem;

static FONT_BYTES: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");

const BOX_COLOR: Rgba<u8> = Rgba([0, 255, 0, 255]);
const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const BOX_THICKNESS: i32 = 3;
const LABEL_SCALE: f32 = 22.0;
const LABEL_PADDING: u32 = 5;

/// An annotated copy of a photo.
#[derive(Debug, Clone)]
pub struct AnnotatedImage {
    pub image: RgbaImage,
    /// Number of items that had both a label and a box and were drawn.
    pub drawn: usize,
}

/// Text shown next to each box: the label, then `"label (n)"` for repeats.
///
/// Items missing a label or box get `None` and do not advance any count.
pub fn display_labels(items: &[DetectedItem]) -> Vec<Option<String>> {
    let mut seen: HashMap<String, u32> = HashMap::new();
    items
        .iter()
        .map(|item| {
            item.bbox?;
            let label = item.normalized_label()?;
            let count = seen.entry(label.clone()).or_insert(0);
            *count += 1;
            Some(if *count > 1 {
                format!("{} ({})", label, count)
            } else {
                label
            })
        })
        .collect()
}

/// Draw a labeled box for each usable item on a copy of `source`.
pub fn annotate_detections(
    source: &DynamicImage,
    items: &[DetectedItem],
) -> Result<AnnotatedImage, AnnotateError> {
    let font =
        FontRef::try_from_slice(FONT_BYTES).map_err(|e| AnnotateError::Font(e.to_string()))?;
    let scale = PxScale::from(LABEL_SCALE);

    let mut canvas = source.to_rgba8();
    let (width, height) = canvas.dimensions();
    let mut drawn = 0;

    tracing::debug!(count = items.len(), width, height, "Annotating detections");

    for (item, label) in items.iter().zip(display_labels(items)) {
        let (Some(bbox), Some(label)) = (item.bbox, label) else {
            tracing::warn!(?item, "Skipping annotation missing box_2d or label");
            continue;
        };

        let (x1, y1, x2, y2) = bbox.to_pixels(width, height);
        let (left, right) = (x1.min(x2), x1.max(x2));
        let (top, bottom) = (y1.min(y2), y1.max(y2));

        for offset in 0..BOX_THICKNESS {
            let rect = Rect::at(left - offset, top - offset).of_size(
                (right - left + 1 + 2 * offset) as u32,
                (bottom - top + 1 + 2 * offset) as u32,
            );
            draw_hollow_rect_mut(&mut canvas, rect, BOX_COLOR);
        }

        let (text_w, text_h) = text_size(scale, &font, &label);
        let bg_w = text_w.max(1);
        let bg_h = text_h + 2 * LABEL_PADDING;
        // Sit the label on top of the box, pushed down when the box touches the top edge.
        let bg_top = (top - bg_h as i32).max(0);
        draw_filled_rect_mut(
            &mut canvas,
            Rect::at(left, bg_top).of_size(bg_w, bg_h),
            BOX_COLOR,
        );
        draw_text_mut(
            &mut canvas,
            TEXT_COLOR,
            left,
            bg_top + LABEL_PADDING as i32,
            scale,
            &font,
            &label,
        );

        drawn += 1;
    }

    tracing::info!(drawn, "Annotated image");
    Ok(AnnotatedImage {
        image: canvas,
        drawn,
    })
}

/// Decode `bytes`, annotate, and return the annotated image.
pub fn annotate_image_bytes(
    bytes: &[u8],
    items: &[DetectedItem],
) -> Result<AnnotatedImage, AnnotateError> {
    let source = image::load_from_memory(bytes).map_err(AnnotateError::Decode)?;
    annotate_detections(&source, items)
}

/// Encode an annotated image as JPEG.
pub fn encode_jpeg(image: &RgbaImage) -> Result<Vec<u8>, AnnotateError> {
    // JPEG has no alpha channel.
    let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
    let mut buf = Cursor::new(Vec::new());
    rgb.write_to(&mut buf, ImageFormat::Jpeg)
        .map_err(AnnotateError::Encode)?;
    Ok(buf.into_inner())
}
