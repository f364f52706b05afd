use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use std::path::PathBuf;

use super::LabelFont;
use crate::celebrity::Celebrity;
use crate::common::PixelRect;

const DEFAULT_FONT_PATH: &str = "Ubuntu-R.ttf";
const DEFAULT_FONT_SIZE: f32 = 20.0;
const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 90.0;
const BOX_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const LABEL_TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

#[derive(Clone, Debug)]
pub struct AnnotationConfig {
    pub font_path: PathBuf,
    pub font_size: f32,
    /// Faces are drawn only when their match confidence is strictly above this.
    pub confidence_threshold: f32,
    pub box_thickness: u32,
    /// Distance in pixels from the label's top edge to the box's top edge.
    pub label_offset: i32,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: DEFAULT_FONT_SIZE,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            box_thickness: 3,
            label_offset: 20,
        }
    }
}

/// Draws a box and name label for every celebrity above the confidence
/// threshold. Returns how many were drawn.
pub fn annotate_celebrities(
    image: &mut RgbImage,
    celebrities: &[Celebrity],
    font: &LabelFont,
    config: &AnnotationConfig,
) -> usize {
    let (width, height) = image.dimensions();
    let mut drawn = 0;

    for celebrity in celebrities {
        if celebrity.confidence() <= config.confidence_threshold {
            log::debug!(
                "Skipping {} at confidence {:.2}",
                celebrity.display_name(),
                celebrity.confidence()
            );
            continue;
        }

        let Some(bbox) = celebrity.bounding_box() else {
            log::warn!("No bounding box for {}, skipping", celebrity.display_name());
            continue;
        };

        let rect = bbox.to_pixels(width, height);
        draw_outline(image, &rect, config.box_thickness);
        draw_label(
            image,
            font,
            rect.left,
            rect.top - config.label_offset,
            celebrity.display_name(),
        );
        drawn += 1;
    }

    drawn
}

/// The stroke grows inward from the box edge, right and bottom inclusive.
fn draw_outline(image: &mut RgbImage, rect: &PixelRect, thickness: u32) {
    let outer_width = rect.width() + 1;
    let outer_height = rect.height() + 1;

    for t in 0..thickness {
        let (Some(w), Some(h)) = (
            outer_width.checked_sub(2 * t).filter(|w| *w > 0),
            outer_height.checked_sub(2 * t).filter(|h| *h > 0),
        ) else {
            break;
        };
        let ring = Rect::at(rect.left + t as i32, rect.top + t as i32).of_size(w, h);
        draw_hollow_rect_mut(image, ring, BOX_COLOR);
    }
}

fn draw_label(image: &mut RgbImage, font: &LabelFont, x: i32, y: i32, text: &str) {
    let (text_width, text_height) = font.text_size(text);
    if text_width > 0 && text_height > 0 {
        draw_filled_rect_mut(image, Rect::at(x, y).of_size(text_width, text_height), BOX_COLOR);
    }
    font.draw_text(image, LABEL_TEXT_COLOR, x, y, text);
}
