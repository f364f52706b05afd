use ab_glyph::{FontVec, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::path::Path;

use crate::error::{Result, VisionError};

const GLYPH_SIZE: u32 = 8;

/// Font used for celebrity labels: a TrueType file when one can be loaded,
/// otherwise the built-in 8x8 bitmap glyphs.
pub enum LabelFont {
    TrueType { font: FontVec, scale: PxScale },
    Bitmap { pixel_size: u32 },
}

impl LabelFont {
    /// Never fails; an unreadable font file falls back to the bitmap glyphs.
    pub fn load(path: &Path, size: f32) -> Self {
        match Self::from_file(path, size) {
            Ok(font) => {
                log::debug!("Loaded font {}", path.display());
                font
            }
            Err(e) => {
                log::warn!("{}. Using default font.", e);
                Self::builtin(size)
            }
        }
    }

    pub fn from_file(path: &Path, size: f32) -> Result<Self> {
        let data = std::fs::read(path)
            .map_err(|e| VisionError::Font(format!("font not found at {}: {}", path.display(), e)))?;
        let font = FontVec::try_from_vec(data)
            .map_err(|_| VisionError::Font(format!("failed to parse font file {}", path.display())))?;

        Ok(LabelFont::TrueType {
            font,
            scale: PxScale::from(size),
        })
    }

    pub fn builtin(size: f32) -> Self {
        LabelFont::Bitmap {
            pixel_size: ((size / GLYPH_SIZE as f32).floor() as u32).max(1),
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, LabelFont::Bitmap { .. })
    }

    pub fn text_size(&self, text: &str) -> (u32, u32) {
        match self {
            LabelFont::TrueType { font, scale } => text_size(*scale, font, text),
            LabelFont::Bitmap { pixel_size } => {
                let cell = GLYPH_SIZE * pixel_size;
                (text.chars().count() as u32 * cell, cell)
            }
        }
    }

    pub fn draw_text(&self, image: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, text: &str) {
        match self {
            LabelFont::TrueType { font, scale } => {
                draw_text_mut(image, color, x, y, *scale, font, text);
            }
            LabelFont::Bitmap { pixel_size } => {
                draw_bitmap_text(image, color, x, y, *pixel_size, text);
            }
        }
    }
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

fn draw_bitmap_text(image: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, pixel_size: u32, text: &str) {
    let step = (GLYPH_SIZE * pixel_size) as i32;
    let px = pixel_size as i32;

    for (i, c) in text.chars().enumerate() {
        let origin_x = x + i as i32 * step;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                // bit 0 is the leftmost pixel
                if bits & (1 << col) == 0 {
                    continue;
                }
                let rect = Rect::at(origin_x + col as i32 * px, y + row as i32 * px)
                    .of_size(pixel_size, pixel_size);
                draw_filled_rect_mut(image, rect, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_falls_back_to_builtin() {
        let font = LabelFont::load(Path::new("no-such-font.ttf"), 20.0);
        assert!(font.is_builtin());
    }

    #[test]
    fn garbage_font_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();

        assert!(matches!(LabelFont::from_file(&path, 20.0), Err(VisionError::Font(_))));
        assert!(LabelFont::load(&path, 20.0).is_builtin());
    }

    #[test]
    fn builtin_font_measures_whole_cells() {
        let font = LabelFont::builtin(20.0);
        assert_eq!(font.text_size("Pelé"), (64, 16));
    }

    #[test]
    fn builtin_font_draws_pixels_and_clips() {
        let mut image = RgbImage::new(40, 20);
        let font = LabelFont::builtin(8.0);
        font.draw_text(&mut image, Rgb([255, 255, 255]), -4, -2, "AB");

        assert!(image.pixels().any(|p| p.0 == [255, 255, 255]));
    }
}
