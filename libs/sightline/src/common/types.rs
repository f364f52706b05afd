use serde::{Deserialize, Serialize};

/// Normalized box as returned by the vision services. Every coordinate is a
/// ratio of the image width or height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BoundingBox {
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
}

/// Pixel corners of a box, truncated toward zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            left,
            top,
        }
    }

    pub fn to_pixels(&self, image_width: u32, image_height: u32) -> PixelRect {
        let (w, h) = (image_width as f64, image_height as f64);

        PixelRect {
            left: (self.left * w) as i32,
            top: (self.top * h) as i32,
            right: ((self.left + self.width) * w) as i32,
            bottom: ((self.top + self.height) * h) as i32,
        }
    }
}

impl PixelRect {
    pub fn width(&self) -> u32 {
        (self.right - self.left).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top).max(0) as u32
    }
}
