mod path_utils;
mod types;

pub use path_utils::{image_path, load_image_bytes, result_path};
pub use types::{BoundingBox, PixelRect};
