use std::path::{Path, PathBuf};

use crate::error::{Result, VisionError};

pub fn image_path(images_dir: &Path, name: &str) -> PathBuf {
    images_dir.join(name)
}

/// `images/bbc.jpg` -> `images/bbc-result.jpg`
pub fn result_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}-result.jpg", stem))
}

pub fn load_image_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| VisionError::io(path, e))
}
