use std::path::{Path, PathBuf};

use super::types::{Celebrity, CelebrityConfig, RecognizeCelebritiesResponse};
use crate::client::CelebrityRecognizer;
use crate::common::{image_path, load_image_bytes, result_path};
use crate::error::Result;
use crate::image_utils::{annotate_celebrities, AnnotationConfig, LabelFont};

pub async fn recognize_celebrities_from_path(
    recognizer: &dyn CelebrityRecognizer,
    path: &Path,
) -> Result<RecognizeCelebritiesResponse> {
    let image_bytes = load_image_bytes(path)?;
    recognizer.recognize_celebrities(&image_bytes).await
}

/// Opens `input`, draws every qualifying celebrity and writes the result to
/// `output`. Returns the number of faces drawn.
pub fn draw_celebrity_boxes(
    input: &Path,
    output: &Path,
    celebrities: &[Celebrity],
    config: &AnnotationConfig,
) -> Result<usize> {
    let mut image = image::open(input)?.to_rgb8();
    let font = LabelFont::load(&config.font_path, config.font_size);

    let drawn = annotate_celebrities(&mut image, celebrities, &font, config);
    image.save(output)?;
    Ok(drawn)
}

fn log_celebrities(path: &Path, response: &RecognizeCelebritiesResponse, threshold: f32) {
    for celebrity in &response.celebrity_faces {
        let marker = if celebrity.confidence() > threshold { "+" } else { "-" };
        log::info!(
            "{} {} ({:.2}%) {}",
            marker,
            celebrity.display_name(),
            celebrity.confidence(),
            celebrity.urls.join(", ")
        );
    }
    if !response.unrecognized_faces.is_empty() {
        log::info!(
            "{} unrecognized face(s) in {}",
            response.unrecognized_faces.len(),
            path.display()
        );
    }
}

/// Runs recognition over every configured image. Images with no celebrities
/// or with failures are logged and skipped. Returns the written outputs.
pub async fn run_celebrity_recognition(
    recognizer: &dyn CelebrityRecognizer,
    config: &CelebrityConfig,
) -> Vec<PathBuf> {
    let mut written = Vec::new();

    for name in &config.image_names {
        let path = image_path(&config.images_dir, name);

        let response = match recognize_celebrities_from_path(recognizer, &path).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Error recognizing celebrities in {}: {}", path.display(), e);
                RecognizeCelebritiesResponse::default()
            }
        };

        if response.celebrity_faces.is_empty() {
            log::info!("No celebrities found in: {}", path.display());
            continue;
        }
        log_celebrities(&path, &response, config.annotation.confidence_threshold);

        let output = result_path(&path);
        match draw_celebrity_boxes(&path, &output, &response.celebrity_faces, &config.annotation) {
            Ok(drawn) => {
                log::info!("Image saved with {} result(s) at: {}", drawn, output.display());
                written.push(output);
            }
            Err(e) => log::error!("Error annotating {}: {}", path.display(), e),
        }
    }

    written
}
