use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::types::{BlockType, DocumentTextConfig, DocumentTextResponse};
use crate::client::TextDetector;
use crate::common::load_image_bytes;
use crate::error::{Result, VisionError};

/// Writes the response with 4-space indentation.
pub fn save_response(response: &DocumentTextResponse, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| VisionError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    response.serialize(&mut serializer)?;

    writer.flush().map_err(|e| VisionError::io(path, e))?;
    log::debug!("Saved {} blocks to {}", response.blocks.len(), path.display());
    Ok(())
}

/// One string per `LINE` block, in response order. A line without text
/// becomes an empty string.
pub fn extract_lines(response: &DocumentTextResponse) -> Vec<String> {
    response
        .blocks
        .iter()
        .filter(|block| block.block_type == BlockType::Line)
        .map(|block| block.text.clone().unwrap_or_default())
        .collect()
}

fn read_response(path: &Path) -> Result<DocumentTextResponse> {
    let file = File::open(path).map_err(|e| VisionError::io(path, e))?;
    let response = serde_json::from_reader(BufReader::new(file))?;
    Ok(response)
}

/// Never fails: a missing or malformed file is logged and yields no lines.
pub fn extract_lines_from_file(path: &Path) -> Vec<String> {
    match read_response(path) {
        Ok(response) => extract_lines(&response),
        Err(e) => {
            log::error!("Failed to process response file: {}", e);
            Vec::new()
        }
    }
}

pub async fn run_document_text(
    detector: &dyn TextDetector,
    config: &DocumentTextConfig,
) -> Result<Vec<String>> {
    let image_bytes = load_image_bytes(&config.image_path)?;
    if image_bytes.is_empty() {
        log::warn!("{} is empty, skipping text detection", config.image_path.display());
        return Ok(Vec::new());
    }
    log::info!(
        "Loaded {} bytes from {}",
        image_bytes.len(),
        config.image_path.display()
    );

    let response = match detector.detect_document_text(&image_bytes).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Error calling text detection: {}", e);
            return Ok(Vec::new());
        }
    };

    if let Some(pages) = response.document_metadata.as_ref().and_then(|m| m.pages) {
        log::debug!("Service reported {} page(s)", pages);
    }

    save_response(&response, &config.response_path)?;
    Ok(extract_lines_from_file(&config.response_path))
}
