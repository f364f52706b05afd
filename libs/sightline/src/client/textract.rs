use async_trait::async_trait;
use aws_sdk_textract::error::DisplayErrorContext;
use aws_sdk_textract::primitives::Blob;
use aws_sdk_textract::types as sdk;

use super::{sdk_coord, sdk_f32, TextDetector};
use crate::common::BoundingBox;
use crate::error::{Result, VisionError};
use crate::image2text::{Block, BlockType, DocumentMetadata, DocumentTextResponse, Geometry};

pub struct TextractClient {
    inner: aws_sdk_textract::Client,
}

impl TextractClient {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            inner: aws_sdk_textract::Client::new(config),
        }
    }
}

#[async_trait]
impl TextDetector for TextractClient {
    async fn detect_document_text(&self, image_bytes: &[u8]) -> Result<DocumentTextResponse> {
        let document = sdk::Document::builder()
            .bytes(Blob::new(image_bytes.to_vec()))
            .build();

        log::debug!("Sending {} bytes to Textract", image_bytes.len());
        let output = self
            .inner
            .detect_document_text()
            .document(document)
            .send()
            .await
            .map_err(|e| VisionError::Service(DisplayErrorContext(&e).to_string()))?;

        Ok(DocumentTextResponse {
            document_metadata: output.document_metadata().map(|m| DocumentMetadata {
                pages: m.pages(),
            }),
            blocks: output.blocks().iter().map(convert_block).collect(),
            detect_document_text_model_version: output
                .detect_document_text_model_version()
                .map(str::to_owned),
        })
    }
}

fn convert_block(block: &sdk::Block) -> Block {
    Block {
        block_type: block
            .block_type()
            .map(|t| BlockType::from(t.as_str()))
            .unwrap_or_else(|| BlockType::Other(String::new())),
        confidence: sdk_f32(block.confidence()),
        text: block.text().map(str::to_owned),
        geometry: block.geometry().map(|g| Geometry {
            bounding_box: g.bounding_box().map(|b| BoundingBox {
                width: sdk_coord(b.width()),
                height: sdk_coord(b.height()),
                left: sdk_coord(b.left()),
                top: sdk_coord(b.top()),
            }),
        }),
        id: block.id().map(str::to_owned),
        page: block.page(),
    }
}
