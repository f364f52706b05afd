mod rekognition;
mod textract;

pub use rekognition::RekognitionClient;
pub use textract::TextractClient;

use async_trait::async_trait;

use crate::celebrity::RecognizeCelebritiesResponse;
use crate::error::Result;
use crate::image2text::DocumentTextResponse;

#[async_trait]
pub trait TextDetector: Send + Sync {
    async fn detect_document_text(&self, image_bytes: &[u8]) -> Result<DocumentTextResponse>;
}

#[async_trait]
pub trait CelebrityRecognizer: Send + Sync {
    async fn recognize_celebrities(&self, image_bytes: &[u8])
        -> Result<RecognizeCelebritiesResponse>;
}

/// Loads region and credentials from the environment once per process.
pub async fn load_aws_config() -> aws_config::SdkConfig {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    log::debug!(
        "AWS config loaded, region: {}",
        config
            .region()
            .map(|r| r.to_string())
            .unwrap_or_else(|| "<unset>".to_string())
    );
    config
}

/// Coordinate and score accessors differ between SDK models: some return
/// `f32`, some `Option<f32>`.
pub(crate) fn sdk_f32(value: impl Into<Option<f32>>) -> Option<f32> {
    value.into()
}

/// SDK coordinates arrive as `f32`; go back through their shortest decimal
/// form so `0.35` stays `0.35` instead of `0.3499999940`.
pub(crate) fn sdk_coord(value: impl Into<Option<f32>>) -> f64 {
    sdk_f32(value)
        .map(|f| f.to_string().parse::<f64>().unwrap_or(f as f64))
        .unwrap_or_default()
}
