use async_trait::async_trait;
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types as sdk;

use super::{sdk_coord, sdk_f32, CelebrityRecognizer};
use crate::celebrity::{Celebrity, ComparedFace, RecognizeCelebritiesResponse};
use crate::common::BoundingBox;
use crate::error::{Result, VisionError};

pub struct RekognitionClient {
    inner: aws_sdk_rekognition::Client,
}

impl RekognitionClient {
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            inner: aws_sdk_rekognition::Client::new(config),
        }
    }
}

#[async_trait]
impl CelebrityRecognizer for RekognitionClient {
    async fn recognize_celebrities(
        &self,
        image_bytes: &[u8],
    ) -> Result<RecognizeCelebritiesResponse> {
        let image = sdk::Image::builder()
            .bytes(Blob::new(image_bytes.to_vec()))
            .build();

        log::debug!("Sending {} bytes to Rekognition", image_bytes.len());
        let output = self
            .inner
            .recognize_celebrities()
            .image(image)
            .send()
            .await
            .map_err(|e| VisionError::Service(DisplayErrorContext(&e).to_string()))?;

        Ok(RecognizeCelebritiesResponse {
            celebrity_faces: output.celebrity_faces().iter().map(convert_celebrity).collect(),
            unrecognized_faces: output.unrecognized_faces().iter().map(convert_face).collect(),
            orientation_correction: output
                .orientation_correction()
                .map(|o| o.as_str().to_string()),
        })
    }
}

fn convert_celebrity(celebrity: &sdk::Celebrity) -> Celebrity {
    Celebrity {
        urls: celebrity.urls().to_vec(),
        name: celebrity.name().map(str::to_owned),
        id: celebrity.id().map(str::to_owned),
        face: celebrity.face().map(convert_face),
        match_confidence: sdk_f32(celebrity.match_confidence()),
        known_gender: celebrity
            .known_gender()
            .and_then(|g| g.r#type())
            .map(|t| t.as_str().to_string()),
    }
}

fn convert_face(face: &sdk::ComparedFace) -> ComparedFace {
    ComparedFace {
        bounding_box: face.bounding_box().map(|b| BoundingBox {
            width: sdk_coord(b.width()),
            height: sdk_coord(b.height()),
            left: sdk_coord(b.left()),
            top: sdk_coord(b.top()),
        }),
        confidence: sdk_f32(face.confidence()),
    }
}
