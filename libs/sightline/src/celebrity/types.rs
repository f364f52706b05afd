use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::common::BoundingBox;
use crate::image_utils::AnnotationConfig;

const DEFAULT_IMAGES_DIR: &str = "images";
const DEFAULT_IMAGE_NAMES: [&str; 3] = ["bbc.jpg", "msn.jpg", "neymar-torcedores.jpg"];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComparedFace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Celebrity {
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face: Option<ComparedFace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_confidence: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_gender: Option<String>,
}

impl Celebrity {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// A missing score counts as zero.
    pub fn confidence(&self) -> f32 {
        self.match_confidence.unwrap_or(0.0)
    }

    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.face.as_ref().and_then(|f| f.bounding_box.as_ref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecognizeCelebritiesResponse {
    #[serde(default)]
    pub celebrity_faces: Vec<Celebrity>,
    #[serde(default)]
    pub unrecognized_faces: Vec<ComparedFace>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation_correction: Option<String>,
}

#[derive(Clone, Debug)]
pub struct CelebrityConfig {
    pub images_dir: PathBuf,
    pub image_names: Vec<String>,
    pub annotation: AnnotationConfig,
}

impl Default for CelebrityConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            image_names: DEFAULT_IMAGE_NAMES.iter().map(|s| s.to_string()).collect(),
            annotation: AnnotationConfig::default(),
        }
    }
}
