use async_trait::async_trait;
use image::{Rgb, RgbImage};
use sightline::celebrity::{
    run_celebrity_recognition, Celebrity, CelebrityConfig, ComparedFace,
    RecognizeCelebritiesResponse,
};
use sightline::client::{CelebrityRecognizer, TextDetector};
use sightline::common::BoundingBox;
use sightline::image2text::{
    run_document_text, Block, BlockType, DocumentTextConfig, DocumentTextResponse,
};
use sightline::{Result, VisionError};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;
use tempfile::tempdir;

struct FakeTextract {
    response: Option<DocumentTextResponse>,
    seen_bytes: Mutex<Option<usize>>,
}

#[async_trait]
impl TextDetector for FakeTextract {
    async fn detect_document_text(&self, image_bytes: &[u8]) -> Result<DocumentTextResponse> {
        *self.seen_bytes.lock().unwrap() = Some(image_bytes.len());
        self.response
            .clone()
            .ok_or_else(|| VisionError::Service("UnsupportedDocumentException".into()))
    }
}

/// Answers by image size so each test image can get its own response.
struct FakeRekognition {
    by_len: HashMap<usize, RecognizeCelebritiesResponse>,
}

#[async_trait]
impl CelebrityRecognizer for FakeRekognition {
    async fn recognize_celebrities(
        &self,
        image_bytes: &[u8],
    ) -> Result<RecognizeCelebritiesResponse> {
        Ok(self.by_len.get(&image_bytes.len()).cloned().unwrap_or_default())
    }
}

fn celebrity(name: &str, confidence: f32) -> Celebrity {
    Celebrity {
        name: Some(name.to_string()),
        match_confidence: Some(confidence),
        face: Some(ComparedFace {
            bounding_box: Some(BoundingBox::new(0.1, 0.2, 0.3, 0.4)),
            confidence: Some(99.9),
        }),
        ..Default::default()
    }
}

fn write_image(path: &Path, width: u32, height: u32) -> usize {
    RgbImage::from_pixel(width, height, Rgb([0, 0, 0]))
        .save(path)
        .unwrap();
    std::fs::metadata(path).unwrap().len() as usize
}

mod document_text_tests {
    use super::*;

    #[tokio::test]
    async fn prints_lines_from_persisted_response() {
        let dir = tempdir().unwrap();
        let image_path = dir.path().join("lista.jpeg");
        std::fs::write(&image_path, b"fake-jpeg-bytes").unwrap();

        let config = DocumentTextConfig::new(
            Some(image_path),
            Some(dir.path().join("response.json")),
        );
        let detector = FakeTextract {
            response: Some(DocumentTextResponse {
                blocks: vec![
                    Block::new(BlockType::Page, None),
                    Block::new(BlockType::Line, Some("Caderno 10 materias")),
                    Block::new(BlockType::Word, Some("Caderno")),
                    Block::new(BlockType::Line, Some("Lapis de cor")),
                ],
                ..Default::default()
            }),
            seen_bytes: Mutex::new(None),
        };

        let lines = run_document_text(&detector, &config).await.unwrap();

        assert_eq!(lines, vec!["Caderno 10 materias", "Lapis de cor"]);
        assert_eq!(*detector.seen_bytes.lock().unwrap(), Some(15));
        assert!(config.response_path.exists());
    }

    #[tokio::test]
    async fn service_error_skips_persisting() {
        let dir = tempdir().unwrap();
        let image_path = dir.path().join("lista.jpeg");
        std::fs::write(&image_path, b"bytes").unwrap();

        let config = DocumentTextConfig::new(
            Some(image_path),
            Some(dir.path().join("response.json")),
        );
        let detector = FakeTextract {
            response: None,
            seen_bytes: Mutex::new(None),
        };

        let lines = run_document_text(&detector, &config).await.unwrap();

        assert!(lines.is_empty());
        assert!(!config.response_path.exists());
    }

    #[tokio::test]
    async fn empty_input_image_never_reaches_the_service() {
        let dir = tempdir().unwrap();
        let image_path = dir.path().join("lista.jpeg");
        std::fs::write(&image_path, b"").unwrap();

        let config = DocumentTextConfig::new(
            Some(image_path),
            Some(dir.path().join("response.json")),
        );
        let detector = FakeTextract {
            response: Some(DocumentTextResponse::default()),
            seen_bytes: Mutex::new(None),
        };

        let lines = run_document_text(&detector, &config).await.unwrap();

        assert!(lines.is_empty());
        assert!(detector.seen_bytes.lock().unwrap().is_none());
        assert!(!config.response_path.exists());
    }

    #[tokio::test]
    async fn missing_input_image_is_an_io_error() {
        let dir = tempdir().unwrap();
        let config = DocumentTextConfig::new(
            Some(dir.path().join("missing.jpeg")),
            Some(dir.path().join("response.json")),
        );
        let detector = FakeTextract {
            response: Some(DocumentTextResponse::default()),
            seen_bytes: Mutex::new(None),
        };

        let result = run_document_text(&detector, &config).await;

        assert!(matches!(result, Err(VisionError::Io { .. })));
        assert!(detector.seen_bytes.lock().unwrap().is_none());
    }
}

mod celebrity_tests {
    use super::*;

    #[tokio::test]
    async fn annotates_only_images_with_celebrities() {
        let dir = tempdir().unwrap();
        let with_celebs = write_image(&dir.path().join("bbc.jpg"), 1000, 500);
        let without = write_image(&dir.path().join("msn.jpg"), 64, 64);
        assert_ne!(with_celebs, without);

        let recognizer = FakeRekognition {
            by_len: HashMap::from([(
                with_celebs,
                RecognizeCelebritiesResponse {
                    celebrity_faces: vec![celebrity("Neymar", 99.0)],
                    ..Default::default()
                },
            )]),
        };
        let mut config = CelebrityConfig {
            images_dir: dir.path().to_path_buf(),
            image_names: vec!["bbc.jpg".into(), "msn.jpg".into(), "gone.jpg".into()],
            ..Default::default()
        };
        config.annotation.font_path = dir.path().join("missing-font.ttf");

        let written = run_celebrity_recognition(&recognizer, &config).await;

        assert_eq!(written, vec![dir.path().join("bbc-result.jpg")]);
        assert!(!dir.path().join("msn-result.jpg").exists());
        assert!(!dir.path().join("gone-result.jpg").exists());

        let annotated = image::open(&written[0]).unwrap().to_rgb8();
        assert_eq!(annotated.dimensions(), (1000, 500));
        // jpeg is lossy, so check the box edge is strongly red
        let edge = annotated.get_pixel(101, 200);
        assert!(
            edge[0] > 120 && edge[0] > edge[1] + 60 && edge[0] > edge[2] + 60,
            "got {:?}",
            edge
        );
    }

    #[tokio::test]
    async fn low_confidence_celebrities_still_produce_an_output() {
        let dir = tempdir().unwrap();
        let len = write_image(&dir.path().join("neymar-torcedores.jpg"), 200, 100);

        let recognizer = FakeRekognition {
            by_len: HashMap::from([(
                len,
                RecognizeCelebritiesResponse {
                    celebrity_faces: vec![celebrity("Fan", 90.0)],
                    ..Default::default()
                },
            )]),
        };
        let config = CelebrityConfig {
            images_dir: dir.path().to_path_buf(),
            image_names: vec!["neymar-torcedores.jpg".into()],
            ..Default::default()
        };

        let written = run_celebrity_recognition(&recognizer, &config).await;

        assert_eq!(written.len(), 1);
        let annotated = image::open(&written[0]).unwrap().to_rgb8();
        let edge = annotated.get_pixel(21, 50);
        assert!(edge[0] < 60, "face at the threshold must not be drawn, got {:?}", edge);
    }
}
