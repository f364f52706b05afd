use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::common::BoundingBox;

const DEFAULT_IMAGE_PATH: &str = "images/lista-material-escolar.jpeg";
const DEFAULT_RESPONSE_PATH: &str = "response.json";

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BlockType {
    Page,
    Line,
    Word,
    KeyValueSet,
    Table,
    Cell,
    SelectionElement,
    MergedCell,
    Title,
    Query,
    QueryResult,
    Signature,
    TableTitle,
    TableFooter,
    Layout(String),
    Other(String),
}

impl BlockType {
    pub fn as_str(&self) -> &str {
        match self {
            BlockType::Page => "PAGE",
            BlockType::Line => "LINE",
            BlockType::Word => "WORD",
            BlockType::KeyValueSet => "KEY_VALUE_SET",
            BlockType::Table => "TABLE",
            BlockType::Cell => "CELL",
            BlockType::SelectionElement => "SELECTION_ELEMENT",
            BlockType::MergedCell => "MERGED_CELL",
            BlockType::Title => "TITLE",
            BlockType::Query => "QUERY",
            BlockType::QueryResult => "QUERY_RESULT",
            BlockType::Signature => "SIGNATURE",
            BlockType::TableTitle => "TABLE_TITLE",
            BlockType::TableFooter => "TABLE_FOOTER",
            BlockType::Layout(s) | BlockType::Other(s) => s,
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for BlockType {
    fn from(s: &str) -> Self {
        match s {
            "PAGE" => BlockType::Page,
            "LINE" => BlockType::Line,
            "WORD" => BlockType::Word,
            "KEY_VALUE_SET" => BlockType::KeyValueSet,
            "TABLE" => BlockType::Table,
            "CELL" => BlockType::Cell,
            "SELECTION_ELEMENT" => BlockType::SelectionElement,
            "MERGED_CELL" => BlockType::MergedCell,
            "TITLE" => BlockType::Title,
            "QUERY" => BlockType::Query,
            "QUERY_RESULT" => BlockType::QueryResult,
            "SIGNATURE" => BlockType::Signature,
            "TABLE_TITLE" => BlockType::TableTitle,
            "TABLE_FOOTER" => BlockType::TableFooter,
            layout if layout.starts_with("LAYOUT_") => BlockType::Layout(layout.to_string()),
            other => BlockType::Other(other.to_string()),
        }
    }
}

impl From<String> for BlockType {
    fn from(s: String) -> Self {
        BlockType::from(s.as_str())
    }
}

impl Serialize for BlockType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BlockType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(BlockType::from)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Geometry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    pub block_type: BlockType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i32>,
}

impl Block {
    pub fn new(block_type: BlockType, text: Option<&str>) -> Self {
        Self {
            block_type,
            confidence: None,
            text: text.map(str::to_owned),
            geometry: None,
            id: None,
            page: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<i32>,
}

/// Result of a document text detection call, in the service's JSON shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentTextResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_metadata: Option<DocumentMetadata>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detect_document_text_model_version: Option<String>,
}

#[derive(Clone, Debug)]
pub struct DocumentTextConfig {
    pub image_path: PathBuf,
    pub response_path: PathBuf,
}

impl Default for DocumentTextConfig {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from(DEFAULT_IMAGE_PATH),
            response_path: PathBuf::from(DEFAULT_RESPONSE_PATH),
        }
    }
}

impl DocumentTextConfig {
    pub fn new(image_path: Option<PathBuf>, response_path: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            image_path: image_path.unwrap_or(defaults.image_path),
            response_path: response_path.unwrap_or(defaults.response_path),
        }
    }
}
