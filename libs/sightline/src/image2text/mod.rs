mod types;
pub use types::{Block, BlockType, DocumentMetadata, DocumentTextConfig, DocumentTextResponse, Geometry};

mod utils;
pub use utils::{extract_lines, extract_lines_from_file, run_document_text, save_response};
