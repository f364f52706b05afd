mod types;
pub use types::{Celebrity, CelebrityConfig, ComparedFace, RecognizeCelebritiesResponse};

mod utils;
pub use utils::{draw_celebrity_boxes, recognize_celebrities_from_path, run_celebrity_recognition};
