pub mod celebrity;
pub mod client;
pub mod common;
pub mod error;
pub mod image2text;
pub mod image_utils;
pub mod logger;

pub use error::{Result, VisionError};
