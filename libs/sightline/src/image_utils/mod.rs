mod annotate;
mod font;

pub use annotate::{annotate_celebrities, AnnotationConfig};
pub use font::LabelFont;
