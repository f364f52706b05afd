use clap::Parser;
use sightline::celebrity::{run_celebrity_recognition, CelebrityConfig};
use sightline::client::{load_aws_config, RekognitionClient};
use sightline::logger::init_logger_exe;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Recognize celebrities and annotate their faces", long_about = None)]
struct Cli {
    #[arg(long, help = "directory holding the input images", default_value = "images")]
    images_dir: PathBuf,
    #[arg(long, help = "TrueType font used for name labels", default_value = "Ubuntu-R.ttf")]
    font: PathBuf,
    #[arg(long, help = "label font size in pixels", default_value_t = 20.0)]
    font_size: f32,
    #[arg(
        long,
        help = "minimum match confidence (exclusive) for a face to be drawn",
        default_value_t = 90.0
    )]
    threshold: f32,
    #[arg(help = "image file names inside the images directory")]
    images: Vec<String>,
}

impl Cli {
    fn into_config(self) -> CelebrityConfig {
        let mut config = CelebrityConfig {
            images_dir: self.images_dir,
            ..Default::default()
        };
        if !self.images.is_empty() {
            config.image_names = self.images;
        }
        config.annotation.font_path = self.font;
        config.annotation.font_size = self.font_size;
        config.annotation.confidence_threshold = self.threshold;
        config
    }
}

#[tokio::main]
async fn main() {
    init_logger_exe();
    let config = Cli::parse().into_config();

    let aws_config = load_aws_config().await;
    let client = RekognitionClient::new(&aws_config);

    let written = run_celebrity_recognition(&client, &config).await;
    log::info!("Annotated {} of {} image(s)", written.len(), config.image_names.len());
}
