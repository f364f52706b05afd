use anyhow::{Context, Result};
use clap::Parser;
use sightline::client::{load_aws_config, TextractClient};
use sightline::image2text::{run_document_text, DocumentTextConfig};
use sightline::logger::init_logger_exe;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Extract text lines from a document image", long_about = None)]
struct Cli {
    #[arg(long, help = "input image (defaults to images/lista-material-escolar.jpeg)")]
    image: Option<PathBuf>,
    #[arg(long, help = "where the raw service response is written (defaults to response.json)")]
    response: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger_exe();
    let cli = Cli::parse();
    let config = DocumentTextConfig::new(cli.image, cli.response);

    let aws_config = load_aws_config().await;
    let client = TextractClient::new(&aws_config);

    let lines = run_document_text(&client, &config)
        .await
        .with_context(|| format!("failed to extract text from {}", config.image_path.display()))?;
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
