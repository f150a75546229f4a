use anyhow::Context;
use clap::Parser;
use tracing::debug;

mod config;
mod discovery;
mod error;
mod io;
mod logging;
mod models;
mod utils;

use crate::config::*;
use crate::discovery::*;
use crate::io::*;
use crate::models::*;


#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();
    logging::init_logging(args.log_filter());

    if let Err(err) = run(&args).await {
        eprintln!("wix-media-yoinker error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    let patterns = RegexPatterns::new().map_err(error::YoinkError::from)?;

    let text = read_input(&args.input).await?;
    let urls = extract_media_urls(&text, &patterns);
    debug!(unique = urls.len(), "extraction complete");

    let stdout = std::io::stdout();
    write_listing(&mut stdout.lock(), urls).context("failed to write listing to stdout")?;

    Ok(())
}
