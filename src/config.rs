use clap::Parser;


// Media host and the original-resolution extensions we keep
pub const MEDIA_HOST: &str = "static.wixstatic.com";
pub const MEDIA_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];
pub const DEFAULT_INPUT: &str = "index.html";

// Log filters, overridable through RUST_LOG
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const VERBOSE_LOG_FILTER: &str = "debug";

#[derive(Parser, Debug)]
#[command(about = "Extract original-resolution Wix media URLs from a saved HTML page")]
pub struct Args {
    /// Saved HTML file to scan
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: String,

    /// Enable verbose logging (stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER }
    }
}
