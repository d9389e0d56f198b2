use clap::Parser;
use lexitree::core::config::{self, CliOverrides, LexiConfig};
use lexitree::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexitree", about = "Browse the 4000 Essential Words collections in your terminal")]
struct Args {
    /// Base URL of the essential collection
    #[arg(long)]
    essential_url: Option<String>,

    /// Base URL of the beginner collection
    #[arg(long)]
    beginner_url: Option<String>,

    /// Attempts per resource before a load fails
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Disable text-to-speech
    #[arg(long)]
    no_speech: bool,

    /// Where to write the log
    #[arg(long, default_value = "lexitree.log")]
    log_file: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "debug")]
    log_level: String,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            essential_url: self.essential_url.clone(),
            beginner_url: self.beginner_url.clone(),
            max_attempts: self.max_attempts,
            no_speech: self.no_speech,
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = args.log_level.parse().unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("lexitree starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        LexiConfig::default()
    });
    let resolved = config::resolve(&file_config, &args.overrides());
    log::debug!("Resolved config: {:?}", resolved);

    tui::run(resolved)
}
