//! CLI for the card pack fetcher.

mod run;

use cardpack_core::config::{self, CardpackConfig};
use cardpack_core::error::CardpackError;
use clap::Parser;

pub use run::run_fetch;

/// Downloads the OpenGameArt playing-card pack and saves the images as
/// `AS.png`, `10D.png`, ..., `JOKER.png` under `img/cards`.
#[derive(Debug, Parser)]
#[command(name = "cardpack", version)]
#[command(about = "Download and rename playing-card images for the game client", long_about = None)]
pub struct Cli {}

impl Cli {
    pub fn run_from_args() -> Result<(), CardpackError> {
        let _cli = Cli::parse();
        let cfg = load_config();
        tracing::debug!("loaded config: {:?}", cfg);
        run_fetch(&cfg)
    }
}

/// Text printed for a fatal error: the message followed by its causes.
pub fn error_message(err: CardpackError) -> String {
    format!("{:#}", anyhow::Error::from(err))
}

/// A broken or unreadable config file should not stop the download.
fn load_config() -> CardpackConfig {
    match config::load_or_init() {
        Ok(cfg) => cfg,
        Err(err) => {
            tracing::warn!("using default config: {:#}", err);
            CardpackConfig::default()
        }
    }
}
