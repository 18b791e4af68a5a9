use cardpack_core::error::CardpackError;
use cardpack_core::logging;

mod cli;

use crate::cli::{error_message, Cli};

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    // Errors are part of the normal output, so they go to stdout like the rest.
    if let Err(err) = Cli::run_from_args() {
        match &err {
            CardpackError::Other(cause) => tracing::error!("unexpected failure: {:#}", cause),
            other => tracing::error!("run failed: {}", other),
        }
        println!("{}", error_message(err));
        std::process::exit(1);
    }
}
