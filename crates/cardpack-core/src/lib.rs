pub mod config;
pub mod logging;

pub mod cards;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod url_model;

/// Card pack published on OpenGameArt (CC0).
pub const SOURCE_URL: &str = "https://opengameart.org/sites/default/files/Playing%20Cards.zip";

/// Directory the renderer loads card images from, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "img/cards";

/// The source host rejects curl's default agent, so present as a desktop browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
