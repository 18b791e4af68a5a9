//! Card naming: maps pack filenames to canonical card image names.
//!
//! The pack names its images `<rank>_of_<suit>.png` (e.g. `king_of_spades.png`)
//! plus one or more joker variants. The renderer expects `<RANK><SUIT>.png`
//! (`KS.png`, `10D.png`) and a single `JOKER.png`.

mod code;
mod deck;
mod tables;

pub use code::{image_for_card_code, CARD_BACK_FILE_NAME};
pub use deck::{full_deck, missing_cards};
pub use tables::{rank_code, suit_code, RANK_CODES, RANK_MAP, SUIT_CODES, SUIT_MAP};

use std::fmt;

/// File name every joker variant is saved under.
pub const JOKER_FILE_NAME: &str = "JOKER.png";

const RANK_SUIT_SEPARATOR: &str = "_of_";

/// Where a pack image ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTarget {
    Joker,
    Card {
        rank: &'static str,
        suit: &'static str,
    },
}

impl CardTarget {
    pub fn is_joker(&self) -> bool {
        matches!(self, CardTarget::Joker)
    }

    /// Canonical card code: `JOKER`, `AS`, `10D`, ...
    pub fn code(&self) -> String {
        match self {
            CardTarget::Joker => "JOKER".to_string(),
            CardTarget::Card { rank, suit } => {
                format!("{}{}", rank.to_uppercase(), suit.to_uppercase())
            }
        }
    }

    pub fn file_name(&self) -> String {
        match self {
            CardTarget::Joker => JOKER_FILE_NAME.to_string(),
            CardTarget::Card { .. } => format!("{}.png", self.code()),
        }
    }
}

impl fmt::Display for CardTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}

/// Last component of an archive entry path. Handles both `/` and `\`
/// separators since some archivers write the latter.
pub fn base_file_name(entry_path: &str) -> &str {
    entry_path
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or(entry_path)
}

/// True if the entry path names a PNG file (case-insensitive).
pub fn is_png(entry_path: &str) -> bool {
    entry_path.to_ascii_lowercase().ends_with(".png")
}

/// Classifies a pack image by file name.
///
/// Accepts a bare file name or a full entry path. Returns `None` for names
/// that are not PNGs, do not follow `<rank>_of_<suit>`, or use tokens
/// missing from the tables.
pub fn derive_target(file_name: &str) -> Option<CardTarget> {
    let name = base_file_name(file_name).to_lowercase();
    let stem = name.strip_suffix(".png")?;

    if stem.contains("joker") {
        return Some(CardTarget::Joker);
    }

    let parts: Vec<&str> = stem.split(RANK_SUIT_SEPARATOR).collect();
    let [rank_token, suit_token] = parts.as_slice() else {
        return None;
    };
    Some(CardTarget::Card {
        rank: rank_code(rank_token)?,
        suit: suit_code(suit_token)?,
    })
}

/// Target file name for a pack image, if any. See [`derive_target`].
pub fn derive_target_file_name(file_name: &str) -> Option<String> {
    derive_target(file_name).map(|t| t.file_name())
}
