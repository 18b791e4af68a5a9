//! The full set of images the renderer expects.

use std::path::Path;

use super::tables::{RANK_CODES, SUIT_CODES};
use super::JOKER_FILE_NAME;

/// All 53 expected file names: 52 cards, suit by suit in rank order, then the joker.
pub fn full_deck() -> Vec<String> {
    SUIT_CODES
        .iter()
        .flat_map(|suit| RANK_CODES.iter().map(move |rank| format!("{rank}{suit}.png")))
        .chain(std::iter::once(JOKER_FILE_NAME.to_string()))
        .collect()
}

/// Expected file names not present in `dir`, in [`full_deck`] order.
pub fn missing_cards(dir: &Path) -> Vec<String> {
    full_deck()
        .into_iter()
        .filter(|name| !dir.join(name).is_file())
        .collect()
}
