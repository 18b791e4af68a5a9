//! Card strings used by the game API (`AS`, `10H`, `X`) → image file names.
//!
//! Not used by the downloader itself. This is the lookup the card renderer
//! does against the images `extract` writes, kept next to the naming rules it
//! depends on.

use super::JOKER_FILE_NAME;

/// Shown for anything that is not a recognizable card string.
pub const CARD_BACK_FILE_NAME: &str = "card_back.png";

/// Image file name for a game API card string.
///
/// `X` is the joker. Other cards are rank then suit: two characters, or
/// three when the rank is `10`. Unknown shapes fall back to the card back;
/// rank and suit characters themselves are not validated. Whitespace is not
/// stripped, so `" AS"` is an unknown shape.
pub fn image_for_card_code(card: &str) -> String {
    if card.eq_ignore_ascii_case("x") {
        return JOKER_FILE_NAME.to_string();
    }

    let upper = card.to_ascii_uppercase();
    let chars = upper.chars().count();
    if chars == 2 || (chars == 3 && upper.starts_with("10")) {
        return format!("{upper}.png");
    }

    tracing::debug!(card, "unknown card string, using card back");
    CARD_BACK_FILE_NAME.to_string()
}
