//! Filename token → card code tables.

use phf::phf_map;

/// Rank tokens as they appear in the pack's filenames.
pub static RANK_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "ace" => "A",
    "king" => "K",
    "queen" => "Q",
    "jack" => "J",
    "10" => "10",
    "9" => "9",
    "8" => "8",
    "7" => "7",
    "6" => "6",
    "5" => "5",
    "4" => "4",
    "3" => "3",
    "2" => "2",
};

pub static SUIT_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "spades" => "S",
    "hearts" => "H",
    "diamonds" => "D",
    "clubs" => "C",
};

/// Rank codes in deck order.
pub const RANK_CODES: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Suit codes in deck order.
pub const SUIT_CODES: [&str; 4] = ["S", "H", "D", "C"];

pub fn rank_code(token: &str) -> Option<&'static str> {
    RANK_MAP.get(token).copied()
}

pub fn suit_code(token: &str) -> Option<&'static str> {
    SUIT_MAP.get(token).copied()
}
