//! Background colors for tile values.
//!
//! Pure lookup kept apart from the engine, presentation layers may use it or bring their own.

use crate::TileValue;

/// Color for values missing from [`PALETTE`].
pub const DEFAULT_COLOR: &str = "#fb7272";

/// Tile value and its background color, ordered by value.
pub const PALETTE: [(TileValue, &str); 11] = [
    (0, "#fcfcfc"),
    (1, "#f9dc6a"),
    (2, "#F9F871"),
    (3, "#C6F581"),
    (5, "#95EF96"),
    (8, "#66E5AD"),
    (13, "#38DAC1"),
    (21, "#15CCCE"),
    (34, "#1dc5d6"),
    (55, "#309fd6"),
    (89, "#78bcc3"),
];

pub fn color_for(value: TileValue) -> &'static str {
    PALETTE
        .binary_search_by_key(&value, |&(key, _)| key)
        .map(|index| PALETTE[index].1)
        .unwrap_or(DEFAULT_COLOR)
}
