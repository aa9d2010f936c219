//! ASCII brightness ramp
//!
//! A single ten-character ramp maps pixel brightness to glyph density:
//! dark pixels get heavy glyphs, bright pixels get sparse ones.

/// Ramp characters ordered from darkest to lightest
///
/// Index 0 renders the darkest pixels, index 9 the lightest.
pub const PALETTE: [char; 10] = [
    '@',  // 0: darkest
    '%',  // 1
    '#',  // 2
    '*',  // 3
    '+',  // 4
    '=',  // 5
    '-',  // 6
    ':',  // 7
    '.',  // 8
    ' ',  // 9: lightest
];

/// Near-white cutoff for the space fast path
///
/// Brightness strictly above this maps straight to a space, skipping the
/// ramp arithmetic. The cutoff is wider than the arithmetic alone:
/// `floor(b / 255 * 9)` only reaches index 9 at exactly 255, so 241-254
/// land here instead of on `'.'`.
pub const WHITE_CUTOFF: u8 = 240;

/// Select the ramp character for a brightness value
///
/// # Arguments
/// * `brightness` - Mean channel brightness [0, 255]
///
/// # Returns
/// The character to draw for this brightness
pub fn glyph_for(brightness: u8) -> char {
    if brightness > WHITE_CUTOFF {
        return ' ';
    }

    // Quantize to 0-9: floor((brightness / 255) * 9), in integer math
    let index = (brightness as usize * (PALETTE.len() - 1)) / 255;

    PALETTE[index]
}
