//! Square names such as `"e1"`: column letter `a`–`h`, then row digit `1`–`8`,
//! where row digit `1` is row 0.

use crate::bitboard::Bitboard;

/// Parse a square reference into a single-bit mask.
///
/// The whole string is scanned; each digit `1`–`8` overwrites the row and each
/// lowercase letter `a`–`h` overwrites the column, so the last occurrence of
/// each wins (`"ea4"` is `a4`). Returns [`Bitboard::EMPTY`] if either coordinate
/// never appears. The empty mask is never a legal move, so callers treat it as
/// "ask again".
pub fn parse_square(text: &str) -> Bitboard {
    let mut row = None;
    let mut col = None;
    for ch in text.chars() {
        match ch {
            '1'..='8' => row = Some(ch as u8 - b'1'),
            'a'..='h' => col = Some(ch as u8 - b'a'),
            _ => {}
        }
    }
    match (col, row) {
        (Some(col), Some(row)) => Bitboard::from_square(col, row),
        _ => Bitboard::EMPTY,
    }
}

/// Name of the lowest set square of `square`, or an empty string for an empty mask.
pub fn format_square(square: Bitboard) -> String {
    match square.lowest_bit_index() {
        Some(index) => {
            let col = (index % 8) as u8;
            let row = (index / 8) as u8;
            let mut s = String::with_capacity(2);
            s.push((b'a' + col) as char);
            s.push((b'1' + row) as char);
            s
        }
        None => String::new(),
    }
}

/// Every set square in row-major order, each followed by a space: `"d3 c4 f5 e6 "`.
pub fn format_square_list(mask: Bitboard) -> String {
    let mut s = String::with_capacity(mask.count() as usize * 3);
    for square in mask.squares() {
        s.push_str(&format_square(square));
        s.push(' ');
    }
    s
}
