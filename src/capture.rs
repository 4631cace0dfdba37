use crate::bitboard::{Bitboard, Direction};

/// Squares that become `mine` if a piece is placed on `candidate`: the
/// candidate itself plus every flipped opponent square.
///
/// Returns [`Bitboard::EMPTY`] when the move is illegal: `candidate` is not a
/// single bit, is already occupied, or captures nothing.
#[inline]
#[hotpath::measure]
pub fn resolve_capture(candidate: Bitboard, mine: Bitboard, theirs: Bitboard) -> Bitboard {
    if !candidate.is_single() || candidate.intersects(mine | theirs) {
        return Bitboard::EMPTY;
    }

    let mut acc = Bitboard::EMPTY;
    for dir in Direction::ALL {
        acc |= capture_line(candidate, dir, mine, theirs);
    }

    if acc.is_empty() {
        Bitboard::EMPTY
    } else {
        candidate | acc
    }
}

/// Opponent run starting next to `from` in `dir`, if it is closed by one of `mine`.
#[inline]
fn capture_line(from: Bitboard, dir: Direction, mine: Bitboard, theirs: Bitboard) -> Bitboard {
    let mut line = Bitboard::EMPTY;
    let mut cursor = from.shift(dir);
    while cursor.intersects(theirs) {
        line |= cursor;
        cursor = cursor.shift(dir);
    }
    // Off the board leaves the cursor empty, which never intersects `mine`
    if cursor.intersects(mine) {
        line
    } else {
        Bitboard::EMPTY
    }
}
