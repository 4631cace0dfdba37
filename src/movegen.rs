use crate::bitboard::Bitboard;
use crate::capture::resolve_capture;

/// Every square where the side owning `mine` may place a piece against `theirs`.
///
/// Candidates are the empty squares next to an opponent piece in any of the
/// eight directions; each is kept only if it captures something. An empty
/// result means the side must pass.
#[hotpath::measure]
pub fn legal_moves(mine: Bitboard, theirs: Bitboard) -> Bitboard {
    let mut moves = theirs.neighbors() & !(mine | theirs);
    for candidate in moves.squares() {
        if resolve_capture(candidate, mine, theirs).is_empty() {
            moves &= !candidate;
        }
    }
    moves
}
