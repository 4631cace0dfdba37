use thiserror::Error;

use crate::bitboard::Bitboard;
use crate::notation::format_square_list;
use crate::player::Player;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The mask is not a single empty square that captures something.
    #[error("invalid move for {player}: {}", describe_squares(.square))]
    InvalidMove { player: Player, square: Bitboard },
    /// A pass was submitted while a placement was available.
    #[error("{player} cannot pass while a placement is available")]
    IllegalPass { player: Player },
    #[error("the game is over")]
    GameOver,
    #[error("occupancy masks overlap on {}", describe_squares(.overlap))]
    OverlappingMasks { overlap: Bitboard },
    #[error("cannot parse a square from {input:?}")]
    ParseSquare { input: String },
    #[error("cannot parse a move from {input:?}")]
    ParseMove { input: String },
}

fn describe_squares(mask: &Bitboard) -> String {
    if mask.is_empty() {
        "no square".to_string()
    } else {
        format_square_list(*mask).trim_end().to_string()
    }
}
