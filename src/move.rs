use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::error::GameError;
use crate::notation::parse_square;
use crate::position::Position;

/// A turn: place a piece on a square, or pass because no placement captures anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place { col: u8, row: u8 },
    Pass,
}

impl Move {
    pub fn place(col: u8, row: u8) -> Self {
        Move::Place { col, row }
    }

    pub fn pass() -> Self {
        Move::Pass
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Move::Place { col, row } => Some(Position::new(*col, *row)),
            Move::Pass => None,
        }
    }

    pub fn col(&self) -> Option<u8> {
        match self {
            Move::Place { col, .. } => Some(*col),
            Move::Pass => None,
        }
    }

    pub fn row(&self) -> Option<u8> {
        match self {
            Move::Place { row, .. } => Some(*row),
            Move::Pass => None,
        }
    }

    /// Single-bit mask of the placed square; empty for a pass or an off-board square.
    pub fn to_bitboard(&self) -> Bitboard {
        match self.position() {
            Some(pos) => pos.to_bitboard(),
            None => Bitboard::EMPTY,
        }
    }

    /// Placement on the lowest set square of `bb`, or `None` for an empty mask.
    pub fn from_bitboard(bb: Bitboard) -> Option<Self> {
        Position::from_bitboard(bb).map(|p| Move::place(p.col, p.row))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(pos) => write!(f, "{}", pos),
            None => write!(f, "pass"),
        }
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("pass") {
            return Ok(Move::pass());
        }
        Move::from_bitboard(parse_square(s)).ok_or_else(|| GameError::ParseMove {
            input: s.to_string(),
        })
    }
}
