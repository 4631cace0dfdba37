use std::fmt;
use std::str::FromStr;

use crate::bitboard::{Bitboard, BOARD_SIZE};
use crate::error::GameError;
use crate::notation::{format_square, parse_square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub col: u8,
    pub row: u8,
}

impl Position {
    pub fn new(col: u8, row: u8) -> Self {
        Position { col, row }
    }

    /// On-board position from wide coordinates, or `None` when either is out of range.
    pub fn checked(col: usize, row: usize) -> Option<Self> {
        let pos = Position::new(u8::try_from(col).ok()?, u8::try_from(row).ok()?);
        pos.is_valid().then_some(pos)
    }

    pub fn from_index(index: usize) -> Self {
        let w = BOARD_SIZE as usize;
        Position {
            col: (index % w) as u8,
            row: (index / w) as u8,
        }
    }

    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    pub fn is_valid(&self) -> bool {
        self.col < BOARD_SIZE && self.row < BOARD_SIZE
    }

    /// Single-bit mask of this square; empty when the position is off the board.
    pub fn to_bitboard(&self) -> Bitboard {
        if !self.is_valid() {
            return Bitboard::EMPTY;
        }
        Bitboard::from_square(self.col, self.row)
    }

    /// The position of the lowest set bit of `bb`.
    pub fn from_bitboard(bb: Bitboard) -> Option<Self> {
        bb.lowest_bit_index().map(Position::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_square(self.to_bitboard()))
    }
}

impl FromStr for Position {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_bitboard(parse_square(s)).ok_or_else(|| GameError::ParseSquare {
            input: s.to_string(),
        })
    }
}
