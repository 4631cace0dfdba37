use std::fmt;

use crate::bitboard::{Bitboard, BOARD_SIZE};
use crate::capture::resolve_capture;
use crate::error::GameError;
use crate::movegen;
use crate::player::Player;
use crate::position::Position;

const COLUMN_HEADER: &str = "  a b c d e f g h";

/// Both sides' occupancy. Never mutated in place: moves produce a new `Board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    x: Bitboard,
    o: Bitboard,
}

impl Board {
    /// The opening position: X on d5 and e4, O on d4 and e5.
    pub const fn initial() -> Self {
        Board {
            x: Bitboard(Bitboard::from_square(3, 4).0 | Bitboard::from_square(4, 3).0),
            o: Bitboard(Bitboard::from_square(3, 3).0 | Bitboard::from_square(4, 4).0),
        }
    }

    pub const fn empty() -> Self {
        Board {
            x: Bitboard::EMPTY,
            o: Bitboard::EMPTY,
        }
    }

    /// Build a board from raw masks, which must not share a square.
    pub fn from_masks(x: Bitboard, o: Bitboard) -> Result<Self, GameError> {
        let overlap = x & o;
        if overlap.is_nonzero() {
            return Err(GameError::OverlappingMasks { overlap });
        }
        Ok(Board { x, o })
    }

    #[inline]
    pub fn x_stones(&self) -> Bitboard {
        self.x
    }

    #[inline]
    pub fn o_stones(&self) -> Bitboard {
        self.o
    }

    #[inline]
    pub fn stones_for(&self, player: Player) -> Bitboard {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// `(mine, theirs)` from `player`'s point of view.
    #[inline]
    pub fn sides(&self, player: Player) -> (Bitboard, Bitboard) {
        match player {
            Player::X => (self.x, self.o),
            Player::O => (self.o, self.x),
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.x | self.o
    }

    #[inline]
    pub fn empty_squares(&self) -> Bitboard {
        !self.occupied()
    }

    pub fn is_full(&self) -> bool {
        self.empty_squares().is_empty()
    }

    pub fn count(&self, player: Player) -> u32 {
        self.stones_for(player).count()
    }

    pub fn get_piece(&self, pos: &Position) -> Option<Player> {
        if !pos.is_valid() {
            return None;
        }
        let idx = pos.to_index();
        if self.x.get(idx) {
            Some(Player::X)
        } else if self.o.get(idx) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Squares where `player` may place a piece. Empty when `player` must pass.
    pub fn legal_moves(&self, player: Player) -> Bitboard {
        let (mine, theirs) = self.sides(player);
        movegen::legal_moves(mine, theirs)
    }

    pub fn is_legal_move(&self, player: Player, mv: Bitboard) -> bool {
        let (mine, theirs) = self.sides(player);
        resolve_capture(mv, mine, theirs).is_nonzero()
    }

    /// The board after `player` places on the single square `mv`.
    ///
    /// Fails with [`GameError::InvalidMove`] if `mv` is not one of
    /// [`Board::legal_moves`]; `self` is never changed.
    pub fn apply_move(&self, player: Player, mv: Bitboard) -> Result<Board, GameError> {
        let (mine, theirs) = self.sides(player);
        let cap = resolve_capture(mv, mine, theirs);
        if cap.is_empty() {
            return Err(GameError::InvalidMove {
                player,
                square: mv,
            });
        }

        let mine = mine | cap;
        let theirs = theirs & !cap;
        log::trace!(
            "{} plays {}, flipping {}",
            player,
            Position::from_bitboard(mv).map_or_else(String::new, |p| p.to_string()),
            cap.count() - 1
        );

        Ok(match player {
            Player::X => Board { x: mine, o: theirs },
            Player::O => Board { x: theirs, o: mine },
        })
    }

    /// Render the board with `highlights` drawn as `?`.
    pub fn render_with_moves(&self, highlights: Bitboard) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_grid(&mut out, highlights);
        out
    }

    fn write_grid<W: fmt::Write>(&self, f: &mut W, highlights: Bitboard) -> fmt::Result {
        writeln!(f, "{}", COLUMN_HEADER)?;
        for row in 0..BOARD_SIZE {
            write!(f, "{}", (b'1' + row) as char)?;
            for col in 0..BOARD_SIZE {
                let pos = Position::new(col, row);
                let c = match self.get_piece(&pos) {
                    Some(player) => player.to_char(),
                    None if highlights.intersects(pos.to_bitboard()) => '?',
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", COLUMN_HEADER)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, Bitboard::EMPTY)
    }
}
