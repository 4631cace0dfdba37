use crate::bitboard::{Bitboard, NUM_SQUARES};
use crate::board::Board;
use crate::error::GameError;
use crate::outcome::GameOutcome;
use crate::player::Player;
use crate::r#move::Move;

#[derive(Clone, Debug)]
struct MoveHistoryEntry {
    move_: Move,
    previous_board: Board,
    previous_passes: u8,
}

/// Upper bound on the number of moves (placements and passes) in a game.
/// A real game never reaches it: passes cannot repeat without ending the game.
pub const DEFAULT_MAX_MOVES: usize = 2 * NUM_SQUARES;

/// A game in progress: the board, whose turn it is, and the moves so far.
///
/// A side with no placement must pass; two passes in a row end the game,
/// which is then won by whoever owns more squares.
#[derive(Clone, Debug)]
pub struct Game {
    start_board: Board,
    first_player: Player,
    board: Board,
    current_player: Player,
    move_history: Vec<MoveHistoryEntry>,
    is_over: bool,
    outcome: Option<GameOutcome>,
    consecutive_passes: u8,
    max_moves: usize,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Player::X)
    }

    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self::with_options(board, to_move, DEFAULT_MAX_MOVES)
    }

    /// Start from `board` with `to_move` to play; the game is scored once
    /// `max_moves` moves have been played.
    pub fn with_options(board: Board, to_move: Player, max_moves: usize) -> Self {
        Game {
            start_board: board,
            first_player: to_move,
            board,
            current_player: to_move,
            move_history: Vec::new(),
            is_over: false,
            outcome: None,
            consecutive_passes: 0,
            max_moves,
        }
    }

    pub fn max_moves(&self) -> usize {
        self.max_moves
    }

    /// The board the game was started from, before any move in the history.
    pub fn start_board(&self) -> &Board {
        &self.start_board
    }

    /// The side that was to move on [`Game::start_board`].
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.current_player
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    pub fn move_history(&self) -> Vec<Move> {
        self.move_history.iter().map(|e| e.move_).collect()
    }

    /// Piece counts as `(x, o)`.
    pub fn score(&self) -> (u32, u32) {
        (self.board.count(Player::X), self.board.count(Player::O))
    }

    /// Placements available to the side to move. Empty once the game is over.
    pub fn legal_moves_mask(&self) -> Bitboard {
        if self.is_over {
            return Bitboard::EMPTY;
        }
        self.board.legal_moves(self.current_player)
    }

    /// Legal moves in row-major order, or just [`Move::Pass`] when no
    /// placement exists. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over {
            return Vec::new();
        }

        let mask = self.legal_moves_mask();
        if mask.is_empty() {
            return vec![Move::pass()];
        }
        mask.positions()
            .map(|p| Move::place(p.col, p.row))
            .collect()
    }

    /// The only legal move, if there is exactly one.
    pub fn forced_move(&self) -> Option<Move> {
        match self.legal_moves().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    pub fn is_legal_move(&self, move_: &Move) -> bool {
        if self.is_over {
            return false;
        }

        match move_ {
            Move::Pass => self.legal_moves_mask().is_empty(),
            Move::Place { .. } => match move_.position() {
                Some(pos) if pos.is_valid() => self
                    .board
                    .is_legal_move(self.current_player, pos.to_bitboard()),
                _ => false,
            },
        }
    }

    pub fn make_move(&mut self, move_: &Move) -> Result<(), GameError> {
        if self.is_over {
            return Err(GameError::GameOver);
        }

        let player = self.current_player;
        let previous_board = self.board;
        let previous_passes = self.consecutive_passes;

        match move_ {
            Move::Pass => {
                if self.legal_moves_mask().is_nonzero() {
                    return Err(GameError::IllegalPass { player });
                }
                log::debug!("{} cannot move and passes", player);
                self.consecutive_passes += 1;
            }
            Move::Place { .. } => {
                let square = match move_.position() {
                    Some(pos) if pos.is_valid() => pos.to_bitboard(),
                    _ => {
                        return Err(GameError::InvalidMove {
                            player,
                            square: Bitboard::EMPTY,
                        })
                    }
                };
                self.board = self.board.apply_move(player, square)?;
                self.consecutive_passes = 0;
            }
        }

        self.move_history.push(MoveHistoryEntry {
            move_: *move_,
            previous_board,
            previous_passes,
        });

        self.current_player = player.opposite();

        if self.consecutive_passes >= 2 || self.move_history.len() >= self.max_moves {
            self.finish();
        }

        Ok(())
    }

    /// Parse `text` as a square name or `"pass"` and play it.
    pub fn make_move_str(&mut self, text: &str) -> Result<Move, GameError> {
        let move_: Move = text.parse()?;
        self.make_move(&move_)?;
        Ok(move_)
    }

    pub fn unmake_move(&mut self) -> bool {
        if let Some(entry) = self.move_history.pop() {
            self.current_player = self.current_player.opposite();
            self.board = entry.previous_board;
            self.consecutive_passes = entry.previous_passes;
            self.is_over = false;
            self.outcome = None;
            log::debug!("undid {} by {}", entry.move_, self.current_player);
            true
        } else {
            false
        }
    }

    fn finish(&mut self) {
        let (x, o) = self.score();
        let outcome = GameOutcome::from_counts(x, o);
        log::info!("game over after {} moves: {} (X:{} O:{})", self.move_count(), outcome, x, o);
        self.is_over = true;
        self.outcome = Some(outcome);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Game(turn: {}, is_over: {}, outcome: {:?})\n{}",
            self.current_player,
            self.is_over,
            self.outcome,
            self.board.render_with_moves(self.legal_moves_mask())
        )
    }
}
