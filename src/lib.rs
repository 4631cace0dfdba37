pub mod bitboard;
pub mod board;
pub mod capture;
pub mod error;
pub mod game;
pub mod r#move;
pub mod movegen;
pub mod notation;
pub mod outcome;
pub mod player;
pub mod position;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use bitboard::{Bitboard, Direction};
pub use board::Board;
pub use error::GameError;
pub use game::Game;
pub use player::Player;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn spooky_othello(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use player::Player;
    use python_bindings::*;
    m.add_class::<PyBoard>()?;
    m.add_class::<PyGame>()?;
    m.add_class::<PyMove>()?;
    m.add_class::<PyGameOutcome>()?;
    m.add("X", Player::X as i8)?;
    m.add("O", Player::O as i8)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::bitboard::Bitboard;
    use crate::board::Board;
    use crate::error::GameError;
    use crate::game::Game;
    use crate::notation::{format_square_list, parse_square};
    use crate::outcome::GameOutcome;
    use crate::player::Player;
    use crate::position::Position;
    use crate::r#move::Move;

    fn to_py_err(err: GameError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }

    fn player_from_int(player: i8) -> PyResult<Player> {
        Player::from_int(player).ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>("Player must be 1 (X) or -1 (O)")
        })
    }

    fn squares_to_names(mask: Bitboard) -> Vec<String> {
        mask.positions().map(|p| p.to_string()).collect()
    }

    #[pyclass(name = "Board")]
    #[derive(Clone)]
    pub struct PyBoard {
        board: Board,
    }

    #[pymethods]
    impl PyBoard {
        #[new]
        pub fn new() -> Self {
            PyBoard {
                board: Board::initial(),
            }
        }

        #[staticmethod]
        pub fn from_masks(x: u64, o: u64) -> PyResult<Self> {
            Board::from_masks(Bitboard(x), Bitboard(o))
                .map(|board| PyBoard { board })
                .map_err(to_py_err)
        }

        pub fn masks(&self) -> (u64, u64) {
            (self.board.x_stones().0, self.board.o_stones().0)
        }

        pub fn get_piece(&self, col: usize, row: usize) -> Option<i8> {
            let pos = Position::checked(col, row)?;
            self.board.get_piece(&pos).map(|p| p as i8)
        }

        pub fn count(&self, player: i8) -> PyResult<u32> {
            Ok(self.board.count(player_from_int(player)?))
        }

        pub fn legal_moves(&self, player: i8) -> PyResult<Vec<String>> {
            Ok(squares_to_names(
                self.board.legal_moves(player_from_int(player)?),
            ))
        }

        pub fn apply_move(&self, player: i8, square: &str) -> PyResult<PyBoard> {
            let player = player_from_int(player)?;
            self.board
                .apply_move(player, parse_square(square))
                .map(|board| PyBoard { board })
                .map_err(to_py_err)
        }

        pub fn __str__(&self) -> String {
            self.board.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Board(x={:#018x}, o={:#018x})",
                self.board.x_stones().0,
                self.board.o_stones().0
            )
        }

        pub fn __eq__(&self, other: &PyBoard) -> bool {
            self.board == other.board
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.board.hash(&mut hasher);
            hasher.finish()
        }
    }

    #[pyclass(name = "Game")]
    pub struct PyGame {
        game: Game,
    }

    #[pymethods]
    impl PyGame {
        #[new]
        pub fn new() -> Self {
            PyGame { game: Game::new() }
        }

        #[staticmethod]
        pub fn from_board(board: &PyBoard, to_move: i8) -> PyResult<Self> {
            Ok(PyGame {
                game: Game::from_board(board.board, player_from_int(to_move)?),
            })
        }

        #[staticmethod]
        pub fn with_options(board: &PyBoard, to_move: i8, max_moves: usize) -> PyResult<Self> {
            Ok(PyGame {
                game: Game::with_options(board.board, player_from_int(to_move)?, max_moves),
            })
        }

        pub fn max_moves(&self) -> usize {
            self.game.max_moves()
        }

        pub fn move_count(&self) -> usize {
            self.game.move_count()
        }

        pub fn score(&self) -> (u32, u32) {
            self.game.score()
        }

        pub fn turn(&self) -> i8 {
            self.game.turn() as i8
        }

        pub fn is_over(&self) -> bool {
            self.game.is_over()
        }

        pub fn outcome(&self) -> Option<PyGameOutcome> {
            self.game.outcome().map(|o| PyGameOutcome { outcome: o })
        }

        pub fn legal_moves(&self) -> Vec<PyMove> {
            self.game
                .legal_moves()
                .into_iter()
                .map(|m| PyMove { move_: m })
                .collect()
        }

        pub fn legal_moves_str(&self) -> String {
            format_square_list(self.game.legal_moves_mask())
        }

        pub fn forced_move(&self) -> Option<PyMove> {
            self.game.forced_move().map(|m| PyMove { move_: m })
        }

        pub fn is_legal_move(&self, move_: &PyMove) -> bool {
            self.game.is_legal_move(&move_.move_)
        }

        pub fn make_move(&mut self, move_: &PyMove) -> PyResult<()> {
            self.game.make_move(&move_.move_).map_err(to_py_err)
        }

        pub fn make_move_str(&mut self, text: &str) -> PyResult<PyMove> {
            self.game
                .make_move_str(text)
                .map(|m| PyMove { move_: m })
                .map_err(to_py_err)
        }

        pub fn unmake_move(&mut self) -> bool {
            self.game.unmake_move()
        }

        pub fn board(&self) -> PyBoard {
            PyBoard {
                board: *self.game.board(),
            }
        }

        pub fn reward_absolute(&self) -> f32 {
            self.game
                .outcome()
                .map(|o| o.encode_winner_absolute())
                .unwrap_or(0.0)
        }

        pub fn reward_from_perspective(&self, perspective: i8) -> PyResult<f32> {
            let perspective = player_from_int(perspective)?;
            Ok(self
                .game
                .outcome()
                .map(|o| o.encode_winner_from_perspective(perspective))
                .unwrap_or(0.0))
        }

        pub fn clone(&self) -> PyGame {
            PyGame {
                game: self.game.clone(),
            }
        }

        pub fn __str__(&self) -> String {
            self.game.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Game(turn={}, moves={}, over={})",
                self.game.turn(),
                self.game.move_count(),
                self.game.is_over()
            )
        }
    }

    #[pyclass(name = "Move")]
    #[derive(Clone, Debug)]
    pub struct PyMove {
        move_: Move,
    }

    #[pymethods]
    impl PyMove {
        #[staticmethod]
        pub fn place(col: usize, row: usize) -> PyResult<Self> {
            let pos = Position::checked(col, row).ok_or_else(|| {
                PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "Square ({}, {}) is off the board",
                    col, row
                ))
            })?;
            Ok(PyMove {
                move_: Move::place(pos.col, pos.row),
            })
        }

        #[staticmethod]
        pub fn pass_move() -> Self {
            PyMove {
                move_: Move::pass(),
            }
        }

        #[staticmethod]
        pub fn parse(text: &str) -> PyResult<Self> {
            text.parse()
                .map(|move_| PyMove { move_ })
                .map_err(to_py_err)
        }

        pub fn is_pass(&self) -> bool {
            self.move_.is_pass()
        }

        pub fn col(&self) -> Option<usize> {
            self.move_.col().map(|c| c as usize)
        }

        pub fn row(&self) -> Option<usize> {
            self.move_.row().map(|r| r as usize)
        }

        pub fn __str__(&self) -> String {
            self.move_.to_string()
        }

        pub fn __repr__(&self) -> String {
            match &self.move_ {
                Move::Place { col, row } => format!("Move.place({}, {})", col, row),
                Move::Pass => "Move.pass_move()".to_string(),
            }
        }

        pub fn __eq__(&self, other: &PyMove) -> bool {
            self.move_ == other.move_
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.move_.hash(&mut hasher);
            hasher.finish()
        }
    }

    #[pyclass(name = "GameOutcome")]
    #[derive(Clone, Copy, Debug)]
    pub struct PyGameOutcome {
        outcome: GameOutcome,
    }

    #[pymethods]
    impl PyGameOutcome {
        pub fn winner(&self) -> Option<i8> {
            self.outcome.winner().map(|player| player as i8)
        }

        pub fn encode_winner_absolute(&self) -> f32 {
            self.outcome.encode_winner_absolute()
        }

        pub fn encode_winner_from_perspective(&self, perspective: i8) -> PyResult<f32> {
            Ok(self
                .outcome
                .encode_winner_from_perspective(player_from_int(perspective)?))
        }

        pub fn is_draw(&self) -> bool {
            self.outcome.is_draw()
        }

        pub fn __str__(&self) -> String {
            self.outcome.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("GameOutcome({})", self.outcome)
        }

        pub fn __eq__(&self, other: &PyGameOutcome) -> bool {
            self.outcome == other.outcome
        }
    }
}
