use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::game::Game;
use crate::player::Player;
use crate::r#move::Move;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
struct RawBoard {
    x: u64,
    o: u64,
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawBoard {
            x: self.x_stones().0,
            o: self.o_stones().0,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawBoard::deserialize(deserializer)?;
        Board::from_masks(Bitboard(raw.x), Bitboard(raw.o)).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
struct RawGame {
    start: Board,
    first: char,
    max_moves: usize,
    moves: Vec<Move>,
}

/// A game is stored as its starting board, the side that moved first, the
/// move cap and the moves in order. Loading replays the moves.
impl Serialize for Game {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawGame {
            start: *self.start_board(),
            first: self.first_player().to_char(),
            max_moves: self.max_moves(),
            moves: self.move_history(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawGame::deserialize(deserializer)?;
        let first = Player::from_char(raw.first).ok_or_else(|| {
            serde::de::Error::custom(format!("Invalid first player: {}", raw.first))
        })?;

        let mut game = Game::with_options(raw.start, first, raw.max_moves);
        for mv in &raw.moves {
            game.make_move(mv).map_err(serde::de::Error::custom)?;
        }

        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::outcome::GameOutcome;

    #[test]
    fn test_board_serde() {
        let board = Board::initial();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"{"x":34628173824,"o":68853694464}"#);

        let board2: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board2, board);
    }

    #[test]
    fn test_board_serde_rejects_overlap() {
        let err = serde_json::from_str::<Board>(r#"{"x":3,"o":2}"#).unwrap_err();
        assert!(err.to_string().contains("overlap"));
    }

    #[test]
    fn test_move_serde() {
        let move_ = Move::place(3, 2);
        let json = serde_json::to_string(&move_).unwrap();
        assert_eq!(json, r#""d3""#);
        let move2: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(move2, move_);

        let json = serde_json::to_string(&Move::pass()).unwrap();
        assert_eq!(json, r#""pass""#);
        let move3: Move = serde_json::from_str(&json).unwrap();
        assert!(move3.is_pass());
    }

    const INITIAL_START: &str = r#""start":{"x":34628173824,"o":68853694464}"#;

    #[test]
    fn test_game_serde_empty() {
        let game = Game::new();
        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(
            json,
            format!(r#"{{{},"first":"X","max_moves":128,"moves":[]}}"#, INITIAL_START)
        );

        let game2: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(game2.move_count(), 0);
        assert_eq!(game2.turn(), Player::X);
    }

    #[test]
    fn test_game_roundtrip() {
        let mut game = Game::new();
        for mv in ["d3", "c5", "f6"] {
            game.make_move_str(mv).unwrap();
        }

        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(
            json,
            format!(
                r#"{{{},"first":"X","max_moves":128,"moves":["d3","c5","f6"]}}"#,
                INITIAL_START
            )
        );

        let game2: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(game2.move_history(), game.move_history());
        assert_eq!(game2.board(), game.board());
        assert_eq!(game2.turn(), game.turn());
    }

    #[test]
    fn test_game_from_custom_board_roundtrip() {
        // X: b1 a2 b2, O: a1. X has no placement, O does.
        let start = Board::from_masks(
            Bitboard::from_square(1, 0) | Bitboard::from_square(0, 1) | Bitboard::from_square(1, 1),
            Bitboard::from_square(0, 0),
        )
        .unwrap();
        let mut game = Game::from_board(start, Player::O);
        game.make_move_str("c3").unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let game2: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(game2.start_board(), &start);
        assert_eq!(game2.first_player(), Player::O);
        assert_eq!(game2.move_history(), game.move_history());
        assert_eq!(game2.board(), game.board());
        assert_eq!(game2.turn(), game.turn());
    }

    #[test]
    fn test_capped_game_stays_over() {
        let mut game = Game::with_options(Board::initial(), Player::X, 1);
        game.make_move_str("d3").unwrap();
        assert!(game.is_over());

        let json = serde_json::to_string(&game).unwrap();
        let game2: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(game2.max_moves(), 1);
        assert!(game2.is_over());
        assert_eq!(game2.outcome(), game.outcome());
        assert_eq!(game2.outcome(), Some(GameOutcome::XWin));
    }

    #[test]
    fn test_game_rejects_illegal_move() {
        let json = format!(
            r#"{{{},"first":"X","max_moves":128,"moves":["a1"]}}"#,
            INITIAL_START
        );
        let err = serde_json::from_str::<Game>(&json).unwrap_err();
        let expected = GameError::InvalidMove {
            player: Player::X,
            square: Bitboard::from_square(0, 0),
        };
        assert!(err.to_string().contains(&expected.to_string()));
    }

    #[test]
    fn test_game_rejects_bad_first_player() {
        let json = format!(
            r#"{{{},"first":"Q","max_moves":128,"moves":["d3"]}}"#,
            INITIAL_START
        );
        assert!(serde_json::from_str::<Game>(&json).is_err());
        assert!(serde_json::from_str::<Game>(r#""X:d3;c5""#).is_err());
    }
}
