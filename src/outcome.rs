use crate::player::Player;

/// Result of a finished game: whoever owns more squares wins, equal counts draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    XWin,
    OWin,
    Draw,
}

impl GameOutcome {
    /// Outcome from final piece counts.
    pub fn from_counts(x: u32, o: u32) -> Self {
        match x.cmp(&o) {
            std::cmp::Ordering::Greater => GameOutcome::XWin,
            std::cmp::Ordering::Less => GameOutcome::OWin,
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::XWin => Some(Player::X),
            GameOutcome::OWin => Some(Player::O),
            GameOutcome::Draw => None,
        }
    }

    pub fn encode_winner_absolute(&self) -> f32 {
        match self {
            GameOutcome::XWin => 1.0,
            GameOutcome::OWin => -1.0,
            GameOutcome::Draw => 0.0,
        }
    }

    pub fn encode_winner_from_perspective(&self, perspective: Player) -> f32 {
        match perspective {
            Player::X => self.encode_winner_absolute(),
            Player::O => -self.encode_winner_absolute(),
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, GameOutcome::Draw)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::XWin => write!(f, "X wins"),
            GameOutcome::OWin => write!(f, "O wins"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
