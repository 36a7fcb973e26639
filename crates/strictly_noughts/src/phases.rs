//! Whole-game turn phases.

use super::{Outcome, Player};
use serde::{Deserialize, Serialize};

/// Who acts next, or how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the human (X).
    PlayerTurn,
    /// The computer (O) is due; human input is refused.
    ComputerTurn,
    /// Someone completed a line.
    Won(Player),
    /// Board filled with no line.
    Drawn,
}

impl TurnPhase {
    /// Phase after a move by `mover` that produced `outcome`.
    pub fn after_move(mover: Player, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won(winner) => TurnPhase::Won(winner),
            Outcome::Draw => TurnPhase::Drawn,
            Outcome::InProgress => match mover {
                Player::X => TurnPhase::ComputerTurn,
                Player::O => TurnPhase::PlayerTurn,
            },
        }
    }

    /// Won and Drawn only leave through a reset.
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnPhase::Won(_) | TurnPhase::Drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        assert_eq!(
            TurnPhase::after_move(Player::X, Outcome::InProgress),
            TurnPhase::ComputerTurn
        );
        assert_eq!(
            TurnPhase::after_move(Player::O, Outcome::InProgress),
            TurnPhase::PlayerTurn
        );
        assert_eq!(
            TurnPhase::after_move(Player::X, Outcome::Won(Player::X)),
            TurnPhase::Won(Player::X)
        );
        assert_eq!(TurnPhase::after_move(Player::O, Outcome::Draw), TurnPhase::Drawn);
        assert!(TurnPhase::Drawn.is_terminal());
        assert!(!TurnPhase::ComputerTurn.is_terminal());
    }
}
