//! The recorded outcome agrees with the board.

use super::Invariant;
use crate::rules::{check_winner, is_draw};
use crate::{GameState, Outcome};

/// Invariant: `Won(p)` iff p holds a line, `Draw` iff nine moves and no line.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let expected = match check_winner(&state.board) {
            Some(player) => Outcome::Won(player),
            None if is_draw(&state.board, state.moves_played) => Outcome::Draw,
            None => Outcome::InProgress,
        };
        state.outcome == expected
    }

    fn description() -> &'static str {
        "Outcome matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, apply_move};

    #[test]
    fn test_win_recorded() {
        let mut state = GameState::new();
        for (index, player) in [
            (0, Player::X),
            (3, Player::O),
            (1, Player::X),
            (4, Player::O),
            (2, Player::X),
        ] {
            state = apply_move(&state, index, player).unwrap();
        }
        assert_eq!(state.outcome(), Outcome::Won(Player::X));
        assert!(OutcomeConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_missed_win_violates() {
        let mut state = GameState::new();
        for (index, player) in [
            (0, Player::X),
            (3, Player::O),
            (1, Player::X),
            (4, Player::O),
            (2, Player::X),
        ] {
            state = apply_move(&state, index, player).unwrap();
        }
        state.outcome = Outcome::InProgress;
        assert!(!OutcomeConsistentInvariant::holds(&state));
    }
}
