//! The move counter matches the number of occupied squares.

use super::Invariant;
use crate::GameState;

/// Invariant: `moves_played` equals the number of occupied squares.
pub struct MovesPlayedInvariant;

impl Invariant<GameState> for MovesPlayedInvariant {
    fn holds(state: &GameState) -> bool {
        state.board.occupied() == usize::from(state.moves_played)
    }

    fn description() -> &'static str {
        "Moves played matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, apply_move};

    #[test]
    fn test_holds_through_a_game() {
        let mut state = GameState::new();
        for (index, player) in [(4, Player::X), (0, Player::O), (8, Player::X)] {
            state = apply_move(&state, index, player).unwrap();
            assert!(MovesPlayedInvariant::holds(&state));
        }
        assert_eq!(state.moves_played(), 3);
    }

    #[test]
    fn test_counter_drift_violates() {
        let mut state = apply_move(&GameState::new(), 4, Player::X).unwrap();
        state.moves_played = 2;
        assert!(!MovesPlayedInvariant::holds(&state));
    }
}
