//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: players alternate turns, X first.
///
/// X has either as many marks as O (X to move) or one more (O to move).
/// The turn still flips on the final move, so this holds for finished
/// games too.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board.count(Player::X);
        let o = state.board.count(Player::O);

        match state.turn {
            Player::X => x == o,
            Player::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
