//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.

use super::action::{Move, MoveError};
use super::invariants::check_state;
use super::{GameState, Square};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has not been decided.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves on a finished game.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.outcome().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if !state.board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the player not due to move.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if mov.player != state.turn() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - Game is still in progress
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - Exactly one square went from empty to occupied, none changed
/// - Every [`crate::invariants::GameInvariants`] member holds
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    #[instrument(skip(state))]
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        SquareIsEmpty::check(action, state)?;
        PlayersTurn::check(action, state)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let mut placed = 0;
        for (old, new) in before.board().squares().iter().zip(after.board().squares()) {
            match (old, new) {
                (Square::Empty, Square::Occupied(_)) => placed += 1,
                (old, new) if old != new => {
                    warn!(?old, ?new, "Occupied square overwritten");
                    return Err(MoveError::InvariantViolation(
                        "Postcondition failed: occupied square overwritten".to_string(),
                    ));
                }
                _ => {}
            }
        }
        if placed != 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {} squares placed in one move",
                placed
            )));
        }

        check_state(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, apply_move};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&state, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let state = apply_move(&GameState::new(), 4, Player::X).unwrap();
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&GameState::new(), &action),
            Err(MoveError::WrongPlayer(Player::O))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let after = apply_move(&before, 4, Player::X).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let before = apply_move(&GameState::new(), 4, Player::X).unwrap();
        let mut after = apply_move(&before, 0, Player::O).unwrap();
        after.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_double_placement() {
        let before = GameState::new();
        let mut after = apply_move(&before, 4, Player::X).unwrap();
        after.board.set(Position::TopLeft, Square::Occupied(Player::O));
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
