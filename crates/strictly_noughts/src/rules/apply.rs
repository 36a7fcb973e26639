//! Applying a move to a state.

use super::{check_winner, is_draw};
use crate::contracts::{Contract, MoveContract};
use crate::{GameState, Move, MoveError, Outcome, Player, Position, Square};
use tracing::{debug, instrument};

/// Places `player`'s mark at `index` and returns the resulting state.
///
/// The input state is never modified. The returned state has the square
/// set, `moves_played` incremented, the turn flipped and the outcome
/// recomputed.
///
/// # Errors
///
/// - [`MoveError::OutOfBounds`] if `index` is not 0-8
/// - [`MoveError::GameOver`] if the game is already decided
/// - [`MoveError::SquareOccupied`] if the square is taken
/// - [`MoveError::WrongPlayer`] if `player` is not due to move
#[instrument(skip(state), fields(moves_played = state.moves_played))]
pub fn apply_move(state: &GameState, index: usize, player: Player) -> Result<GameState, MoveError> {
    let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
    let action = Move::new(player, position);

    MoveContract::pre(state, &action)?;

    let mut next = *state;
    next.board.set(position, Square::Occupied(player));
    next.moves_played += 1;
    next.turn = player.opponent();
    next.outcome = match check_winner(&next.board) {
        Some(winner) => Outcome::Won(winner),
        None if is_draw(&next.board, next.moves_played) => Outcome::Draw,
        None => Outcome::InProgress,
    };

    #[cfg(debug_assertions)]
    MoveContract::post(state, &next)?;

    debug!(%action, outcome = %next.outcome, "Move applied");
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds() {
        assert_eq!(
            apply_move(&GameState::new(), 9, Player::X),
            Err(MoveError::OutOfBounds(9))
        );
    }

    #[test]
    fn test_input_state_untouched() {
        let state = GameState::new();
        let next = apply_move(&state, 4, Player::X).unwrap();
        assert_eq!(state, GameState::new());
        assert_eq!(next.moves_played(), 1);
        assert_eq!(next.turn(), Player::O);
        assert_eq!(next.board().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_no_moves_after_win() {
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
        assert_eq!(apply_move(&state, 5, Player::O), Err(MoveError::GameOver));
    }
}
