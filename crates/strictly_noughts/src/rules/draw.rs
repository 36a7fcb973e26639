//! Draw detection.

use super::win::check_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw: all nine moves played and no line completed.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, moves_played: u8) -> bool {
    moves_played == 9 && check_winner(board).is_none()
}
