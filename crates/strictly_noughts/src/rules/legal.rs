//! Legal move listing.

use crate::{Board, Position};

/// Empty positions in ascending order; empty when the board is full.
pub fn legal_moves(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}
