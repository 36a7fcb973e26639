//! Win detection.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// Three positions that win when held by one player.
pub type WinLine = [Position; 3];

/// Every winning line, in scan order: rows top-to-bottom, columns
/// left-to-right, then the two diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line (in scan order) held entirely by one player.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, WinLine)> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((player, line));
        }
    }
    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
