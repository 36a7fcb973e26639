//! Heuristic computer opponent.
//!
//! The computer (O) picks its move with a fixed priority cascade, taking
//! the first rule that applies:
//!
//! 1. complete one of its own lines,
//! 2. block a line the human is about to complete,
//! 3. take the center,
//! 4. take a random free corner,
//! 5. take a random free edge.
//!
//! There is no lookahead beyond one move, so forks go undetected. That is
//! the intended playing strength.

use crate::rules::WIN_LINES;
use crate::{Board, Player, Position, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Why the opponent chose its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Reason {
    /// Completes a line for the mover.
    Win,
    /// Stops the other player completing a line.
    Block,
    /// Took the center.
    Center,
    /// Took a corner.
    Corner,
    /// Took an edge.
    Edge,
}

/// Finds the empty square that would complete a line for `player`.
///
/// Scans [`WIN_LINES`] in order and returns the gap in the first line that
/// holds exactly two of `player`'s marks and one empty square.
pub fn completing_square(board: &Board, player: Player) -> Option<Position> {
    WIN_LINES.iter().find_map(|line| {
        let mine = line
            .iter()
            .filter(|&&pos| board.get(pos) == Square::Occupied(player))
            .count();
        let gap = line.iter().copied().find(|&pos| board.is_empty(pos));
        match (mine, gap) {
            (2, Some(pos)) => Some(pos),
            _ => None,
        }
    })
}

fn random_free<R: Rng + ?Sized>(board: &Board, candidates: &[Position], rng: &mut R) -> Option<Position> {
    let free: Vec<Position> = candidates
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    free.choose(rng).copied()
}

/// Chooses the computer's move and the rule that produced it.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn select_move_with_reason<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Option<(Position, Reason)> {
    let me = Player::O;

    let choice = completing_square(board, me)
        .map(|pos| (pos, Reason::Win))
        .or_else(|| completing_square(board, me.opponent()).map(|pos| (pos, Reason::Block)))
        .or_else(|| {
            board
                .is_empty(Position::Center)
                .then_some((Position::Center, Reason::Center))
        })
        .or_else(|| random_free(board, &Position::CORNERS, rng).map(|pos| (pos, Reason::Corner)))
        .or_else(|| random_free(board, &Position::EDGES, rng).map(|pos| (pos, Reason::Edge)));

    match choice {
        Some((position, reason)) => debug!(%position, %reason, "Computer chose move"),
        None => debug!("Board full, no move available"),
    }
    choice
}

/// Chooses the computer's move; `None` only when the board is full.
pub fn select_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    select_move_with_reason(board, rng).map(|(position, _)| position)
}

/// The computer player with its own source of randomness for tie-breaks.
#[derive(Debug, Clone)]
pub struct HeuristicOpponent<R> {
    rng: R,
}

impl<R: Rng> HeuristicOpponent<R> {
    /// Creates an opponent drawing tie-breaks from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses a move on `board`.
    pub fn choose(&mut self, board: &Board) -> Option<(Position, Reason)> {
        select_move_with_reason(board, &mut self.rng)
    }
}
