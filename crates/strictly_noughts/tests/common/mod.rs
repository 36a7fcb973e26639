//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use strictly_noughts::{Board, GameState, Player, Square, apply_move, legal_moves};

/// Builds a board from a 9-character pattern of `X`, `O` and `_`.
pub fn board_of(marks: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (i, c) in marks.chars().enumerate() {
        squares[i] = match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

/// Every state reachable from a fresh game by legal alternating play.
pub fn reachable_states() -> Vec<GameState> {
    let mut seen = HashSet::new();
    let mut stack = vec![GameState::new()];
    let mut states = Vec::new();

    while let Some(state) = stack.pop() {
        if !seen.insert(state) {
            continue;
        }
        states.push(state);
        if state.outcome().is_terminal() {
            continue;
        }
        for pos in legal_moves(state.board()) {
            let next = apply_move(&state, pos.to_index(), state.turn()).expect("legal move");
            stack.push(next);
        }
    }
    states
}
