//! Tests for the computer's move cascade.

mod common;

use common::{board_of, reachable_states};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::rngs::mock::StepRng;
use strictly_noughts::{Board, Player, Position, Reason, select_move, select_move_with_reason};

#[test]
fn test_win_beats_block() {
    let mut rng = StdRng::seed_from_u64(42);
    assert_eq!(select_move(&board_of("OO_XX____"), &mut rng), Some(Position::TopRight));
}

#[test]
fn test_blocks_open_line() {
    let mut rng = StdRng::seed_from_u64(42);
    assert_eq!(select_move(&board_of("XX_O_____"), &mut rng), Some(Position::TopRight));
}

#[test]
fn test_center_on_empty_board() {
    let mut rng = StdRng::seed_from_u64(42);
    assert_eq!(select_move(&Board::new(), &mut rng), Some(Position::Center));
}

#[test]
fn test_first_winning_line_in_scan_order() {
    // O can finish the middle column or the anti-diagonal; columns scan first
    let mut rng = StdRng::seed_from_u64(0);
    let board = board_of("XOO_O___X");
    assert_eq!(
        select_move_with_reason(&board, &mut rng),
        Some((Position::BottomCenter, Reason::Win))
    );
}

#[test]
fn test_stub_rng_takes_first_free_corner() {
    let mut rng = StepRng::new(0, 0);
    assert_eq!(select_move(&board_of("X___O____"), &mut rng), Some(Position::TopRight));
}

#[test]
fn test_same_seed_same_choice() {
    let board = board_of("____X____");
    let first = select_move(&board, &mut StdRng::seed_from_u64(9));
    let second = select_move(&board, &mut StdRng::seed_from_u64(9));
    assert_eq!(first, second);
}

#[test]
fn test_every_corner_reachable() {
    let board = board_of("____X____");
    let mut rng = StdRng::seed_from_u64(2024);
    let mut seen = Vec::new();
    for _ in 0..200 {
        let pos = select_move(&board, &mut rng).unwrap();
        assert!(Position::CORNERS.contains(&pos));
        if !seen.contains(&pos) {
            seen.push(pos);
        }
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_never_picks_occupied_square() {
    let mut rng = StdRng::seed_from_u64(11);
    for state in reachable_states() {
        let board = state.board();
        match select_move(board, &mut rng) {
            Some(pos) => assert!(board.is_empty(pos), "picked occupied {pos} on\n{}", board.display()),
            None => assert_eq!(board.occupied(), 9),
        }
    }
}

#[test]
fn test_takes_win_whenever_available() {
    let mut rng = StdRng::seed_from_u64(5);
    for state in reachable_states()
        .into_iter()
        .filter(|s| !s.outcome().is_terminal() && s.turn() == Player::O)
    {
        if let Some(win) = strictly_noughts::completing_square(state.board(), Player::O) {
            assert_eq!(select_move(state.board(), &mut rng), Some(win));
        }
    }
}
