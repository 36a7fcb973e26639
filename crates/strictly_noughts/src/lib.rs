//! Strictly Noughts - tic-tac-toe against a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`] or [`GameState`]: win and
//!   draw detection, legal moves, and [`apply_move`], guarded by move
//!   contracts and invariants
//! - **Opponent**: the computer's fixed-priority move cascade
//! - **Session**: the operations a front end calls, returning
//!   [`RenderUpdate`]s
//! - **Driver**: defers the computer's reply behind a cancellable delay
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{GameSession, Outcome, Position};
//! use rand::rngs::mock::StepRng;
//!
//! let mut session = GameSession::new(StepRng::new(0, 0));
//! let report = session.submit_human_move(0).unwrap();
//! assert!(report.render.should_lock_board);
//!
//! let reply = session.request_computer_move().unwrap();
//! assert_eq!(reply.position, Position::Center);
//! assert_eq!(reply.render.outcome, Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod driver;
pub mod invariants;
mod opponent;
mod phases;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use driver::{DEFAULT_COMPUTER_DELAY, GameDriver};
pub use opponent::{HeuristicOpponent, Reason, completing_square, select_move, select_move_with_reason};
pub use phases::TurnPhase;
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, apply_move, check_winner, is_draw, legal_moves, winning_line};
pub use session::{CellUpdate, ComputerTurnTicket, GameSession, RenderUpdate, SessionError, TurnReport};
pub use types::{Board, GameState, Outcome, Player, Square};
