//! Game rules.
//!
//! Pure functions over a board or state. Rules are separated from board
//! storage so the opponent and the contracts can compose them.

pub mod apply;
pub mod draw;
pub mod legal;
pub mod win;

pub use apply::apply_move;
pub use draw::{is_draw, is_full};
pub use legal::legal_moves;
pub use win::{WIN_LINES, WinLine, check_winner, winning_line};
