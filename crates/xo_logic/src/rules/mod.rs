//! Board evaluation rules.
//!
//! Pure functions over a borrowed [`Board`](crate::Board). Rules are kept
//! apart from the board type so the evaluator facade and the move
//! contracts can compose them.

pub mod draw;
pub mod state;
pub mod turn;
pub mod win;

pub use draw::is_full;
pub use state::{game_state, is_game_over};
pub use turn::{is_input_valid, legal_moves, turn, validate_move};
pub use win::{winning_line, WinningLine};
