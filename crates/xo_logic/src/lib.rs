//! Tic-tac-toe board evaluation.
//!
//! A pure rules library: it reads a 3x3 board snapshot and answers
//! questions about it. Nothing here owns a game, mutates a board, or
//! performs I/O.
//!
//! # Operations
//!
//! - **Lines**: [`row`], [`column`], [`diagonal_from_right`],
//!   [`diagonal_from_left`] and all eight at once with [`lines()`]
//! - **Classification**: [`game_state`] and [`is_game_over`]
//! - **Moves**: [`is_input_valid`], [`validate_move`], [`legal_moves`]
//!
//! [`BoardEvaluator`] bundles the same operations behind one value.
//!
//! # Example
//!
//! ```
//! use xo_logic::{Board, BoardEvaluator, Cell, GameState};
//!
//! let board: Board = "xoo/xoo/xx_".parse()?;
//! let evaluator = BoardEvaluator::new();
//!
//! assert_eq!(evaluator.game_state(&board), GameState::XWin);
//! assert!(evaluator.is_game_over(&board));
//! assert!(evaluator.is_input_valid(&board, Cell::O, 2, 2)?);
//! # Ok::<(), xo_logic::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod evaluator;
mod notation;
mod types;

pub mod contracts;
pub mod invariants;
pub mod lines;
pub mod rules;

pub use action::{Move, MoveError};
pub use error::{Axis, BoardError, BoardErrorKind};
pub use evaluator::BoardEvaluator;
pub use lines::{column, diagonal_from_left, diagonal_from_right, lines, row};
pub use rules::{
    game_state, is_full, is_game_over, is_input_valid, legal_moves, turn, validate_move,
    winning_line, WinningLine,
};
pub use types::{Board, Cell, Counts, GameState, Line, LineKind, Symbol, Turn, SIZE};
