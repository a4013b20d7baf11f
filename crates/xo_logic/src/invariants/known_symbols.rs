//! Known-symbol invariant: every cell is X, O or empty.

use super::super::{Board, Cell};
use super::Invariant;

/// Invariant: the board holds no symbols other than X, O and empty.
pub struct KnownSymbols;

impl Invariant<Board> for KnownSymbols {
    fn holds(board: &Board) -> bool {
        board.iter().all(Cell::is_known)
    }

    fn description() -> &'static str {
        "Every cell is X, O or empty"
    }
}
