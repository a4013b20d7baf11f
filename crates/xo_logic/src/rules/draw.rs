//! Full-board detection.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if no cell is empty.
///
/// Unknown symbols count as filled.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.iter().all(|cell| cell != Cell::Empty)
}
