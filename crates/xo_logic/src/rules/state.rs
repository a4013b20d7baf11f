//! Outcome classification.

use super::super::invariants::{BoardInvariants, InvariantSet};
use super::super::lines::lines;
use super::super::{Board, Cell, GameState};
use super::draw::is_full;
use super::win::winning_line;
use tracing::{debug, instrument};

/// Returns true if the board is full or any line is all X or all O.
///
/// Cell content is compared literally and never validated, so a board
/// that [`game_state`] calls [`GameState::Invalid`] can still be over,
/// and one holding unknown symbols can be "not over".
#[instrument]
pub fn is_game_over(board: &Board) -> bool {
    if is_full(board) {
        return true;
    }
    lines(board)
        .iter()
        .any(|(_, line)| line.is_all(Cell::X) || line.is_all(Cell::O))
}

/// Classifies the board. The first matching rule wins:
///
/// 1. unknown symbols, or X and O counts more than one apart: `Invalid`
/// 2. a line held by one mark: `XWin` or `OWin` (see [`winning_line`])
/// 3. any empty cell: `Incomplete`
/// 4. otherwise `Draw`
#[instrument]
pub fn game_state(board: &Board) -> GameState {
    if let Err(violations) = BoardInvariants::check_all(board) {
        debug!(?violations, "Board is invalid");
        return GameState::Invalid;
    }

    let won = winning_line(board).and_then(|win| win.state().map(|state| (win, state)));
    if let Some((win, state)) = won {
        debug!(kind = %win.kind(), winner = %win.winner(), "Board is won");
        return state;
    }

    if is_full(board) {
        GameState::Draw
    } else {
        GameState::Incomplete
    }
}
