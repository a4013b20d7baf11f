//! Turn order and move validation.
//!
//! Whose turn it is comes only from counts on the board. Level counts let
//! either mark move, so the game may open with O.

use super::super::action::{Move, MoveError};
use super::super::contracts::LegalMove;
use super::super::types::SIZE;
use super::super::{Board, BoardError, Cell, Counts, Turn};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Returns which marks may move next.
#[instrument]
pub fn turn(board: &Board) -> Turn {
    let counts = Counts::of(board);
    match counts.x.cmp(&counts.o) {
        Ordering::Greater => Turn::O,
        Ordering::Less => Turn::X,
        Ordering::Equal => Turn::Either,
    }
}

/// Validates `mov` against `board`, reporting the first rule it breaks.
///
/// Checks run in order: row and column below 3, target empty, mark is X
/// or O, counts allow the mark to move.
#[instrument]
pub fn validate_move(board: &Board, mov: &Move) -> Result<(), MoveError> {
    LegalMove::check(board, mov).inspect_err(|err| {
        debug!(%mov, %err, "Move rejected");
    })
}

/// Returns whether `player` may mark `(row, column)`.
///
/// An index of 3 or more gives `Ok(false)`. A negative index cannot
/// address a cell at all and is returned as an error, unless the other
/// index was already too large.
#[instrument]
pub fn is_input_valid(
    board: &Board,
    player: Cell,
    row: isize,
    column: isize,
) -> Result<bool, BoardError> {
    match validate_move(board, &Move::new(player, row, column)) {
        Ok(()) => Ok(true),
        Err(MoveError::Fault(err)) => Err(err),
        Err(_) => Ok(false),
    }
}

/// Returns every move `player` could legally make, row-major.
#[instrument]
pub fn legal_moves(board: &Board, player: Cell) -> Vec<Move> {
    (0..SIZE as isize)
        .flat_map(|row| (0..SIZE as isize).map(move |column| Move::new(player, row, column)))
        .filter(|mov| validate_move(board, mov).is_ok())
        .collect()
}
