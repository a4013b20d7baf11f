//! Move preconditions.
//!
//! Each precondition is a named check that either passes or explains the
//! rejection. [`LegalMove`] runs them in a fixed order: bounds, target
//! cell, player symbol, turn. The first failure wins.

use super::action::{Move, MoveError};
use super::rules::turn;
use super::types::{Board, Cell, SIZE};
use super::{Axis, BoardError};
use tracing::instrument;

/// Precondition: the target is on the board.
pub struct InBounds;

impl InBounds {
    /// Returns the target as unsigned indices.
    ///
    /// Indices of 3 or more are a rejection. Negative indices are only
    /// discovered once both upper bounds pass, and surface as
    /// [`MoveError::Fault`].
    #[instrument]
    pub fn check(mov: &Move) -> Result<(usize, usize), MoveError> {
        if mov.row >= SIZE as isize {
            return Err(MoveError::RowOutOfBounds(mov.row));
        }
        if mov.column >= SIZE as isize {
            return Err(MoveError::ColumnOutOfBounds(mov.column));
        }
        let row = usize::try_from(mov.row)
            .map_err(|_| BoardError::index_out_of_range(Axis::Row, mov.row))?;
        let column = usize::try_from(mov.column)
            .map_err(|_| BoardError::index_out_of_range(Axis::Column, mov.column))?;
        Ok((row, column))
    }
}

/// Precondition: the target cell is empty.
pub struct TargetEmpty;

impl TargetEmpty {
    /// Checks the cell at `(row, column)`. An index off the board is a fault.
    #[instrument(skip(board))]
    pub fn check(board: &Board, row: usize, column: usize) -> Result<(), MoveError> {
        let Some(cell) = board.get(row, column) else {
            let (axis, index) = if row >= SIZE {
                (Axis::Row, row)
            } else {
                (Axis::Column, column)
            };
            return Err(BoardError::index_out_of_range(axis, index as isize).into());
        };
        if cell == Cell::Empty {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied { row, column, cell })
        }
    }
}

/// Precondition: the mark is X or O.
pub struct KnownPlayer;

impl KnownPlayer {
    /// Checks the proposed mark.
    #[instrument]
    pub fn check(mov: &Move) -> Result<(), MoveError> {
        if mov.player.is_player() {
            Ok(())
        } else {
            Err(MoveError::UnknownPlayer(mov.player))
        }
    }
}

/// Precondition: counts allow this mark to move.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the proposed mark against the counts on `board`.
    #[instrument(skip(board))]
    pub fn check(board: &Board, mov: &Move) -> Result<(), MoveError> {
        if turn(board).allows(mov.player) {
            Ok(())
        } else {
            Err(MoveError::WrongPlayer(mov.player))
        }
    }
}

/// Composite precondition: every check above, in order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(board))]
    pub fn check(board: &Board, mov: &Move) -> Result<(), MoveError> {
        let (row, column) = InBounds::check(mov)?;
        TargetEmpty::check(board, row, column)?;
        KnownPlayer::check(mov)?;
        PlayersTurn::check(board, mov)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        "oxo/oox/xx_".parse().unwrap()
    }

    #[test]
    fn test_upper_bounds_checked_before_negatives() {
        assert_eq!(
            InBounds::check(&Move::new(Cell::X, 3, -1)),
            Err(MoveError::RowOutOfBounds(3))
        );
        assert_eq!(
            InBounds::check(&Move::new(Cell::X, -1, 5)),
            Err(MoveError::ColumnOutOfBounds(5))
        );
    }

    #[test]
    fn test_negative_index_is_fault() {
        let err = InBounds::check(&Move::new(Cell::X, -1, 0)).unwrap_err();
        assert!(err.is_fault());
        let err = InBounds::check(&Move::new(Cell::X, 0, -2)).unwrap_err();
        assert!(err.is_fault());
    }

    #[test]
    fn test_target_occupied() {
        assert_eq!(
            TargetEmpty::check(&board(), 2, 1),
            Err(MoveError::SquareOccupied {
                row: 2,
                column: 1,
                cell: Cell::X
            })
        );
        assert!(TargetEmpty::check(&board(), 2, 2).is_ok());
    }

    #[test]
    fn test_target_off_board_is_fault() {
        let err = TargetEmpty::check(&Board::new(), 3, 0).unwrap_err();
        assert!(err.is_fault());
        assert!(matches!(
            err,
            MoveError::Fault(BoardError {
                kind: crate::BoardErrorKind::IndexOutOfRange { axis: Axis::Row, index: 3 },
                ..
            })
        ));
        let err = TargetEmpty::check(&Board::new(), 0, 9).unwrap_err();
        assert!(matches!(
            err,
            MoveError::Fault(BoardError {
                kind: crate::BoardErrorKind::IndexOutOfRange { axis: Axis::Column, index: 9 },
                ..
            })
        ));
    }

    #[test]
    fn test_occupied_checked_before_player() {
        let err = LegalMove::check(&board(), &Move::new(Cell::try_from('a').unwrap(), 0, 0)).unwrap_err();
        assert!(matches!(err, MoveError::SquareOccupied { .. }));
    }

    #[test]
    fn test_empty_is_not_a_player() {
        assert_eq!(
            KnownPlayer::check(&Move::new(Cell::Empty, 0, 0)),
            Err(MoveError::UnknownPlayer(Cell::Empty))
        );
    }

    #[test]
    fn test_wrong_turn() {
        // o is ahead, so only x may move
        let board: Board = "o__/___/___".parse().unwrap();
        assert_eq!(
            PlayersTurn::check(&board, &Move::new(Cell::O, 2, 2)),
            Err(MoveError::WrongPlayer(Cell::O))
        );
        assert!(LegalMove::check(&board, &Move::new(Cell::X, 2, 2)).is_ok());
    }
}
