//! Candidate moves and the reasons they get rejected.
//!
//! A move is only ever judged against a board, never applied. Indices are
//! signed because callers may hand in anything; a negative index is a fault
//! rather than a rejection (see [`MoveError::is_fault`]).

use super::{BoardError, Cell};
use serde::{Deserialize, Serialize};

/// A player placing a mark at `(row, column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed. May be any cell value; non-players are rejected.
    pub player: Cell,
    /// Target row.
    pub row: isize,
    /// Target column.
    pub column: isize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Cell, row: isize, column: isize) -> Self {
        Self {
            player,
            row,
            column,
        }
    }

    /// Returns the mark being placed.
    pub fn player(&self) -> Cell {
        self.player
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.player, self.row, self.column)
    }
}

/// Why a move is not legal.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Row index is 3 or more.
    #[display("Row {} is past the edge of the board", _0)]
    RowOutOfBounds(isize),

    /// Column index is 3 or more.
    #[display("Column {} is past the edge of the board", _0)]
    ColumnOutOfBounds(isize),

    /// The target cell is not empty.
    #[display("Square ({}, {}) is already holding {}", row, column, cell)]
    SquareOccupied {
        /// Target row.
        row: usize,
        /// Target column.
        column: usize,
        /// What the cell holds.
        cell: Cell,
    },

    /// The proposed mark is neither X nor O.
    #[display("{} is not a player mark", _0)]
    UnknownPlayer(Cell),

    /// Counts say the other mark moves next.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Cell),

    /// Negative index. The cell could not be addressed at all.
    #[display("{}", _0)]
    Fault(BoardError),
}

impl MoveError {
    /// Returns true when the move could not be judged because an index was
    /// negative, as opposed to being judged illegal.
    pub fn is_fault(&self) -> bool {
        matches!(self, MoveError::Fault(_))
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Fault(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Fault(err)
    }
}
