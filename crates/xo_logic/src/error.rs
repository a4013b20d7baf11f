//! Board error types.

use derive_more::{Display, Error};

/// Board axis an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// Row index.
    Row,
    /// Column index.
    Column,
}

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardErrorKind {
    /// An index fell outside `0..3`.
    #[display("{axis} index {index} is outside 0..3")]
    IndexOutOfRange {
        /// Axis the index addresses.
        axis: Axis,
        /// The offending index.
        index: isize,
    },
    /// Board text did not have three rows.
    #[display("expected 3 rows, found {_0}")]
    RowCount(usize),
    /// A row of board text did not have three cells.
    #[display("row {row} has {len} cells, expected 3")]
    RowLength {
        /// Row index.
        row: usize,
        /// Number of cells found.
        len: usize,
    },
    /// A row separator was offered as a cell.
    #[display("{_0:?} separates rows and cannot be a cell")]
    ReservedSymbol(char),
}

/// Board error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Board error: {} at {}:{}", kind, file, line)]
pub struct BoardError {
    /// Error kind.
    pub kind: BoardErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardError {
    /// Creates a new board error with caller location tracking.
    #[track_caller]
    pub fn new(kind: BoardErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for [`BoardErrorKind::IndexOutOfRange`].
    #[track_caller]
    pub fn index_out_of_range(axis: Axis, index: isize) -> Self {
        Self::new(BoardErrorKind::IndexOutOfRange { axis, index })
    }

    /// Returns the error kind.
    pub fn kind(&self) -> BoardErrorKind {
        self.kind
    }
}
