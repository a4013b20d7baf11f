//! Core domain types for board evaluation.

use super::{BoardError, BoardErrorKind};
use serde::{Deserialize, Serialize};

/// Number of rows (and columns) on the board.
pub const SIZE: usize = 3;

/// A single cell on the board.
///
/// `Unknown` keeps whatever symbol the caller handed in so it can be
/// compared literally and reported back; it never counts as a player mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum Cell {
    /// Mark of player X.
    X,
    /// Mark of player O.
    O,
    /// Unmarked cell.
    Empty,
    /// Any other symbol.
    Unknown(Symbol),
}

/// A symbol that reads as no known cell and separates no rows.
///
/// Only [`Symbol::new`] builds one, so an unknown cell always survives its
/// own text and serde form unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(char);

impl Symbol {
    /// Wraps `c`, or returns `None` for marks, empty markers and row
    /// separators.
    pub fn new(c: char) -> Option<Self> {
        match c {
            'x' | 'X' | 'o' | 'O' | ' ' | '_' | '.' | '-' | '/' | '\n' | '\r' => None,
            other => Some(Self(other)),
        }
    }

    /// Returns the wrapped character.
    pub fn get(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Cell {
    /// Returns true for the two player marks.
    pub fn is_player(self) -> bool {
        matches!(self, Cell::X | Cell::O)
    }

    /// Returns true for X, O and Empty.
    pub fn is_known(self) -> bool {
        !matches!(self, Cell::Unknown(_))
    }

    /// Returns the opposing mark, or `None` for non-player cells.
    pub fn opponent(self) -> Option<Cell> {
        match self {
            Cell::X => Some(Cell::O),
            Cell::O => Some(Cell::X),
            Cell::Empty | Cell::Unknown(_) => None,
        }
    }

    /// Text symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::X => 'x',
            Cell::O => 'o',
            Cell::Empty => '_',
            Cell::Unknown(symbol) => symbol.get(),
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = BoardError;

    /// Reads a symbol. Row separators are the only characters refused.
    #[track_caller]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'x' | 'X' => Ok(Cell::X),
            'o' | 'O' => Ok(Cell::O),
            ' ' | '_' | '.' | '-' => Ok(Cell::Empty),
            other => match Symbol::new(other) {
                Some(symbol) => Ok(Cell::Unknown(symbol)),
                None => Err(BoardError::new(BoardErrorKind::ReservedSymbol(other))),
            },
        }
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> Self {
        cell.symbol()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 3x3 board, row-major and 0-indexed.
///
/// The evaluator only ever reads a board. Mutation is left to whoever
/// owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Creates a board from rows of cells.
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Creates a board from rows of raw symbols (see [`Cell::try_from`]).
    #[track_caller]
    pub fn from_symbols(symbols: [[char; SIZE]; SIZE]) -> Result<Self, BoardError> {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (r, row) in symbols.iter().enumerate() {
            for (c, symbol) in row.iter().enumerate() {
                cells[r][c] = Cell::try_from(*symbol)?;
            }
        }
        Ok(Self { cells })
    }

    /// Gets the cell at `(row, column)`, or `None` when off the board.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row)?.get(column).copied()
    }

    /// Sets the cell at `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, cell: Cell) -> Result<(), BoardError> {
        if row >= SIZE {
            return Err(BoardError::index_out_of_range(crate::Axis::Row, row as isize));
        }
        if column >= SIZE {
            return Err(BoardError::index_out_of_range(
                crate::Axis::Column,
                column as isize,
            ));
        }
        self.cells[row][column] = cell;
        Ok(())
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Three cells taken along one axis of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Line {
    cells: [Cell; SIZE],
}

impl Line {
    /// Returns the cells in traversal order.
    pub fn cells(&self) -> [Cell; SIZE] {
        self.cells
    }

    /// Returns true when every cell equals `cell`.
    pub fn is_all(&self, cell: Cell) -> bool {
        self.cells.iter().all(|c| *c == cell)
    }

    /// Iterates over the cells in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}

impl From<[Cell; SIZE]> for Line {
    fn from(cells: [Cell; SIZE]) -> Self {
        Self { cells }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in self.cells {
            write!(f, "{}", cell)?;
        }
        Ok(())
    }
}

/// Which of the eight axes a line was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Row by index, top to bottom.
    #[display("row {_0}")]
    Row(usize),
    /// Column by index, left to right.
    #[display("column {_0}")]
    Column(usize),
    /// (0,0), (1,1), (2,2).
    #[display("diagonal from right")]
    DiagonalFromRight,
    /// (2,0), (1,1), (0,2).
    #[display("diagonal from left")]
    DiagonalFromLeft,
}

/// Classification of a board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum GameState {
    /// Unknown symbols or impossible mark counts.
    Invalid,
    /// X has three in a line.
    XWin,
    /// O has three in a line.
    OWin,
    /// Full board with no winning line.
    Draw,
    /// Empty cells remain and nobody has won.
    Incomplete,
}

impl GameState {
    /// Returns true for `XWin`, `OWin` and `Draw`.
    pub fn is_over(self) -> bool {
        matches!(self, GameState::XWin | GameState::OWin | GameState::Draw)
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Cell> {
        match self {
            GameState::XWin => Some(Cell::X),
            GameState::OWin => Some(Cell::O),
            _ => None,
        }
    }
}

/// Tally of each kind of cell on a board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counts {
    /// Cells marked X.
    pub x: usize,
    /// Cells marked O.
    pub o: usize,
    /// Unmarked cells.
    pub empty: usize,
    /// Cells holding anything else.
    pub unknown: usize,
}

impl Counts {
    /// Tallies the cells of `board`.
    pub fn of(board: &Board) -> Self {
        board.iter().fold(Self::default(), |mut counts, cell| {
            match cell {
                Cell::X => counts.x += 1,
                Cell::O => counts.o += 1,
                Cell::Empty => counts.empty += 1,
                Cell::Unknown(_) => counts.unknown += 1,
            }
            counts
        })
    }
}

/// Which marks may move next, judged purely by counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Turn {
    /// X is behind, so only X may move.
    X,
    /// O is behind, so only O may move.
    O,
    /// Counts are level and either mark may move.
    Either,
}

impl Turn {
    /// Returns true if `player` may move on this turn.
    pub fn allows(self, player: Cell) -> bool {
        match self {
            Turn::X => player == Cell::X,
            Turn::O => player == Cell::O,
            Turn::Either => player.is_player(),
        }
    }
}
