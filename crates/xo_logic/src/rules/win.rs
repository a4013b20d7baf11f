//! Win detection.

use super::super::lines::lines;
use super::super::{Board, Cell, GameState, Line, LineKind};
use serde::Serialize;
use tracing::{instrument, trace};

/// A line held entirely by one mark. Only [`winning_line`] builds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine {
    kind: LineKind,
    line: Line,
    winner: Cell,
}

impl WinningLine {
    /// Where the line lies.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The cells along it.
    pub fn line(&self) -> Line {
        self.line
    }

    /// The mark that holds it.
    pub fn winner(&self) -> Cell {
        self.winner
    }

    /// The classification this line produces, or `None` if the holder is
    /// not a player mark.
    pub fn state(&self) -> Option<GameState> {
        match self.winner {
            Cell::X => Some(GameState::XWin),
            Cell::O => Some(GameState::OWin),
            Cell::Empty | Cell::Unknown(_) => None,
        }
    }
}

/// Returns the first line held entirely by X or O.
///
/// Lines are scanned rows, columns, diagonal from right, diagonal from
/// left. Each line is tested for X before O, so when both marks hold a
/// line the one scanned first decides.
///
/// Content validity is not checked here.
#[instrument]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    for (kind, line) in lines(board) {
        for winner in [Cell::X, Cell::O] {
            if line.is_all(winner) {
                trace!(%kind, %winner, "Line complete");
                return Some(WinningLine { kind, line, winner });
            }
        }
    }
    None
}
