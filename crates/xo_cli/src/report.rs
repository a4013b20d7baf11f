//! Reports printed by each command, in text or JSON.

use crate::config::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use std::fmt;
use xo_logic::{Board, Counts, GameState, Line, LineKind, Move, Turn, WinningLine};

/// Renders a report in the chosen format.
pub fn render<R: Serialize + fmt::Display>(report: &R, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => report.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    })
}

/// Output of `xo state`.
#[derive(Debug, Serialize)]
pub struct StateReport {
    /// The board as read.
    pub board: Board,
    /// Classification.
    pub state: GameState,
    /// Whether the game is over.
    pub game_over: bool,
    /// Line that decided a win, if any.
    pub winning_line: Option<WinningLine>,
    /// Cell tally.
    pub counts: Counts,
    /// Who may move next.
    pub next: Turn,
}

impl fmt::Display for StateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board.display_grid())?;
        writeln!(f)?;
        writeln!(f, "state:     {}", self.state)?;
        writeln!(f, "game over: {}", self.game_over)?;
        if let Some(win) = &self.winning_line {
            writeln!(f, "line:      {} ({})", win.kind(), win.line())?;
        }
        writeln!(
            f,
            "counts:    x={} o={} empty={} unknown={}",
            self.counts.x, self.counts.o, self.counts.empty, self.counts.unknown
        )?;
        write!(f, "next:      {}", self.next)
    }
}

/// One entry of `xo lines`.
#[derive(Debug, Serialize)]
pub struct LineEntry {
    /// Where the line lies.
    pub kind: LineKind,
    /// Its cells.
    pub cells: Line,
}

/// Output of `xo lines`.
#[derive(Debug, Serialize)]
pub struct LinesReport {
    /// All eight lines in scan order.
    pub lines: Vec<LineEntry>,
}

impl fmt::Display for LinesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .lines
            .iter()
            .map(|entry| format!("{:<20} {}", entry.kind.to_string(), entry.cells))
            .collect();
        write!(f, "{}", rendered.join("\n"))
    }
}

/// Output of `xo check-move`.
#[derive(Debug, Serialize)]
pub struct MoveReport {
    /// The move checked.
    #[serde(rename = "move")]
    pub mov: Move,
    /// Whether it is legal.
    pub valid: bool,
    /// Why not, when it isn't.
    pub reason: Option<String>,
}

impl fmt::Display for MoveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            None => write!(f, "{}: valid", self.mov),
            Some(reason) => write!(f, "{}: invalid ({})", self.mov, reason),
        }
    }
}

/// Output of `xo moves`.
#[derive(Debug, Serialize)]
pub struct MovesReport {
    /// Legal moves, row-major.
    pub moves: Vec<Move>,
}

impl fmt::Display for MovesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.moves.is_empty() {
            return write!(f, "no legal moves");
        }
        let rendered: Vec<String> = self.moves.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join("\n"))
    }
}
