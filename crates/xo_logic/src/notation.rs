//! Text form of a board: `oxo/xox/xx_`.
//!
//! Rows are separated by `/` or newlines. `x` and `o` are player marks in
//! either case; space, `_`, `.` and `-` are empty. Anything else is kept as
//! [`Cell::Unknown`] so the evaluator can classify it. A lone `\r` inside a
//! row is refused.

use super::types::{Board, Cell, SIZE};
use super::{BoardError, BoardErrorKind};
use tracing::instrument;

impl std::str::FromStr for Board {
    type Err = BoardError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_suffix('\n').unwrap_or(s);
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(|row| row.strip_suffix('\r').unwrap_or(row))
            .collect();

        if rows.len() != SIZE {
            return Err(BoardError::new(BoardErrorKind::RowCount(rows.len())));
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (r, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().collect();
            if symbols.len() != SIZE {
                return Err(BoardError::new(BoardErrorKind::RowLength {
                    row: r,
                    len: symbols.len(),
                }));
            }
            for (c, symbol) in symbols.into_iter().enumerate() {
                cells[r][c] = Cell::try_from(symbol)?;
            }
        }

        Ok(Board::from_cells(cells))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().iter().enumerate() {
            if r > 0 {
                f.write_str("/")?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

impl Board {
    /// Renders the board as a three-line grid for terminals.
    pub fn display_grid(&self) -> String {
        self.rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => " ".to_string(),
                        other => other.symbol().to_ascii_uppercase().to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}
