//! Line extraction along the eight winning axes.
//!
//! These are pure projections. They never look at what the cells hold,
//! so a board full of unknown symbols projects the same way as a valid one.

use super::types::{Board, Cell, Line, LineKind, SIZE};
use super::{Axis, BoardError};
use tracing::instrument;

/// Returns row `index`, left to right.
#[instrument]
pub fn row(board: &Board, index: usize) -> Result<Line, BoardError> {
    let cells = board
        .rows()
        .get(index)
        .ok_or_else(|| BoardError::index_out_of_range(Axis::Row, index as isize))?;
    Ok(Line::from(*cells))
}

/// Returns column `index`, top to bottom.
#[instrument]
pub fn column(board: &Board, index: usize) -> Result<Line, BoardError> {
    if index >= SIZE {
        return Err(BoardError::index_out_of_range(Axis::Column, index as isize));
    }
    let rows = board.rows();
    Ok(Line::from(std::array::from_fn::<Cell, SIZE, _>(|r| rows[r][index])))
}

/// Returns (0,0), (1,1), (2,2): top-left down to bottom-right.
#[instrument]
pub fn diagonal_from_right(board: &Board) -> Line {
    let rows = board.rows();
    Line::from(std::array::from_fn::<Cell, SIZE, _>(|i| rows[i][i]))
}

/// Returns (2,0), (1,1), (0,2): bottom-left up to top-right.
#[instrument]
pub fn diagonal_from_left(board: &Board) -> Line {
    let rows = board.rows();
    Line::from(std::array::from_fn::<Cell, SIZE, _>(|i| rows[SIZE - 1 - i][i]))
}

/// Returns all eight lines in scan order: rows, columns, then the two diagonals.
#[instrument]
pub fn lines(board: &Board) -> [(LineKind, Line); 8] {
    let rows = board.rows();
    let row_at = |i: usize| (LineKind::Row(i), Line::from(rows[i]));
    let column_at = |i: usize| {
        let cells = std::array::from_fn::<Cell, SIZE, _>(|r| rows[r][i]);
        (LineKind::Column(i), Line::from(cells))
    };

    [
        row_at(0),
        row_at(1),
        row_at(2),
        column_at(0),
        column_at(1),
        column_at(2),
        (LineKind::DiagonalFromRight, diagonal_from_right(board)),
        (LineKind::DiagonalFromLeft, diagonal_from_left(board)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardErrorKind;

    fn sample() -> Board {
        "oxo/xox/xx_".parse().unwrap()
    }

    fn line(text: &str) -> Line {
        let cells: Vec<Cell> = text.chars().map(|c| Cell::try_from(c).unwrap()).collect();
        Line::from([cells[0], cells[1], cells[2]])
    }

    #[test]
    fn test_rows() {
        let board = sample();
        assert_eq!(row(&board, 0).unwrap(), line("oxo"));
        assert_eq!(row(&board, 1).unwrap(), line("xox"));
        assert_eq!(row(&board, 2).unwrap(), line("xx_"));
    }

    #[test]
    fn test_columns() {
        let board = sample();
        assert_eq!(column(&board, 0).unwrap(), line("oxx"));
        assert_eq!(column(&board, 1).unwrap(), line("xox"));
        assert_eq!(column(&board, 2).unwrap(), line("ox_"));
    }

    #[test]
    fn test_diagonals() {
        let board = sample();
        assert_eq!(diagonal_from_right(&board), line("oo_"));
        assert_eq!(diagonal_from_left(&board), line("oox"));
    }

    #[test]
    fn test_out_of_range() {
        let board = sample();
        let err = row(&board, 3).unwrap_err();
        assert_eq!(
            err.kind(),
            BoardErrorKind::IndexOutOfRange { axis: Axis::Row, index: 3 }
        );
        let err = column(&board, 7).unwrap_err();
        assert_eq!(
            err.kind(),
            BoardErrorKind::IndexOutOfRange { axis: Axis::Column, index: 7 }
        );
    }

    #[test]
    fn test_lines_scan_order() {
        let board = sample();
        let kinds: Vec<LineKind> = lines(&board).iter().map(|(kind, _)| *kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Row(0),
                LineKind::Row(1),
                LineKind::Row(2),
                LineKind::Column(0),
                LineKind::Column(1),
                LineKind::Column(2),
                LineKind::DiagonalFromRight,
                LineKind::DiagonalFromLeft,
            ]
        );
        assert_eq!(lines(&board)[5].1, line("ox_"));
    }
}
