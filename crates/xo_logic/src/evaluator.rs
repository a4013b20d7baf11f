//! Stateless evaluator facade.

use super::action::{Move, MoveError};
use super::rules::{self, WinningLine};
use super::{lines, Board, BoardError, Cell, Counts, GameState, Line, LineKind, Turn};

/// Tic-tac-toe board evaluator.
///
/// Holds no state; every method is a pure function of its arguments and
/// the evaluator can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardEvaluator;

impl BoardEvaluator {
    /// Creates an evaluator.
    pub fn new() -> Self {
        Self
    }

    /// Row `index`, left to right.
    pub fn row(&self, board: &Board, index: usize) -> Result<Line, BoardError> {
        lines::row(board, index)
    }

    /// Column `index`, top to bottom.
    pub fn column(&self, board: &Board, index: usize) -> Result<Line, BoardError> {
        lines::column(board, index)
    }

    /// Top-left to bottom-right diagonal.
    pub fn diagonal_from_right(&self, board: &Board) -> Line {
        lines::diagonal_from_right(board)
    }

    /// Bottom-left to top-right diagonal.
    pub fn diagonal_from_left(&self, board: &Board) -> Line {
        lines::diagonal_from_left(board)
    }

    /// All eight lines in scan order.
    pub fn lines(&self, board: &Board) -> [(LineKind, Line); 8] {
        lines::lines(board)
    }

    /// See [`rules::is_game_over`].
    pub fn is_game_over(&self, board: &Board) -> bool {
        rules::is_game_over(board)
    }

    /// See [`rules::game_state`].
    pub fn game_state(&self, board: &Board) -> GameState {
        rules::game_state(board)
    }

    /// See [`rules::is_input_valid`].
    pub fn is_input_valid(
        &self,
        board: &Board,
        player: Cell,
        row: isize,
        column: isize,
    ) -> Result<bool, BoardError> {
        rules::is_input_valid(board, player, row, column)
    }

    /// See [`rules::validate_move`].
    pub fn validate_move(&self, board: &Board, mov: &Move) -> Result<(), MoveError> {
        rules::validate_move(board, mov)
    }

    /// See [`rules::winning_line`].
    pub fn winning_line(&self, board: &Board) -> Option<WinningLine> {
        rules::winning_line(board)
    }

    /// See [`rules::turn`].
    pub fn next_players(&self, board: &Board) -> Turn {
        rules::turn(board)
    }

    /// See [`rules::legal_moves`].
    pub fn legal_moves(&self, board: &Board, player: Cell) -> Vec<Move> {
        rules::legal_moves(board, player)
    }

    /// Number of each kind of cell.
    pub fn counts(&self, board: &Board) -> Counts {
        Counts::of(board)
    }

    /// Checks if no cell is empty.
    pub fn is_full(&self, board: &Board) -> bool {
        rules::is_full(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BoardEvaluator>();
        assert_send_sync::<Board>();
    }

    #[test]
    fn test_facade_matches_rules() {
        let evaluator = BoardEvaluator::new();
        let board: Board = "xoo/xoo/xx_".parse().unwrap();
        assert_eq!(evaluator.game_state(&board), GameState::XWin);
        assert!(evaluator.is_game_over(&board));
        assert_eq!(evaluator.winning_line(&board).map(|w| w.kind()), Some(LineKind::Column(0)));
        assert_eq!(evaluator.counts(&board).empty, 1);
    }
}
