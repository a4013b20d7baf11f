//! Balanced-count invariant: X and O counts differ by at most one.

use super::super::{Board, Counts};
use super::Invariant;

/// Invariant: the number of X and O marks differ by at most one.
///
/// Either mark may have opened the game, so the lead can belong to
/// either player.
pub struct BalancedCounts;

impl Invariant<Board> for BalancedCounts {
    fn holds(board: &Board) -> bool {
        let counts = Counts::of(board);
        counts.x.abs_diff(counts.o) <= 1
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_counts_hold() {
        let board: Board = "xo_/___/___".parse().unwrap();
        assert!(BalancedCounts::holds(&board));
    }

    #[test]
    fn test_o_may_lead() {
        let board: Board = "o__/___/___".parse().unwrap();
        assert!(BalancedCounts::holds(&board));
    }

    #[test]
    fn test_lead_of_two_violates() {
        // five x against three o
        let board: Board = "oxo/xox/xx_".parse().unwrap();
        assert!(!BalancedCounts::holds(&board));
    }
}
