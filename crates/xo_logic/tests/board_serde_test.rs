//! Tests for board serialization.

use xo_logic::{Board, BoardEvaluator, Cell, GameState};

#[test]
fn test_board_serializes_as_nested_symbols() {
    let board: Board = "oxo/xox/xx_".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    assert_eq!(json, r#"[["o","x","o"],["x","o","x"],["x","x","_"]]"#);
}

#[test]
fn test_board_from_json_keeps_unknown_symbols() {
    let board: Board = serde_json::from_str(r#"[["a","x","o"],["x","o","x"],["x","x"," "]]"#).unwrap();
    assert_eq!(board.to_string(), "axo/xox/xx_");
    assert_eq!(BoardEvaluator::new().game_state(&board), GameState::Invalid);
}

#[test]
fn test_uppercase_marks_read_as_players() {
    // reads as x, so it can never be carried as an unknown symbol
    let board: Board = serde_json::from_str(r#"[["X","X","X"],["o","o","_"],["_","_","_"]]"#).unwrap();
    assert_eq!(board.to_string(), "xxx/oo_/___");
    assert_eq!(serde_json::from_str::<Board>(&serde_json::to_string(&board).unwrap()).unwrap(), board);
    assert_eq!(BoardEvaluator::new().game_state(&board), GameState::XWin);
}

#[test]
fn test_row_separator_is_not_a_cell() {
    let result = serde_json::from_str::<Board>(r#"[["/","_","_"],["_","_","_"],["_","_","_"]]"#);
    assert!(result.is_err());
    assert!(Cell::try_from('/').is_err());
}

#[test]
fn test_game_state_serializes_by_name() {
    assert_eq!(serde_json::to_string(&GameState::XWin).unwrap(), r#""XWin""#);
    assert_eq!(GameState::Incomplete.to_string(), "Incomplete");
}
