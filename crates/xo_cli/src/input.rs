//! Reading boards from the command line or a TOML file.

use crate::cli::BoardSource;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, instrument};
use xo_logic::Board;

/// On-disk board: one string per row.
#[derive(Debug, Deserialize)]
struct BoardFile {
    rows: Vec<String>,
}

/// Resolves a [`BoardSource`] into a board.
#[instrument]
pub fn load_board(source: &BoardSource) -> Result<Board> {
    match (&source.board, &source.board_file) {
        (Some(text), _) => parse_board(text),
        (None, Some(path)) => read_board_file(path),
        (None, None) => anyhow::bail!("either --board or --board-file is required"),
    }
}

fn parse_board(text: &str) -> Result<Board> {
    text.parse::<Board>()
        .with_context(|| format!("invalid board text {:?}", text))
}

#[instrument(skip(path), fields(path = %path.display()))]
fn read_board_file(path: &Path) -> Result<Board> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    let file: BoardFile = toml::from_str(&content)
        .with_context(|| format!("failed to parse board file {}", path.display()))?;
    debug!(rows = file.rows.len(), "Board file loaded");
    parse_board(&file.rows.join("/"))
}
