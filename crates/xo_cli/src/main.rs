//! xo - tic-tac-toe board inspector
//!
//! Reads a board, runs it through the evaluator and prints the answer.

#![warn(missing_docs)]

mod cli;
mod config;
mod input;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::{CliConfig, OutputFormat};
use input::load_board;
use report::{render, LineEntry, LinesReport, MoveReport, MovesReport, StateReport};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;
use xo_logic::{BoardEvaluator, Cell, Move};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;
    initialize_tracing(config.log_filter());

    let format = if cli.json {
        OutputFormat::Json
    } else {
        *config.output()
    };
    debug!(?format, "Output format selected");

    let output = run(cli.command, format)?;
    println!("{}", output);
    Ok(())
}

fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one command and returns the rendered report.
#[instrument(skip(command))]
fn run(command: Command, format: OutputFormat) -> Result<String> {
    let evaluator = BoardEvaluator::new();

    match command {
        Command::State { source } => {
            let board = load_board(&source)?;
            let report = StateReport {
                board,
                state: evaluator.game_state(&board),
                game_over: evaluator.is_game_over(&board),
                winning_line: evaluator.winning_line(&board),
                counts: evaluator.counts(&board),
                next: evaluator.next_players(&board),
            };
            info!(state = %report.state, game_over = report.game_over, "Board classified");
            render(&report, format)
        }
        Command::Lines { source } => {
            let board = load_board(&source)?;
            let lines = evaluator
                .lines(&board)
                .into_iter()
                .map(|(kind, cells)| LineEntry { kind, cells })
                .collect();
            render(&LinesReport { lines }, format)
        }
        Command::CheckMove {
            source,
            player,
            row,
            column,
        } => {
            let board = load_board(&source)?;
            let mov = Move::new(Cell::try_from(player)?, row, column);
            let report = match evaluator.validate_move(&board, &mov) {
                Ok(()) => MoveReport {
                    mov,
                    valid: true,
                    reason: None,
                },
                Err(err) if err.is_fault() => return Err(err.into()),
                Err(err) => MoveReport {
                    mov,
                    valid: false,
                    reason: Some(err.to_string()),
                },
            };
            info!(%mov, valid = report.valid, "Move checked");
            render(&report, format)
        }
        Command::Moves { source, player } => {
            let board = load_board(&source)?;
            let moves = evaluator.legal_moves(&board, Cell::try_from(player)?);
            info!(count = moves.len(), "Legal moves listed");
            render(&MovesReport { moves }, format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli::BoardSource;

    fn source(text: &str) -> BoardSource {
        BoardSource {
            board: Some(text.to_string()),
            board_file: None,
        }
    }

    #[test]
    fn test_state_text() {
        let output = run(
            Command::State {
                source: source("xoo/xoo/xx_"),
            },
            OutputFormat::Text,
        )
        .unwrap();
        assert!(output.contains("state:     XWin"), "{}", output);
        assert!(output.contains("line:      column 0 (xxx)"), "{}", output);
    }

    #[test]
    fn test_state_json() {
        let output = run(
            Command::State {
                source: source("oxo/xox/xx_"),
            },
            OutputFormat::Json,
        )
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["state"], "Invalid");
        assert_eq!(json["game_over"], false);
        assert_eq!(json["counts"]["x"], 5);
    }

    #[test]
    fn test_lines_text() {
        let output = run(
            Command::Lines {
                source: source("oxo/xox/xx_"),
            },
            OutputFormat::Text,
        )
        .unwrap();
        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows.len(), 8);
        assert!(rows[6].starts_with("diagonal from right"));
        assert!(rows[6].ends_with("oo_"));
    }

    #[test]
    fn test_check_move_rejected_with_reason() {
        let output = run(
            Command::CheckMove {
                source: source("oxo/oox/xx_"),
                player: 'a',
                row: 2,
                column: 2,
            },
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(output, "a -> (2, 2): invalid (a is not a player mark)");
    }

    #[test]
    fn test_check_move_negative_index_fails() {
        let result = run(
            Command::CheckMove {
                source: source("oxo/oox/xx_"),
                player: 'x',
                row: -1,
                column: 0,
            },
            OutputFormat::Text,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_moves_listed() {
        let output = run(
            Command::Moves {
                source: source("oxo/oox/xx_"),
                player: 'x',
            },
            OutputFormat::Text,
        )
        .unwrap();
        assert_eq!(output, "x -> (2, 2)");
    }

    #[test]
    fn test_separator_player_is_refused() {
        let result = run(
            Command::Moves {
                source: source("oxo/oox/xx_"),
                player: '/',
            },
            OutputFormat::Text,
        );
        assert!(result.is_err());
    }
}
