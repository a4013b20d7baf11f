//! Command-line interface for xo.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// xo - inspect tic-tac-toe boards
#[derive(Parser, Debug)]
#[command(name = "xo")]
#[command(about = "Classify tic-tac-toe boards and check moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults to xo.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON regardless of the configured output format
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Where to read the board from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct BoardSource {
    /// Board in text form, rows separated by '/', e.g. "oxo/xox/xx_"
    #[arg(short, long)]
    pub board: Option<String>,

    /// TOML file containing `rows = ["oxo", "xox", "xx_"]`
    #[arg(long)]
    pub board_file: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify the board and report whether the game is over
    State {
        #[command(flatten)]
        source: BoardSource,
    },

    /// Print all eight lines of the board
    Lines {
        #[command(flatten)]
        source: BoardSource,
    },

    /// Check whether a player may mark a cell
    CheckMove {
        #[command(flatten)]
        source: BoardSource,

        /// Mark to place (x or o; anything else is rejected)
        #[arg(short, long)]
        player: char,

        /// Target row (0-2)
        #[arg(short, long, allow_negative_numbers = true)]
        row: isize,

        /// Target column (0-2)
        #[arg(short, long, allow_negative_numbers = true)]
        column: isize,
    },

    /// List every legal move for a player
    Moves {
        #[command(flatten)]
        source: BoardSource,

        /// Mark to place
        #[arg(short, long)]
        player: char,
    },
}
