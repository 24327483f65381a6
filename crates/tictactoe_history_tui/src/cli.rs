//! Command-line interface for tictactoe_history_tui.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with move history - play, then jump back to any move
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history_tui")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe_history.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
