//! Command-line interface for tictactoe_rewind.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal with move history and time travel.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log file path (logs cannot share the terminal with the TUI)
    #[arg(long, default_value = "tictactoe_rewind.log")]
    pub log_file: PathBuf,

    /// Disable mouse capture (keyboard-only play)
    #[arg(long)]
    pub no_mouse: bool,
}
