//! Entry point: parse arguments, set up logging, run the TUI.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_rewind::cli::Cli;
use tictactoe_rewind::tui;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to a file while the TUI owns the terminal.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting Tic-Tac-Toe Rewind");

    tui::run(!cli.no_mouse)
}
