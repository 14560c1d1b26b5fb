//! Command-line interface.

use crate::theme::Theme;
use clap::Parser;
use std::path::PathBuf;

/// Terminal tic-tac-toe with scores, history, and light/dark themes
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to ./tictactoe.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Display mode at startup, overriding the settings file
    #[arg(short, long, value_enum)]
    pub theme: Option<Theme>,

    /// Log file, overriding the settings file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}
