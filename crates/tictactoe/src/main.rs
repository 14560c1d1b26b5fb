//! Tic Tac Toe - terminal front end.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe::{Cli, Settings, logging, tui};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    let settings = Settings::load(cli.config.as_deref(), &cwd)?
        .with_overrides(cli.theme, cli.log_file.clone());

    if cli.print_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    logging::init(&settings)?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting tictactoe");

    tui::run(&settings)
}
