//! File-based `tracing` setup. The terminal belongs to the UI, so logs go to
//! the configured file instead.

use crate::settings::Settings;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber writing to `settings.log_file()`.
///
/// `RUST_LOG` wins over the configured filter. Fails if the file cannot be
/// created or a global subscriber is already set.
pub fn init(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("Failed to initialize logging")
}
