//! User settings loaded from a TOML file.

use crate::theme::Theme;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Settings file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for the terminal front end.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Display mode at startup.
    #[serde(default)]
    theme: Theme,

    /// File that receives log output (the terminal belongs to the UI).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Whether the history panel is shown.
    #[serde(default = "default_show_history")]
    show_history: bool,

    /// Number of most recent games listed in the history panel.
    #[serde(default = "default_history_limit")]
    history_limit: usize,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_show_history() -> bool {
    true
}

fn default_history_limit() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            show_history: default_show_history(),
            history_limit: default_history_limit(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_toml(&content)
    }

    /// Parses settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the settings for this run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// `dir` is used if present, and defaults otherwise.
    #[instrument(skip(explicit, dir))]
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    Self::from_file(candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, theme: Option<Theme>, log_file: Option<PathBuf>) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        self
    }

    /// Renders the settings as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(*settings.theme(), Theme::Dark);
        assert_eq!(*settings.history_limit(), 10);
    }

    #[test]
    fn test_partial_file() {
        let settings = Settings::from_toml("theme = \"light\"\nhistory_limit = 3\n").unwrap();
        assert_eq!(*settings.theme(), Theme::Light);
        assert_eq!(*settings.history_limit(), 3);
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_bad_theme_is_an_error() {
        let err = Settings::from_toml("theme = \"sepia\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::default()
            .with_overrides(Some(Theme::Light), Some(PathBuf::from("other.log")));
        assert_eq!(*settings.theme(), Theme::Light);
        assert_eq!(settings.log_file(), &PathBuf::from("other.log"));

        let unchanged = Settings::default().with_overrides(None, None);
        assert_eq!(unchanged, Settings::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let settings = Settings::default().with_overrides(Some(Theme::Light), None);
        let text = settings.to_toml().unwrap();
        assert!(text.contains("theme = \"light\""));
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }
}
