//! Terminal front end for the tic-tac-toe engine.
//!
//! The binary owns one [`App`], which owns one
//! [`GameEngine`](tictactoe_core::GameEngine). Key presses become
//! [`Intent`]s, the app applies them, and [`ui::draw`] renders the result.
//!
//! # Architecture
//!
//! - **Input**: key events mapped to intents ([`input`])
//! - **App**: the hosting session, theme and cursor ([`app`])
//! - **UI**: stateless rendering with `ratatui` ([`ui`])
//! - **Settings**: TOML settings and CLI overrides ([`settings`], [`cli`])
//! - **Logging**: `tracing` to a file ([`logging`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod input;
pub mod logging;
pub mod settings;
pub mod theme;
pub mod tui;
pub mod ui;

// Crate-level exports
pub use app::App;
pub use cli::Cli;
pub use input::{Direction, Intent};
pub use settings::{ConfigError, Settings};
pub use theme::{Palette, Theme};
