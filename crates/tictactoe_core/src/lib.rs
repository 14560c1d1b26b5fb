//! Tic-tac-toe game-state engine.
//!
//! Pure game logic with no terminal, file, or network access. A
//! presentation layer owns one [`GameEngine`], forwards user intents to it,
//! and renders from its accessors or a [`GameSnapshot`].
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Board`], [`Position`], [`GameStatus`]
//! - **Rules**: pure win/draw evaluation over a board ([`rules::evaluate_board`])
//! - **Engine**: board mutation, turn order, scores, and history
//! - **Invariants**: composable checks asserted after every engine operation
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, GameStatus, Player, Position};
//!
//! let mut engine = GameEngine::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::TopCenter,
//!     Position::Center,
//!     Position::TopRight,
//!     Position::BottomRight,
//! ] {
//!     engine.select_cell(pos);
//! }
//!
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! assert_eq!(engine.scores().x(), 1);
//! assert_eq!(engine.history().len(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod score;
mod types;

// Crate-level exports - Domain types
pub use action::{Move, MoveOutcome};
pub use outcome::Outcome;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - Rules
pub use rules::{Evaluation, WinningLine, evaluate_board};

// Crate-level exports - Engine
pub use engine::{Clock, GameEngine, GameSnapshot};
pub use history::HistoryEntry;
pub use score::ScoreTotals;
