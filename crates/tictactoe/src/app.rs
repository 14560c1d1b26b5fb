//! Application state: the hosting session for one game engine.

use crate::input::{Intent, move_cursor};
use crate::settings::Settings;
use crate::theme::Theme;
use tictactoe_core::{GameEngine, GameStatus, MoveOutcome, Outcome, Position};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// The engine is the only authority on game state; the app adds what is
/// purely presentational (theme, cursor, a one-line notice).
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    theme: Theme,
    cursor: Position,
    notice: Option<String>,
    show_history: bool,
    history_limit: usize,
    should_quit: bool,
}

impl App {
    /// Creates an application from settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            engine: GameEngine::new(),
            theme: *settings.theme(),
            cursor: Position::Center,
            notice: None,
            show_history: *settings.show_history(),
            history_limit: *settings.history_limit(),
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the history panel is shown.
    pub fn show_history(&self) -> bool {
        self.show_history
    }

    /// Number of history rows to list.
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one user intent to completion.
    #[instrument(skip(self))]
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Select(position) => {
                self.cursor = position;
                self.select(position);
            }
            Intent::SelectCursor => self.select(self.cursor),
            Intent::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Intent::NewGame => {
                self.engine.new_game();
                self.notice = Some("New game started.".to_string());
            }
            Intent::ResetAll => {
                self.engine.reset_all();
                self.notice = Some("Scores and history cleared.".to_string());
            }
            Intent::ToggleTheme => {
                self.theme = self.theme.toggle();
                debug!(theme = %self.theme, "Theme toggled");
            }
            Intent::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn select(&mut self, position: Position) {
        self.notice = match self.engine.select_cell(position) {
            MoveOutcome::Ignored if self.engine.status().is_playing() => {
                Some(format!("{} is already taken.", position))
            }
            MoveOutcome::Ignored => Some("Game over. Press n for a new game.".to_string()),
            MoveOutcome::Continued => None,
            MoveOutcome::Concluded(outcome) => {
                info!(%outcome, "Game over");
                None
            }
        };
    }

    /// One-line status: the notice if any, otherwise whose turn or the result.
    pub fn status_line(&self) -> String {
        if let Some(notice) = &self.notice {
            return notice.clone();
        }
        match self.engine.status() {
            GameStatus::Playing => format!("Player {} to move", self.engine.turn()),
            GameStatus::Won(player) => format!(
                "{}! Press n for a new game.",
                Outcome::Winner(player)
            ),
            GameStatus::Draw => "Draw! Press n for a new game.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;
    use tictactoe_core::Player;

    fn app() -> App {
        App::new(&Settings::default())
    }

    #[test]
    fn test_select_places_mark_and_moves_cursor() {
        let mut app = app();
        app.handle(Intent::Select(Position::TopLeft));

        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.engine().turn(), Player::O);
        assert_eq!(app.status_line(), "Player O to move");
    }

    #[test]
    fn test_cursor_selection() {
        let mut app = app();
        app.handle(Intent::MoveCursor(Direction::Down));
        app.handle(Intent::SelectCursor);

        assert!(!app.engine().board().is_empty(Position::BottomCenter));
    }

    #[test]
    fn test_taken_square_notice() {
        let mut app = app();
        app.handle(Intent::Select(Position::Center));
        app.handle(Intent::Select(Position::Center));

        assert_eq!(app.status_line(), "Center is already taken.");
        assert_eq!(app.engine().moves().len(), 1);
    }

    #[test]
    fn test_win_status_and_game_over_notice() {
        let mut app = app();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            app.handle(Intent::Select(pos));
        }
        assert_eq!(app.status_line(), "Player X wins! Press n for a new game.");

        app.handle(Intent::Select(Position::BottomLeft));
        assert_eq!(app.status_line(), "Game over. Press n for a new game.");
    }

    #[test]
    fn test_theme_toggle_leaves_game_alone() {
        let mut app = app();
        app.handle(Intent::Select(Position::Center));
        let before = app.engine().snapshot();

        app.handle(Intent::ToggleTheme);

        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.engine().snapshot(), before);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle(Intent::Quit);
        assert!(app.should_quit());
    }
}
