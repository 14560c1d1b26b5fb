//! Rendering tests against ratatui's test backend.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use tictactoe::{App, Intent, Settings, Theme, ui};
use tictactoe_core::Position;

fn render(app: &App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(90, 26)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn play(app: &mut App, positions: &[Position]) {
    for pos in positions {
        app.handle(Intent::Select(*pos));
    }
}

#[test]
fn test_fresh_screen() {
    let app = App::new(&Settings::default());
    let screen = text(&render(&app));

    assert!(screen.contains("Tic Tac Toe"));
    assert!(screen.contains("Player X to move"));
    assert!(screen.contains("Score"));
    assert!(screen.contains("History"));
    assert!(screen.contains("q: quit"));
}

#[test]
fn test_win_is_shown_in_status_score_and_history() {
    let mut app = App::new(&Settings::default());
    play(
        &mut app,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
            Position::BottomRight,
        ],
    );
    let screen = text(&render(&app));

    assert!(screen.contains("Player X wins! Press n for a new game."));
    assert!(screen.contains("X won"));
    assert!(screen.contains("XOO|.X.|..X"));
}

#[test]
fn test_winning_line_is_highlighted() {
    let mut app = App::new(&Settings::default());
    play(
        &mut app,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
            Position::BottomRight,
        ],
    );
    let winning_bg = app.theme().palette().winning_bg;
    let buffer = render(&app);
    let highlighted: Vec<_> = buffer
        .content()
        .iter()
        .filter(|cell| cell.bg == winning_bg)
        .collect();

    // Three 11x3 cells, one mark each, and only X marks.
    assert_eq!(highlighted.len(), 3 * 11 * 3);
    let marks: Vec<_> = highlighted
        .iter()
        .map(|cell| cell.symbol())
        .filter(|symbol| *symbol != " ")
        .collect();
    assert_eq!(marks, ["X", "X", "X"]);
}

#[test]
fn test_no_highlight_while_playing_without_line() {
    let mut app = App::new(&Settings::default());
    play(&mut app, &[Position::TopLeft, Position::Center]);
    let winning_bg = app.theme().palette().winning_bg;

    assert!(render(&app).content().iter().all(|cell| cell.bg != winning_bg));
}

#[test]
fn test_history_hidden_by_settings() {
    let settings = Settings::from_toml("show_history = false").unwrap();
    let app = App::new(&settings);
    let screen = text(&render(&app));

    assert!(!screen.contains("History"));
    assert!(screen.contains("Player X to move"));
}

#[test]
fn test_theme_changes_background() {
    let mut app = App::new(&Settings::default());
    assert_eq!(render(&app)[(0, 0)].bg, Color::Black);

    app.handle(Intent::ToggleTheme);
    assert_eq!(app.theme(), Theme::Light);
    assert_eq!(render(&app)[(0, 0)].bg, Color::White);
}

#[test]
fn test_small_terminal_does_not_panic() {
    let app = App::new(&Settings::default());
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    terminal.draw(|frame| ui::draw(frame, &app)).unwrap();
}
