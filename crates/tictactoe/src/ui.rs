//! Stateless UI rendering for tic-tac-toe.

use crate::app::App;
use crate::theme::Palette;
use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use tictactoe_core::{GameEngine, HistoryEntry, Outcome, Player, Position, Square};

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.theme().palette();
    let base = Style::default().fg(palette.foreground).bg(palette.background);

    frame.render_widget(Block::default().style(base), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(GRID_HEIGHT + 2), // Board and side panel
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(base.fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(bordered(&palette, ""));
    frame.render_widget(title, chunks[0]);

    if app.show_history() {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GRID_WIDTH + 4), Constraint::Min(24)])
            .split(chunks[1]);
        draw_board_panel(frame, body[0], app, &palette);
        draw_side_panel(frame, body[1], app, &palette);
    } else {
        draw_board_panel(frame, chunks[1], app, &palette);
    }

    let status = Paragraph::new(app.status_line())
        .style(base.fg(palette.status))
        .alignment(Alignment::Center)
        .block(bordered(&palette, ""));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "1-9 / arrows+Enter: play | n: new game | r: reset all | t: theme | q: quit",
    )
    .style(base.fg(palette.muted))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn bordered<'a>(palette: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.muted))
        .title(title)
}

fn draw_board_panel(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = bordered(palette, " Board ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid = center_rect(inner, GRID_WIDTH, GRID_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(grid);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, palette, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(GRID_WIDTH as usize))
                .style(Style::default().fg(palette.muted));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, palette, pos);
        }
        if col < 2 {
            let sep = Paragraph::new(vec![Line::from("│"); CELL_HEIGHT as usize])
                .style(Style::default().fg(palette.muted));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, pos: Position) {
    let engine = app.engine();
    let (symbol, mut style) = match engine.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(palette.muted),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(mark_color(palette, player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if engine.winning_line().is_some_and(|line| line.contains(pos)) {
        style = style.bg(palette.winning_bg).fg(palette.winning_fg);
    } else if pos == app.cursor() && engine.status().is_playing() {
        style = style.bg(palette.cursor_bg).fg(palette.cursor_fg);
    }

    let lines = vec![Line::from(""), Line::from(Span::raw(symbol)), Line::from("")];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_color(palette: &Palette, player: Player) -> ratatui::style::Color {
    match player {
        Player::X => palette.x_mark,
        Player::O => palette.o_mark,
    }
}

fn draw_side_panel(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(area);

    draw_scores(frame, chunks[0], app.engine(), palette);
    draw_history(frame, chunks[1], app, palette);
}

fn draw_scores(frame: &mut Frame, area: Rect, engine: &GameEngine, palette: &Palette) {
    let scores = engine.scores();
    let lines = vec![
        Line::from(vec![
            Span::styled("X wins  ", Style::default().fg(palette.x_mark)),
            Span::raw(scores.x().to_string()),
        ]),
        Line::from(vec![
            Span::styled("O wins  ", Style::default().fg(palette.o_mark)),
            Span::raw(scores.o().to_string()),
        ]),
        Line::from(vec![
            Span::styled("Draws   ", Style::default().fg(palette.muted)),
            Span::raw(scores.draws().to_string()),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(palette.foreground))
        .block(bordered(palette, " Score "));
    frame.render_widget(paragraph, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let history = app.engine().history();
    let header = Row::new(vec!["#", "Time", "Result", "Board"])
        .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = history
        .iter()
        .enumerate()
        .rev()
        .take(app.history_limit())
        .map(|(i, entry)| history_row(i + 1, entry, palette))
        .collect();

    let widths = [
        Constraint::Length(3),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Min(11),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .style(Style::default().fg(palette.foreground))
        .block(bordered(palette, " History "));
    frame.render_widget(table, area);
}

fn history_row<'a>(number: usize, entry: &HistoryEntry, palette: &Palette) -> Row<'a> {
    let (result, color) = match entry.outcome() {
        Outcome::Winner(player) => (format!("{} won", player), mark_color(palette, player)),
        Outcome::Draw => ("Draw".to_string(), palette.muted),
    };
    let time = entry
        .timestamp()
        .with_timezone(&Local)
        .format("%H:%M:%S")
        .to_string();

    Row::new(vec![
        Cell::from(number.to_string()),
        Cell::from(time),
        Cell::from(result).style(Style::default().fg(color)),
        Cell::from(entry.final_board().compact()),
    ])
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
