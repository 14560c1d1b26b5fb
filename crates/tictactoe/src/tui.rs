//! Terminal session: raw mode, alternate screen, and the event loop.

use crate::app::App;
use crate::input::map_key;
use crate::settings::Settings;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// One step of putting the terminal back the way we found it.
struct RestoreStep {
    action: &'static str,
    run: fn() -> io::Result<()>,
}

const RESTORE_STEPS: [RestoreStep; 3] = [
    RestoreStep {
        action: "disable raw mode",
        run: disable_raw_mode,
    },
    RestoreStep {
        action: "leave alternate screen",
        run: leave_alternate_screen,
    },
    RestoreStep {
        action: "show cursor",
        run: show_cursor,
    },
];

fn leave_alternate_screen() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)
}

fn show_cursor() -> io::Result<()> {
    execute!(io::stdout(), Show)
}

/// Runs the interactive game until the user quits.
///
/// The terminal is restored on every exit path, including a panic.
#[instrument(skip_all)]
pub fn run(settings: &Settings) -> Result<()> {
    info!(theme = %settings.theme(), "Starting terminal session");

    let mut terminal = setup()?;
    install_panic_hook();

    let mut app = App::new(settings);
    let res = run_app(&mut terminal, &mut app);
    let restored = restore();

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }

    let scores = app.engine().scores();
    info!(
        games = scores.total(),
        x = scores.x(),
        o = scores.o(),
        draws = scores.draws(),
        "Terminal session ended"
    );
    res.and(restored)
}

/// Enters raw mode and the alternate screen. On failure, undoes whatever
/// was already done before returning the error.
fn setup() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let terminal = execute!(io::stdout(), EnterAlternateScreen)
        .context("Failed to enter alternate screen")
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(io::stdout()))
                .context("Failed to create terminal")
        });

    if terminal.is_err() {
        let _ = restore();
    }
    terminal
}

/// Restores the terminal, best-effort.
fn restore() -> Result<()> {
    run_steps(&RESTORE_STEPS)
}

/// Runs every step even when an earlier one fails; returns the first failure.
fn run_steps(steps: &[RestoreStep]) -> Result<()> {
    let mut first_err = None;
    for step in steps {
        if let Err(e) = (step.run)() {
            error!(step = step.action, error = %e, "Terminal restore step failed");
            first_err.get_or_insert_with(|| {
                anyhow::Error::new(e).context(format!("Failed to {}", step.action))
            });
        }
    }
    first_err.map_or(Ok(()), Err)
}

/// Restores the terminal before the default panic report is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        error!(%info, "Panic in terminal session");
        default_hook(info);
    }));
}

fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(intent) = map_key(key) {
                    app.handle(intent);
                } else {
                    debug!(?key, "Unbound key");
                }
            }
            _ => {}
        }
    }
    Ok(())
}
