//! Interactive terminal game.

use crate::app::App;
use crate::config::{Config, Theme};
use crate::{input, logging, ui};
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};
use std::time::Duration;
use tracing::{error, info, instrument, warn};

/// Restores the terminal when dropped: leaves the alternate screen,
/// shows the cursor and turns raw mode off.
///
/// Created right after raw mode is enabled, so a failure anywhere in
/// setup or in the game loop still hands back a usable terminal.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!(error = %err, "Failed to leave alternate screen");
        }
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to disable raw mode");
        }
    }
}

/// Runs the TUI until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &Config) -> Result<()> {
    logging::init_file(config.log_file())?;
    let theme = config.theme().context("Invalid theme in config")?;

    info!("Starting noughts TUI");

    enable_raw_mode()?;
    let guard = TerminalGuard::new(io::stdout());
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(), &theme);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Event loop: draw, wait for a key, apply it.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app, theme))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(action) = input::action_for(key.code)
        {
            app.apply(action);
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
