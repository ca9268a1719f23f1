//! Terminal UI: lifecycle and the event/draw loop
//!
//! Runs in the alternate screen with raw mode and mouse capture. Terminal
//! state is restored on normal exit and on panic.

pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::FilmstripConfig;

use self::app::App;
use self::theme::ThemeVariant;

/// Launch the TUI and block until the user quits
pub fn run(config: &FilmstripConfig, theme_override: Option<ThemeVariant>) -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal().context("Failed to initialize terminal")?;

    let mut app = App::new(config, theme_override);
    let result = run_loop(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;
    result
}

/// Draw a frame from a fresh snapshot, then apply at most one input event.
/// Every frame re-reads the gallery, so no index is cached across frames.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;
        event::handle_events(app)?;
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Restore the terminal before printing a panic message, otherwise the
/// report is lost to the alternate screen
fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        hook(info);
    }));
}
