//! Event handling for the TUI

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use std::time::Duration;

use super::app::{App, InputMode};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Handle all input events
pub fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(POLL_TIMEOUT)? {
        match event::read()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {} // Terminal will redraw automatically
            _ => {}
        }
    }
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Help overlay swallows everything until dismissed
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    // Clear status message on any key press
    app.clear_status();

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::AddPhoto => handle_modal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Navigation with wrap-around at both ends
        KeyCode::Right | KeyCode::Char('l') => app.next_photo(),
        KeyCode::Left | KeyCode::Char('h') => app.prev_photo(),
        KeyCode::Char('g') => app.select_first(),
        KeyCode::Char('G') => app.select_last(),

        // Delete the current photo (ignored on an empty gallery)
        KeyCode::Delete | KeyCode::Backspace => app.delete_current(),

        // Add-photo modal
        KeyCode::Char('a') => app.open_add_modal(),

        // Command line (vim-style)
        KeyCode::Char(':') => app.enter_command(),

        // Theme cycling
        KeyCode::Char('t') => app.cycle_theme(),

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}

fn handle_modal_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_add_modal(),
        KeyCode::Enter => app.submit_modal(),
        KeyCode::Backspace => app.modal_pop(),
        KeyCode::Char(c) => app.modal_push(c),
        _ => {}
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.execute_command(),
        KeyCode::Backspace => {
            if app.command_input.is_empty() {
                app.exit_command();
            } else {
                app.command_pop();
            }
        }
        KeyCode::Char(c) => app.command_push(c),
        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: crossterm::event::MouseEvent) {
    // Only handle mouse in normal mode with no overlay up
    if app.show_help || app.input_mode != InputMode::Normal {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => app.prev_photo(),
        MouseEventKind::ScrollDown => app.next_photo(),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(cell) = app.strip_cell_at(mouse.column, mouse.row) {
                app.select_photo(cell);
            }
        }
        _ => {}
    }
}
