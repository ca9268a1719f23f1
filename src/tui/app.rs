//! Application state for the TUI

use crate::config::FilmstripConfig;
use crate::gallery::Gallery;

use super::theme::{CustomTheme, Theme, ThemeVariant};


/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    AddPhoto, // Add-photo modal with a text input
    Command,  // Vim-style command line with ':'
}

/// Status message to display temporarily in the footer
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Available commands for the `:` command line with descriptions
pub const COMMANDS: &[(&str, &str)] = &[
    ("add <name>", "add a photo to the end of the gallery"),
    ("delete <name>", "delete the first photo with that name"),
    ("theme [name]", "cycle themes, or switch to a named one"),
    ("help", "show the keybinding reference"),
    ("q", "quit the application"),
    ("quit", "quit the application"),
];

/// Filmstrip layout constants shared by the renderer and hit-testing
pub mod strip_layout {
    /// Width of one filmstrip cell, borders included
    pub const CELL_WIDTH: u16 = 16;
    /// Height of the filmstrip panel, outer borders included
    pub const STRIP_HEIGHT: u16 = 5;
}

/// Main application state
pub struct App {
    pub running: bool,
    pub gallery: Gallery,
    pub input_mode: InputMode,

    // Add-photo modal input
    pub modal_input: String,

    // Command line input (after ':')
    pub command_input: String,

    // UI state
    pub show_help: bool,
    pub theme_variant: ThemeVariant,
    pub status_message: Option<StatusMessage>,

    // Filmstrip scroll state: index of the first visible cell
    pub strip_offset: usize,

    // Mouse interaction state: (x, y, width, height) of the strip interior
    pub last_strip_area: Option<(u16, u16, u16, u16)>,

    // Custom theme loaded from disk at startup, if present
    custom_theme: Option<Theme>,
}

impl App {
    /// Build the app from config, seeding the gallery from the startup
    /// roster. Blank roster entries are skipped; the first seeded photo
    /// becomes current.
    pub fn new(config: &FilmstripConfig, theme_override: Option<ThemeVariant>) -> Self {
        let mut gallery = Gallery::new();
        for name in &config.gallery.photos {
            let name = name.trim();
            if !name.is_empty() {
                gallery.insert(name);
            }
        }

        let custom_theme = CustomTheme::load().ok().map(|c| c.to_theme());
        let theme_variant = theme_override
            .unwrap_or_else(|| ThemeVariant::from_config_theme(config.tui.theme));

        Self {
            running: true,
            gallery,
            input_mode: InputMode::Normal,
            modal_input: String::new(),
            command_input: String::new(),
            show_help: false,
            theme_variant,
            status_message: None,
            strip_offset: 0,
            last_strip_area: None,
            custom_theme,
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Get the current theme palette
    pub fn theme(&self) -> Theme {
        self.theme_variant.theme(self.custom_theme.as_ref())
    }

    /// Cycle to the next theme
    pub fn cycle_theme(&mut self) {
        self.theme_variant = self.theme_variant.next(self.custom_theme.is_some());
        self.set_status(
            format!("Theme: {}", self.theme_variant.display_name()),
            false,
        );
    }

    /// Switch to a theme by name (for the `theme <name>` command)
    pub fn set_theme_by_name(&mut self, name: &str) {
        match ThemeVariant::from_name(name) {
            Some(ThemeVariant::Custom) if self.custom_theme.is_none() => {
                self.set_status("No custom theme file found".to_string(), true);
            }
            Some(variant) => {
                self.theme_variant = variant;
                self.set_status(format!("Theme: {}", variant.display_name()), false);
            }
            None => {
                self.set_status(format!("Unknown theme: {name}"), true);
            }
        }
    }

    // ==================== Navigation ====================

    pub fn next_photo(&mut self) {
        self.gallery.next();
    }

    pub fn prev_photo(&mut self) {
        self.gallery.previous();
    }

    pub fn select_first(&mut self) {
        if !self.gallery.snapshot().is_empty() {
            self.gallery.select(0);
        }
    }

    pub fn select_last(&mut self) {
        let len = self.gallery.snapshot().len();
        if len > 0 {
            self.gallery.select(len - 1);
        }
    }

    /// Select a photo by index from a filmstrip hit-test
    pub fn select_photo(&mut self, index: usize) {
        if index < self.gallery.snapshot().len() {
            self.gallery.select(index);
        }
    }

    // ==================== Mutation ====================

    /// Insert a photo and report it. `name` must already be trimmed and
    /// non-empty; both callers (modal and command line) guarantee that.
    pub fn add_photo(&mut self, name: &str) {
        self.gallery.insert(name);
        self.set_status(format!("Photo '{name}' added."), false);
    }

    /// Delete the first photo matching `name`, reporting the outcome
    pub fn delete_by_name(&mut self, name: &str) {
        match self.gallery.delete(name) {
            Ok(()) => self.set_status(format!("Photo '{name}' deleted."), false),
            Err(err) => self.set_status(err.to_string(), true),
        }
    }

    /// Delete the currently viewed photo. Ignored when the gallery is empty.
    pub fn delete_current(&mut self) {
        let Some(name) = self.gallery.snapshot().current().map(|p| p.name.clone()) else {
            return;
        };
        self.delete_by_name(&name);
    }

    // ==================== Add-photo modal ====================

    pub fn open_add_modal(&mut self) {
        self.modal_input.clear();
        self.input_mode = InputMode::AddPhoto;
    }

    pub fn close_add_modal(&mut self) {
        self.modal_input.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn modal_push(&mut self, c: char) {
        self.modal_input.push(c);
    }

    pub fn modal_pop(&mut self) {
        self.modal_input.pop();
    }

    /// Submit the modal input. An empty (or all-whitespace) name is ignored
    /// and the modal stays open; otherwise the photo is inserted and the
    /// modal closes.
    pub fn submit_modal(&mut self) {
        let name = self.modal_input.trim().to_string();
        if name.is_empty() {
            return;
        }
        self.add_photo(&name);
        self.close_add_modal();
    }

    // ==================== Command line ====================

    pub fn enter_command(&mut self) {
        self.command_input.clear();
        self.input_mode = InputMode::Command;
    }

    pub fn exit_command(&mut self) {
        self.command_input.clear();
        self.input_mode = InputMode::Normal;
    }

    pub fn command_push(&mut self, c: char) {
        self.command_input.push(c);
    }

    pub fn command_pop(&mut self) {
        self.command_input.pop();
    }

    /// Execute the current command line input
    pub fn execute_command(&mut self) {
        let input = self.command_input.trim().to_string();
        self.exit_command();
        if input.is_empty() {
            return;
        }

        let (cmd, arg) = match input.split_once(' ') {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (input.as_str(), ""),
        };

        match cmd {
            "q" | "quit" | "exit" => self.quit(),
            "h" | "help" => self.show_help = true,
            "add" => {
                if arg.is_empty() {
                    self.set_status("Usage: add <name>".to_string(), true);
                } else {
                    self.add_photo(arg);
                }
            }
            "delete" | "del" => {
                if arg.is_empty() {
                    self.set_status("Usage: delete <name>".to_string(), true);
                } else {
                    self.delete_by_name(arg);
                }
            }
            "t" | "theme" => {
                if arg.is_empty() {
                    self.cycle_theme();
                } else {
                    self.set_theme_by_name(arg);
                }
            }
            _ => self.set_status(format!("Unknown command: {cmd}"), true),
        }
    }

    // ==================== Status line ====================

    pub fn set_status(&mut self, text: String, is_error: bool) {
        self.status_message = Some(StatusMessage { text, is_error });
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Toggle the help overlay
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // ==================== Filmstrip scrolling & hit-testing ====================

    /// Adjust the strip offset so the current cell is visible within
    /// `visible` cells. Called by the renderer before drawing the strip,
    /// so the strip tracks the cursor every frame.
    pub fn ensure_current_visible(&mut self, visible: usize) {
        let snap = self.gallery.snapshot();
        let Some(current) = snap.current_index else {
            self.strip_offset = 0;
            return;
        };
        if visible == 0 {
            return;
        }

        // Clamp first in case the gallery shrank since the last frame
        let max_offset = snap.len().saturating_sub(visible);
        self.strip_offset = self.strip_offset.min(max_offset);

        if current < self.strip_offset {
            self.strip_offset = current;
        } else if current >= self.strip_offset + visible {
            self.strip_offset = current + 1 - visible;
        }
    }

    /// Map a mouse click to the filmstrip cell under it, if any
    pub fn strip_cell_at(&self, x: u16, y: u16) -> Option<usize> {
        let (ax, ay, aw, ah) = self.last_strip_area?;
        if x < ax || x >= ax + aw || y < ay || y >= ay + ah {
            return None;
        }
        let col = ((x - ax) / strip_layout::CELL_WIDTH) as usize;
        if col >= (aw / strip_layout::CELL_WIDTH) as usize {
            return None; // Click in the slack right of the last cell
        }
        let cell = col + self.strip_offset;
        (cell < self.gallery.snapshot().len()).then_some(cell)
    }
}
