//! UI rendering for the TUI

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::{App, COMMANDS, InputMode, strip_layout};
use super::theme::Theme;

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = app.theme();
    let area = frame.area();

    // Fill the whole screen with the theme background
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.base)),
        area,
    );

    // Main layout: header, viewer, filmstrip, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(strip_layout::STRIP_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, app, &theme, chunks[0]);
    render_viewer(frame, app, &theme, chunks[1]);
    render_filmstrip(frame, app, &theme, chunks[2]);
    render_footer(frame, app, &theme, chunks[3]);

    if app.input_mode == InputMode::AddPhoto {
        render_add_modal(frame, app, &theme, area);
    }

    if app.show_help {
        render_help_overlay(frame, &theme, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let snap = app.gallery.snapshot();
    let count = match snap.len() {
        0 => "empty".to_string(),
        1 => "1 photo".to_string(),
        n => format!("{n} photos"),
    };

    let line = Line::from(vec![
        Span::styled(count, Style::default().fg(theme.text)),
        Span::styled(
            format!("  theme: {}", app.theme_variant.display_name()),
            Style::default().fg(theme.subtext0),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.surface1))
            .title(Span::styled(
                " filmstrip ",
                Style::default().fg(theme.mauve).bold(),
            )),
    );
    frame.render_widget(header, area);
}

fn render_viewer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let snap = app.gallery.snapshot();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.surface1))
        .title(Span::styled(" Viewer ", Style::default().fg(theme.text)));

    let Some(photo) = snap.current() else {
        // Empty state: hint instead of a photo
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Gallery Empty!",
                Style::default().fg(theme.subtext0).bold(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press 'a' to add a photo",
                Style::default().fg(theme.subtext0),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let position = format!(
        "{} / {}",
        snap.current_index.map(|i| i + 1).unwrap_or(0),
        snap.len()
    );

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "╭───────────────────────────╮",
            Style::default().fg(theme.surface1),
        )),
        Line::from(vec![
            Span::styled("│        ", Style::default().fg(theme.surface1)),
            Span::styled("· ◉ ·", Style::default().fg(theme.blue)),
            Span::styled("              │", Style::default().fg(theme.surface1)),
        ]),
        Line::from(Span::styled(
            "╰───────────────────────────╯",
            Style::default().fg(theme.surface1),
        )),
        Line::from(""),
        Line::from(Span::styled(
            photo.name.clone(),
            Style::default().fg(theme.mauve).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            photo.url.clone(),
            Style::default().fg(theme.teal),
        )),
        Line::from(Span::styled(
            photo.thumb_url.clone(),
            Style::default().fg(theme.subtext0),
        )),
        Line::from(""),
        Line::from(Span::styled(position, Style::default().fg(theme.yellow))),
    ];

    let viewer = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(viewer, area);
}

fn render_filmstrip(frame: &mut Frame, app: &mut App, theme: &Theme, area: Rect) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.surface1))
        .title(Span::styled(
            format!(" Filmstrip [{}] ", app.gallery.snapshot().len()),
            Style::default().fg(theme.text),
        ));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let visible = (inner.width / strip_layout::CELL_WIDTH) as usize;
    app.ensure_current_visible(visible);
    app.last_strip_area = Some((inner.x, inner.y, inner.width, inner.height));

    let snap = app.gallery.snapshot();
    if snap.is_empty() || visible == 0 {
        return;
    }

    let end = (app.strip_offset + visible).min(snap.len());
    for (slot, index) in (app.strip_offset..end).enumerate() {
        let photo = &snap.photos[index];
        let cell_area = Rect {
            x: inner.x + slot as u16 * strip_layout::CELL_WIDTH,
            y: inner.y,
            width: strip_layout::CELL_WIDTH,
            height: inner.height,
        };

        let is_current = snap.current_index == Some(index);
        let border_style = if is_current {
            Style::default().fg(theme.blue)
        } else {
            Style::default().fg(theme.surface1)
        };
        let name_style = if is_current {
            Style::default().fg(theme.blue).bold()
        } else {
            Style::default().fg(theme.text)
        };

        let max_name = strip_layout::CELL_WIDTH as usize - 2;
        let cell = Paragraph::new(Line::from(Span::styled(
            truncate(&photo.name, max_name),
            name_style,
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(
                    format!(" {} ", index + 1),
                    Style::default().fg(theme.subtext0),
                )),
        );
        frame.render_widget(cell, cell_area);
    }
}

fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let line = match app.input_mode {
        InputMode::Command => Line::from(vec![
            Span::styled(
                format!(":{}", app.command_input),
                Style::default().fg(theme.text),
            ),
            Span::styled("█", Style::default().fg(theme.blue)),
        ]),
        _ => {
            if let Some(status) = &app.status_message {
                let color = if status.is_error {
                    theme.red
                } else {
                    theme.green
                };
                Line::from(Span::styled(
                    status.text.clone(),
                    Style::default().fg(color),
                ))
            } else {
                Line::from(Span::styled(
                    " ←/→ navigate  a add  Del delete  : command  t theme  ? help  q quit",
                    Style::default().fg(theme.subtext0),
                ))
            }
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_add_modal(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let popup_area = centered_rect_fixed(44, 5, area);
    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(vec![
            Span::styled(app.modal_input.as_str(), Style::default().fg(theme.text)),
            Span::styled("█", Style::default().fg(theme.blue)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.yellow)),
            Span::styled(" add   ", Style::default().fg(theme.subtext0)),
            Span::styled("Esc", Style::default().fg(theme.yellow)),
            Span::styled(" cancel", Style::default().fg(theme.subtext0)),
        ]),
    ];

    let modal = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.blue))
            .style(Style::default().bg(theme.surface0))
            .title(Span::styled(
                " Add Photo ",
                Style::default().fg(theme.mauve).bold(),
            )),
    );
    frame.render_widget(modal, popup_area);
}

fn render_help_overlay(frame: &mut Frame, theme: &Theme, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let key = |binding: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {binding:<10}"), Style::default().fg(theme.yellow)),
            Span::styled(action, Style::default().fg(theme.text)),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().fg(theme.mauve).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Navigation",
            Style::default().fg(theme.blue).bold(),
        )),
        key("→/l", "Next photo (wraps)"),
        key("←/h", "Previous photo (wraps)"),
        key("g", "First photo"),
        key("G", "Last photo"),
        key("Click", "Select filmstrip cell"),
        key("Scroll", "Next/previous photo"),
        Line::from(""),
        Line::from(Span::styled(
            "Gallery",
            Style::default().fg(theme.blue).bold(),
        )),
        key("a", "Add a photo"),
        key("Del/⌫", "Delete current photo"),
        Line::from(""),
        Line::from(Span::styled(
            "Other",
            Style::default().fg(theme.blue).bold(),
        )),
        key("t", "Cycle theme"),
        key("?", "Toggle this help"),
        key("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Commands (:)",
            Style::default().fg(theme.blue).bold(),
        )),
    ];
    for (name, description) in COMMANDS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {name:<14}"), Style::default().fg(theme.teal)),
            Span::styled(*description, Style::default().fg(theme.subtext0)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Esc or ? to close",
        Style::default().fg(theme.subtext0),
    )));

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.surface1))
            .style(Style::default().bg(theme.surface0))
            .title(Span::styled(" Help ", Style::default().fg(theme.text))),
    );
    frame.render_widget(help, popup_area);
}

/// Centered rect as a percentage of the available area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Centered rect with a fixed size, clamped to the available area
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let mut truncated: String = name.chars().take(max.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}
