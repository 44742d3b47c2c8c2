//! # TUI UI Components
//!
//! Ratatui rendering: schedule and log panes, the input line, the reminder
//! confirmation popup, and the status bar.

mod panes;
mod reminder;

pub use panes::{render_input, render_log, render_schedule};
pub use reminder::render_reminder_popup;

use crate::tui::app::InputMode;
use crate::tui::App;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let editing = app.input_mode == InputMode::Editing;
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),                      // Schedule
            Constraint::Min(0),                              // Log
            Constraint::Length(if editing { 4 } else { 0 }), // Input
            Constraint::Length(1),                           // Status bar
        ])
        .split(area);

    render_schedule(frame, app, chunks[0]);
    render_log(frame, app, chunks[1]);
    if editing {
        render_input(frame, app, chunks[2]);
    } else if let Some(reminder) = app.current_reminder() {
        render_reminder_popup(frame, reminder, app.pending.len(), area);
    }

    render_status_bar(frame, app, chunks[3]);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let device_status = if app.device_online {
        Span::styled("● Sensor", Style::default().fg(Color::Green))
    } else {
        Span::styled("● Sensor offline", Style::default().fg(Color::Red))
    };

    let pending = if app.pending.is_empty() {
        Span::raw("")
    } else {
        Span::styled(
            format!(" {} pending ", app.pending.len()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    };

    let mode_status = match app.input_mode {
        InputMode::Normal => Span::raw(""),
        InputMode::Editing => Span::styled(
            " [EDITING] ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    };

    let help_hint = Span::styled(
        " a:Add d:Delete r:Refresh q:Quit ",
        Style::default().fg(Color::Gray),
    );

    // Error or status message
    let message = if let Some(err) = &app.error_message {
        Span::styled(format!(" Error: {} ", err), Style::default().fg(Color::Red))
    } else if let Some(status) = &app.status_message {
        Span::styled(format!(" {} ", status), Style::default().fg(Color::Green))
    } else {
        Span::raw("")
    };

    let status_line = Line::from(vec![
        device_status,
        Span::raw(" |"),
        pending,
        mode_status,
        message,
        Span::raw(" "),
        help_hint,
    ]);

    let paragraph = Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(paragraph, area);
}

/// Helper to create a block with title
pub fn titled_block(title: &str) -> Block {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
}

/// Centered sub-rectangle taking the given percentages of `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
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
