//! # Schedule and Log Panes

use crate::tui::ui::titled_block;
use crate::tui::App;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub fn render_schedule(frame: &mut Frame, app: &App, area: Rect) {
    let paragraph = Paragraph::new(app.schedule_text.as_str())
        .block(titled_block("Medication Schedule"))
        .style(Style::default().fg(Color::LightMagenta))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

pub fn render_log(frame: &mut Frame, app: &App, area: Rect) {
    let scroll = log_scroll(&app.log_text, area.height);

    let paragraph = Paragraph::new(app.log_text.as_str())
        .block(titled_block("Medication Log"))
        .style(Style::default().fg(Color::LightMagenta))
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Vertical offset that keeps the newest (bottom) log lines in view
fn log_scroll(text: &str, pane_height: u16) -> u16 {
    let lines = u16::try_from(text.lines().count()).unwrap_or(u16::MAX);
    let visible = pane_height.saturating_sub(2);
    lines.saturating_sub(visible)
}

pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let text = vec![
        Line::from(Span::styled(
            app.input_prompt(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(vec![
            Span::raw("> "),
            Span::raw(app.input_buffer.as_str()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
    ];

    let paragraph = Paragraph::new(text).block(titled_block("Enter: accept  Esc: cancel"));
    frame.render_widget(paragraph, area);
}
