//! # Reminder Popup
//!
//! Confirmation dialog for the oldest pending reminder.

use crate::features::reminders::Reminder;
use crate::features::vitals::VitalStatus;
use crate::tui::ui::centered_rect;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

fn status_color(status: VitalStatus) -> Color {
    match status {
        VitalStatus::Normal => Color::Green,
        VitalStatus::Abnormal => Color::Red,
        VitalStatus::Unknown => Color::Yellow,
    }
}

pub fn render_reminder_popup(frame: &mut Frame, reminder: &Reminder, pending: usize, area: Rect) {
    let popup = centered_rect(60, 50, area);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Time to take {} ({})!", reminder.name, reminder.dosage),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Reminded at {}", reminder.fired_at.format("%H:%M:%S")),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw(format!("Pulse Rate: {} bpm (", reminder.vitals.pulse)),
            Span::styled(
                reminder.pulse_status.as_str(),
                Style::default().fg(status_color(reminder.pulse_status)),
            ),
            Span::raw(")"),
        ]),
        Line::from(vec![
            Span::raw(format!("Heart Rate: {} bpm (", reminder.vitals.heart)),
            Span::styled(
                reminder.heart_status.as_str(),
                Style::default().fg(status_color(reminder.heart_status)),
            ),
            Span::raw(")"),
        ]),
        Line::from(""),
        Line::from("Have you taken it?"),
        Line::from(""),
        Line::from(Span::styled(
            "[y] Yes    [n] No",
            Style::default().fg(Color::Yellow),
        )),
    ];

    if pending > 1 {
        lines.push(Line::from(Span::styled(
            format!("({} more waiting)", pending - 1),
            Style::default().fg(Color::Gray),
        )));
    }

    let title = format!(" Medication Reminder - {} ", reminder.due);
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}
