//! # TUI Event Handling
//!
//! Keyboard input, tick, and fired-reminder event handling.

use crate::features::reminders::Reminder;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// TUI events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Reminder fired by the scheduler
    Reminder(Reminder),
    /// Tick for periodic updates
    Tick,
}

/// Event handler that combines keyboard, reminder, and tick events
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler fed by the scheduler's reminder channel
    pub fn new(tick_rate: Duration, mut reminders: mpsc::UnboundedReceiver<Reminder>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        // Spawn keyboard event handler
        let key_tx = tx.clone();
        std::thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                let sent = match event::read() {
                    Ok(CrosstermEvent::Key(key)) => key_tx.send(Event::Key(key)),
                    Ok(CrosstermEvent::Resize(w, h)) => key_tx.send(Event::Resize(w, h)),
                    _ => Ok(()),
                };
                if sent.is_err() {
                    break;
                }
            } else if key_tx.send(Event::Tick).is_err() {
                break;
            }
        });

        // Forward reminders
        tokio::spawn(async move {
            while let Some(reminder) = reminders.recv().await {
                if tx.send(Event::Reminder(reminder)).is_err() {
                    break;
                }
            }
        });

        EventHandler { rx }
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    /// Start the add-medication prompts
    Add,
    /// Start the delete prompt
    Delete,
    /// Answer "yes" to the pending reminder
    Confirm,
    /// Answer "no" to the pending reminder
    Dismiss,
    /// Reload both panes
    Refresh,
    SubmitInput,
    CancelInput,
    Char(char),
    Backspace,
}

/// Map a key event to an action
pub fn map_key_event(key: KeyEvent, in_edit_mode: bool, reminder_pending: bool) -> KeyAction {
    if in_edit_mode {
        return match key.code {
            KeyCode::Esc => KeyAction::CancelInput,
            KeyCode::Enter => KeyAction::SubmitInput,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyAction::CancelInput
            }
            KeyCode::Char(c) => KeyAction::Char(c),
            _ => KeyAction::None,
        };
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,

        // The confirmation popup takes priority over everything else
        (KeyCode::Char('y'), _) | (KeyCode::Enter, _) if reminder_pending => KeyAction::Confirm,
        (KeyCode::Char('n'), _) | (KeyCode::Esc, _) if reminder_pending => KeyAction::Dismiss,
        _ if reminder_pending => KeyAction::None,

        (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
        (KeyCode::Char('a'), KeyModifiers::NONE) => KeyAction::Add,
        (KeyCode::Char('d'), KeyModifiers::NONE) => KeyAction::Delete,
        (KeyCode::Char('r'), KeyModifiers::NONE) => KeyAction::Refresh,
        _ => KeyAction::None,
    }
}
