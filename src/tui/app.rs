//! # TUI Application Core
//!
//! Pane contents, text-entry state for add/delete, and the queue of
//! reminders waiting for confirmation.

use crate::core::{describe_delete, render_log, render_schedule, AppContext};
use crate::features::reminders::{Confirmation, Reminder, ReminderService};
use crate::features::schedule::parse_times;
use log::warn;
use std::collections::VecDeque;

/// Keep at most this many activity lines
const ACTIVITY_LIMIT: usize = 100;

/// Input mode for text entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Purpose of the current input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPurpose {
    #[default]
    AddName,
    AddDosage,
    AddTimes,
    DeleteName,
}

/// Main application state
pub struct App {
    /// Whether the app should quit
    pub should_quit: bool,
    /// Whether the vitals sensor is attached
    pub device_online: bool,
    /// Rendered schedule pane
    pub schedule_text: String,
    /// Rendered log pane
    pub log_text: String,
    /// Reminders awaiting an answer, oldest first
    pub pending: VecDeque<Reminder>,
    pub input_mode: InputMode,
    pub input_purpose: InputPurpose,
    pub input_buffer: String,
    /// Name and dosage collected so far while adding
    draft_name: String,
    draft_dosage: String,
    /// Names offered by the delete prompt
    delete_choices: String,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    /// Activity log (recent events)
    pub activity_log: Vec<String>,
}

impl App {
    pub fn new(device_online: bool) -> Self {
        App {
            should_quit: false,
            device_online,
            schedule_text: String::new(),
            log_text: String::new(),
            pending: VecDeque::new(),
            input_mode: InputMode::Normal,
            input_purpose: InputPurpose::default(),
            input_buffer: String::new(),
            draft_name: String::new(),
            draft_dosage: String::new(),
            delete_choices: String::new(),
            error_message: None,
            status_message: None,
            activity_log: Vec::new(),
        }
    }

    /// Re-render both panes from disk
    pub fn refresh(&mut self, ctx: &AppContext) {
        self.schedule_text = render_schedule(&ctx.schedule.load());
        self.log_text = render_log(&ctx.log.load());
    }

    /// Prompt shown above the input line
    pub fn input_prompt(&self) -> String {
        match self.input_purpose {
            InputPurpose::AddName => "Enter medication name:".to_string(),
            InputPurpose::AddDosage => format!("Enter dosage for {}:", self.draft_name),
            InputPurpose::AddTimes => {
                "Enter times (comma-separated, e.g., 08:00, 14:00):".to_string()
            }
            InputPurpose::DeleteName => {
                format!("Enter medication name to delete: {}", self.delete_choices)
            }
        }
    }

    fn begin_input(&mut self, purpose: InputPurpose) {
        self.input_mode = InputMode::Editing;
        self.input_purpose = purpose;
        self.input_buffer.clear();
        self.error_message = None;
        self.status_message = None;
    }

    pub fn start_add(&mut self) {
        self.draft_name.clear();
        self.draft_dosage.clear();
        self.begin_input(InputPurpose::AddName);
    }

    /// Open the delete prompt, or report that there is nothing to delete
    pub fn start_delete(&mut self, ctx: &AppContext) {
        let names = ctx.schedule.names();
        if names.is_empty() {
            self.status_message = Some("No medications to delete.".to_string());
            return;
        }
        self.delete_choices = names.join(", ");
        self.begin_input(InputPurpose::DeleteName);
    }

    /// Abort the current prompt without changing anything
    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.draft_name.clear();
        self.draft_dosage.clear();
    }

    /// Accept the current prompt and advance the add/delete flow
    pub fn submit_input(&mut self, ctx: &AppContext) {
        let raw = std::mem::take(&mut self.input_buffer);
        let value = raw.trim().to_string();
        if value.is_empty() {
            self.cancel_input();
            return;
        }

        match self.input_purpose {
            InputPurpose::AddName => {
                self.draft_name = value;
                self.input_purpose = InputPurpose::AddDosage;
            }
            InputPurpose::AddDosage => {
                self.draft_dosage = value;
                self.input_purpose = InputPurpose::AddTimes;
            }
            InputPurpose::AddTimes => {
                let name = std::mem::take(&mut self.draft_name);
                let dosage = std::mem::take(&mut self.draft_dosage);
                self.input_mode = InputMode::Normal;

                match parse_times(&value).and_then(|times| ctx.schedule.add(&name, &dosage, times)) {
                    Ok(_) => {
                        self.status_message = Some(format!("{name} has been added successfully!"));
                        self.add_activity(format!("Added {name} ({dosage}) at {value}"));
                    }
                    Err(e) => self.error_message = Some(e.to_string()),
                }
                self.refresh(ctx);
            }
            InputPurpose::DeleteName => {
                self.input_mode = InputMode::Normal;
                // Names match exactly, surrounding whitespace included
                match ctx.schedule.delete(&raw) {
                    Ok(outcome) => {
                        let message = describe_delete(&raw, outcome);
                        self.add_activity(message.clone());
                        self.status_message = Some(message);
                    }
                    Err(e) => self.error_message = Some(e.to_string()),
                }
                self.refresh(ctx);
            }
        }
    }

    /// Queue a fired reminder for confirmation
    pub fn push_reminder(&mut self, reminder: Reminder) {
        if self.pending.iter().any(|r| r.id == reminder.id) {
            return;
        }
        self.add_activity(format!("Reminder: {} ({})", reminder.name, reminder.dosage));
        self.pending.push_back(reminder);
    }

    /// The reminder currently asking for an answer
    pub fn current_reminder(&self) -> Option<&Reminder> {
        self.pending.front()
    }

    /// Answer the oldest pending reminder
    pub fn resolve_current(&mut self, ctx: &AppContext, service: &ReminderService, confirmation: Confirmation) {
        let Some(reminder) = self.pending.pop_front() else {
            return;
        };

        match service.resolve(&reminder, confirmation) {
            Ok(Some(entry)) => {
                self.status_message = Some(format!("Logged {} at {}", entry.name, entry.timestamp));
                self.add_activity(format!("Taken: {} ({})", entry.name, entry.dosage));
            }
            Ok(None) => {
                self.add_activity(format!("Dismissed: {} ({})", reminder.name, reminder.dosage));
            }
            Err(e) => {
                warn!("Failed to record dose for {}: {e}", reminder.name);
                self.error_message = Some(format!("Failed to record dose: {e}"));
            }
        }
        self.refresh(ctx);
    }

    /// Add an activity log entry
    pub fn add_activity(&mut self, msg: String) {
        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        self.activity_log.push(format!("[{}] {}", timestamp, msg));

        if self.activity_log.len() > ACTIVITY_LIMIT {
            self.activity_log.remove(0);
        }
    }
}
