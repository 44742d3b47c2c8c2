//! # Features
//!
//! - **schedule**: medication schedule store
//! - **medlog**: confirmed-dose log store
//! - **vitals**: serial vitals reader and classifier
//! - **reminders**: polling scheduler, reminder resolution, audible cue

pub mod medlog;
pub mod reminders;
pub mod schedule;
pub mod vitals;

pub use medlog::{LogEntry, LogStore, MedicationLog};
pub use reminders::{AudibleCue, Confirmation, Reminder, ReminderScheduler, ReminderService};
pub use schedule::{DeleteOutcome, Medication, Schedule, ScheduleStore};
pub use vitals::{classify, VitalStatus, VitalsReader, VitalsSample};
