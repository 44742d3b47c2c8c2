// Core layer - config, shared context, persistence helpers, rendering
pub mod core;

// Features layer - schedule, log, vitals, reminders
pub mod features;

// TUI layer - terminal user interface (optional feature)
#[cfg(feature = "tui")]
pub mod tui;

// Re-export core items
pub use core::{AppContext, Config};

// Re-export feature items
pub use features::{
    // Log
    LogEntry, LogStore, MedicationLog,
    // Reminders
    AudibleCue, Confirmation, Reminder, ReminderScheduler, ReminderService,
    // Schedule
    DeleteOutcome, Medication, Schedule, ScheduleStore,
    // Vitals
    classify, VitalStatus, VitalsReader, VitalsSample,
};
