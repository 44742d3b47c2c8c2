//! # Reminders Feature
//!
//! Polls the medication schedule and publishes reminders with vitals
//! captured at fire time. Reminders are resolved (taken or dismissed) by the
//! interaction layer through `ReminderService`.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Once-per-day firing per medication time; cooperative shutdown
//! - 1.0.0: Initial scheduler with confirmation and audible cue

pub mod cue;
pub mod reminder;
pub mod scheduler;
pub mod service;

pub use cue::{AudibleCue, TerminalBell};
pub use reminder::{Confirmation, Reminder};
pub use scheduler::{FiredTracker, ReminderScheduler};
pub use service::ReminderService;
