//! # Schedule Feature
//!
//! Medication schedule persisted as a single JSON document.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod store;

pub use store::{parse_times, DeleteOutcome, Medication, Schedule, ScheduleStore};
