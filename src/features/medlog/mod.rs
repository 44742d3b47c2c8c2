//! # Medication Log Feature
//!
//! Append-only record of confirmed doses with the vitals captured at confirmation.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod store;

pub use store::{LogEntry, LogStore, MedicationLog, TIMESTAMP_FORMAT};
