//! # Vitals Feature
//!
//! Pulse and heart rate sampling over a serial line, plus threshold classification.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Serial reader with sentinel fallback and fixed-range classifier

pub mod classifier;
pub mod reader;

pub use classifier::{classify, classify_sample, VitalStatus, NORMAL_RANGE};
pub use reader::{parse_sample, SerialChannel, VitalsChannel, VitalsReader, VitalsSample};
