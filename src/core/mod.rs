//! # Core Module
//!
//! Configuration, the shared application context, JSON document files,
//! and text rendering.
//!
//! - **Version**: 1.2.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Add AppContext and Clock
//! - 1.1.0: Add display module with schedule and log rendering
//! - 1.0.0: Initial creation with config module

pub mod clock;
pub mod config;
pub mod context;
pub mod display;
pub mod json_file;

// Re-export commonly used items
pub use clock::{Clock, SystemClock};
pub use config::Config;
pub use context::AppContext;
pub use display::{describe_delete, render_log, render_schedule, EMPTY_LOG, EMPTY_SCHEDULE};
