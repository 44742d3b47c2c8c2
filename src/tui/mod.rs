//! # TUI Module
//!
//! Terminal user interface: schedule and log panes, add/delete prompts, and
//! confirmation of fired reminders.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial TUI with two panes, input line, and reminder popup

pub mod app;
pub mod event;
pub mod ui;

pub use app::App;
pub use event::{Event, EventHandler};
