//! # Configuration
//!
//! Environment-driven settings for file locations, the vitals serial link,
//! and the reminder polling interval. A `.env` file is honoured via dotenvy.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{anyhow, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Default schedule file (relative to the working directory)
pub const DEFAULT_SCHEDULE_FILE: &str = "medication_schedule.json";

/// Default dose log file (relative to the working directory)
pub const DEFAULT_LOG_FILE: &str = "medication_log.json";

/// Default serial device for the vitals sensor
#[cfg(windows)]
pub const DEFAULT_SERIAL_PORT: &str = "COM9";
#[cfg(not(windows))]
pub const DEFAULT_SERIAL_PORT: &str = "/dev/rfcomm0";

pub const DEFAULT_BAUD_RATE: u32 = 9600;
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub schedule_path: PathBuf,
    pub log_path: PathBuf,
    /// Serial port for the vitals sensor. `None` runs offline.
    pub serial_port: Option<String>,
    pub baud_rate: u32,
    pub read_timeout: Duration,
    pub poll_interval: Duration,
    pub log_level: String,
}

impl Config {
    /// Load configuration from the environment (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let schedule_path = lookup("MEDWATCH_SCHEDULE_FILE")
            .unwrap_or_else(|| DEFAULT_SCHEDULE_FILE.to_string());
        let log_path =
            lookup("MEDWATCH_LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

        // An explicitly empty port disables the sensor
        let serial_port = match lookup("MEDWATCH_SERIAL_PORT") {
            Some(port) if port.trim().is_empty() => None,
            Some(port) => Some(port.trim().to_string()),
            None => Some(DEFAULT_SERIAL_PORT.to_string()),
        };

        let baud_rate = parse_number(&lookup, "MEDWATCH_BAUD_RATE", DEFAULT_BAUD_RATE)?;
        let read_timeout_ms =
            parse_number(&lookup, "MEDWATCH_READ_TIMEOUT_MS", DEFAULT_READ_TIMEOUT_MS)?;
        let poll_interval_secs = parse_number(
            &lookup,
            "MEDWATCH_POLL_INTERVAL_SECS",
            DEFAULT_POLL_INTERVAL_SECS,
        )?;

        if poll_interval_secs == 0 {
            return Err(anyhow!("MEDWATCH_POLL_INTERVAL_SECS must be greater than zero"));
        }

        Ok(Config {
            schedule_path: PathBuf::from(schedule_path),
            log_path: PathBuf::from(log_path),
            serial_port,
            baud_rate,
            read_timeout: Duration::from_millis(read_timeout_ms),
            poll_interval: Duration::from_secs(poll_interval_secs),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_number<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("Invalid value for {key} ({raw:?}): {e}")),
        None => Ok(default),
    }
}
