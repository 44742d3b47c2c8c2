//! # JSON Document Files
//!
//! Whole-file load/save helpers shared by the schedule and log stores.
//! A missing or unparsable document loads as the type's default value.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;

/// Indentation used when writing documents
const INDENT: &[u8] = b"    ";

/// Load a JSON document, falling back to `T::default()` on any failure.
pub fn load_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} not found, using empty default", path.display());
            return T::default();
        }
        Err(e) => {
            warn!("Failed to read {}: {e}. Using empty default", path.display());
            return T::default();
        }
    };

    match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(e) => {
            warn!("{} is not valid ({e}). Using empty default", path.display());
            T::default()
        }
    }
}

/// Overwrite `path` with the pretty-printed document.
pub fn save<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize,
{
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;

    std::fs::write(path, buf).with_context(|| format!("Failed to write {}", path.display()))
}
