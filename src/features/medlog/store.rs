//! # Log Store
//!
//! Confirmed doses, persisted as `{"logs": [...]}`. Entries are only ever
//! appended; each append rewrites the whole document immediately.

use crate::core::json_file;
use crate::features::vitals::{VitalStatus, VitalsSample};
use anyhow::Result;
use chrono::NaiveDateTime;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Format of `LogEntry::timestamp`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One confirmed dose
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub name: String,
    pub dosage: String,
    pub timestamp: String,
    pub pulse_rate: u32,
    pub heart_rate: u32,
    pub pulse_status: VitalStatus,
    pub heart_status: VitalStatus,
}

impl LogEntry {
    pub fn new(
        name: &str,
        dosage: &str,
        taken_at: NaiveDateTime,
        sample: VitalsSample,
        statuses: (VitalStatus, VitalStatus),
    ) -> Self {
        LogEntry {
            name: name.to_string(),
            dosage: dosage.to_string(),
            timestamp: taken_at.format(TIMESTAMP_FORMAT).to_string(),
            pulse_rate: sample.pulse,
            heart_rate: sample.heart,
            pulse_status: statuses.0,
            heart_status: statuses.1,
        }
    }
}

/// Root document: `{"logs": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationLog {
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

impl MedicationLog {
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}

pub struct LogStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LogStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Load the log; missing or corrupt files yield the empty log
    pub fn load(&self) -> MedicationLog {
        let _guard = self.guard();
        json_file::load_or_default(&self.path)
    }

    /// Overwrite the backing file with `log`
    pub fn save(&self, log: &MedicationLog) -> Result<()> {
        let _guard = self.guard();
        json_file::save(&self.path, log)
    }

    /// Append one entry and persist immediately
    pub fn append(&self, entry: LogEntry) -> Result<()> {
        let _guard = self.guard();
        let mut log: MedicationLog = json_file::load_or_default(&self.path);
        info!(
            "Logged dose: {} ({}) at {}",
            entry.name, entry.dosage, entry.timestamp
        );
        log.logs.push(entry);
        json_file::save(&self.path, &log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, 5)
            .unwrap()
    }

    fn entry(name: &str, h: u32) -> LogEntry {
        LogEntry::new(
            name,
            "100mg",
            at(h, 0),
            VitalsSample { pulse: 72, heart: 110 },
            (VitalStatus::Normal, VitalStatus::Abnormal),
        )
    }

    #[test]
    fn test_missing_and_corrupt_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path().join("medication_log.json"));
        assert!(store.load().is_empty());

        std::fs::write(store.path(), "\"logs\"").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_entry_fields() {
        let e = entry("Aspirin", 8);
        assert_eq!(e.timestamp, "2025-03-14 08:00:05");
        assert_eq!(e.pulse_rate, 72);
        assert_eq!(e.heart_rate, 110);
        assert_eq!(e.pulse_status, VitalStatus::Normal);
        assert_eq!(e.heart_status, VitalStatus::Abnormal);
    }

    #[test]
    fn test_append_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path().join("medication_log.json"));

        store.append(entry("Aspirin", 8)).unwrap();
        store.append(entry("Metformin", 9)).unwrap();
        store.append(entry("Aspirin", 14)).unwrap();

        let names: Vec<_> = store.load().logs.into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Aspirin", "Metformin", "Aspirin"]);
    }

    #[test]
    fn test_serialized_shape() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path().join("medication_log.json"));
        store.append(entry("Aspirin", 8)).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        let first = &raw["logs"][0];
        assert_eq!(first["name"], "Aspirin");
        assert_eq!(first["pulse_rate"], 72);
        assert_eq!(first["pulse_status"], "Normal");
        assert_eq!(first["heart_status"], "Abnormal");
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LogStore::new(dir.path().join("medication_log.json"));
        let log = MedicationLog {
            logs: vec![entry("Aspirin", 8), entry("Aspirin", 20)],
        };
        store.save(&log).unwrap();
        assert_eq!(store.load(), log);
    }
}
