//! # Schedule Store
//!
//! Whole-document storage of the medication schedule. Every read-modify-write
//! runs under the store mutex so the reminder scheduler and the interactive
//! side never interleave into a lost update.

use crate::core::json_file;
use anyhow::{anyhow, Result};
use log::info;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// 24-hour `HH:MM`
static TIME_OF_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid regex"));

/// A named medication with its daily trigger times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    /// Times of day in `HH:MM` form
    pub schedule: Vec<String>,
}

impl Medication {
    /// Whether this medication is due at the given `HH:MM`
    pub fn is_due_at(&self, hh_mm: &str) -> bool {
        self.schedule.iter().any(|t| t == hh_mm)
    }
}

/// Root document: `{"medications": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub medications: Vec<Medication>,
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        self.medications.is_empty()
    }

    /// Medications due at the given `HH:MM`
    pub fn due_at<'a>(&'a self, hh_mm: &'a str) -> impl Iterator<Item = &'a Medication> + 'a {
        self.medications.iter().filter(move |m| m.is_due_at(hh_mm))
    }
}

/// Result of a delete-by-name request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The schedule was already empty
    NothingToDelete,
    /// No entry carried that exact name
    NotFound,
    /// Number of entries removed
    Removed(usize),
}

/// Split comma-separated user input into validated `HH:MM` times.
///
/// Pieces are trimmed and empty pieces dropped; order and duplicates are kept.
pub fn parse_times(raw: &str) -> Result<Vec<String>> {
    let times: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    validate_times(&times)?;
    Ok(times)
}

fn validate_times(times: &[String]) -> Result<()> {
    if times.is_empty() {
        return Err(anyhow!("At least one time is required"));
    }
    for t in times {
        if !TIME_OF_DAY.is_match(t) {
            return Err(anyhow!("Invalid time '{t}' (expected HH:MM, 24-hour)"));
        }
    }
    Ok(())
}

pub struct ScheduleStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ScheduleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScheduleStore {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The guarded data is `()`, so a poisoned lock carries no broken state
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Load the schedule; missing or corrupt files yield the empty schedule
    pub fn load(&self) -> Schedule {
        let _guard = self.guard();
        json_file::load_or_default(&self.path)
    }

    /// Overwrite the backing file with `schedule`
    pub fn save(&self, schedule: &Schedule) -> Result<()> {
        let _guard = self.guard();
        json_file::save(&self.path, schedule)
    }

    /// Names of every scheduled medication, in schedule order
    pub fn names(&self) -> Vec<String> {
        self.load().medications.into_iter().map(|m| m.name).collect()
    }

    /// Append a medication and persist
    pub fn add(&self, name: &str, dosage: &str, times: Vec<String>) -> Result<Medication> {
        let name = name.trim();
        let dosage = dosage.trim();
        if name.is_empty() {
            return Err(anyhow!("Medication name cannot be empty"));
        }
        if dosage.is_empty() {
            return Err(anyhow!("Dosage cannot be empty"));
        }
        validate_times(&times)?;

        let medication = Medication {
            name: name.to_string(),
            dosage: dosage.to_string(),
            schedule: times,
        };

        let _guard = self.guard();
        let mut schedule: Schedule = json_file::load_or_default(&self.path);
        schedule.medications.push(medication.clone());
        json_file::save(&self.path, &schedule)?;

        info!(
            "Added {} ({}) at {}",
            medication.name,
            medication.dosage,
            medication.schedule.join(", ")
        );
        Ok(medication)
    }

    /// Remove every medication whose name matches exactly
    pub fn delete(&self, name: &str) -> Result<DeleteOutcome> {
        let _guard = self.guard();
        let mut schedule: Schedule = json_file::load_or_default(&self.path);
        if schedule.is_empty() {
            return Ok(DeleteOutcome::NothingToDelete);
        }

        let before = schedule.medications.len();
        schedule.medications.retain(|m| m.name != name);
        let removed = before - schedule.medications.len();
        if removed == 0 {
            return Ok(DeleteOutcome::NotFound);
        }

        json_file::save(&self.path, &schedule)?;
        info!("Deleted {removed} schedule entry(ies) named {name}");
        Ok(DeleteOutcome::Removed(removed))
    }
}
