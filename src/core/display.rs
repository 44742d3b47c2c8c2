//! Plain-text rendering of the schedule and dose log
//!
//! Shared by the TUI panes and the prompt-driven manager.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use crate::features::medlog::MedicationLog;
use crate::features::schedule::{DeleteOutcome, Schedule};

pub const EMPTY_SCHEDULE: &str = "No medications scheduled.";
pub const EMPTY_LOG: &str = "No medication has been taken yet.";

/// Render the schedule pane
pub fn render_schedule(schedule: &Schedule) -> String {
    if schedule.is_empty() {
        return format!("{EMPTY_SCHEDULE}\n");
    }

    let mut out = String::new();
    for med in &schedule.medications {
        out.push_str(&format!("📌 {} ({})\n", med.name, med.dosage));
        out.push_str(&format!("   Times: {}\n\n", med.schedule.join(", ")));
    }
    out
}

/// Render the log pane
pub fn render_log(log: &MedicationLog) -> String {
    if log.is_empty() {
        return format!("{EMPTY_LOG}\n");
    }

    let mut out = String::new();
    for entry in &log.logs {
        out.push_str(&format!(
            "✅ {} ({}) - Taken at {}\n",
            entry.name, entry.dosage, entry.timestamp
        ));
        out.push_str(&format!(
            "   Pulse Rate: {} bpm ({}), Heart Rate: {} bpm ({})\n\n",
            entry.pulse_rate, entry.pulse_status, entry.heart_rate, entry.heart_status
        ));
    }
    out
}

/// User-facing message for a delete request
pub fn describe_delete(name: &str, outcome: DeleteOutcome) -> String {
    match outcome {
        DeleteOutcome::NothingToDelete => "No medications to delete.".to_string(),
        DeleteOutcome::NotFound => format!("No medication named {name} found."),
        DeleteOutcome::Removed(_) => format!("{name} has been deleted successfully!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::medlog::LogEntry;
    use crate::features::schedule::Medication;
    use crate::features::vitals::VitalStatus;

    #[test]
    fn test_empty_schedule() {
        assert_eq!(
            render_schedule(&Schedule::default()),
            "No medications scheduled.\n"
        );
    }

    #[test]
    fn test_schedule_lines() {
        let schedule = Schedule {
            medications: vec![Medication {
                name: "Aspirin".to_string(),
                dosage: "100mg".to_string(),
                schedule: vec!["08:00".to_string(), "14:00".to_string()],
            }],
        };
        assert_eq!(
            render_schedule(&schedule),
            "📌 Aspirin (100mg)\n   Times: 08:00, 14:00\n\n"
        );
    }

    #[test]
    fn test_empty_log() {
        assert_eq!(
            render_log(&MedicationLog::default()),
            "No medication has been taken yet.\n"
        );
    }

    #[test]
    fn test_log_lines() {
        let log = MedicationLog {
            logs: vec![LogEntry {
                name: "Aspirin".to_string(),
                dosage: "100mg".to_string(),
                timestamp: "2025-01-02 08:00:12".to_string(),
                pulse_rate: 0,
                heart_rate: 0,
                pulse_status: VitalStatus::Abnormal,
                heart_status: VitalStatus::Abnormal,
            }],
        };
        let text = render_log(&log);
        assert!(text.starts_with("✅ Aspirin (100mg) - Taken at 2025-01-02 08:00:12\n"));
        assert!(text.contains("Pulse Rate: 0 bpm (Abnormal), Heart Rate: 0 bpm (Abnormal)"));
    }

    #[test]
    fn test_describe_delete() {
        assert_eq!(
            describe_delete("Aspirin", DeleteOutcome::NothingToDelete),
            "No medications to delete."
        );
        assert!(describe_delete("Aspirin", DeleteOutcome::NotFound).contains("No medication named"));
        assert!(describe_delete("Aspirin", DeleteOutcome::Removed(2)).contains("deleted"));
    }
}
