//! Reminder events passed from the scheduler to the interaction layer.

use crate::features::schedule::Medication;
use crate::features::vitals::{classify_sample, VitalStatus, VitalsSample};
use chrono::NaiveDateTime;
use uuid::Uuid;

/// User's answer to "Have you taken it?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Taken,
    Dismissed,
}

/// A fired reminder awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    /// Scheduled `HH:MM` that triggered this reminder
    pub due: String,
    pub fired_at: NaiveDateTime,
    pub vitals: VitalsSample,
    pub pulse_status: VitalStatus,
    pub heart_status: VitalStatus,
}

impl Reminder {
    pub fn new(medication: &Medication, due: &str, fired_at: NaiveDateTime, vitals: VitalsSample) -> Self {
        let (pulse_status, heart_status) = classify_sample(&vitals);
        Reminder {
            id: Uuid::new_v4(),
            name: medication.name.clone(),
            dosage: medication.dosage.clone(),
            due: due.to_string(),
            fired_at,
            vitals,
            pulse_status,
            heart_status,
        }
    }

    pub fn statuses(&self) -> (VitalStatus, VitalStatus) {
        (self.pulse_status, self.heart_status)
    }

    /// Confirmation prompt text
    pub fn prompt(&self) -> String {
        format!(
            "Time to take {} ({})!\n\nPulse Rate: {} bpm ({})\nHeart Rate: {} bpm ({})\n\nHave you taken it?",
            self.name,
            self.dosage,
            self.vitals.pulse,
            self.pulse_status,
            self.vitals.heart,
            self.heart_status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn aspirin() -> Medication {
        Medication {
            name: "Aspirin".to_string(),
            dosage: "100mg".to_string(),
            schedule: vec!["08:00".to_string()],
        }
    }

    fn eight_am() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(8, 0, 12)
            .unwrap()
    }

    #[test]
    fn test_new_classifies_vitals() {
        let reminder = Reminder::new(
            &aspirin(),
            "08:00",
            eight_am(),
            VitalsSample { pulse: 70, heart: 120 },
        );
        assert_eq!(
            reminder.statuses(),
            (VitalStatus::Normal, VitalStatus::Abnormal)
        );
        assert_eq!(reminder.due, "08:00");
    }

    #[test]
    fn test_prompt_text() {
        let reminder = Reminder::new(&aspirin(), "08:00", eight_am(), VitalsSample::SENTINEL);
        let prompt = reminder.prompt();
        assert!(prompt.starts_with("Time to take Aspirin (100mg)!"));
        assert!(prompt.contains("Pulse Rate: 0 bpm (Abnormal)"));
        assert!(prompt.contains("Heart Rate: 0 bpm (Abnormal)"));
        assert!(prompt.ends_with("Have you taken it?"));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Reminder::new(&aspirin(), "08:00", eight_am(), VitalsSample::SENTINEL);
        let b = Reminder::new(&aspirin(), "08:00", eight_am(), VitalsSample::SENTINEL);
        assert_ne!(a.id, b.id);
    }
}
