//! Resolution of fired reminders: log the dose on confirmation, and sound
//! the cue either way.

use crate::core::clock::{Clock, SystemClock};
use crate::core::AppContext;
use crate::features::medlog::LogEntry;
use anyhow::Result;
use log::info;
use std::sync::Arc;

use super::reminder::{Confirmation, Reminder};

#[derive(Clone)]
pub struct ReminderService {
    ctx: Arc<AppContext>,
    clock: Arc<dyn Clock>,
}

impl ReminderService {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        ReminderService {
            ctx,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Apply the user's answer. Returns the logged entry when taken.
    pub fn resolve(&self, reminder: &Reminder, confirmation: Confirmation) -> Result<Option<LogEntry>> {
        let result = match confirmation {
            Confirmation::Taken => {
                let entry = LogEntry::new(
                    &reminder.name,
                    &reminder.dosage,
                    self.clock.now(),
                    reminder.vitals,
                    reminder.statuses(),
                );
                self.ctx.log.append(entry.clone()).map(|()| Some(entry))
            }
            Confirmation::Dismissed => {
                info!(
                    "Reminder {} for {} ({}) dismissed",
                    reminder.id, reminder.name, reminder.due
                );
                Ok(None)
            }
        };

        self.ctx.cue.sound();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::features::reminders::AudibleCue;
    use crate::features::schedule::Medication;
    use crate::features::vitals::{VitalStatus, VitalsReader, VitalsSample};
    use chrono::{NaiveDate, NaiveDateTime};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingCue(Arc<AtomicUsize>);

    impl AudibleCue for CountingCue {
        fn sound(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn service(dir: &tempfile::TempDir) -> (ReminderService, Arc<AtomicUsize>) {
        let mut config = Config::from_lookup(|_| None).unwrap();
        config.schedule_path = dir.path().join("schedule.json");
        config.log_path = dir.path().join("log.json");
        config.serial_port = None;

        let beeps = Arc::new(AtomicUsize::new(0));
        let ctx = AppContext::with_parts(
            config,
            VitalsReader::offline(),
            Box::new(CountingCue(beeps.clone())),
        );
        let at = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 30)
            .unwrap();
        let svc = ReminderService::new(Arc::new(ctx)).with_clock(Arc::new(FixedClock(at)));
        (svc, beeps)
    }

    fn offline_reminder() -> Reminder {
        let med = Medication {
            name: "Aspirin".to_string(),
            dosage: "100mg".to_string(),
            schedule: vec!["08:00".to_string()],
        };
        let fired = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Reminder::new(&med, "08:00", fired, VitalsSample::SENTINEL)
    }

    #[test]
    fn test_taken_with_device_absent_logs_sentinel_vitals() {
        let dir = tempfile::tempdir().unwrap();
        let (svc, beeps) = service(&dir);

        let entry = svc
            .resolve(&offline_reminder(), Confirmation::Taken)
            .unwrap()
            .unwrap();
        assert_eq!(entry.timestamp, "2025-06-01 08:00:30");

        let logs = svc.ctx.log.load().logs;
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].name, "Aspirin");
        assert_eq!(logs[0].dosage, "100mg");
        assert_eq!(logs[0].pulse_rate, 0);
        assert_eq!(logs[0].heart_rate, 0);
        assert_eq!(logs[0].pulse_status, VitalStatus::Abnormal);
        assert_eq!(logs[0].heart_status, VitalStatus::Abnormal);
        assert_eq!(beeps.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dismissed_logs_nothing_but_sounds_cue() {
        let dir = tempfile::tempdir().unwrap();
        let (svc, beeps) = service(&dir);

        let entry = svc.resolve(&offline_reminder(), Confirmation::Dismissed).unwrap();
        assert!(entry.is_none());
        assert!(svc.ctx.log.load().is_empty());
        assert_eq!(beeps.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cue_sounds_even_when_log_write_fails() {
        let dir = tempfile::tempdir().unwrap();
        let (mut svc, beeps) = service(&dir);

        // Point the log at a directory so the write fails
        let mut config = svc.ctx.config.clone();
        config.log_path = dir.path().to_path_buf();
        svc.ctx = Arc::new(AppContext::with_parts(
            config,
            VitalsReader::offline(),
            Box::new(CountingCue(beeps.clone())),
        ));

        assert!(svc.resolve(&offline_reminder(), Confirmation::Taken).is_err());
        assert_eq!(beeps.load(Ordering::SeqCst), 1);
    }
}
