//! # Reminder Scheduler
//!
//! Background loop that reloads the schedule every poll interval and fires a
//! reminder for each medication due at the current `HH:MM`. Each
//! `(name, dosage, HH:MM)` fires at most once per calendar day, so a poll that
//! lands twice inside the same minute does not repeat the reminder.
//!
//! Whole-minute intervals are aligned to one second past the minute, so
//! timer jitter cannot carry a poll across a minute it should have seen.

use crate::core::clock::{Clock, SystemClock};
use crate::core::AppContext;
use crate::features::vitals::VitalsSample;
use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

use super::reminder::Reminder;

/// Offset past the minute boundary for aligned polls
const ALIGN_OFFSET: Duration = Duration::from_secs(1);

/// Delay until the next poll. Intervals that are a whole number of minutes
/// land on `ALIGN_OFFSET` past the minute; anything else is used as is.
pub fn next_delay(now: NaiveDateTime, poll_interval: Duration) -> Duration {
    let secs = poll_interval.as_secs();
    if secs < 60 || secs % 60 != 0 || poll_interval.subsec_nanos() != 0 {
        return poll_interval;
    }
    // Leap seconds report nanoseconds past 1e9
    let into_minute = Duration::new(u64::from(now.second()), now.nanosecond() % 1_000_000_000);
    (poll_interval + ALIGN_OFFSET).saturating_sub(into_minute)
}

/// Remembers which reminders already fired today
#[derive(Debug, Default)]
pub struct FiredTracker {
    day: Option<NaiveDate>,
    fired: HashSet<(String, String, String)>,
}

impl FiredTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a firing; false if this one already fired on `day`
    pub fn mark(&mut self, day: NaiveDate, name: &str, dosage: &str, hh_mm: &str) -> bool {
        if self.day != Some(day) {
            self.day = Some(day);
            self.fired.clear();
        }
        self.fired
            .insert((name.to_string(), dosage.to_string(), hh_mm.to_string()))
    }
}

pub struct ReminderScheduler {
    ctx: Arc<AppContext>,
    clock: Arc<dyn Clock>,
    tx: mpsc::UnboundedSender<Reminder>,
    fired: FiredTracker,
}

impl ReminderScheduler {
    pub fn new(ctx: Arc<AppContext>, tx: mpsc::UnboundedSender<Reminder>) -> Self {
        ReminderScheduler {
            ctx,
            clock: Arc::new(SystemClock),
            tx,
            fired: FiredTracker::new(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Run until `shutdown` turns true, its sender is dropped, or the
    /// reminder receiver goes away.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) {
        let poll_interval = self.ctx.config.poll_interval;
        info!(
            "Reminder scheduler started (interval: {}s)",
            poll_interval.as_secs()
        );

        loop {
            if *shutdown.borrow() {
                break;
            }

            let now = self.clock.now();
            if let Err(e) = self.tick(now).await {
                warn!("Stopping reminder scheduler: {e}");
                break;
            }

            let delay = next_delay(self.clock.now(), poll_interval);
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        info!("Reminder scheduler stopped");
    }

    /// Evaluate the schedule at `now`; returns how many reminders fired
    pub async fn tick(&mut self, now: NaiveDateTime) -> Result<usize> {
        let hh_mm = now.format("%H:%M").to_string();
        let schedule = self.ctx.schedule.load();
        debug!(
            "Tick at {hh_mm}: {} medication(s) scheduled",
            schedule.medications.len()
        );

        let mut count = 0;
        for medication in schedule.due_at(&hh_mm) {
            if !self
                .fired
                .mark(now.date(), &medication.name, &medication.dosage, &hh_mm)
            {
                debug!("{} already reminded at {hh_mm} today", medication.name);
                continue;
            }

            let vitals = self.read_vitals().await;
            let reminder = Reminder::new(medication, &hh_mm, now, vitals);
            info!(
                "Reminder: {} ({}) - pulse {} ({}), heart {} ({})",
                reminder.name,
                reminder.dosage,
                vitals.pulse,
                reminder.pulse_status,
                vitals.heart,
                reminder.heart_status
            );

            self.tx
                .send(reminder)
                .map_err(|_| anyhow!("reminder receiver closed"))?;
            count += 1;
        }

        Ok(count)
    }

    async fn read_vitals(&self) -> VitalsSample {
        let ctx = self.ctx.clone();
        tokio::task::spawn_blocking(move || ctx.vitals.read())
            .await
            .unwrap_or_else(|e| {
                warn!("Vitals read task failed: {e}");
                VitalsSample::SENTINEL
            })
    }
}
