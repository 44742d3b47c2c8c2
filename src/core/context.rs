//! # Application Context
//!
//! Everything the scheduler and the interaction layer share, built once at
//! startup. The serial channel closes when the context is dropped.

use crate::core::Config;
use crate::features::medlog::LogStore;
use crate::features::reminders::{AudibleCue, TerminalBell};
use crate::features::schedule::ScheduleStore;
use crate::features::vitals::VitalsReader;

pub struct AppContext {
    pub config: Config,
    pub schedule: ScheduleStore,
    pub log: LogStore,
    pub vitals: VitalsReader,
    pub cue: Box<dyn AudibleCue>,
}

impl AppContext {
    /// Open stores and the vitals device described by `config`
    pub fn open(config: Config) -> Self {
        let vitals = VitalsReader::open(&config);
        Self::with_parts(config, vitals, Box::new(TerminalBell))
    }

    pub fn with_parts(config: Config, vitals: VitalsReader, cue: Box<dyn AudibleCue>) -> Self {
        AppContext {
            schedule: ScheduleStore::new(config.schedule_path.clone()),
            log: LogStore::new(config.log_path.clone()),
            vitals,
            cue,
            config,
        }
    }
}
