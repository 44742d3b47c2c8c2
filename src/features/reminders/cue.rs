//! Audible notification sounded after every resolved reminder.

use log::debug;
use std::io::Write;

pub trait AudibleCue: Send + Sync {
    fn sound(&self);
}

/// Rings the terminal bell (BEL on stdout)
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl AudibleCue for TerminalBell {
    fn sound(&self) {
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            debug!("Failed to ring terminal bell: {e}");
        }
    }
}
