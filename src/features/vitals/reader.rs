//! # Vitals Reader
//!
//! Reads one `"<pulse>,<heart>"` line from the sensor channel. The reader
//! never fails: an absent device, a timeout or a malformed line all yield
//! the `(0, 0)` sentinel sample.
//!
//! Clearing the input buffer can cut a line anywhere, so the first line
//! after a clear is skipped and the one after it is parsed.

use crate::core::Config;
use log::{debug, info, warn};
use serialport::{ClearBuffer, SerialPort};
use std::io::{self, Read};
use std::sync::Mutex;
use std::time::Duration;

/// Longest line accepted from the sensor, in bytes
const MAX_LINE_LEN: usize = 64;

/// One pulse/heart sample in beats per minute. `0` means unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VitalsSample {
    pub pulse: u32,
    pub heart: u32,
}

impl VitalsSample {
    /// The "no data" sample
    pub const SENTINEL: VitalsSample = VitalsSample { pulse: 0, heart: 0 };

    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }
}

/// A line-oriented device channel
pub trait VitalsChannel: Send {
    /// Drop any buffered input so the next read reflects a fresh sample
    fn clear_input(&mut self) -> io::Result<()>;

    /// Read one line (without the terminator)
    fn read_line(&mut self) -> io::Result<String>;
}

/// Serial port channel backed by the `serialport` crate
pub struct SerialChannel {
    port: Box<dyn SerialPort>,
}

impl SerialChannel {
    pub fn open(path: &str, baud_rate: u32, timeout: Duration) -> serialport::Result<Self> {
        let port = serialport::new(path, baud_rate).timeout(timeout).open()?;
        Ok(SerialChannel { port })
    }
}

impl VitalsChannel for SerialChannel {
    fn clear_input(&mut self) -> io::Result<()> {
        self.port.clear(ClearBuffer::Input).map_err(io::Error::from)
    }

    fn read_line(&mut self) -> io::Result<String> {
        // Byte at a time: a BufReader would hold on to stale input across clears
        let mut line = Vec::with_capacity(16);
        let mut byte = [0u8; 1];
        loop {
            match self.port.read(&mut byte) {
                Ok(0) => break,
                Ok(_) if byte[0] == b'\n' => break,
                Ok(_) => {
                    line.push(byte[0]);
                    if line.len() > MAX_LINE_LEN {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidData,
                            "sensor line too long",
                        ));
                    }
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(String::from_utf8_lossy(&line).into_owned())
    }
}

/// Parse `"<int>,<int>"`. Both fields must be non-empty ASCII digit runs.
pub fn parse_sample(line: &str) -> Option<VitalsSample> {
    let (pulse, heart) = line.trim().split_once(',')?;
    if heart.contains(',') {
        return None;
    }
    Some(VitalsSample {
        pulse: parse_field(pulse)?,
        heart: parse_field(heart)?,
    })
}

fn parse_field(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

pub struct VitalsReader {
    channel: Option<Mutex<Box<dyn VitalsChannel>>>,
}

impl VitalsReader {
    /// Reader with no device attached; every read yields the sentinel
    pub fn offline() -> Self {
        VitalsReader { channel: None }
    }

    pub fn with_channel(channel: Box<dyn VitalsChannel>) -> Self {
        VitalsReader {
            channel: Some(Mutex::new(channel)),
        }
    }

    /// Open the configured serial port, falling back to offline mode
    pub fn open(config: &Config) -> Self {
        let Some(port) = config.serial_port.as_deref() else {
            info!("No vitals port configured - running offline");
            return Self::offline();
        };

        match SerialChannel::open(port, config.baud_rate, config.read_timeout) {
            Ok(channel) => {
                info!("Vitals sensor connected on {port} ({} baud)", config.baud_rate);
                Self::with_channel(Box::new(channel))
            }
            Err(e) => {
                warn!("Vitals sensor not connected ({port}): {e}");
                Self::offline()
            }
        }
    }

    pub fn is_online(&self) -> bool {
        self.channel.is_some()
    }

    /// Read one sample; any failure yields `VitalsSample::SENTINEL`
    pub fn read(&self) -> VitalsSample {
        let Some(channel) = &self.channel else {
            return VitalsSample::SENTINEL;
        };
        let mut channel = channel.lock().unwrap_or_else(|e| e.into_inner());

        if let Err(e) = channel.clear_input() {
            debug!("Failed to clear sensor input: {e}");
        }

        // Resync to a line boundary
        if let Err(e) = channel.read_line() {
            debug!("Sensor read failed: {e}");
            return VitalsSample::SENTINEL;
        }

        match channel.read_line() {
            Ok(line) => parse_sample(&line).unwrap_or_else(|| {
                debug!("Malformed sensor line: {line:?}");
                VitalsSample::SENTINEL
            }),
            Err(e) => {
                debug!("Sensor read failed: {e}");
                VitalsSample::SENTINEL
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Channel that replays scripted reads and counts clears
    struct ScriptedChannel {
        reads: VecDeque<io::Result<String>>,
        clears: Arc<AtomicUsize>,
    }

    impl ScriptedChannel {
        fn new(reads: Vec<io::Result<String>>) -> (Self, Arc<AtomicUsize>) {
            let clears = Arc::new(AtomicUsize::new(0));
            (
                ScriptedChannel {
                    reads: reads.into(),
                    clears: clears.clone(),
                },
                clears,
            )
        }
    }

    impl VitalsChannel for ScriptedChannel {
        fn clear_input(&mut self) -> io::Result<()> {
            self.clears.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn read_line(&mut self) -> io::Result<String> {
            self.reads
                .pop_front()
                .unwrap_or_else(|| Err(io::Error::new(io::ErrorKind::TimedOut, "timed out")))
        }
    }

    /// Reader whose next read sees a cut-off fragment, then `line`
    fn reader_with(line: &str) -> VitalsReader {
        let (channel, _) =
            ScriptedChannel::new(vec![Ok("8,88".to_string()), Ok(line.to_string())]);
        VitalsReader::with_channel(Box::new(channel))
    }

    #[test]
    fn test_parse_sample_valid() {
        assert_eq!(
            parse_sample("72,88"),
            Some(VitalsSample { pulse: 72, heart: 88 })
        );
        assert_eq!(
            parse_sample("  65,70\r"),
            Some(VitalsSample { pulse: 65, heart: 70 })
        );
        assert_eq!(parse_sample("0,0"), Some(VitalsSample::SENTINEL));
    }

    #[test]
    fn test_parse_sample_rejects_malformed() {
        for line in ["", "7288", "72;88", "72,", ",88", "-72,88", "72, 88", "72,8x", "1,2,3", "99999999999,1"] {
            assert_eq!(parse_sample(line), None, "line {line:?}");
        }
    }

    #[test]
    fn test_offline_reader_returns_sentinel() {
        let reader = VitalsReader::offline();
        assert!(!reader.is_online());
        assert!(reader.read().is_sentinel());
    }

    #[test]
    fn test_read_valid_line() {
        let reader = reader_with("75,82");
        assert!(reader.is_online());
        assert_eq!(reader.read(), VitalsSample { pulse: 75, heart: 82 });
    }

    #[test]
    fn test_read_skips_line_cut_by_clear() {
        // `72,88\n` cut after the `7` by the clear
        let (channel, _) =
            ScriptedChannel::new(vec![Ok("2,88".to_string()), Ok("72,88".to_string())]);
        let reader = VitalsReader::with_channel(Box::new(channel));
        assert_eq!(reader.read(), VitalsSample { pulse: 72, heart: 88 });
    }

    #[test]
    fn test_read_with_only_partial_line_returns_sentinel() {
        let (channel, _) = ScriptedChannel::new(vec![Ok("2,88".to_string())]);
        let reader = VitalsReader::with_channel(Box::new(channel));
        assert!(reader.read().is_sentinel());
    }

    #[test]
    fn test_read_timeout_returns_sentinel() {
        let (channel, _) = ScriptedChannel::new(vec![]);
        let reader = VitalsReader::with_channel(Box::new(channel));
        assert!(reader.read().is_sentinel());
    }

    #[test]
    fn test_read_without_separator_returns_sentinel() {
        assert!(reader_with("7582").read().is_sentinel());
    }

    #[test]
    fn test_read_non_digit_field_returns_sentinel() {
        assert!(reader_with("75,abc").read().is_sentinel());
        assert!(reader_with("x,82").read().is_sentinel());
    }

    #[test]
    fn test_clears_input_before_each_read() {
        let (channel, clears) = ScriptedChannel::new(
            ["0,70", "70,70", "1,71", "71,71"]
                .iter()
                .map(|l| Ok(l.to_string()))
                .collect(),
        );
        let reader = VitalsReader::with_channel(Box::new(channel));

        assert_eq!(reader.read().pulse, 70);
        assert_eq!(reader.read().pulse, 71);
        assert_eq!(clears.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_open_with_no_port_is_offline() {
        let mut config = Config::from_lookup(|_| None).unwrap();
        config.serial_port = None;
        assert!(!VitalsReader::open(&config).is_online());
    }
}
