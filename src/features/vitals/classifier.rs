//! Fixed-threshold classification of pulse and heart rate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use super::reader::VitalsSample;

/// Beats per minute considered normal, inclusive
pub const NORMAL_RANGE: RangeInclusive<u32> = 60..=100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalStatus {
    Normal,
    Abnormal,
    /// The input was not an integer at all
    Unknown,
}

impl VitalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VitalStatus::Normal => "Normal",
            VitalStatus::Abnormal => "Abnormal",
            VitalStatus::Unknown => "Unknown",
        }
    }

    fn of(bpm: u32) -> Self {
        if NORMAL_RANGE.contains(&bpm) {
            VitalStatus::Normal
        } else {
            VitalStatus::Abnormal
        }
    }

    /// Parse a raw field for `classify`; anything but a plain integer is `None`
    pub fn from_raw(raw: &str) -> Option<u32> {
        raw.trim().parse().ok()
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a pulse/heart pair.
///
/// `None` marks a value that is not an integer; either one being `None`
/// makes both statuses `Unknown`. The sentinel `0` is `Abnormal`.
pub fn classify(pulse: Option<u32>, heart: Option<u32>) -> (VitalStatus, VitalStatus) {
    match (pulse, heart) {
        (Some(p), Some(h)) => (VitalStatus::of(p), VitalStatus::of(h)),
        _ => (VitalStatus::Unknown, VitalStatus::Unknown),
    }
}

pub fn classify_sample(sample: &VitalsSample) -> (VitalStatus, VitalStatus) {
    classify(Some(sample.pulse), Some(sample.heart))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        for (bpm, expected) in [
            (0, VitalStatus::Abnormal),
            (59, VitalStatus::Abnormal),
            (60, VitalStatus::Normal),
            (80, VitalStatus::Normal),
            (100, VitalStatus::Normal),
            (101, VitalStatus::Abnormal),
            (u32::MAX, VitalStatus::Abnormal),
        ] {
            assert_eq!(classify(Some(bpm), Some(bpm)), (expected, expected), "bpm {bpm}");
        }
    }

    #[test]
    fn test_independent_statuses() {
        assert_eq!(
            classify(Some(72), Some(140)),
            (VitalStatus::Normal, VitalStatus::Abnormal)
        );
        assert_eq!(
            classify(Some(45), Some(99)),
            (VitalStatus::Abnormal, VitalStatus::Normal)
        );
    }

    #[test]
    fn test_sentinel_sample_is_abnormal() {
        let sample = VitalsSample::default();
        assert_eq!(
            classify_sample(&sample),
            (VitalStatus::Abnormal, VitalStatus::Abnormal)
        );
    }

    #[test]
    fn test_non_integer_input_is_unknown() {
        let pulse = VitalStatus::from_raw("seventy");
        let heart = VitalStatus::from_raw("80");
        assert_eq!(pulse, None);
        assert_eq!(
            classify(pulse, heart),
            (VitalStatus::Unknown, VitalStatus::Unknown)
        );
        assert_eq!(
            classify(Some(70), VitalStatus::from_raw("7.5")),
            (VitalStatus::Unknown, VitalStatus::Unknown)
        );
    }

    #[test]
    fn test_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&VitalStatus::Abnormal).unwrap(), "\"Abnormal\"");
        assert_eq!(VitalStatus::Unknown.to_string(), "Unknown");
    }
}
