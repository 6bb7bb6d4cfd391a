use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::SchedulingError;

/// Wall-clock time of day, stored as minutes from midnight (0..=1439).
///
/// Parses from and serializes to the `"HH:MM"` form used throughout the
/// event API. Construction is validating: out-of-range hours or minutes
/// are rejected at the ingestion boundary so the scheduling algorithms
/// never see a malformed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    /// Create from an hour (0-23) and minute (0-59).
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, SchedulingError> {
        if hour > 23 || minute > 59 {
            return Err(SchedulingError::InvalidTime(format!(
                "{:02}:{:02} is out of range",
                hour, minute
            )));
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(&self) -> u32 {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0 / 60
    }

    pub fn minute(&self) -> u32 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = SchedulingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hours, minutes) = s.split_once(':').ok_or_else(|| {
            SchedulingError::InvalidTime(format!("'{}' is not of the form HH:MM", s))
        })?;
        let hour: u32 = hours
            .parse()
            .map_err(|_| SchedulingError::InvalidTime(format!("'{}' has a non-numeric hour", s)))?;
        let minute: u32 = minutes.parse().map_err(|_| {
            SchedulingError::InvalidTime(format!("'{}' has a non-numeric minute", s))
        })?;
        Self::from_hm(hour, minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Half-open minute interval `[start, end)` within a single calendar date.
///
/// Derived from an event's start time and duration, never stored. The
/// half-open convention means a pair of back-to-back events (one ending
/// exactly when the next starts) does not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    /// Start, minutes from midnight.
    pub start: u32,
    /// End (exclusive), minutes from midnight.
    pub end: u32,
}

impl Interval {
    /// `duration_minutes` is validated upstream (`Event::new` caps it at
    /// one day), so `start + duration` stays well below `u32::MAX`.
    pub fn new(start: TimeOfDay, duration_minutes: u32) -> Self {
        let start = start.minutes_from_midnight();
        Self {
            start,
            end: start + duration_minutes,
        }
    }

    /// Strict intersection of two half-open intervals.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod time_tests;
