//! Clock-time representation for check-in/check-out and threshold values.
//!
//! Attendance data arrives as `"HH:MM"` strings in 24-hour local time, often
//! empty and occasionally malformed. [`TimeOfDay`] keeps the minute-of-day as
//! a single integer so threshold comparisons are plain integer comparisons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// A clock time as minutes since midnight (0..1440).
///
/// Ordering follows the clock, so `"08:31" > "08:30"` holds at minute
/// granularity — the unit every lateness rule is defined in.
///
/// # Example
///
/// ```
/// use attendance_engine::models::TimeOfDay;
///
/// let cutoff: TimeOfDay = "08:30".parse().unwrap();
/// let arrival = TimeOfDay::parse_opt("08:45").unwrap();
/// assert!(arrival > cutoff);
/// assert_eq!(arrival.to_string(), "08:45");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time from hour and minute components.
    ///
    /// Returns `None` if the hour is 24 or more or the minute is 60 or more.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self((hour * 60 + minute) as u16))
        } else {
            None
        }
    }

    /// Leniently parses an `"HH:MM"` (or `"H:MM"`) string.
    ///
    /// Surrounding whitespace is tolerated. Anything else — empty strings,
    /// missing colons, out-of-range components, stray characters — yields
    /// `None`. Attendance fields go through this path so that bad data
    /// degrades to "no time recorded" instead of an error.
    pub fn parse_opt(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let (hour_part, minute_part) = trimmed.split_once(':')?;
        if hour_part.is_empty() || minute_part.len() != 2 {
            return None;
        }
        let hour: u32 = hour_part.parse().ok()?;
        let minute: u32 = minute_part.parse().ok()?;
        Self::from_hm(hour, minute)
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    /// The hour component (0..24).
    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    /// The minute component (0..60).
    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_opt(s).ok_or_else(|| EngineError::InvalidTime {
            value: s.to_string(),
        })
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
