//! Time-of-day value object

use std::fmt;
use std::str::FromStr;

use super::parse_digits;
use crate::domain::error::TimeParseError;

/// Number of seconds in one calendar day
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Value object representing a wall-clock time (HH:MM:SS).
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl ClockTime {
    /// 00:00:00
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Create a time, rejecting out-of-range fields
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        if hours > 23 || minutes > 59 || seconds > 59 {
            return None;
        }
        Some(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Split a total second count into a time of day plus whole days of overflow.
    ///
    /// Totals of a day or more wrap around midnight; the number of wraps is
    /// returned alongside the time.
    pub const fn from_seconds_with_overflow(total: u64) -> (Self, u64) {
        let per_day = SECONDS_PER_DAY as u64;
        let days = total / per_day;
        let remainder = (total % per_day) as u32;
        let time = Self {
            hours: remainder / 3600,
            minutes: (remainder % 3600) / 60,
            seconds: remainder % 60,
        };
        (time, days)
    }

    /// Parse the compact `HHMMSS` form used in segment filenames
    pub fn from_compact(value: &str) -> Option<Self> {
        if value.len() != 6 {
            return None;
        }
        let hours = parse_digits(value.get(0..2)?, 2)?;
        let minutes = parse_digits(value.get(2..4)?, 2)?;
        let seconds = parse_digits(value.get(4..6)?, 2)?;
        Self::new(hours, minutes, seconds)
    }

    pub const fn hours(&self) -> u32 {
        self.hours
    }

    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Seconds elapsed since midnight (0..86399)
    pub const fn as_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// Format as `HHMMSS`
    pub fn compact(&self) -> String {
        format!("{:02}{:02}{:02}", self.hours, self.minutes, self.seconds)
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    /// Parse an exact `HH:MM:SS` string. No surrounding whitespace is allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || TimeParseError {
            input: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
            return Err(err());
        }

        let hours = s.get(0..2).and_then(|v| parse_digits(v, 2)).ok_or_else(err)?;
        let minutes = s.get(3..5).and_then(|v| parse_digits(v, 2)).ok_or_else(err)?;
        let seconds = s.get(6..8).and_then(|v| parse_digits(v, 2)).ok_or_else(err)?;

        Self::new(hours, minutes, seconds).ok_or_else(err)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
