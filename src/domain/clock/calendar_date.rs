//! Calendar date value object

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};

use super::parse_digits;
use crate::domain::error::DateParseError;

/// A calendar day (YYYY-MM-DD) without timezone.
///
/// Construction only checks `month` in 1..=12 and `day` in 1..=31; month
/// lengths are enforced by [`CalendarDate::checked_add_days`]. Dates read from
/// flat segment filenames skip even that check so that ordering works on the
/// raw digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: u32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Create a date, rejecting month/day values outside their nominal range
    pub const fn new(year: u32, month: u32, day: u32) -> Option<Self> {
        if year > 9999 || month < 1 || month > 12 || day < 1 || day > 31 {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Parse the compact `YYYYMMDD` form used in flat segment filenames.
    /// Any eight digits are accepted.
    pub fn from_compact(value: &str) -> Option<Self> {
        if value.len() != 8 {
            return None;
        }
        Some(Self {
            year: parse_digits(value.get(0..4)?, 4)?,
            month: parse_digits(value.get(4..6)?, 2)?,
            day: parse_digits(value.get(6..8)?, 2)?,
        })
    }

    pub const fn year(&self) -> u32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Add whole days, rolling over month and year boundaries.
    ///
    /// Returns `None` when the month is not a real month or the result leaves
    /// the supported calendar range.
    pub fn checked_add_days(self, days: u64) -> Option<Self> {
        let year = i32::try_from(self.year).ok()?;
        let first_of_month = NaiveDate::from_ymd_opt(year, self.month, 1)?;
        let offset = u64::from(self.day.checked_sub(1)?).checked_add(days)?;
        let shifted = first_of_month.checked_add_days(Days::new(offset))?;

        Self::new(u32::try_from(shifted.year()).ok()?, shifted.month(), shifted.day())
    }

    /// Format as `YYYYMMDD`
    pub fn compact(&self) -> String {
        format!("{:04}{:02}{:02}", self.year, self.month, self.day)
    }

    /// Directory components for the nested layout: `YYYY`, `MM`, `DD`
    pub fn nested_components(&self) -> [String; 3] {
        [
            format!("{:04}", self.year),
            format!("{:02}", self.month),
            format!("{:02}", self.day),
        ]
    }
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    /// Parse an exact `YYYY-MM-DD` string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || DateParseError {
            input: s.to_string(),
        };

        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(err());
        }

        let year = s.get(0..4).and_then(|v| parse_digits(v, 4)).ok_or_else(err)?;
        let month = s.get(5..7).and_then(|v| parse_digits(v, 2)).ok_or_else(err)?;
        let day = s.get(8..10).and_then(|v| parse_digits(v, 2)).ok_or_else(err)?;

        Self::new(year, month, day).ok_or_else(err)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
