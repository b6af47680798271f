//! Date + time value object

use std::fmt;

use super::{CalendarDate, ClockTime};

/// A naive date and time.
///
/// Ordering is lexicographic over (year, month, day, hours, minutes, seconds),
/// which the derived `Ord` gives through field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    date: CalendarDate,
    time: ClockTime,
}

impl Timestamp {
    pub const fn new(date: CalendarDate, time: ClockTime) -> Self {
        Self { date, time }
    }

    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    pub const fn time(&self) -> ClockTime {
        self.time
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}
