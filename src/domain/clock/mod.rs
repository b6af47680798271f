//! Time and date primitives
//!
//! Naive (zone-less) value objects used by the transcript adjuster and the
//! segment filename parser.

mod calendar_date;
mod time_of_day;
mod timestamp;

pub use calendar_date::CalendarDate;
pub use time_of_day::{ClockTime, SECONDS_PER_DAY};
pub use timestamp::Timestamp;

/// Parse a fixed-width run of ASCII digits.
///
/// Unlike `str::parse`, this rejects signs and whitespace.
pub(crate) fn parse_digits(value: &str, width: usize) -> Option<u32> {
    if value.len() != width || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
