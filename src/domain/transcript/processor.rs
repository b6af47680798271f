//! Relative-to-absolute timestamp adjustment

use thiserror::Error;

use crate::domain::clock::{CalendarDate, ClockTime, Timestamp};

/// Width of the leading `HH:MM:SS` field on a timestamped line
pub const TIMESTAMP_WIDTH: usize = 8;

/// Transcript adjustment errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    #[error("No timestamped lines were found in the input file")]
    NoTimestamps,

    #[error("Adjusted timestamps run past the supported calendar range (base date {0})")]
    DateOutOfRange(CalendarDate),
}

/// Result of adjusting one transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptUpdate {
    /// Rewritten transcript text
    pub body: String,
    /// First adjusted timestamp in file order
    pub first_timestamp: Timestamp,
    /// Last adjusted timestamp in file order (not necessarily the latest)
    pub last_timestamp: Timestamp,
    /// Some timestamp went backwards relative to the one before it
    pub has_out_of_order_timestamps: bool,
}

/// Rewrites transcript offsets (elapsed time since 00:00:00) into wall-clock times
pub struct TranscriptProcessor;

impl TranscriptProcessor {
    /// Anchor every leading `HH:MM:SS` offset at `base_time` on `base_date`.
    ///
    /// Lines without a valid leading timestamp pass through untouched, as does
    /// everything after the first eight characters of a timestamped line.
    pub fn adjust(
        contents: &str,
        base_time: ClockTime,
        base_date: CalendarDate,
    ) -> Result<TranscriptUpdate, TranscriptError> {
        let (text, trailing_newline) = match contents.strip_suffix('\n') {
            Some(stripped) => (stripped, true),
            None => (contents, false),
        };

        let mut adjusted_lines = Vec::new();
        let mut first_timestamp: Option<Timestamp> = None;
        let mut last_timestamp: Option<Timestamp> = None;
        let mut has_out_of_order_timestamps = false;

        for line in text.split('\n') {
            let Some((relative, rest)) = parse_timestamp_line(line) else {
                adjusted_lines.push(line.to_string());
                continue;
            };

            let adjusted = apply_offset(base_time, base_date, relative)?;
            if let Some(previous) = last_timestamp {
                if adjusted < previous {
                    has_out_of_order_timestamps = true;
                }
            }
            first_timestamp.get_or_insert(adjusted);
            last_timestamp = Some(adjusted);

            adjusted_lines.push(format!("{}{}", adjusted.time(), rest));
        }

        let first_timestamp = first_timestamp.ok_or(TranscriptError::NoTimestamps)?;
        let last_timestamp = last_timestamp.unwrap_or(first_timestamp);

        let mut body = adjusted_lines.join("\n");
        if trailing_newline {
            body.push('\n');
        }

        Ok(TranscriptUpdate {
            body,
            first_timestamp,
            last_timestamp,
            has_out_of_order_timestamps,
        })
    }
}

/// Split a line into its leading offset and the untouched remainder
fn parse_timestamp_line(line: &str) -> Option<(ClockTime, &str)> {
    let head = line.get(..TIMESTAMP_WIDTH)?;
    let time = head.parse::<ClockTime>().ok()?;
    Some((time, &line[TIMESTAMP_WIDTH..]))
}

fn apply_offset(
    base_time: ClockTime,
    base_date: CalendarDate,
    relative: ClockTime,
) -> Result<Timestamp, TranscriptError> {
    let total = u64::from(base_time.as_seconds()) + u64::from(relative.as_seconds());
    let (time, days_overflow) = ClockTime::from_seconds_with_overflow(total);

    let date = if days_overflow > 0 {
        base_date
            .checked_add_days(days_overflow)
            .ok_or(TranscriptError::DateOutOfRange(base_date))?
    } else {
        base_date
    };

    Ok(Timestamp::new(date, time))
}
