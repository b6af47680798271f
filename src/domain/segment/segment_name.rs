//! Segment filename recognition and sort keys

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::domain::clock::{parse_digits, CalendarDate, ClockTime};
use crate::domain::error::UnrecognizedFilenameError;

/// Which filename layout a segment was recognized from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKeySource {
    /// `YYYYMMDD_HHMMSS_HHMMSS`
    Flat,
    /// `HHMMSS-HHMMSS` inside a dated directory
    Nested,
}

/// Chronological ordering key for a segment file.
///
/// Dated keys order before undated ones; within each group keys compare by
/// date (when present) and then start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileSortKey {
    pub date: Option<CalendarDate>,
    pub start: ClockTime,
}

impl Ord for FileSortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.date, other.date) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.start.cmp(&other.start)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.start.cmp(&other.start),
        }
    }
}

impl PartialOrd for FileSortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A segment filename resolved into its layout, date and time span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentName {
    pub source: SortKeySource,
    pub date: Option<CalendarDate>,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl SegmentName {
    /// Recognize a segment path. Flat names are tried before nested ones.
    pub fn from_path(path: &Path) -> Result<Self, UnrecognizedFilenameError> {
        let unrecognized = || UnrecognizedFilenameError {
            path: path.display().to_string(),
        };

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(unrecognized)?;

        if looks_like_flat_format(stem) {
            return Self::parse_flat(stem).ok_or_else(unrecognized);
        }

        if looks_like_nested_format(stem) {
            return Self::parse_nested(path, stem).ok_or_else(unrecognized);
        }

        Err(unrecognized())
    }

    fn parse_flat(stem: &str) -> Option<Self> {
        let mut parts = stem.split('_');
        let date = CalendarDate::from_compact(parts.next()?)?;
        let start = ClockTime::from_compact(parts.next()?)?;
        let end = ClockTime::from_compact(parts.next()?)?;

        Some(Self {
            source: SortKeySource::Flat,
            date: Some(date),
            start,
            end,
        })
    }

    fn parse_nested(path: &Path, stem: &str) -> Option<Self> {
        let (start, end) = stem.split_once('-')?;

        Some(Self {
            source: SortKeySource::Nested,
            date: nested_day_directory(path).map(|(_, date)| date),
            start: ClockTime::from_compact(start)?,
            end: ClockTime::from_compact(end)?,
        })
    }

    pub fn sort_key(&self) -> FileSortKey {
        FileSortKey {
            date: self.date,
            start: self.start,
        }
    }
}

/// Whether a bare name has the flat shape: 8, 6 and 6 digits joined by `_`
pub fn looks_like_flat_format(name: &str) -> bool {
    let parts: Vec<&str> = name.split('_').collect();
    parts.len() == 3
        && is_digits(parts[0], 8)
        && is_digits(parts[1], 6)
        && is_digits(parts[2], 6)
}

/// Whether a bare name has the nested shape: 6 and 6 digits joined by `-`
pub fn looks_like_nested_format(name: &str) -> bool {
    let parts: Vec<&str> = name.split('-').collect();
    parts.len() == 2 && is_digits(parts[0], 6) && is_digits(parts[1], 6)
}

fn is_digits(value: &str, width: usize) -> bool {
    value.len() == width && value.bytes().all(|b| b.is_ascii_digit())
}

/// Recover the day directory and its date from a segment path.
///
/// Accepts a parent named `YYYY-MM-DD` or a `YYYY/MM/DD` directory chain.
pub fn nested_day_directory(path: &Path) -> Option<(PathBuf, CalendarDate)> {
    let day_dir = path.parent()?;
    let day_name = day_dir.file_name()?.to_str()?;

    if let Ok(date) = day_name.parse::<CalendarDate>() {
        return Some((day_dir.to_path_buf(), date));
    }

    let month_dir = day_dir.parent()?;
    let year_dir = month_dir.parent()?;
    let month_name = month_dir.file_name()?.to_str()?;
    let year_name = year_dir.file_name()?.to_str()?;

    let date = CalendarDate::new(
        parse_digits(year_name, 4)?,
        parse_digits(month_name, 2)?,
        parse_digits(day_name, 2)?,
    )?;

    Some((day_dir.to_path_buf(), date))
}
