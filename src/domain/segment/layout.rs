//! Output path construction for adjusted and merged transcripts

use std::path::{Path, PathBuf};

use crate::domain::clock::{CalendarDate, Timestamp};

/// Where an adjusted transcript is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLayout {
    /// `<output_dir>/YYYY/MM/DD/HHMMSS-HHMMSS.txt`
    Nested { output_dir: PathBuf },
    /// `<working_dir>/YYYYMMDD_HHMMSS_HHMMSS.txt`
    Flat { working_dir: PathBuf },
}

impl OutputLayout {
    /// Path for a segment spanning `first`..`last`.
    /// The date comes from `last`, so segments crossing midnight land on the later day.
    pub fn segment_path(&self, first: &Timestamp, last: &Timestamp) -> PathBuf {
        let date = last.date();
        let start = first.time().compact();
        let end = last.time().compact();

        match self {
            Self::Nested { output_dir } => {
                let [year, month, day] = date.nested_components();
                output_dir
                    .join(year)
                    .join(month)
                    .join(day)
                    .join(format!("{start}-{end}.txt"))
            }
            Self::Flat { working_dir } => {
                working_dir.join(format!("{}_{start}_{end}.txt", date.compact()))
            }
        }
    }
}

/// `YYYY-MM-DD.txt` inside `dir`
pub fn merged_file_name(dir: &Path, date: CalendarDate) -> PathBuf {
    dir.join(format!("{date}.txt"))
}
