//! Segment filename domain module
//!
//! Transcript segments are named either flat (`YYYYMMDD_HHMMSS_HHMMSS.txt`)
//! or nested (`YYYY/MM/DD/HHMMSS-HHMMSS.txt`).

mod layout;
mod segment_name;

pub use layout::{merged_file_name, OutputLayout};
pub use segment_name::{
    looks_like_flat_format, looks_like_nested_format, nested_day_directory, FileSortKey,
    SegmentName, SortKeySource,
};
