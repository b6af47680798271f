//! Domain layer - Core business logic
//!
//! Contains value objects, the transcript and segment algorithms, and domain errors.
//! This layer has no dependencies on external systems.

pub mod clock;
pub mod config;
pub mod error;
pub mod segment;
pub mod transcript;

// Re-export common types
pub use clock::{CalendarDate, ClockTime, Timestamp};
pub use config::AppConfig;
pub use error::*;
pub use segment::{FileSortKey, OutputLayout, SegmentName, SortKeySource};
pub use transcript::{TranscriptError, TranscriptProcessor, TranscriptUpdate};
