//! Transcript domain module

mod processor;

pub use processor::{TranscriptError, TranscriptProcessor, TranscriptUpdate, TIMESTAMP_WIDTH};
