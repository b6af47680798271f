//! Transcript storage adapters

mod local;

pub use local::LocalTranscriptStore;
