//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod merge;
pub mod ports;
pub mod update;

#[cfg(test)]
pub(crate) mod testing;

// Re-export use cases
pub use merge::{MergeError, MergeInput, MergeOutput, MergeSegmentsUseCase};
pub use update::{UpdateError, UpdateInput, UpdateOutput, UpdateTranscriptUseCase};
