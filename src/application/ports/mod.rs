//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod patterns;
pub mod store;

// Re-export common types
pub use config::ConfigStore;
pub use patterns::{PatternError, PatternExpander};
pub use store::{StoreError, TranscriptStore};
