//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! backed by the local filesystem, the `glob` crate and XDG config files.

pub mod config;
pub mod patterns;
pub mod storage;

// Re-export adapters
pub use config::XdgConfigStore;
pub use patterns::GlobPatternExpander;
pub use storage::LocalTranscriptStore;
