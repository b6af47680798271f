//! transcript-stamp - anchor transcript offsets in wall-clock time
//!
//! This crate rewrites the relative `HH:MM:SS` offsets that prefix lines of a
//! recording transcript into wall-clock times, files the result under a name
//! derived from its first and last timestamps, and merges such segment files
//! into one transcript per day.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Clock value objects, the transcript and segment-name algorithms, and errors
//! - **Application**: Update and merge use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (local files, glob, XDG config)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
