//! Domain error types

use thiserror::Error;

/// Error when parsing a time-of-day string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid time \"{input}\". Use HH:MM:SS (e.g. 18:06:13)")]
pub struct TimeParseError {
    pub input: String,
}

/// Error when parsing a calendar date string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date \"{input}\". Use YYYY-MM-DD (e.g. 2024-12-25)")]
pub struct DateParseError {
    pub input: String,
}

/// Error when a segment filename matches neither the flat nor the nested layout
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized transcript filename '{path}'")]
pub struct UnrecognizedFilenameError {
    pub path: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
