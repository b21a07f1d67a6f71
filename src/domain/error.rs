//! Domain error types

use std::path::PathBuf;

use thiserror::Error;

/// Error when parsing a clip duration
#[derive(Debug, Clone, Error)]
#[error("Invalid duration: \"{input}\". Expected a positive number of milliseconds (e.g., 10000)")]
pub struct ClipDurationParseError {
    pub input: String,
}

/// Error when configuration fails.
/// Every variant is fatal at startup.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Cannot create/access outdir '{}': {reason}", path.display())]
    OutputDir { path: PathBuf, reason: String },
}
