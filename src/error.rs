//! Error types for neotree
//!
//! Every variant is a user-facing failure: the binary prints the message
//! prefixed with `ntree: ` and exits with status 1.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for neotree operations
pub type NtreeResult<T> = Result<T, NtreeError>;

/// Main error type for neotree operations
#[derive(Error, Debug)]
pub enum NtreeError {
    /// Root argument does not name an existing directory
    #[error("'{directory}' is not a directory")]
    NotADirectory { directory: String },

    /// `-L` value below 1
    #[error("Invalid level, must be greater than 0.")]
    InvalidLevel,

    /// `--budget` value below 1
    #[error("--budget must be a positive integer")]
    InvalidBudget,

    /// Two flags that cannot be combined
    #[error("{0}")]
    IncompatibleOptions(String),

    /// `--preset` names no known preset
    #[error("Unknown preset '{name}'. Known presets: {known}")]
    UnknownPreset { name: String, known: String },

    /// Command-line parsing failed
    #[error("{0}")]
    Usage(#[from] clap::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// Output file could not be written
    #[error("cannot write to '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NtreeError {
    pub(crate) fn incompatible(message: impl Into<String>) -> Self {
        Self::IncompatibleOptions(message.into())
    }
}
