//! Errors surfaced by `dant` commands.

use dan_lex::LexError;
use thiserror::Error;

/// Everything a command can fail with.
#[derive(Error, Debug)]
pub enum DantError {
    /// `dant.toml` is missing, unreadable or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An input could not be read or listed.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Bad arguments, or a check that found problems.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A document failed to lex.
    #[error("{path}: {source}")]
    Lex {
        /// The offending document.
        path: String,
        /// What went wrong.
        #[source]
        source: LexError,
    },

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand used throughout the binary.
pub type Result<T> = std::result::Result<T, DantError>;
