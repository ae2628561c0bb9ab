//! Errors raised by the source utilities.

use thiserror::Error;

/// A byte range could not be read from a [`SourceFile`](crate::SourceFile).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// `start` is past `end`.
    #[error("invalid range {start}..{end}")]
    InvalidRange {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },

    /// The range runs past the end of the text.
    #[error("range {start}..{end} is outside a {len}-byte file")]
    OutOfBounds {
        /// Length of the text in bytes
        len: usize,
        /// Requested start
        start: usize,
        /// Requested end
        end: usize,
    },

    /// An end of the range falls inside a multi-byte character.
    #[error("range {start}..{end} splits a character")]
    NotCharBoundary {
        /// Requested start
        start: usize,
        /// Requested end
        end: usize,
    },
}

/// Result alias for source lookups.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
