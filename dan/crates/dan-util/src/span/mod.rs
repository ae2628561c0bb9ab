//! Source positions.
//!
//! A [`Span`] is a byte range plus the 1-based line and column where it
//! starts. Columns count characters, so a span after `é` is one column to
//! the right of it, not two. [`SourceFile`] maps those lines back to text.
//!
//! ```
//! use dan_util::span::Span;
//!
//! let key = Span::new(0, 4, 1, 1);
//! assert_eq!(key.len(), 4);
//! assert_eq!(key.to_string(), "1:1");
//!
//! let eof = Span::point(12, 2, 5);
//! assert!(eof.is_empty());
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::fmt;

/// Byte range of a lexeme and the position it starts at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First byte.
    pub start: usize,
    /// One past the last byte.
    pub end: usize,
    /// Line of `start`, 1-based. Zero means "no location".
    pub line: u32,
    /// Column of `start` in characters, 1-based.
    pub column: u32,
}

impl Span {
    /// A span with no location, for diagnostics about a whole file.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Creates a span covering `start..end` that begins at `line:column`.
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Zero-width span at `offset`.
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// True when the span covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Width in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True when the span carries a real position.
    #[inline]
    pub fn has_location(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
