use std::fmt;
use std::sync::Arc;

use crate::error::{SourceError, SourceResult};

/// A named document and the byte offset of each of its lines.
///
/// ```
/// use dan_util::span::SourceFile;
///
/// let file = SourceFile::new("app.dan", "app {\r\n}");
/// assert_eq!(file.name(), "app.dan");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_at(1), Some("app {"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    name: String,
    text: Arc<str>,
    /// Offset of the first byte of each line; always starts with 0.
    lines: Arc<[usize]>,
}

impl SourceFile {
    /// Indexes `text` under the display name `name`.
    pub fn new(name: impl Into<String>, text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let lines = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            name: name.into(),
            text,
            lines,
        }
    }

    /// Display name, usually the path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of lines. Empty text has one empty line.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line `line` (1-based) without its `\n` or `\r\n`.
    pub fn line_at(&self, line: usize) -> Option<&str> {
        let start = *self.lines.get(line.checked_sub(1)?)?;
        let end = self.lines.get(line).copied().unwrap_or(self.text.len());
        Some(self.text[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Text of `start..end`, checked against the file length and char
    /// boundaries.
    pub fn slice(&self, start: usize, end: usize) -> SourceResult<&str> {
        if start > end {
            return Err(SourceError::InvalidRange { start, end });
        }
        if end > self.text.len() {
            return Err(SourceError::OutOfBounds {
                len: self.text.len(),
                start,
                end,
            });
        }
        self.text
            .get(start..end)
            .ok_or(SourceError::NotCharBoundary { start, end })
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("bytes", &self.text.len())
            .field("lines", &self.line_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_at() {
        let file = SourceFile::new("t.dan", "one\r\ntwo\nthree");
        assert_eq!(file.line_count(), 3);
        assert_eq!(file.line_at(0), None);
        assert_eq!(file.line_at(1), Some("one"));
        assert_eq!(file.line_at(2), Some("two"));
        assert_eq!(file.line_at(3), Some("three"));
        assert_eq!(file.line_at(4), None);
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let file = SourceFile::new("t.dan", "a: 1\n");
        assert_eq!(file.line_count(), 2);
        assert_eq!(file.line_at(2), Some(""));
    }

    #[test]
    fn test_slice() {
        let file = SourceFile::new("t.dan", "name: \"x\"");
        assert_eq!(file.slice(0, 4), Ok("name"));
        assert_eq!(
            file.slice(4, 2),
            Err(SourceError::InvalidRange { start: 4, end: 2 })
        );
        assert_eq!(
            file.slice(0, 50),
            Err(SourceError::OutOfBounds {
                len: 9,
                start: 0,
                end: 50
            })
        );
    }

    #[test]
    fn test_slice_inside_multibyte_char() {
        let file = SourceFile::new("t.dan", "é");
        assert_eq!(
            file.slice(0, 1),
            Err(SourceError::NotCharBoundary { start: 0, end: 1 })
        );
    }

    #[test]
    fn test_debug_omits_text() {
        let file = SourceFile::new("t.dan", "secret: 1");
        let debug = format!("{:?}", file);
        assert!(debug.contains("t.dan"));
        assert!(!debug.contains("secret"));
    }
}
