//! Diagnostics: what went wrong, where, and how to show it.
//!
//! A [`Diagnostic`] is an error with an optional [`DiagnosticCode`], a
//! primary [`Span`] and any number of notes and help lines. A [`Handler`]
//! collects them while a file is processed, and [`Diagnostic::render`]
//! prints one against its [`SourceFile`].
//!
//! ```
//! use dan_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use dan_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(6, 7, 1, 7))
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use std::cell::RefCell;
use std::fmt;

use crate::span::{SourceFile, Span};
use builder::gutter_width;

/// A located error about a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// One-line summary.
    pub message: String,
    /// Primary location, or [`Span::DUMMY`] for file-wide problems.
    pub span: Span,
    /// Stable code, if any.
    pub code: Option<DiagnosticCode>,
    /// Context lines, printed as `= note:`.
    pub notes: Vec<String>,
    /// Suggestions, printed as `= help:`.
    pub helps: Vec<String>,
    /// Explicit excerpts. Empty means "derive one from `span`".
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// An error with no code, notes or excerpts.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Replace the code.
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Append a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Append a help line.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// `error[E1002]` or just `error`.
    fn header(&self) -> String {
        match self.code {
            Some(code) => format!("error[{}]", code),
            None => "error".to_string(),
        }
    }

    /// Render in the familiar compiler layout:
    ///
    /// ```text
    /// error[E1002]: unterminated string
    ///   --> app.dan:2:9
    ///     |
    ///   2 |   name: "unterminated
    ///     |         ^^^^^^^^^^^^^
    ///     = help: ...
    /// ```
    ///
    /// The location and excerpt are omitted when `span` has no line.
    /// With `color` the header is bold red.
    pub fn render(&self, file: &SourceFile, color: bool) -> String {
        let header = self.header();
        let mut out = if color {
            format!("\x1b[1;31m{}\x1b[0m\x1b[1m: {}\x1b[0m\n", header, self.message)
        } else {
            format!("{}: {}\n", header, self.message)
        };

        if self.span.has_location() {
            out.push_str(&format!("  --> {}:{}\n", file.name(), self.span));
        }

        let snippets = if self.snippets.is_empty() {
            SourceSnippet::from_span(file, self.span).into_iter().collect()
        } else {
            self.snippets.clone()
        };
        let width = snippets
            .iter()
            .map(|s| gutter_width(s.line_number))
            .max()
            .unwrap_or(3);

        if !snippets.is_empty() {
            out.push_str(&format!("{:>w$} |\n", "", w = width));
        }
        for snippet in &snippets {
            out.push_str(&snippet.format());
            out.push('\n');
        }
        let trailers = self
            .notes
            .iter()
            .map(|n| ("note", n))
            .chain(self.helps.iter().map(|h| ("help", h)));
        for (kind, text) in trailers {
            out.push_str(&format!("{:>w$} = {}: {}\n", "", kind, text, w = width));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.header(), self.message, self.span)
    }
}

/// Collects the diagnostics reported while one file is processed.
///
/// Interior mutability lets builders emit through a shared reference.
/// A handler is not `Sync`; parallel checks use one per file.
///
/// ```
/// use dan_util::diagnostic::{Diagnostic, Handler};
/// use dan_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("cannot read file", Span::DUMMY));
/// assert!(handler.has_errors());
/// assert_eq!(handler.take().len(), 1);
/// assert!(!handler.has_errors());
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// An empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `diagnostic`.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Whether anything was recorded.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Number of errors recorded.
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Copy of everything recorded so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drain the handler.
    pub fn take(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}
