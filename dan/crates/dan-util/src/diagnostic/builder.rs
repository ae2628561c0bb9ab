//! Fluent construction of diagnostics and the source excerpts they show.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::span::{SourceFile, Span};

/// One source line with a column range to underline.
///
/// ```
/// use dan_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("name: \"oops", 1, 7, 12).with_label("string starts here");
/// assert_eq!(
///     snippet.format(),
///     "  1 | name: \"oops\n    |       ^^^^^ string starts here"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The line, without its terminator.
    pub line: String,
    /// 1-based line number.
    pub line_number: usize,
    /// First underlined column, 1-based.
    pub start_column: usize,
    /// Column after the last underlined one.
    pub end_column: usize,
    /// Text printed after the carets.
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Underline `start_column..end_column` of `line`.
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: None,
        }
    }

    /// Excerpt for `span`, cut at the end of its first line.
    ///
    /// `None` if the span has no location or its line is not in `file`.
    pub fn from_span(file: &SourceFile, span: Span) -> Option<Self> {
        let line = file.line_at(span.line as usize)?;
        let start = span.column as usize;
        let width = file
            .slice(span.start, span.end)
            .map(|text| text.chars().take_while(|&c| c != '\n').count())
            .unwrap_or(0);
        let end = (start + width).min(line.chars().count() + 1);
        Some(Self::new(line, span.line as usize, start, end))
    }

    /// Attach a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Two lines: the numbered source line and the caret line. A zero-width
    /// range still gets one caret.
    pub fn format(&self) -> String {
        let width = gutter_width(self.line_number);
        let carets = "^".repeat(self.end_column.saturating_sub(self.start_column).max(1));
        let mut out = format!(
            "{:>w$} | {}\n{:>w$} | {}{}",
            self.line_number,
            self.line,
            "",
            " ".repeat(self.start_column.saturating_sub(1)),
            carets,
            w = width
        );
        if let Some(label) = &self.label {
            out.push(' ');
            out.push_str(label);
        }
        out
    }
}

/// Width of the line-number column.
pub(crate) fn gutter_width(line_number: usize) -> usize {
    line_number.to_string().len().max(3)
}

/// Builds a [`Diagnostic`] step by step.
///
/// ```
/// use dan_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use dan_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("unexpected character '@'")
///     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
///     .span(Span::new(6, 7, 1, 7))
///     .help("quote the value if it contains punctuation")
///     .build();
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[must_use]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start an error with no location.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::error(message, Span::DUMMY),
        }
    }

    /// Set the code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Set the primary location.
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Append a note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Append a help line.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.diagnostic.helps.push(help.into());
        self
    }

    /// Show `snippet` instead of the excerpt derived from the span.
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.diagnostic.snippets.push(snippet);
        self
    }

    /// Finish.
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Finish and report to `handler`.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
