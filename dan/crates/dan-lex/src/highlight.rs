//! Token kind to style mapping for syntax highlighting.
//!
//! Each [`TokenKind`] has a TextMate-style scope for hosts with themes and a
//! coarse [`HighlightStyle`] for simpler renderers such as terminals.

use std::fmt;

use serde::Serialize;

use crate::error::LexError;
use crate::language::SCOPE_NAME;
use crate::lexer::Lexer;
use crate::token::TokenKind;

/// Coarse highlighting class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum HighlightStyle {
    /// Comments.
    Comment,
    /// Keys and table column names.
    Key,
    /// String literals.
    String,
    /// Numbers and versions.
    Number,
    /// `true` / `false`.
    Boolean,
    /// `table`.
    Keyword,
    /// Brackets, colons and commas.
    Punctuation,
    /// Bare identifiers and anything else.
    Plain,
}

impl HighlightStyle {
    /// ANSI SGR parameters for terminal output, `None` for unstyled text.
    pub fn ansi_code(&self) -> Option<&'static str> {
        match self {
            HighlightStyle::Comment => Some("90"),
            HighlightStyle::Key => Some("34"),
            HighlightStyle::String => Some("32"),
            HighlightStyle::Number => Some("33"),
            HighlightStyle::Boolean => Some("35"),
            HighlightStyle::Keyword => Some("1;35"),
            HighlightStyle::Punctuation => Some("2"),
            HighlightStyle::Plain => None,
        }
    }

    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            HighlightStyle::Comment => "comment",
            HighlightStyle::Key => "key",
            HighlightStyle::String => "string",
            HighlightStyle::Number => "number",
            HighlightStyle::Boolean => "boolean",
            HighlightStyle::Keyword => "keyword",
            HighlightStyle::Punctuation => "punctuation",
            HighlightStyle::Plain => "plain",
        }
    }
}

impl fmt::Display for HighlightStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TokenKind {
    /// TextMate scope for this kind.
    pub fn scope(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment.line.dan",
            TokenKind::Key => "entity.name.tag.key.dan",
            TokenKind::Colon => "punctuation.separator.key-value.dan",
            TokenKind::String => "string.quoted.double.dan",
            TokenKind::Number => "constant.numeric.dan",
            TokenKind::Boolean => "constant.language.boolean.dan",
            TokenKind::Identifier => "variable.other.dan",
            TokenKind::BlockOpen => "punctuation.section.block.begin.dan",
            TokenKind::BlockClose => "punctuation.section.block.end.dan",
            TokenKind::ArrayOpen => "punctuation.section.array.begin.dan",
            TokenKind::ArrayClose => "punctuation.section.array.end.dan",
            TokenKind::TableKeyword => "keyword.other.table.dan",
            TokenKind::ParenOpen => "punctuation.section.parens.begin.dan",
            TokenKind::ParenClose => "punctuation.section.parens.end.dan",
            TokenKind::Comma => "punctuation.separator.comma.dan",
            TokenKind::Newline => "punctuation.separator.row.dan",
            TokenKind::Eof => SCOPE_NAME,
        }
    }

    /// Coarse style for this kind.
    pub fn style(&self) -> HighlightStyle {
        match self {
            TokenKind::Comment => HighlightStyle::Comment,
            TokenKind::Key => HighlightStyle::Key,
            TokenKind::String => HighlightStyle::String,
            TokenKind::Number => HighlightStyle::Number,
            TokenKind::Boolean => HighlightStyle::Boolean,
            TokenKind::TableKeyword => HighlightStyle::Keyword,
            kind if kind.is_punctuation() => HighlightStyle::Punctuation,
            _ => HighlightStyle::Plain,
        }
    }
}

/// A styled byte range of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightRange {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// The token kind the range came from.
    pub kind: TokenKind,
    /// How to draw it.
    pub style: HighlightStyle,
}

/// Result of highlighting a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlights {
    /// Ranges for every visible token lexed, in source order.
    pub ranges: Vec<HighlightRange>,
    /// The error that stopped lexing, if any. Its span marks where
    /// highlighting ends.
    pub error: Option<LexError>,
}

impl Highlights {
    /// True when the whole document was lexed.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Byte range of the error region, if lexing failed.
    pub fn error_range(&self) -> Option<(usize, usize)> {
        self.error.as_ref().map(|e| {
            let span = e.span();
            (span.start, span.end)
        })
    }
}

/// Highlights `source`, keeping the valid prefix when lexing fails.
///
/// ```
/// use dan_lex::{highlight, HighlightStyle};
///
/// let result = highlight("port: 80 }");
/// let styles: Vec<_> = result.ranges.iter().map(|r| r.style).collect();
/// assert_eq!(
///     styles,
///     vec![HighlightStyle::Key, HighlightStyle::Punctuation, HighlightStyle::Number]
/// );
/// assert_eq!(result.error_range(), Some((9, 10)));
/// ```
pub fn highlight(source: &str) -> Highlights {
    let mut ranges = Vec::new();
    let mut error = None;

    for item in Lexer::new(source) {
        match item {
            Ok(token) if token.kind == TokenKind::Newline => {},
            Ok(token) => ranges.push(HighlightRange {
                start: token.span.start,
                end: token.span.end,
                kind: token.kind,
                style: token.kind.style(),
            }),
            Err(e) => error = Some(e),
        }
    }

    Highlights { ranges, error }
}
