//! Token definitions for DAN.
//!
//! A [`Token`] pairs a [`TokenKind`] with the raw lexeme it was read from and
//! the [`Span`] it occupies in the source.

use std::fmt;

use dan_util::Span;
use serde::Serialize;

/// The classification of a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// `# ...` or `// ...` through the end of the line.
    Comment,
    /// A bare name followed by `:`, or a column name in a table header.
    Key,
    /// `:`
    Colon,
    /// A double-quoted string, quotes included.
    String,
    /// An integer, decimal, or dotted version such as `1.0.0`.
    Number,
    /// `true` or `false`.
    Boolean,
    /// Any other bare name.
    Identifier,
    /// `{`
    BlockOpen,
    /// `}`
    BlockClose,
    /// `[`
    ArrayOpen,
    /// `]`
    ArrayClose,
    /// The `table` keyword.
    TableKeyword,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `,`
    Comma,
    /// A line break separating two rows of a table.
    Newline,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns the name of this kind as written in diagnostics and tool output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Comment => "Comment",
            TokenKind::Key => "Key",
            TokenKind::Colon => "Colon",
            TokenKind::String => "String",
            TokenKind::Number => "Number",
            TokenKind::Boolean => "Boolean",
            TokenKind::Identifier => "Identifier",
            TokenKind::BlockOpen => "BlockOpen",
            TokenKind::BlockClose => "BlockClose",
            TokenKind::ArrayOpen => "ArrayOpen",
            TokenKind::ArrayClose => "ArrayClose",
            TokenKind::TableKeyword => "TableKeyword",
            TokenKind::ParenOpen => "ParenOpen",
            TokenKind::ParenClose => "ParenClose",
            TokenKind::Comma => "Comma",
            TokenKind::Newline => "Newline",
            TokenKind::Eof => "Eof",
        }
    }

    /// Returns true for single-character punctuation kinds.
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self,
            TokenKind::Colon
                | TokenKind::Comma
                | TokenKind::BlockOpen
                | TokenKind::BlockClose
                | TokenKind::ArrayOpen
                | TokenKind::ArrayClose
                | TokenKind::ParenOpen
                | TokenKind::ParenClose
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme with its position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// What the lexeme is.
    pub kind: TokenKind,
    /// The raw lexeme. Strings keep their quotes, comments their marker.
    pub text: String,
    /// Where the lexeme sits in the source.
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Line of the first character (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the first character (1-based, in characters).
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns true if this is the end-of-input marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

/// Looks up a reserved word.
///
/// Returns `None` for anything that should be classified as a plain
/// identifier.
///
/// ```
/// use dan_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("table"), Some(TokenKind::TableKeyword));
/// assert_eq!(keyword_from_ident("false"), Some(TokenKind::Boolean));
/// assert_eq!(keyword_from_ident("tables"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    match ident {
        "table" => Some(TokenKind::TableKeyword),
        "true" | "false" => Some(TokenKind::Boolean),
        _ => None,
    }
}
