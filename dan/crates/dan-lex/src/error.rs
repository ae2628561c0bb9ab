//! Lexical errors.

use std::fmt;

use dan_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Span};
use thiserror::Error;

use crate::token::{Token, TokenKind};

/// The three bracket pairs DAN uses for nesting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `{ }`
    Block,
    /// `[ ]`
    Array,
    /// `( )`
    Paren,
}

impl Delimiter {
    /// Maps an opening character to its delimiter.
    pub fn from_open(c: char) -> Option<Self> {
        match c {
            '{' => Some(Delimiter::Block),
            '[' => Some(Delimiter::Array),
            '(' => Some(Delimiter::Paren),
            _ => None,
        }
    }

    /// Maps a closing character to its delimiter.
    pub fn from_close(c: char) -> Option<Self> {
        match c {
            '}' => Some(Delimiter::Block),
            ']' => Some(Delimiter::Array),
            ')' => Some(Delimiter::Paren),
            _ => None,
        }
    }

    /// The opening character.
    pub fn open_char(&self) -> char {
        match self {
            Delimiter::Block => '{',
            Delimiter::Array => '[',
            Delimiter::Paren => '(',
        }
    }

    /// The closing character.
    pub fn close_char(&self) -> char {
        match self {
            Delimiter::Block => '}',
            Delimiter::Array => ']',
            Delimiter::Paren => ')',
        }
    }

    /// Token kind produced for the opening character.
    pub fn open_kind(&self) -> TokenKind {
        match self {
            Delimiter::Block => TokenKind::BlockOpen,
            Delimiter::Array => TokenKind::ArrayOpen,
            Delimiter::Paren => TokenKind::ParenOpen,
        }
    }

    /// Token kind produced for the closing character.
    pub fn close_kind(&self) -> TokenKind {
        match self {
            Delimiter::Block => TokenKind::BlockClose,
            Delimiter::Array => TokenKind::ArrayClose,
            Delimiter::Paren => TokenKind::ParenClose,
        }
    }
}

/// An opening delimiter that is still waiting for its closer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenDelimiter {
    /// Which bracket pair.
    pub delimiter: Delimiter,
    /// Where the opening character is.
    pub span: Span,
}

/// Errors that stop a lexing pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A string without a closing quote before the end of its line.
    #[error("unterminated string starting at {}", .span)]
    UnterminatedString {
        /// From the opening quote to where scanning stopped.
        span: Span,
    },

    /// A closer with no matching opener, or an opener never closed.
    #[error("{}", describe_unbalanced(.found, .span, .opener))]
    UnbalancedDelimiter {
        /// The offending closer, or `None` when input ended with openers pending.
        found: Option<char>,
        /// Position of the closer, or of end of input.
        span: Span,
        /// The innermost pending opener, if any.
        opener: Option<OpenDelimiter>,
    },

    /// A character outside every recognized form.
    #[error("unexpected character {found:?} at {span}")]
    UnexpectedCharacter {
        /// The character.
        found: char,
        /// Its position.
        span: Span,
    },
}

fn describe_unbalanced(
    found: &Option<char>,
    span: &Span,
    opener: &Option<OpenDelimiter>,
) -> String {
    match (found, opener) {
        (Some(c), None) => format!("unbalanced delimiter '{}' at {} has no matching opener", c, span),
        (Some(c), Some(open)) => format!(
            "unbalanced delimiter '{}' at {} does not close '{}' opened at {}",
            c,
            span,
            open.delimiter.open_char(),
            open.span
        ),
        (None, Some(open)) => format!(
            "unbalanced delimiter '{}' opened at {} is never closed",
            open.delimiter.open_char(),
            open.span
        ),
        (None, None) => format!("unbalanced delimiter at {}", span),
    }
}

impl LexError {
    /// Primary position of the error.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span }
            | LexError::UnbalancedDelimiter { span, .. }
            | LexError::UnexpectedCharacter { span, .. } => *span,
        }
    }

    /// Stable diagnostic code.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::UnbalancedDelimiter { .. } => DiagnosticCode::E_LEXER_UNBALANCED_DELIMITER,
            LexError::UnexpectedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
        }
    }

    /// Converts the error into a diagnostic ready for rendering.
    ///
    /// ```
    /// use dan_lex::tokenize;
    /// use dan_util::DiagnosticCode;
    ///
    /// let err = tokenize("app }").unwrap_err();
    /// let diag = err.error.to_diagnostic();
    /// assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_UNBALANCED_DELIMITER));
    /// assert_eq!(diag.span.column, 5);
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LexError::UnterminatedString { span } => {
                DiagnosticBuilder::error("unterminated string")
                    .code(self.code())
                    .span(*span)
                    .help("add a closing '\"' before the end of the line")
                    .build()
            },
            LexError::UnbalancedDelimiter {
                found: Some(c),
                span,
                opener,
            } => {
                let builder = DiagnosticBuilder::error(format!("unbalanced delimiter '{}'", c))
                    .code(self.code())
                    .span(*span);
                match opener {
                    Some(open) => builder
                        .note(format!(
                            "'{}' opened at {} is still waiting for '{}'",
                            open.delimiter.open_char(),
                            open.span,
                            open.delimiter.close_char()
                        ))
                        .build(),
                    None => builder.note("no delimiter is open here").build(),
                }
            },
            LexError::UnbalancedDelimiter {
                found: None,
                span,
                opener,
            } => {
                let builder = DiagnosticBuilder::error("unclosed delimiter at end of input")
                    .code(self.code())
                    .span(*span);
                match opener {
                    Some(open) => builder
                        .note(format!(
                            "'{}' opened at {} is never closed",
                            open.delimiter.open_char(),
                            open.span
                        ))
                        .help(format!("add a closing '{}'", open.delimiter.close_char()))
                        .build(),
                    None => builder.build(),
                }
            },
            LexError::UnexpectedCharacter { found, span } => {
                DiagnosticBuilder::error(format!("unexpected character {:?}", found))
                    .code(self.code())
                    .span(*span)
                    .help("quote the value if it contains punctuation")
                    .build()
            },
        }
    }
}

/// A failed [`tokenize`](crate::tokenize) call.
///
/// Carries every token produced before the failure so callers can still
/// highlight the valid prefix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct TokenizeError {
    /// Why lexing stopped.
    #[source]
    pub error: LexError,
    /// Tokens lexed before the error, in order.
    pub tokens: Vec<Token>,
}

impl TokenizeError {
    /// Kinds of the partial tokens, handy for assertions and summaries.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.open_char(), self.close_char())
    }
}
