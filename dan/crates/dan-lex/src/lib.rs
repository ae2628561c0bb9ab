//! dan-lex - Lexical Analyzer for DAN (Data Advanced Notation)
//!
//! This crate turns DAN source text into a stream of classified tokens for
//! syntax highlighting or a downstream parser.
//!
//! # Example Usage
//!
//! ```
//! use dan_lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("app {\n  name: \"Test\"\n}").unwrap();
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Identifier,
//!         TokenKind::BlockOpen,
//!         TokenKind::Key,
//!         TokenKind::Colon,
//!         TokenKind::String,
//!         TokenKind::BlockClose,
//!         TokenKind::Eof,
//!     ]
//! );
//!
//! // Failures keep the tokens lexed before the error
//! let err = tokenize("app {\n  name: \"unterminated").unwrap_err();
//! assert_eq!(err.tokens.len(), 4);
//! assert_eq!((err.error.span().line, err.error.span().column), (2, 9));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`error`] - Lexical errors and their diagnostics
//! - [`unicode`] - Character classes for names and whitespace
//! - [`language`] - Language registration data for editor hosts
//! - [`highlight`] - Token kind to style mapping
//!
//! # Forms
//!
//! | Source | Tokens |
//! |---|---|
//! | `# note`, `// note` | `Comment` |
//! | `name: value` | `Key`, `Colon`, value |
//! | `"text"` | `String` |
//! | `42`, `-1.5`, `1.0.0` | `Number` |
//! | `true`, `false` | `Boolean` |
//! | `{ }` `[ ]` `( )` | `BlockOpen`/`BlockClose`, `ArrayOpen`/`ArrayClose`, `ParenOpen`/`ParenClose` |
//! | `table(a, b) [ ... ]` | `TableKeyword`, column `Key`s, rows separated by `Newline` |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod highlight;
pub mod language;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

use tracing::debug;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{Delimiter, LexError, OpenDelimiter, TokenizeError};
pub use highlight::{highlight, HighlightRange, HighlightStyle, Highlights};
pub use language::{is_dan_path, LanguageConfiguration, LANGUAGE_ID};
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};

/// Lexes a whole source text.
///
/// On success the returned tokens end with a single `Eof`. On failure the
/// error carries every token produced before it.
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        match lexer.next_token() {
            Ok(token) => {
                let done = token.is_eof();
                tokens.push(token);
                if done {
                    debug!(tokens = tokens.len(), bytes = source.len(), "tokenized source");
                    return Ok(tokens);
                }
            },
            Err(error) => {
                debug!(tokens = tokens.len(), %error, "tokenizing stopped");
                return Err(TokenizeError { error, tokens });
            },
        }
    }
}
