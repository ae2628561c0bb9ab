//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use std::iter::FusedIterator;

use dan_util::Span;
use tracing::trace;

use super::delimiter::Frame;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_start;

/// Lexer for DAN source text.
///
/// A lexer is built for one source text and consumed once. Each call to
/// [`next_token`](Lexer::next_token) yields the next token; after the
/// `Eof` token or the first error it keeps returning `Eof`.
///
/// ```
/// use dan_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("port: 8080");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Key);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Colon);
/// assert_eq!(lexer.next_token().unwrap().text, "8080");
/// assert!(lexer.next_token().unwrap().is_eof());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,

    /// Delimiters opened and not yet closed, innermost last.
    pub(crate) frames: Vec<Frame>,

    /// Kind of the last token that was not a comment.
    pub(crate) last_significant: Option<TokenKind>,

    /// Set when the last significant token closed a table's column list.
    pub(crate) table_header_closed: bool,

    /// Whether the BOM (Byte Order Mark) has been checked.
    pub(crate) bom_checked: bool,

    /// Set once `Eof` or an error has been produced.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            frames: Vec::new(),
            last_significant: None,
            table_header_closed: false,
            bom_checked: false,
            finished: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips insignificant whitespace, then dispatches on the current
    /// character. Lexing stops at the first error; further calls return
    /// `Eof` at the position where lexing stopped.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        if self.finished {
            return Ok(self.eof_token());
        }

        let result = self.scan_token();
        match &result {
            Ok(token) => {
                trace!(
                    kind = %token.kind,
                    line = token.line(),
                    column = token.column(),
                    "lexed token"
                );
                if token.is_eof() {
                    self.finished = true;
                }
            },
            Err(_) => self.finished = true,
        }
        result
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.start_token();

        if let Some(row_break) = self.take_row_break() {
            return Ok(row_break);
        }

        if self.cursor.is_at_end() {
            return self.end_of_input();
        }

        let depth = self.frames.len();
        let kind = match self.cursor.current_char() {
            _ if self.at_comment_start() => self.lex_comment(),
            '"' => self.lex_string()?,
            ':' => {
                self.cursor.advance();
                TokenKind::Colon
            },
            ',' => {
                self.cursor.advance();
                TokenKind::Comma
            },
            '-' if self.cursor.peek_char(1).is_ascii_digit() => self.lex_number(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if is_ident_start(c) => self.lex_identifier(),
            c => self.lex_delimiter(c)?,
        };

        self.mark_row_content(depth, kind);
        match kind {
            TokenKind::Comment => {},
            TokenKind::ParenClose => self.last_significant = Some(kind),
            _ => {
                self.table_header_closed = false;
                self.last_significant = Some(kind);
            },
        }

        Ok(Token::new(
            kind,
            self.cursor.slice_from(self.token_start),
            self.token_span(),
        ))
    }

    fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    fn end_of_input(&mut self) -> Result<Token, LexError> {
        match self.frames.last() {
            Some(frame) => Err(LexError::UnbalancedDelimiter {
                found: None,
                span: self.cursor_point(),
                opener: Some(frame.open),
            }),
            None => Ok(self.eof_token()),
        }
    }

    fn eof_token(&self) -> Token {
        Token::new(TokenKind::Eof, "", self.cursor_point())
    }

    fn cursor_point(&self) -> Span {
        Span::point(self.cursor.position(), self.cursor.line(), self.cursor.column())
    }

    pub(crate) fn unexpected_character(&self, found: char) -> LexError {
        LexError::UnexpectedCharacter {
            found,
            span: Span::new(
                self.token_start,
                self.token_start + found.len_utf8(),
                self.token_start_line,
                self.token_start_column,
            ),
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Number of delimiters currently open.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    /// Yields tokens up to, but not including, `Eof`. An error is yielded
    /// once and ends the sequence.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            other => Some(other),
        }
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
