//! Delimiter tracking.
//!
//! Every opener is pushed on a stack and popped by its matching closer. The
//! stack also records which frames belong to a table literal:
//!
//! ```text
//! users: table(id, name) [
//!              ^^^^^^^^^ TableColumns: names lex as keys
//!                        ^ TableRows: line breaks between rows become Newline
//! ```
//!
//! A `Newline` is only emitted between two rows. Breaks before the first row,
//! after the last one, or on comment-only lines produce nothing.

use dan_util::Span;

use crate::error::{Delimiter, LexError, OpenDelimiter};
use crate::token::{Token, TokenKind};
use crate::Lexer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FrameRole {
    Nested,
    TableColumns,
    TableRows,
}

#[derive(Clone, Debug)]
pub(crate) struct Frame {
    pub(crate) open: OpenDelimiter,
    role: FrameRole,
    /// The current row has produced at least one token.
    row_has_content: bool,
    /// Line break that ends the current row. A comment line moves it to
    /// the break after the comment.
    pending_break: Option<Span>,
}

impl<'a> Lexer<'a> {
    /// Lexes `c` as a bracket, or rejects it as a character no token starts
    /// with.
    pub(crate) fn lex_delimiter(&mut self, c: char) -> Result<TokenKind, LexError> {
        if let Some(delimiter) = Delimiter::from_open(c) {
            return Ok(self.open_delimiter(delimiter));
        }
        match Delimiter::from_close(c) {
            Some(delimiter) => self.close_delimiter(delimiter),
            None => Err(self.unexpected_character(c)),
        }
    }

    fn open_delimiter(&mut self, delimiter: Delimiter) -> TokenKind {
        let role = match delimiter {
            Delimiter::Paren if self.last_significant == Some(TokenKind::TableKeyword) => {
                FrameRole::TableColumns
            },
            Delimiter::Array if self.table_header_closed => FrameRole::TableRows,
            _ => FrameRole::Nested,
        };

        self.cursor.advance();
        let span = self.token_span();
        self.frames.push(Frame {
            open: OpenDelimiter { delimiter, span },
            role,
            row_has_content: false,
            pending_break: None,
        });
        delimiter.open_kind()
    }

    fn close_delimiter(&mut self, delimiter: Delimiter) -> Result<TokenKind, LexError> {
        self.cursor.advance();

        match self.frames.last() {
            Some(frame) if frame.open.delimiter == delimiter => {
                self.table_header_closed = frame.role == FrameRole::TableColumns;
                self.frames.pop();
                Ok(delimiter.close_kind())
            },
            top => Err(LexError::UnbalancedDelimiter {
                found: Some(delimiter.close_char()),
                span: self.token_span(),
                opener: top.map(|frame| frame.open),
            }),
        }
    }

    pub(crate) fn in_table_columns(&self) -> bool {
        self.frames
            .last()
            .is_some_and(|frame| frame.role == FrameRole::TableColumns)
    }

    /// Called for each `\n` skipped as whitespace.
    pub(crate) fn record_row_break(&mut self) {
        let span = Span::new(
            self.cursor.position(),
            self.cursor.position() + 1,
            self.cursor.line(),
            self.cursor.column(),
        );
        if let Some(frame) = self.frames.last_mut() {
            if frame.role == FrameRole::TableRows
                && frame.row_has_content
                && frame.pending_break.is_none()
            {
                frame.pending_break = Some(span);
            }
        }
    }

    /// Emits the pending row break once the next row actually starts.
    ///
    /// Comments pass through with the break still pending. A break followed
    /// by `]` or end of input is dropped.
    pub(crate) fn take_row_break(&mut self) -> Option<Token> {
        if self.cursor.is_at_end()
            || self.cursor.current_char() == ']'
            || self.at_comment_start()
        {
            return None;
        }
        let frame = self.frames.last_mut()?;
        let span = frame.pending_break.take()?;
        frame.row_has_content = false;
        Some(Token::new(TokenKind::Newline, "\n", span))
    }

    /// Marks the current table row as non-empty when a token was lexed
    /// directly inside a row list.
    ///
    /// `depth` is the stack depth before the token was lexed, so an opener
    /// counts toward the row it starts in.
    pub(crate) fn mark_row_content(&mut self, depth: usize, kind: TokenKind) {
        if kind == TokenKind::Comment {
            if let Some(frame) = self.frames.last_mut() {
                if frame.role == FrameRole::TableRows {
                    frame.pending_break = None;
                }
            }
            return;
        }
        if depth == 0 {
            return;
        }
        if let Some(frame) = self.frames.get_mut(depth - 1) {
            if frame.role == FrameRole::TableRows {
                frame.row_has_content = true;
            }
        }
    }
}
