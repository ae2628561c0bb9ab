//! Whitespace and comment lexing.
//!
//! Comments are tokens in DAN, so unlike whitespace they are never skipped.

use crate::token::TokenKind;
use crate::unicode::is_inline_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace up to the next significant character.
    ///
    /// Line breaks are remembered as a pending row break when they end a
    /// row inside a table.
    pub(crate) fn skip_whitespace(&mut self) {
        if !self.bom_checked {
            self.bom_checked = true;
            self.cursor.skip_bom();
        }

        while !self.cursor.is_at_end() {
            match self.cursor.current_char() {
                '\n' => {
                    self.record_row_break();
                    self.cursor.advance();
                },
                c if is_inline_whitespace(c) => self.cursor.advance(),
                _ => return,
            }
        }
    }

    /// The cursor is on `#` or `//`.
    pub(crate) fn at_comment_start(&self) -> bool {
        match self.cursor.current_char() {
            '#' => true,
            '/' => self.cursor.peek_char(1) == '/',
            _ => false,
        }
    }

    /// Lexes a `#` or `//` comment through the end of the line.
    ///
    /// The line terminator, `\n` or `\r\n`, is not part of the lexeme.
    pub(crate) fn lex_comment(&mut self) -> TokenKind {
        while !self.cursor.is_at_end() {
            match self.cursor.current_char() {
                '\n' => break,
                '\r' if self.cursor.peek_char(1) == '\n' => break,
                _ => self.cursor.advance(),
            }
        }
        TokenKind::Comment
    }
}
