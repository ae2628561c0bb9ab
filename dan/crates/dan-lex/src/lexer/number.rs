//! Number lexing.
//!
//! DAN numbers are an optional `-`, a run of digits, and any number of
//! `.digits` groups. `3`, `-12`, `0.5` and `1.2.3.4` are all one `Number`.
//! No value is computed; the lexeme is kept as written.

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number, taking the longest dotted digit sequence.
    ///
    /// A `.` only continues the number when a digit follows it, so `1.`
    /// ends the number before the dot.
    pub(crate) fn lex_number(&mut self) -> TokenKind {
        self.cursor.match_char('-');
        self.cursor.advance_while(|c| c.is_ascii_digit());

        while self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.cursor.advance_while(|c| c.is_ascii_digit());
        }

        TokenKind::Number
    }
}
