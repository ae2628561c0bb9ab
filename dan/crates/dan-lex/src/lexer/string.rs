//! String lexing.

use crate::error::LexError;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a double-quoted string.
    ///
    /// Strings live on one line. A backslash takes the next character
    /// literally, so `\"` does not end the string; escapes are kept
    /// verbatim in the lexeme. Reaching a line break or end of input
    /// before the closing quote is an error located at the opening quote.
    pub(crate) fn lex_string(&mut self) -> Result<TokenKind, LexError> {
        self.cursor.advance();

        while !self.cursor.is_at_end() {
            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    return Ok(TokenKind::String);
                },
                '\n' => break,
                '\r' if self.cursor.peek_char(1) == '\n' => break,
                '\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
                        self.cursor.advance();
                    }
                },
                _ => self.cursor.advance(),
            }
        }

        Err(LexError::UnterminatedString {
            span: self.token_span(),
        })
    }
}
