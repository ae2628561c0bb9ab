//! Key, identifier and keyword lexing.

use crate::token::{keyword_from_ident, TokenKind};
use crate::unicode::{is_ident_continue, is_inline_whitespace};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a bare name.
    ///
    /// A name is a `Key` when the next significant character on the same
    /// line is `:`, or when it sits inside a table's column list. Otherwise
    /// the keyword table is consulted before falling back to `Identifier`.
    /// The name is read greedily, so `tables` or `true-ish` are never
    /// split into a keyword and a remainder.
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        self.cursor.advance_while(is_ident_continue);

        if self.in_table_columns() || self.followed_by_colon() {
            return TokenKind::Key;
        }

        keyword_from_ident(self.cursor.slice_from(self.token_start))
            .unwrap_or(TokenKind::Identifier)
    }

    fn followed_by_colon(&self) -> bool {
        self.cursor
            .remaining()
            .trim_start_matches(is_inline_whitespace)
            .starts_with(':')
    }
}
