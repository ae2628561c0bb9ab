//! A position-tracking walk over DAN text.
//!
//! The lexer never indexes the source directly. It asks the cursor for the
//! character under it, moves one character at a time, and reads back the
//! byte offset plus the line and column it reached.

/// Walks `source` one `char` at a time.
///
/// Lines start at 1. Columns start at 1 and count characters, not bytes.
///
/// ```
/// use dan_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("app {");
/// assert_eq!(cursor.current_char(), 'a');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'p');
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Byte offset of the current character.
    offset: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// A cursor on the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Character under the cursor, `'\0'` once the text is used up.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Character `n` positions after the current one, `'\0'` past the end.
    ///
    /// ```
    /// use dan_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("//x");
    /// assert_eq!(cursor.peek_char(1), '/');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, n: usize) -> char {
        let rest = self.source[self.offset..].as_bytes();
        // Byte indexing is only safe while everything up to `n` is ASCII.
        match rest.get(..=n) {
            Some(prefix) if prefix.is_ascii() => char::from(prefix[n]),
            _ => self.source[self.offset..].chars().nth(n).unwrap_or('\0'),
        }
    }

    /// Step over the current character. A `\n` starts a new line.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.source[self.offset..].chars().next() else {
            return;
        };
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Step over characters for as long as `keep` accepts them.
    ///
    /// ```
    /// use dan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("3000, 8080");
    /// cursor.advance_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.current_char(), ',');
    /// ```
    pub fn advance_while(&mut self, mut keep: impl FnMut(char) -> bool) {
        while !self.is_at_end() && keep(self.current_char()) {
            self.advance();
        }
    }

    /// Step over a U+FEFF at offset 0 without moving the column.
    pub fn skip_bom(&mut self) -> bool {
        const BOM: char = '\u{FEFF}';
        let at_bom = self.offset == 0 && self.source.starts_with(BOM);
        if at_bom {
            self.offset = BOM.len_utf8();
        }
        at_bom
    }

    /// No characters left.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Consume `expected` if it is the current character.
    pub fn match_char(&mut self, expected: char) -> bool {
        let hit = !self.is_at_end() && self.current_char() == expected;
        if hit {
            self.advance();
        }
        hit
    }

    /// Current line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Text from byte offset `start` up to the cursor.
    ///
    /// ```
    /// use dan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("name: x");
    /// let start = cursor.position();
    /// cursor.advance_while(|c| c.is_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "name");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }

    /// Unread text, starting at the cursor.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(cursor: &Cursor<'_>) -> (usize, u32, u32) {
        (cursor.position(), cursor.line(), cursor.column())
    }

    #[test]
    fn test_starts_at_one_one() {
        let cursor = Cursor::new("hello");
        assert_eq!(position(&cursor), (0, 1, 1));
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_advance_on_empty_text_is_a_no_op() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert_eq!(position(&cursor), (0, 1, 1));
    }

    #[test]
    fn test_newline_resets_column() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        assert_eq!(position(&cursor), (1, 1, 2));
        cursor.advance();
        assert_eq!(position(&cursor), (2, 2, 1));
    }

    #[test]
    fn test_carriage_return_is_an_ordinary_column() {
        let mut cursor = Cursor::new("a\r\nb");
        cursor.advance_while(|c| c != '\n');
        assert_eq!(position(&cursor), (2, 1, 3));
    }

    #[test]
    fn test_multibyte_char_is_one_column() {
        let mut cursor = Cursor::new("éx");
        assert_eq!(cursor.current_char(), 'é');
        cursor.advance();
        assert_eq!(position(&cursor), (2, 1, 2));
        assert_eq!(cursor.current_char(), 'x');
    }

    #[test]
    fn test_peek_across_multibyte() {
        let cursor = Cursor::new("é:");
        assert_eq!(cursor.peek_char(1), ':');
        assert_eq!(cursor.peek_char(2), '\0');
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("//");
        assert!(cursor.match_char('/'));
        assert!(cursor.match_char('/'));
        assert!(!cursor.match_char('/'));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_bom_is_skipped_once() {
        let mut cursor = Cursor::new("\u{FEFF}a");
        assert!(cursor.skip_bom());
        assert_eq!(cursor.current_char(), 'a');
        assert_eq!(position(&cursor), (3, 1, 1));
        assert!(!cursor.skip_bom());
    }

    #[test]
    fn test_remaining_follows_cursor() {
        let mut cursor = Cursor::new("ab cd");
        cursor.advance_while(|c| c != ' ');
        assert_eq!(cursor.remaining(), " cd");
    }
}
