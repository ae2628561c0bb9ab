//! Character classes used by the DAN lexer.

/// Checks if a character can start a bare name (key or identifier).
///
/// Letters of any script and `_` qualify.
///
/// ```
/// use dan_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('π'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('-'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character can continue a bare name.
///
/// Adds digits and `-` to the start set, so `max-connections` and
/// `node2` are single names.
///
/// ```
/// use dan_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('-'));
/// assert!(is_ident_continue('9'));
/// assert!(!is_ident_continue(':'));
/// assert!(!is_ident_continue('.'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c == '-' || c.is_alphanumeric()
}

/// Whitespace that never carries meaning: everything except `\n`.
#[inline]
pub fn is_inline_whitespace(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}
