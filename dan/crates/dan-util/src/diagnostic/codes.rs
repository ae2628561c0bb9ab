//! Stable diagnostic codes.
//!
//! Codes are a letter prefix plus a zero-padded number, for example `E1002`.
//! Lexer codes live in the `E1xxx` range and tooling codes in `E9xxx`.
//!
//! ```
//! use dan_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.to_string(), "E1002");
//! ```

use std::fmt;

/// Identifier attached to a diagnostic.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// Letter prefix, `E` for errors.
    pub prefix: &'static str,
    /// Number within the prefix.
    pub number: u32,
}

impl DiagnosticCode {
    /// E1001: a character that starts no token.
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: a string with no closing quote on its line.
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1005: a closer without its opener, or an opener never closed.
    pub const E_LEXER_UNBALANCED_DELIMITER: Self = Self::new("E", 1005);
    /// E9001: an input file could not be read.
    pub const E_IO_READ: Self = Self::new("E", 9001);

    /// Builds a code from its parts.
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// The printed form, e.g. `E1001`.
    pub fn as_str(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self)
    }
}
