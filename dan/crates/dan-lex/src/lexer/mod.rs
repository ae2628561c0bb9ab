//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, dispatch and the `Iterator` impl
//! - `comment` - Whitespace skipping and line comments
//! - `identifier` - Keys, identifiers and keywords
//! - `number` - Integers, decimals and dotted versions
//! - `string` - Double-quoted strings
//! - `delimiter` - The open-delimiter stack and table row breaks

mod comment;
mod core;
mod delimiter;
mod identifier;
mod number;
mod string;

pub use self::core::Lexer;
