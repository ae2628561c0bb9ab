//! dan-util - shared foundation types for the DAN tools.
//!
//! Source positions and diagnostics, independent of the DAN grammar, so the
//! lexer and the command-line tool report problems the same way.
//!
//! - [`span`] - spans and source files with line lookup
//! - [`diagnostic`] - codes, builder, handler and rendering
//! - [`error`] - errors raised by the above
//!
//! # Example
//!
//! ```
//! use dan_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceFile, Span};
//!
//! let file = SourceFile::new("app.dan", "name: \"oops");
//! let handler = Handler::new();
//!
//! DiagnosticBuilder::error("unterminated string")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(6, 11, 1, 7))
//!     .emit(&handler);
//!
//! let rendered = handler.take()[0].render(&file, false);
//! assert!(rendered.contains("app.dan:1:7"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use span::{SourceFile, Span};
