//! rillc-util - Foundation types for the rillc front end.
//!
//! This crate provides the small set of utilities the compiler phases share:
//! source spans, the diagnostic infrastructure (levels, diagnostics, a
//! collecting handler, and a fluent builder), and the error types for the
//! fallible utility operations.
//!
//! # Example
//!
//! ```
//! use rillc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{CodeError, SpanError};
pub use span::Span;
