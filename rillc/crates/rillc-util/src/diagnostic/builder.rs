//! Fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// Builder for constructing diagnostics with a fluent API.
///
/// # Examples
///
/// ```
/// use rillc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use rillc_util::Span;
///
/// let diag = DiagnosticBuilder::error("unexpected character '@'")
///     .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
///     .span(Span::new(4, 5, 1, 5))
///     .help("remove the character")
///     .build();
///
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new builder at the given level.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error builder.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span.
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note with additional context.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add an actionable help suggestion.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic.
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Build and record the diagnostic through the handler.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
