//! Core scanner implementation.
//!
//! This module contains the Lexer struct, the whitespace skip, and the
//! single-character dispatch. The multi-character rules live in the sibling
//! `identifier` and `number` modules.

use rillc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};

use crate::classify;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Scanner for Rill source text.
///
/// Produces one classified token per [`Lexer::next_token`] call, borrowing
/// every lexeme from the caller's buffer. The scanner is total: every
/// character reaches some dispatch arm, unrecognized ones becoming
/// `Unexpected` tokens rather than errors, and once end of input is reached
/// every further call returns `End` again.
pub struct Lexer<'src> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'src>,

    /// Sink for unexpected-character diagnostics.
    handler: &'src Handler,

    /// Starting byte offset of the current token.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new scanner over the given source text.
    ///
    /// The source buffer must outlive the scanner and every token it
    /// produces; the `'src` lifetime enforces this.
    pub fn new(source: &'src str, handler: &'src Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source text.
    ///
    /// Skips whitespace, then dispatches on the first remaining character.
    /// Never fails: malformed input comes back as an `Unexpected` token and
    /// the cursor still advances, so the caller can keep pulling tokens
    /// without risking an infinite loop.
    pub fn next_token(&mut self) -> Token<'src> {
        while classify::is_space(self.cursor.current_char()) {
            self.cursor.advance();
        }

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        match self.cursor.current_char() {
            // The terminator is never consumed, so End repeats forever.
            '\0' => self.end_token(),
            'a'..='z' | 'A'..='Z' => self.lex_identifier(),
            '0'..='9' => self.lex_number(),
            '(' | ')' | '[' | ']' | '{' | '}' => self.single(TokenKind::Separator),
            '<' | '>' | '=' | '+' | '-' | '*' => self.single(TokenKind::Operator),
            '/' | '#' | ',' | ':' | '.' | ';' | '\'' | '"' | '|' => {
                self.single(TokenKind::Separator)
            },
            c => {
                let token = self.single(TokenKind::Unexpected);
                DiagnosticBuilder::error(format!("unexpected character '{}'", c))
                    .code(DiagnosticCode::E_LEX_UNEXPECTED_CHAR)
                    .span(token.span())
                    .emit(self.handler);
                token
            },
        }
    }

    /// Consumes exactly one character and emits a token of the given kind.
    fn single(&mut self, kind: TokenKind) -> Token<'src> {
        self.cursor.advance();
        self.make_token(kind)
    }

    /// Builds a token spanning from the recorded start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token<'src> {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// Emits the terminal token without moving the cursor.
    ///
    /// An embedded NUL byte becomes the token's one-byte lexeme; at the
    /// physical end of the buffer the lexeme is the empty tail slice, since
    /// a `&str` has no terminator byte to span.
    fn end_token(&self) -> Token<'src> {
        let start = self.token_start;
        let end = if self.cursor.is_at_end() { start } else { start + 1 };
        let span = Span::new(start, end, self.token_start_line, self.token_start_column);
        Token::new(TokenKind::End, &self.cursor.source()[start..end], span)
    }

    /// Current line number (1-based) of the next character to be scanned.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current column number (1-based) of the next character to be scanned.
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Yields tokens until the first `End`, which maps to `None`.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is(TokenKind::End) {
            None
        } else {
            Some(token)
        }
    }
}
