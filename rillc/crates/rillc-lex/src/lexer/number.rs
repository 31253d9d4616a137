//! Real-number scanning.

use crate::classify::is_number_continue;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'src> Lexer<'src> {
    /// Scans a real-number literal: a digit followed by digits or dots.
    ///
    /// Well-formedness is not checked at this layer: `1.2.3` scans as a
    /// single `Real` token, and rejecting it is left to a later phase.
    pub(crate) fn lex_number(&mut self) -> Token<'src> {
        self.cursor.advance();
        while is_number_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        self.make_token(TokenKind::Real)
    }
}
