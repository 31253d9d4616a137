//! Identifier scanning.

use crate::classify::is_ident_continue;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'src> Lexer<'src> {
    /// Scans an identifier: a letter followed by letters, digits, or
    /// underscores.
    ///
    /// No keyword table is consulted here. A consumer that resolves
    /// keywords promotes the result with [`Token::set_kind`].
    pub(crate) fn lex_identifier(&mut self) -> Token<'src> {
        self.cursor.advance();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        self.make_token(TokenKind::Identifier)
    }
}
