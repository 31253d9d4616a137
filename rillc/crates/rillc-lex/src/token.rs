//! Token type definitions.

use rillc_util::Span;
use static_assertions::const_assert_eq;
use std::fmt;

/// Classification tag for a scanned token.
///
/// The set is closed and the enumeration order is part of the observable
/// contract: discriminants index the canonical display-name table, so
/// reordering variants changes what diagnostics and test output print.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Numeric literal, digits and dots
    Real,
    /// Name: a letter followed by letters, digits, or underscores
    Identifier,
    /// An identifier promoted by a consumer-side keyword lookup; never
    /// produced by the scanner itself
    Keyword,
    /// Single-character arithmetic or relational symbol
    Operator,
    /// Single-character bracket or delimiter symbol
    Separator,
    /// A character outside every recognized class
    Unexpected,
    /// End of input; returned forever once reached
    End,
}

// The display table is indexed by discriminant.
const_assert_eq!(std::mem::size_of::<TokenKind>(), 1);

impl TokenKind {
    /// Canonical display names, indexed by discriminant.
    const NAMES: [&'static str; 7] = [
        "Real",
        "Identifier",
        "Keyword",
        "Operator",
        "Separator",
        "Unexpected",
        "End",
    ];

    /// Every kind, in enumeration order.
    pub const ALL: [TokenKind; 7] = [
        TokenKind::Real,
        TokenKind::Identifier,
        TokenKind::Keyword,
        TokenKind::Operator,
        TokenKind::Separator,
        TokenKind::Unexpected,
        TokenKind::End,
    ];

    /// The canonical display name of this kind.
    pub const fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexical unit: a classification tag and the slice of source text it
/// spans.
///
/// The lexeme borrows from the caller's source buffer; the `'src` lifetime
/// ties every token to that buffer. A token is built once inside the
/// scanner and only its kind may change afterwards, via [`Token::set_kind`]
/// (the Identifier-to-Keyword promotion hook for consumers that resolve
/// keywords).
///
/// # Examples
///
/// ```
/// use rillc_lex::{Lexer, TokenKind};
/// use rillc_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("while", &handler);
///
/// let mut token = lexer.next_token();
/// assert_eq!(token.kind(), TokenKind::Identifier);
///
/// // Keyword resolution is the caller's job.
/// token.set_kind(TokenKind::Keyword);
/// assert!(token.is(TokenKind::Keyword));
/// assert_eq!(token.lexeme(), "while");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    kind: TokenKind,
    lexeme: &'src str,
    span: Span,
}

impl<'src> Token<'src> {
    /// Create a token. Construction cannot fail.
    pub const fn new(kind: TokenKind, lexeme: &'src str, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// The classification tag.
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Reassign the classification tag in place.
    pub fn set_kind(&mut self, kind: TokenKind) {
        self.kind = kind;
    }

    /// Whether the token has the given kind.
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Whether the token does not have the given kind.
    pub fn is_not(&self, kind: TokenKind) -> bool {
        self.kind != kind
    }

    /// Whether the token's kind is any of the given candidates.
    pub fn is_one_of(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// The borrowed source text this token spans.
    pub const fn lexeme(&self) -> &'src str {
        self.lexeme
    }

    /// Reassign the lexeme. Present for symmetry with [`Token::set_kind`];
    /// the scanner never calls it.
    pub fn set_lexeme(&mut self, lexeme: &'src str) {
        self.lexeme = lexeme;
    }

    /// The source span of the token.
    pub const fn span(&self) -> Span {
        self.span
    }
}
