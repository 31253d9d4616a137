//! rillc-lex - Lexical Analyzer for the Rill Programming Language
//!
//! This crate provides the scanner for the Rill front end. It transforms
//! source text into a stream of classified tokens, one per call, on demand.
//!
//! # Overview
//!
//! The scanner is single-pass and total: every character of input produces
//! some token, unrecognized bytes becoming `Unexpected` tokens rather than
//! errors. Lexemes borrow from the caller's buffer; the scanning path
//! allocates nothing.
//!
//! # Example Usage
//!
//! ```
//! use rillc_util::Handler;
//! use rillc_lex::{Lexer, TokenKind};
//!
//! let source = "rate = base + 2.5";
//! let handler = Handler::new();
//! let mut lexer = Lexer::new(source, &handler);
//!
//! let first = lexer.next_token();
//! assert_eq!(first.kind(), TokenKind::Identifier);
//! assert_eq!(first.lexeme(), "rate");
//!
//! // Or drain the stream through the Iterator adapter.
//! let rest: Vec<_> = lexer.collect();
//! assert_eq!(rest.len(), 4);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and kind definitions
//! - [`lexer`] - The scanner implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`classify`] - ASCII character classification
//!
//! # Token Categories
//!
//! - **Real**: digit-led literals, digits and dots (`42`, `3.14`; also
//!   `1.2.3` — the scanner does not validate numeric shape)
//! - **Identifier**: a letter followed by letters, digits, underscores
//! - **Keyword**: never produced by the scanner; consumers promote
//!   identifiers after their own lookup
//! - **Operator**: one of `< > = + - *`
//! - **Separator**: one of `( ) [ ] { }` or `/ # , : . ; ' " |`
//! - **Unexpected**: any other character
//! - **End**: end of input, returned forever once reached

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
