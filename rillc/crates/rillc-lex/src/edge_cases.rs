//! Edge case and property tests for rillc-lex.

#[cfg(test)]
mod tests {
    use crate::{classify, Lexer, TokenKind};
    use proptest::prelude::*;
    use rillc_util::Handler;

    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        Lexer::new(source, &handler).map(|t| t.kind()).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_kinds("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_kinds("   \n\t  \r\n  ").is_empty());
    }

    #[test]
    fn test_edge_every_ascii_char_classifies() {
        for b in 1u8..=127 {
            let c = b as char;
            let source = c.to_string();
            let handler = Handler::new();
            let token = Lexer::new(&source, &handler).next_token();

            let expected = if classify::is_space(c) {
                TokenKind::End
            } else if classify::is_ident_start(c) {
                TokenKind::Identifier
            } else if c.is_ascii_digit() {
                TokenKind::Real
            } else if "()[]{}/#,:.;'\"|".contains(c) {
                TokenKind::Separator
            } else if "<>=+-*".contains(c) {
                TokenKind::Operator
            } else {
                TokenKind::Unexpected
            };
            assert_eq!(token.kind(), expected, "char {:?} ({})", c, b);
        }
    }

    #[test]
    fn test_edge_adjacent_tokens_without_spaces() {
        let kinds = lex_kinds("a1+2.5(x)");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Real,
                TokenKind::Separator,
                TokenKind::Identifier,
                TokenKind::Separator,
            ]
        );
    }

    #[test]
    fn test_edge_consecutive_operators_stay_single() {
        // No multi-char operators in this language; `<=` is two tokens.
        let kinds = lex_kinds("<=");
        assert_eq!(kinds, vec![TokenKind::Operator, TokenKind::Operator]);
    }

    #[test]
    fn test_edge_slash_is_separator_not_comment() {
        let kinds = lex_kinds("a // b");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Separator,
                TokenKind::Separator,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_edge_quotes_are_separators_not_strings() {
        // There is no string rule; quotes delimit nothing.
        let kinds = lex_kinds("\"ab\"");
        assert_eq!(
            kinds,
            vec![
                TokenKind::Separator,
                TokenKind::Identifier,
                TokenKind::Separator,
            ]
        );
    }

    #[test]
    fn test_edge_dot_leading_number() {
        let kinds = lex_kinds(".5");
        assert_eq!(kinds, vec![TokenKind::Separator, TokenKind::Real]);
    }

    #[test]
    fn test_edge_unexpected_run() {
        let handler = Handler::new();
        let kinds: Vec<_> = Lexer::new("@$%^&~!?", &handler).map(|t| t.kind()).collect();
        assert_eq!(kinds.len(), 8);
        assert!(kinds.iter().all(|k| *k == TokenKind::Unexpected));
        assert_eq!(handler.error_count(), 8);
    }

    #[test]
    fn test_edge_end_survives_many_calls() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("x", &handler);
        lexer.next_token();
        for _ in 0..100 {
            assert!(lexer.next_token().is(TokenKind::End));
        }
    }

    // ==================== PROPERTIES ====================

    proptest! {
        /// Scanning any input terminates: each non-End token consumes at
        /// least one character, and the terminal state is idempotent.
        #[test]
        fn prop_scanning_terminates(
            chars in proptest::collection::vec(any::<char>(), 0..256)
        ) {
            let source: String = chars.into_iter().collect();
            let char_count = source.chars().count();

            let handler = Handler::new();
            let mut lexer = Lexer::new(&source, &handler);
            let mut produced = 0usize;
            loop {
                let token = lexer.next_token();
                if token.is(TokenKind::End) {
                    break;
                }
                prop_assert!(!token.lexeme().is_empty());
                produced += 1;
                prop_assert!(produced <= char_count);
            }
            prop_assert!(lexer.next_token().is(TokenKind::End));
        }

        /// Concatenating the lexemes in emission order reproduces the
        /// input with whitespace removed (for NUL-free inputs; a NUL
        /// terminates scanning early by design).
        #[test]
        fn prop_roundtrip_preserves_nonspace(
            chars in proptest::collection::vec(
                any::<char>().prop_filter("no NUL", |c| *c != '\0'),
                0..128,
            )
        ) {
            let source: String = chars.into_iter().collect();
            let handler = Handler::new();
            let rebuilt: String = Lexer::new(&source, &handler)
                .map(|t| t.lexeme().to_string())
                .collect();
            let expected: String = source
                .chars()
                .filter(|c| !classify::is_space(*c))
                .collect();
            prop_assert_eq!(rebuilt, expected);
        }

        /// A diagnostic is recorded exactly for the Unexpected tokens.
        #[test]
        fn prop_diagnostics_match_unexpected_count(
            chars in proptest::collection::vec(
                any::<char>().prop_filter("no NUL", |c| *c != '\0'),
                0..64,
            )
        ) {
            let source: String = chars.into_iter().collect();
            let handler = Handler::new();
            let unexpected = Lexer::new(&source, &handler)
                .filter(|t| t.is(TokenKind::Unexpected))
                .count();
            prop_assert_eq!(handler.error_count(), unexpected);
        }
    }
}
