//! Property-based tests for the lexer
//!
//! These pin down two contracts:
//! - identifier-shaped strings lex to exactly one IDENTIFIER token
//! - re-serializing token literals reproduces the input with whitespace
//!   removed (whitespace is recognized but discarded, everything else is
//!   preserved verbatim in some token's literal)

use indexpr::{tokenize, Token};
use proptest::prelude::*;

/// Generate strings that are a single identifier lexeme
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,12}"
}

/// Generate one lexeme of any recognized class.
///
/// String literals are constrained to alphanumeric content so the
/// round-trip comparison can strip whitespace from the raw input without
/// touching anything inside a token.
fn lexeme_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "-?[0-9]{1,5}",
        "[A-Za-z_][A-Za-z0-9_]{0,8}",
        "\"[A-Za-z0-9]{0,6}\"",
        "'[A-Za-z0-9]{0,6}'",
        prop_oneof![
            Just("==".to_string()),
            Just("!=".to_string()),
            Just(">=".to_string()),
            Just("<=".to_string()),
            Just(">".to_string()),
            Just("<".to_string()),
        ],
        Just("[".to_string()),
        Just("]".to_string()),
        Just(":".to_string()),
    ]
}

proptest! {
    #[test]
    fn identifiers_lex_to_a_single_identifier_token(ident in identifier_strategy()) {
        let tokens = tokenize(&ident).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0], &Token::Identifier(ident));
        prop_assert_eq!(&tokens[1], &Token::Eof);
    }

    #[test]
    fn literals_round_trip_modulo_whitespace(
        lexemes in prop::collection::vec(lexeme_strategy(), 1..12)
    ) {
        let input = lexemes.join(" ");
        let tokens = tokenize(&input).unwrap();

        let reserialized: String = tokens
            .iter()
            .filter(|token| !token.is_eof())
            .map(Token::literal)
            .collect();
        let despaced: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        prop_assert_eq!(reserialized, despaced);
    }

    #[test]
    fn whitespace_layout_never_changes_the_token_sequence(
        lexemes in prop::collection::vec(lexeme_strategy(), 1..8)
    ) {
        let spaced = lexemes.join(" ");
        let extra_spaced = lexemes.join(" \t ");
        prop_assert_eq!(tokenize(&spaced).unwrap(), tokenize(&extra_spaced).unwrap());
    }
}
