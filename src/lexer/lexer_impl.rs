//! Implementation of the expression lexer
//!
//! Tokenization itself is handled entirely by logos; this module drives the
//! lexer over a full line, fails on the first unrecognized character, and
//! appends the end-of-input marker.

use crate::error::LexicalError;
use crate::lexer::tokens::Token;
use logos::Logos;

/// Tokenize a line, returning the full token sequence ending in `Token::Eof`.
///
/// The first unrecognized character aborts the whole lex; no partial sequence
/// is returned. Whitespace is consumed and discarded by the logos skip
/// pattern.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => {
                let span = lexer.span();
                return Err(LexicalError::InvalidToken {
                    text: source[span.start..span.end].to_string(),
                    offset: span.start,
                });
            }
        }
    }

    tokens.push(Token::Eof);
    Ok(tokens)
}
