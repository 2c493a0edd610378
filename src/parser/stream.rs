//! Token stream with a single forward cursor
//!
//! A stream is created once per input line, owned by one parse, and dropped
//! afterwards. `advance` is the only way the cursor moves.

use crate::error::SyntacticError;
use crate::lexer::tokens::{Token, TokenKind};

#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenStream {
    /// Wrap a token sequence. The lexer guarantees a trailing `Token::Eof`;
    /// a stream built by hand without one still behaves, with `peek`
    /// saturating at the last token and an empty sequence reading as
    /// immediate end of input.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.is_empty() {
            tokens.push(Token::Eof);
        }
        TokenStream { tokens, pos: 0 }
    }

    /// The current lookahead token.
    pub fn peek(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.pos.min(last)]
    }

    /// The current lookahead token's kind.
    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind()
    }

    /// Move the cursor forward one token, stopping at the last one.
    pub fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Consume the current token if it has the expected kind.
    pub fn eat(&mut self, expected: TokenKind) -> Result<Token, SyntacticError> {
        let token = self.peek().clone();
        if token.kind() == expected {
            self.advance();
            Ok(token)
        } else {
            Err(SyntacticError::UnexpectedToken {
                expected,
                found: token.kind(),
            })
        }
    }

    /// True when the cursor sits on the end-of-input marker.
    pub fn at_eof(&self) -> bool {
        self.peek().is_eof()
    }
}
