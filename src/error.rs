//! Error types for lexing and parsing
//!
//! Both errors are fatal to the current line: the caller converts them into a
//! rejection message and moves on to the next candidate.

use crate::lexer::tokens::TokenKind;
use std::fmt;

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    /// Unrecognized character(s) in the input
    InvalidToken {
        /// The offending source text
        text: String,
        /// Byte offset where it starts
        offset: usize,
    },
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexicalError::InvalidToken { text, offset } => {
                write!(f, "invalid token {:?} at offset {}", text, offset)
            }
        }
    }
}

impl std::error::Error for LexicalError {}

/// Errors that can occur during parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntacticError {
    /// `eat` found a token of the wrong kind
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    /// No INDEX alternative starts with this token
    InvalidIndex { found: TokenKind },
    /// No VALUE alternative starts with this token
    InvalidValue { found: TokenKind },
}

impl fmt::Display for SyntacticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntacticError::UnexpectedToken { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            SyntacticError::InvalidIndex { found } => {
                write!(f, "invalid index: {}", found)
            }
            SyntacticError::InvalidValue { found } => {
                write!(f, "invalid value: {}", found)
            }
        }
    }
}

impl std::error::Error for SyntacticError {}
