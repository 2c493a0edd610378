//! Lexer module for the indexing expression language
//!
//! This module contains the tokenization logic: token definitions driven by
//! logos, and the lexer entry point that turns a line of text into a token
//! sequence terminated by an end-of-input marker.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::tokenize;
pub use tokens::{Token, TokenKind};
