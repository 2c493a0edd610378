//! # indexpr
//!
//! A validator for a toy indexing/slicing expression language, e.g. `a[1]`,
//! `abc[1:2]`, `a[b[1]==2]`.
//!
//! Two stages, used sequentially: the [lexer](lexer) turns one line of text
//! into a sequence of classified tokens ending in an end-of-input marker, and
//! the [parser](parser) walks that sequence with a recursive-descent LL(1)
//! strategy, accepting or rejecting it against a fixed grammar. No tree is
//! built; the outcome for a line is a [Verdict](verdict::Verdict).
//!
//! The [currency](currency) module is an unrelated sibling exercise: a single
//! regex predicate for monetary-value strings.

pub mod currency;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod verdict;

pub use error::{LexicalError, SyntacticError};
pub use lexer::{tokenize, Token, TokenKind};
pub use parser::{Parser, TokenStream};
pub use verdict::{check_lines, validate, RejectReason, Verdict};
