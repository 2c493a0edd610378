//! Parser module for the indexing expression language
//!
//! A token stream with a forward-only cursor, and a recursive-descent parser
//! that accepts or rejects the stream against the expression grammar.

pub mod grammar;
pub mod stream;

pub use grammar::Parser;
pub use stream::TokenStream;
