//! Token definitions for the indexing expression language
//!
//! Tokens are defined with the logos derive macro. Variants that classify
//! variable-width lexemes carry their matched text so a token sequence can be
//! re-serialized; fixed lexemes are unit variants. `Eof` is never produced by
//! logos: the lexer appends it after a successful pass.
use logos::Logos;

/// All tokens the lexer can produce.
///
/// Pattern overlap is resolved by longest match, so two-character comparison
/// operators win over one-character ones and identifiers never absorb
/// operator characters.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\n]+")]
pub enum Token {
    /// Integer literal, optionally with a leading minus sign
    #[regex(r"-?[0-9]+", |lex| lex.slice().to_owned())]
    Number(String),

    /// Quoted string, double or single quotes, no escape support
    #[regex(r#""[^"]*""#, |lex| lex.slice().to_owned())]
    #[regex(r"'[^']*'", |lex| lex.slice().to_owned())]
    Str(String),

    /// Letter or underscore followed by letters, digits, or underscores
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_owned())]
    Identifier(String),

    /// One of `==`, `!=`, `>=`, `<=`, `>`, `<`
    #[regex(r"==|!=|>=|<=|>|<", |lex| lex.slice().to_owned())]
    Comparison(String),

    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(":")]
    Colon,

    /// End-of-input marker, appended by the lexer
    Eof,
}

/// Token classification used for lookahead dispatch and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Str,
    Identifier,
    Comparison,
    LBracket,
    RBracket,
    Colon,
    Eof,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Str(_) => TokenKind::Str,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Comparison(_) => TokenKind::Comparison,
            Token::LBracket => TokenKind::LBracket,
            Token::RBracket => TokenKind::RBracket,
            Token::Colon => TokenKind::Colon,
            Token::Eof => TokenKind::Eof,
        }
    }

    /// The source text this token was lexed from.
    pub fn literal(&self) -> &str {
        match self {
            Token::Number(text) | Token::Str(text) | Token::Identifier(text) => text,
            Token::Comparison(text) => text,
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::Colon => ":",
            Token::Eof => "EOF",
        }
    }

    /// Check if this token ends the stream
    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Str => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Comparison => "COMPARISON",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Colon => "':'",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}
