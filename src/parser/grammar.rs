//! Recursive-descent parser for the indexing expression grammar
//!
//! One routine per non-terminal, dispatch on a single lookahead token:
//!
//! ```text
//! EXPR            → VARIABLE '[' INDEX ']'
//! VARIABLE        → IDENTIFIER VARIABLE_TAIL
//! VARIABLE_TAIL   → IDENTIFIER VARIABLE_TAIL | ε
//! INDEX           → NUMBER INDEX_AFTER_NUM
//!                 | STRING INDEX_AFTER_STR
//!                 | ':' NUMBER_OPT
//!                 | EXPR INDEX_COMPARE_OPT
//! INDEX_AFTER_NUM → ':' NUMBER_OPT | ε
//! INDEX_AFTER_STR → ':' STRING_OPT | ε
//! INDEX_COMPARE_OPT → COMPARISON VALUE | ε
//! VALUE           → NUMBER | STRING
//! NUMBER_OPT      → NUMBER | ε
//! STRING_OPT      → STRING | ε
//! ```
//!
//! The grammar is LL(1) by construction: every alternative of every
//! non-terminal starts with a distinct token kind, so there is no
//! backtracking. The parser accepts or rejects only; no tree is built.
//!
//! Note the asymmetry in the ':'-initiated INDEX alternative: it permits a
//! single optional trailing bound (`a[:2]`), never a start and stop pair.
//! `a[1:2]` goes through the NUMBER branch instead. This matches the grammar
//! table the language is defined by.

use crate::error::SyntacticError;
use crate::lexer::tokens::TokenKind;
use crate::parser::stream::TokenStream;

pub struct Parser<'a> {
    stream: &'a mut TokenStream,
}

impl<'a> Parser<'a> {
    pub fn new(stream: &'a mut TokenStream) -> Self {
        Parser { stream }
    }

    /// Parse one complete EXPR starting at the stream's cursor.
    ///
    /// On success the cursor has advanced past the expression. Callers must
    /// check `TokenStream::at_eof` separately: trailing tokens mean the line
    /// is rejected even though no error was raised here.
    pub fn parse_expression(&mut self) -> Result<(), SyntacticError> {
        self.expr()
    }

    // EXPR → VARIABLE '[' INDEX ']'
    fn expr(&mut self) -> Result<(), SyntacticError> {
        self.variable()?;
        self.stream.eat(TokenKind::LBracket)?;
        self.index()?;
        self.stream.eat(TokenKind::RBracket)?;
        Ok(())
    }

    // VARIABLE → IDENTIFIER VARIABLE_TAIL
    fn variable(&mut self) -> Result<(), SyntacticError> {
        self.stream.eat(TokenKind::Identifier)?;
        self.variable_tail()
    }

    // VARIABLE_TAIL → IDENTIFIER VARIABLE_TAIL | ε
    fn variable_tail(&mut self) -> Result<(), SyntacticError> {
        while self.stream.peek_kind() == TokenKind::Identifier {
            self.stream.eat(TokenKind::Identifier)?;
        }
        Ok(())
    }

    // INDEX → NUMBER INDEX_AFTER_NUM | STRING INDEX_AFTER_STR
    //       | ':' NUMBER_OPT | EXPR INDEX_COMPARE_OPT
    fn index(&mut self) -> Result<(), SyntacticError> {
        match self.stream.peek_kind() {
            TokenKind::Number => {
                self.stream.eat(TokenKind::Number)?;
                self.index_after_num()
            }
            TokenKind::Str => {
                self.stream.eat(TokenKind::Str)?;
                self.index_after_str()
            }
            TokenKind::Colon => {
                self.stream.eat(TokenKind::Colon)?;
                self.number_opt()
            }
            TokenKind::Identifier => {
                // nested access, e.g. a[b[1]==2]
                self.expr()?;
                self.index_compare_opt()
            }
            found => Err(SyntacticError::InvalidIndex { found }),
        }
    }

    // INDEX_AFTER_NUM → ':' NUMBER_OPT | ε
    fn index_after_num(&mut self) -> Result<(), SyntacticError> {
        if self.stream.peek_kind() == TokenKind::Colon {
            self.stream.eat(TokenKind::Colon)?;
            self.number_opt()?;
        }
        Ok(())
    }

    // INDEX_AFTER_STR → ':' STRING_OPT | ε
    fn index_after_str(&mut self) -> Result<(), SyntacticError> {
        if self.stream.peek_kind() == TokenKind::Colon {
            self.stream.eat(TokenKind::Colon)?;
            self.string_opt()?;
        }
        Ok(())
    }

    // INDEX_COMPARE_OPT → COMPARISON VALUE | ε
    fn index_compare_opt(&mut self) -> Result<(), SyntacticError> {
        if self.stream.peek_kind() == TokenKind::Comparison {
            self.stream.eat(TokenKind::Comparison)?;
            self.value()?;
        }
        Ok(())
    }

    // VALUE → NUMBER | STRING
    fn value(&mut self) -> Result<(), SyntacticError> {
        match self.stream.peek_kind() {
            TokenKind::Number => self.stream.eat(TokenKind::Number).map(|_| ()),
            TokenKind::Str => self.stream.eat(TokenKind::Str).map(|_| ()),
            found => Err(SyntacticError::InvalidValue { found }),
        }
    }

    // NUMBER_OPT → NUMBER | ε
    fn number_opt(&mut self) -> Result<(), SyntacticError> {
        if self.stream.peek_kind() == TokenKind::Number {
            self.stream.eat(TokenKind::Number)?;
        }
        Ok(())
    }

    // STRING_OPT → STRING | ε
    fn string_opt(&mut self) -> Result<(), SyntacticError> {
        if self.stream.peek_kind() == TokenKind::Str {
            self.stream.eat(TokenKind::Str)?;
        }
        Ok(())
    }
}
