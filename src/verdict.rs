//! Per-line verdicts
//!
//! Ties the lexer and parser together into the single predicate the CLI and
//! tests use, and a serializable record of the outcome for one input line.

use crate::error::{LexicalError, SyntacticError};
use crate::lexer::tokenize;
use crate::lexer::tokens::TokenKind;
use crate::parser::{Parser, TokenStream};
use serde::Serialize;
use std::fmt;

/// Why a line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    Lexical(LexicalError),
    Syntactic(SyntacticError),
    /// The expression parsed, but input remained after it
    TrailingTokens { found: TokenKind },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Lexical(err) => write!(f, "{}", err),
            RejectReason::Syntactic(err) => write!(f, "{}", err),
            RejectReason::TrailingTokens { found } => {
                write!(f, "trailing tokens after expression, starting with {}", found)
            }
        }
    }
}

impl std::error::Error for RejectReason {}

impl From<LexicalError> for RejectReason {
    fn from(err: LexicalError) -> Self {
        RejectReason::Lexical(err)
    }
}

impl From<SyntacticError> for RejectReason {
    fn from(err: SyntacticError) -> Self {
        RejectReason::Syntactic(err)
    }
}

/// Validate one candidate line: tokenize, parse one expression, then require
/// the cursor to land on end-of-input.
pub fn validate(line: &str) -> Result<(), RejectReason> {
    let tokens = tokenize(line)?;
    let mut stream = TokenStream::new(tokens);
    Parser::new(&mut stream).parse_expression()?;
    if stream.at_eof() {
        Ok(())
    } else {
        Err(RejectReason::TrailingTokens {
            found: stream.peek_kind(),
        })
    }
}

/// Outcome for one input line, ready for text or JSON reporting.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub input: String,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Verdict {
    pub fn for_line(line: &str) -> Self {
        match validate(line) {
            Ok(()) => Verdict {
                input: line.to_string(),
                accepted: true,
                reason: None,
            },
            Err(reason) => Verdict {
                input: line.to_string(),
                accepted: false,
                reason: Some(reason.to_string()),
            },
        }
    }
}

/// Run the validator over a whole text, one candidate per line. Lines are
/// trimmed of surrounding whitespace; blank lines are skipped. No state
/// crosses lines.
pub fn check_lines(text: &str) -> Vec<Verdict> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Verdict::for_line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_and_rejects() {
        assert!(validate("a[1]").is_ok());
        assert!(validate("a[]").is_err());
    }

    #[test]
    fn test_trailing_tokens_are_their_own_reason() {
        let err = validate("a[1]extra").unwrap_err();
        assert_eq!(
            err,
            RejectReason::TrailingTokens {
                found: TokenKind::Identifier,
            }
        );
    }

    #[test]
    fn test_lexical_errors_surface_as_lexical() {
        assert!(matches!(
            validate("a[#]").unwrap_err(),
            RejectReason::Lexical(_)
        ));
    }

    #[test]
    fn test_check_lines_skips_blanks_and_trims() {
        let verdicts = check_lines("  a[1]  \n\n   \na[]\n");
        assert_eq!(verdicts.len(), 2);
        assert_eq!(verdicts[0].input, "a[1]");
        assert!(verdicts[0].accepted);
        assert!(!verdicts[1].accepted);
        assert!(verdicts[1].reason.is_some());
    }

    #[test]
    fn test_verdict_serializes_to_json() {
        let verdict = Verdict::for_line("a[1]");
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["input"], "a[1]");
        assert_eq!(json["accepted"], true);
        assert!(json.get("reason").is_none());
    }
}
