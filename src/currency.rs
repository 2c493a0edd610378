//! Monetary-value string validator
//!
//! A single anchored-regex predicate over one line of text. Amounts use
//! Brazilian-style formatting: comma decimal separator with exactly two
//! digits, an optional dot-separated thousands group, and negation written
//! either with a leading minus or by wrapping the amount in parentheses.
//! The currency marker is a run of letters optionally followed by `$`
//! (e.g. `R$`), a currency symbol optionally followed by `$`, or `$` alone.
//!
//! Self-contained; not connected to the expression lexer or parser.

use once_cell::sync::Lazy;
use regex::Regex;

static AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "^",
        // currency marker
        r"(?:[A-Za-z]+\$?|[€£¥₹₽₩₺₪₫₱₣₴₦₨₡₲₵₸]\$?|\$)",
        // value, possibly negative or parenthesized
        r"(?:",
        r"-?(?:0,[0-9]{2}|[1-9][0-9]{0,2},[0-9]{2}|[1-9][0-9]{0,2}\.[0-9]{3},[0-9]{2})",
        r"|\((?:0,[0-9]{2}|[1-9][0-9]{0,2},[0-9]{2}|[1-9][0-9]{0,2}\.[0-9]{3},[0-9]{2})\)",
        r")",
        "$",
    ))
    .expect("amount pattern is valid")
});

/// Whether a line is a well-formed monetary value. Anchored both ends; no
/// partial matches.
pub fn is_valid_amount(line: &str) -> bool {
    AMOUNT.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_markers() {
        assert!(is_valid_amount("R$1,50"));
        assert!(is_valid_amount("USD10,00"));
        assert!(is_valid_amount("$0,99"));
    }

    #[test]
    fn test_symbol_markers() {
        assert!(is_valid_amount("€2,50"));
        assert!(is_valid_amount("£999,99"));
        assert!(is_valid_amount("¥$1,00"));
    }

    #[test]
    fn test_thousands_group() {
        assert!(is_valid_amount("R$1.234,56"));
        assert!(is_valid_amount("R$999.999,99"));
        // only one thousands group is admitted
        assert!(!is_valid_amount("R$1.234.567,89"));
    }

    #[test]
    fn test_negative_forms() {
        assert!(is_valid_amount("R$-1,50"));
        assert!(is_valid_amount("R$(1,50)"));
        // parentheses and minus do not combine
        assert!(!is_valid_amount("R$(-1,50)"));
        assert!(!is_valid_amount("R$-(1,50)"));
    }

    #[test]
    fn test_malformed_values() {
        // no marker
        assert!(!is_valid_amount("1,50"));
        // dot as decimal separator
        assert!(!is_valid_amount("R$1.50"));
        // one decimal digit
        assert!(!is_valid_amount("R$1,5"));
        // leading zero on a multi-digit integer part
        assert!(!is_valid_amount("R$01,50"));
        // four integer digits without a thousands dot
        assert!(!is_valid_amount("R$1000,00"));
    }

    #[test]
    fn test_no_partial_match() {
        assert!(!is_valid_amount(" R$1,50"));
        assert!(!is_valid_amount("R$1,50 extra"));
    }
}
