use std::sync::LazyLock;

use fancy_regex::Regex;

// Character-set constants
pub const EQUATION_LENGTH: usize = 8;
pub(crate) const DIGIT_CHARS: &str = "0123456789";
pub(crate) const OPERATOR_CHARS: &str = "+-*/";
pub(crate) const EQUALS_CHAR: char = '=';

/// Matches strings made only of digits, operators and `=`.
///
/// NB: This regex is validated at WASM startup in `wasm::validate_internal_regexes()`.
/// If a new `LazyLock<Regex>` is added, add it there too!
pub(crate) static EQUATION_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9+\-*/=]+$")
        .unwrap_or_else(|e| panic!("BUG: Failed to compile EQUATION_CHARS_RE regex pattern: {e}."))
});

pub(crate) trait EquationChar {
    fn is_operator(&self) -> bool;
    fn is_equals(&self) -> bool;
    /// Operators and `=` both end a number token.
    fn is_separator(&self) -> bool;
    fn is_equation_char(&self) -> bool;
}

impl EquationChar for char {
    fn is_operator(&self) -> bool {
        OPERATOR_CHARS.contains(*self)
    }
    fn is_equals(&self) -> bool {
        *self == EQUALS_CHAR
    }
    fn is_separator(&self) -> bool {
        self.is_operator() || self.is_equals()
    }
    fn is_equation_char(&self) -> bool {
        self.is_ascii_digit() || self.is_separator()
    }
}

/// Returns `true` if every character of `s` is a digit, an operator or `=`.
///
/// The empty string is rejected.
pub(crate) fn has_only_equation_chars(s: &str) -> bool {
    // fancy_regex only errors on backtrack limits, which a plain class can't hit
    EQUATION_CHARS_RE.is_match(s).unwrap_or_else(|_| !s.is_empty() && s.chars().all(|c| c.is_equation_char()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_operator() {
        for c in ['+', '-', '*', '/'] {
            assert!(c.is_operator(), "'{c}' should be an operator");
        }
        assert!(!'='.is_operator());
        assert!(!'1'.is_operator());
        assert!(!'x'.is_operator());
    }

    #[test]
    fn test_is_separator() {
        assert!('='.is_separator());
        assert!('/'.is_separator());
        assert!(!'0'.is_separator());
        assert!(!'.'.is_separator());
    }

    #[test]
    fn test_is_equation_char() {
        for c in "0123456789+-*/=".chars() {
            assert!(c.is_equation_char(), "'{c}' should be allowed");
        }
        for c in ". ()x^%".chars() {
            assert!(!c.is_equation_char(), "'{c}' should not be allowed");
        }
    }

    #[test]
    fn test_has_only_equation_chars() {
        assert!(has_only_equation_chars("12+34=46"));
        assert!(has_only_equation_chars("==="));
        assert!(!has_only_equation_chars("12/5=2.4"));
        assert!(!has_only_equation_chars("1 + 1 = 2"));
        assert!(!has_only_equation_chars(""));
    }

    #[test]
    fn test_regex_and_trait_agree() {
        for s in ["1+1=2", "a", "9*9=81", "(1)", "--", "1٣"] {
            assert_eq!(
                EQUATION_CHARS_RE.is_match(s).unwrap(),
                s.chars().all(|c| c.is_equation_char()),
                "disagreement on {s:?}"
            );
        }
    }

    #[test]
    fn test_alphabet_constants() {
        assert_eq!(EQUATION_LENGTH, 8);
        assert_eq!(DIGIT_CHARS.len(), 10);
        assert_eq!(OPERATOR_CHARS.len(), 4);
    }
}
