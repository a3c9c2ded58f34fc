//! Checks whether a candidate string is an acceptable equation guess.
//!
//! Checks run cheapest first and stop at the first failure, so malformed
//! input never reaches the evaluator:
//!
//! 1. length
//! 2. character set
//! 3. exactly one `=` with both sides non-empty
//! 4. number tokens (no empty token, no leading zero), and a right side
//!    that is a single number
//! 5. arithmetic (left side evaluates to an integer equal to the right side)

use crate::equation_char::{has_only_equation_chars, EQUALS_CHAR, EQUATION_LENGTH};
use crate::errors::ValidationError;
use crate::evaluator::{as_integer, evaluate_expression};
use crate::parser::number_tokens;

/// Validation outcome in the shape handed to UI and HTTP callers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => ValidationResult { valid: true, reason: None },
            Err(e) => ValidationResult { valid: false, reason: Some(e.to_string()) },
        }
    }
}

/// Validate `candidate` against the standard equation length.
///
/// # Errors
/// The first [`ValidationError`] encountered, in the order listed in the module docs.
pub fn validate_equation(candidate: &str) -> Result<(), ValidationError> {
    validate_equation_of_length(candidate, EQUATION_LENGTH)
}

/// Validate `candidate`, requiring exactly `expected_len` characters.
///
/// # Errors
/// See [`validate_equation`].
pub fn validate_equation_of_length(candidate: &str, expected_len: usize) -> Result<(), ValidationError> {
    let result = check_all(candidate, expected_len);
    match &result {
        Ok(()) => log::debug!("{candidate:?} is a valid equation"),
        Err(e) => log::debug!("{candidate:?} rejected: {} ({})", e, e.code()),
    }
    result
}

/// Validate `candidate`, folding the outcome into a [`ValidationResult`].
///
/// Never fails: every rejection becomes `valid: false` with a fixed reason.
#[must_use]
pub fn is_valid_equation(candidate: &str) -> ValidationResult {
    validate_equation(candidate).into()
}

fn check_all(candidate: &str, expected_len: usize) -> Result<(), ValidationError> {
    // 1. Length, counted in characters
    let actual = candidate.chars().count();
    if actual != expected_len {
        return Err(ValidationError::WrongLength { expected: expected_len, actual });
    }

    // 2. Character set
    if !has_only_equation_chars(candidate) {
        return Err(ValidationError::InvalidCharacters);
    }

    // 3. Exactly one '=', with something on both sides
    let parts: Vec<&str> = candidate.split(EQUALS_CHAR).collect();
    let [lhs, rhs] = parts.as_slice() else {
        return Err(ValidationError::EqualsCount { count: parts.len() - 1 });
    };
    if lhs.is_empty() || rhs.is_empty() {
        return Err(ValidationError::InvalidFormat);
    }

    // 4. Number tokens across the whole string
    for token in number_tokens(candidate) {
        if token.len() > 1 && token.starts_with('0') {
            return Err(ValidationError::LeadingZero { token: token.to_string() });
        }
        if token.is_empty() {
            return Err(ValidationError::InvalidSyntax);
        }
    }
    // the result is a literal, never an expression
    if !rhs.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat);
    }

    // 5. Arithmetic
    let value = evaluate_expression(lhs)?;
    let lhs_value = as_integer(value).ok_or(ValidationError::NonIntegerResult { value })?;
    // digits only by now, so this fails only on overflow
    let rhs_value: i64 = rhs
        .parse()
        .map_err(|_| ValidationError::InvalidFormat)?;
    if lhs_value != rhs_value {
        return Err(ValidationError::DoesNotCompute { lhs: lhs_value, rhs: rhs_value });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EvalError;

    #[test]
    fn test_valid_equations() {
        for eq in ["12+34=46", "99*9=891", "100/4=25", "2*3+4=10", "10-2*4=2", "3*3*3=27"] {
            assert_eq!(validate_equation(eq), Ok(()), "{eq} should be valid");
        }
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            validate_equation("1+1=2"),
            Err(ValidationError::WrongLength { expected: 8, actual: 5 })
        );
        assert_eq!(
            validate_equation("012+1=3"),
            Err(ValidationError::WrongLength { expected: 8, actual: 7 })
        );
        assert!(matches!(validate_equation(""), Err(ValidationError::WrongLength { actual: 0, .. })));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 8 characters, 10 bytes
        assert_eq!(validate_equation("12+34=4é"), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(validate_equation("12/5=2.4"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_equation("1 + 1= 2"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_equation("(1+2)=03"), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn test_equals_count() {
        assert_eq!(validate_equation("12+34+46"), Err(ValidationError::EqualsCount { count: 0 }));
        assert_eq!(validate_equation("1+1=2=11"), Err(ValidationError::EqualsCount { count: 2 }));
    }

    #[test]
    fn test_empty_side() {
        assert_eq!(validate_equation("=1234567"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate_equation("1234567="), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(validate_equation("1++34=35"), Err(ValidationError::InvalidSyntax));
        assert_eq!(validate_equation("-5+8=3+0"), Err(ValidationError::InvalidSyntax));
        assert_eq!(validate_equation("5+8+0=-3"), Err(ValidationError::InvalidSyntax));
    }

    #[test]
    fn test_right_side_must_be_a_number() {
        assert_eq!(validate_equation("1+2=3*10"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate_equation("2*5=10-0"), Err(ValidationError::InvalidFormat));
        assert_eq!(validate_equation("1+2=4*10"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_right_side_checked_before_arithmetic() {
        // would otherwise be a division by zero
        assert_eq!(validate_equation("1/0=1*10"), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_leading_zero() {
        assert_eq!(
            validate_equation("012+1=13"),
            Err(ValidationError::LeadingZero { token: "012".to_string() })
        );
        assert_eq!(
            validate_equation("1+2+3=06"),
            Err(ValidationError::LeadingZero { token: "06".to_string() })
        );
    }

    #[test]
    fn test_zero_tokens() {
        assert_eq!(validate_equation("10+0=010"), Err(ValidationError::LeadingZero { token: "010".to_string() }));
        assert_eq!(validate_equation("0*1234=0"), Ok(()));
        assert_eq!(validate_equation("10+10=20"), Ok(()));
    }

    #[test]
    fn test_leading_zero_reported_before_later_empty_token() {
        assert!(matches!(validate_equation("01++2=03"), Err(ValidationError::LeadingZero { .. })));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            validate_equation("12/0=120"),
            Err(ValidationError::InvalidEquation(Box::new(EvalError::DivisionByZero)))
        );
    }

    #[test]
    fn test_non_integer_result() {
        assert_eq!(validate_equation("7/2+10=3"), Err(ValidationError::NonIntegerResult { value: 13.5 }));
    }

    #[test]
    fn test_does_not_compute() {
        assert_eq!(validate_equation("12+34=47"), Err(ValidationError::DoesNotCompute { lhs: 46, rhs: 47 }));
        // precedence, not left-to-right
        assert_eq!(validate_equation("2+3*4=20"), Err(ValidationError::DoesNotCompute { lhs: 14, rhs: 20 }));
    }

    #[test]
    fn test_negative_lhs_does_not_compute() {
        assert_eq!(validate_equation("1-10*2=0"), Err(ValidationError::DoesNotCompute { lhs: -19, rhs: 0 }));
    }

    #[test]
    fn test_custom_length() {
        assert_eq!(validate_equation_of_length("1+1=2", 5), Ok(()));
        assert_eq!(
            validate_equation_of_length("12+34=46", 5),
            Err(ValidationError::WrongLength { expected: 5, actual: 8 })
        );
        assert_eq!(
            validate_equation_of_length("12+34=46", 5).unwrap_err().to_string(),
            "Equation must be 5 characters long"
        );
    }

    #[test]
    fn test_is_valid_equation_result_shape() {
        assert_eq!(is_valid_equation("12+34=46"), ValidationResult { valid: true, reason: None });
        assert_eq!(
            is_valid_equation("12+34=47"),
            ValidationResult { valid: false, reason: Some("Equation does not compute".to_string()) }
        );
        assert_eq!(
            is_valid_equation("12/0=120").reason.as_deref(),
            Some("Invalid equation")
        );
    }

    #[test]
    fn test_validation_result_json() {
        let json = serde_json::to_string(&is_valid_equation("12+34=46")).unwrap();
        assert_eq!(json, r#"{"valid":true}"#);
        let json = serde_json::to_string(&is_valid_equation("1++34=35")).unwrap();
        assert_eq!(json, r#"{"valid":false,"reason":"Invalid syntax"}"#);
    }
}
