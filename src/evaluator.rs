//! Arithmetic evaluation of the left-hand side of an equation.
//!
//! # Examples
//!
//! ```
//! use nerditt::evaluator::evaluate_expression;
//!
//! assert_eq!(evaluate_expression("12+3*4")?, 24.0);
//! assert_eq!(evaluate_expression("7/2")?, 3.5);
//! assert!(evaluate_expression("1/0").is_err());
//! # Ok::<(), Box<nerditt::errors::EvalError>>(())
//! ```

use crate::errors::EvalError;
use crate::parser::parse_expression;

/// Evaluate `expr` with standard precedence (`*`, `/` before `+`, `-`),
/// left to right within a precedence level.
///
/// Division is real division; whether the result is a whole number is left
/// to the caller.
///
/// # Errors
/// Any parse failure (see [`parse_expression`]) or `EvalError::DivisionByZero`.
/// Nothing is returned for partially valid input.
pub fn evaluate_expression(expr: &str) -> Result<f64, Box<EvalError>> {
    parse_expression(expr)?.eval()
}

/// Returns the value as an `i64` if it is a finite whole number in range.
pub(crate) fn as_integer(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}
