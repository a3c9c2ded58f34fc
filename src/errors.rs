//! Error types for expression evaluation and equation validation, with error codes and helpful
//! messages.
//!
//! # Error Codes
//!
//! Evaluation errors (`EvalError`):
//!
//! - E001: `UnexpectedChar` (Unexpected character in expression)
//! - E002: `UnexpectedEnd` (Expression ended early)
//! - E003: `DivisionByZero` (Division by zero)
//! - E004: `TrailingInput` (Unparsed input after expression)
//! - E005: `EmptyExpression` (Empty expression)
//! - E006: `TooComplex` (Too many operators or parentheses)
//!
//! Validation errors (`ValidationError`):
//!
//! - V001: `WrongLength`
//! - V002: `InvalidCharacters`
//! - V003: `EqualsCount`
//! - V004: `InvalidFormat`
//! - V005: `InvalidSyntax`
//! - V006: `LeadingZero`
//! - V007: `InvalidEquation` (wraps an `EvalError`)
//! - V008: `NonIntegerResult`
//! - V009: `DoesNotCompute`
//!
//! # Examples
//!
//! ```
//! use nerditt::errors::ValidationError;
//! use nerditt::validator::validate_equation;
//!
//! match validate_equation("12+34=47") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!         assert!(matches!(e, ValidationError::DoesNotCompute { .. }));
//!     }
//!     Ok(()) => unreachable!(),
//! }
//! ```

use nom::error::{ErrorKind, FromExternalError, ParseError as NomParseError};

/// Failure while parsing or evaluating an arithmetic expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("Unexpected character '{found}' in expression")]
    UnexpectedChar { found: char },

    #[error("Expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Unexpected input after expression: \"{rest}\"")]
    TrailingInput { rest: String },

    #[error("Empty expression")]
    EmptyExpression,

    #[error("Expression is too complex (more than {limit} operators and parentheses)")]
    TooComplex { limit: usize },
}

impl<'a> NomParseError<&'a str> for Box<EvalError> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        match input.chars().next() {
            Some(found) => Box::new(EvalError::UnexpectedChar { found }),
            None => Box::new(EvalError::UnexpectedEnd),
        }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> FromExternalError<&'a str, EvalError> for Box<EvalError> {
    fn from_external_error(_input: &'a str, _kind: ErrorKind, e: EvalError) -> Self {
        Box::new(e)
    }
}

impl EvalError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            EvalError::UnexpectedChar { .. } => "E001",
            EvalError::UnexpectedEnd => "E002",
            EvalError::DivisionByZero => "E003",
            EvalError::TrailingInput { .. } => "E004",
            EvalError::EmptyExpression => "E005",
            EvalError::TooComplex { .. } => "E006",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            EvalError::UnexpectedChar { .. } => "Unexpected character in expression",
            EvalError::UnexpectedEnd => "Expression ended early",
            EvalError::DivisionByZero => "Division by zero",
            EvalError::TrailingInput { .. } => "Unparsed input after expression",
            EvalError::EmptyExpression => "Empty expression",
            EvalError::TooComplex { .. } => "Too many operators or parentheses",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            EvalError::UnexpectedChar { .. } => "The parser found a character that cannot appear at this point of an expression, such as a '*' where a number was expected or a ')' with no matching '('.",
            EvalError::UnexpectedEnd => "The expression stops in the middle of a term: an operator, sign or '(' is not followed by an operand.",
            EvalError::DivisionByZero => "A division has a right-hand side that evaluates to zero.",
            EvalError::TrailingInput { .. } => "A complete expression was read, but characters remain after it (usually an unmatched ')').",
            EvalError::EmptyExpression => "The expression contains nothing but whitespace.",
            EvalError::TooComplex { .. } => "Each operator, sign and parenthesis adds a level to the parse, so expressions with too many of them are refused before parsing.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            EvalError::UnexpectedChar { .. } => Some("Expressions use digits, + - * / and parentheses, e.g. '12+3*4'"),
            EvalError::UnexpectedEnd => Some("Every operator needs a number after it, e.g. '1+2' rather than '1+'"),
            EvalError::DivisionByZero => Some("Divide by a non-zero number"),
            EvalError::TrailingInput { .. } => Some("Check that every ')' has a matching '('"),
            EvalError::EmptyExpression => Some("Example: '12+34'"),
            EvalError::TooComplex { .. } => Some("Equations need only a few operators, e.g. '2*3+4'"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Why a candidate string is not an acceptable equation.
///
/// The `Display` text of each variant is the user-facing reason.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Equation must be {expected} characters long")]
    WrongLength { expected: usize, actual: usize },

    #[error("Invalid characters")]
    InvalidCharacters,

    #[error("Must contain exactly one \"=\"")]
    EqualsCount { count: usize },

    #[error("Invalid format")]
    InvalidFormat,

    #[error("Invalid syntax")]
    InvalidSyntax,

    #[error("Leading zeros are not allowed")]
    LeadingZero { token: String },

    #[error("Invalid equation")]
    InvalidEquation(#[source] Box<EvalError>),

    #[error("Result must be an integer")]
    NonIntegerResult { value: f64 },

    #[error("Equation does not compute")]
    DoesNotCompute { lhs: i64, rhs: i64 },
}

impl From<Box<EvalError>> for ValidationError {
    fn from(e: Box<EvalError>) -> Self {
        ValidationError::InvalidEquation(e)
    }
}

impl ValidationError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::WrongLength { .. } => "V001",
            ValidationError::InvalidCharacters => "V002",
            ValidationError::EqualsCount { .. } => "V003",
            ValidationError::InvalidFormat => "V004",
            ValidationError::InvalidSyntax => "V005",
            ValidationError::LeadingZero { .. } => "V006",
            ValidationError::InvalidEquation(_) => "V007",
            ValidationError::NonIntegerResult { .. } => "V008",
            ValidationError::DoesNotCompute { .. } => "V009",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ValidationError::WrongLength { .. } => "Wrong length",
            ValidationError::InvalidCharacters => "Illegal character",
            ValidationError::EqualsCount { .. } => "Wrong number of equals signs",
            ValidationError::InvalidFormat => "Empty side of the equation",
            ValidationError::InvalidSyntax => "Empty number token",
            ValidationError::LeadingZero { .. } => "Number with a leading zero",
            ValidationError::InvalidEquation(_) => "Left-hand side could not be evaluated",
            ValidationError::NonIntegerResult { .. } => "Left-hand side is not an integer",
            ValidationError::DoesNotCompute { .. } => "Both sides differ",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ValidationError::WrongLength { .. } => "Every guess has exactly the length of the puzzle equation.",
            ValidationError::InvalidCharacters => "Only the digits 0-9, the operators + - * / and '=' can be used.",
            ValidationError::EqualsCount { .. } => "An equation has exactly one '=' separating the expression from its result.",
            ValidationError::InvalidFormat => "Both the expression left of '=' and the result right of it must be non-empty.",
            ValidationError::InvalidSyntax => "Two operators are adjacent, or an operator starts or ends a side of the equation.",
            ValidationError::LeadingZero { .. } => "Numbers are written without leading zeros; '0' on its own is allowed.",
            ValidationError::InvalidEquation(_) => "The left-hand side could not be evaluated, for example because of a division by zero. This wraps an underlying evaluation error (see Evaluation Errors section for specific error codes).",
            ValidationError::NonIntegerResult { .. } => "The left-hand side evaluates to a fraction, but the result must be a whole number.",
            ValidationError::DoesNotCompute { .. } => "The left-hand side evaluates to a different number than the right-hand side.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ValidationError::WrongLength { .. } => Some("Example: '12+34=46'"),
            ValidationError::InvalidCharacters => Some("Allowed characters: 0123456789+-*/="),
            ValidationError::EqualsCount { .. } => Some("Example: '12+34=46' uses a single '='"),
            ValidationError::InvalidFormat => Some("Put an expression before '=' and a number after it"),
            ValidationError::InvalidSyntax => Some("Place a number between every pair of operators, e.g. '1+2+3=6'"),
            ValidationError::LeadingZero { .. } => Some("Write '7' instead of '07'"),
            ValidationError::NonIntegerResult { .. } => Some("Use divisions that come out even, e.g. '8/4' rather than '7/2'"),
            ValidationError::DoesNotCompute { .. } => Some("Check the arithmetic: '*' and '/' are applied before '+' and '-'"),
            ValidationError::InvalidEquation(_) => None, // EvalError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            ValidationError::InvalidEquation(ee) => {
                // delegate to EvalError's detailed display
                format!("{} ({})\n  caused by: {}", self, self.code(), ee.display_detailed())
            }
            ValidationError::DoesNotCompute { lhs, rhs } => format_error_with_code_and_help(
                &format!("{self}: left side is {lhs}, right side is {rhs}"),
                self.code(),
                self.help(),
            ),
            _ => format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
