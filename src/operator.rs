use crate::errors::EvalError;
use crate::operator::ArithmeticOperator::{Add, Div, Mul, Sub};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithmeticOperator {
    pub const ALL: [ArithmeticOperator; 4] = [Add, Sub, Mul, Div];

    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Add => '+',
            Sub => '-',
            Mul => '*',
            Div => '/',
        }
    }

    /// `*` and `/` bind tighter than `+` and `-`.
    #[must_use]
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Mul | Div)
    }

    /// Apply the operator with real-number semantics.
    ///
    /// # Errors
    /// `EvalError::DivisionByZero` if `self` is `Div` and `rhs` is zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, Box<EvalError>> {
        match self {
            Add => Ok(lhs + rhs),
            Sub => Ok(lhs - rhs),
            Mul => Ok(lhs * rhs),
            Div if rhs == 0.0 => Err(Box::new(EvalError::DivisionByZero)),
            Div => Ok(lhs / rhs),
        }
    }
}

impl TryFrom<char> for ArithmeticOperator {
    type Error = EvalError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        ArithmeticOperator::ALL
            .into_iter()
            .find(|op| op.as_char() == c)
            .ok_or(EvalError::UnexpectedChar { found: c })
    }
}

impl FromStr for ArithmeticOperator {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ArithmeticOperator::try_from(c),
            (Some(_), Some(extra)) => Err(EvalError::UnexpectedChar { found: extra }),
            (None, _) => Err(EvalError::UnexpectedEnd),
        }
    }
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_string() {
        assert_eq!(Add.to_string(), "+");
        assert_eq!(Sub.to_string(), "-");
        assert_eq!(Mul.to_string(), "*");
        assert_eq!(Div.to_string(), "/");
    }

    #[test]
    fn test_parse_all_operators() {
        for op in ArithmeticOperator::ALL {
            let parsed = op.to_string().parse::<ArithmeticOperator>().unwrap();
            assert_eq!(parsed, op);
        }
    }

    #[test]
    fn test_from_str_invalid_operators() {
        let invalid = vec!["", "=", "++", "x", " +", "%"];

        for input in invalid {
            let result = input.parse::<ArithmeticOperator>();
            assert!(result.is_err(), "Should reject invalid operator '{}'", input);
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(Add.apply(12.0, 34.0).unwrap(), 46.0);
        assert_eq!(Sub.apply(3.0, 5.0).unwrap(), -2.0);
        assert_eq!(Mul.apply(99.0, 9.0).unwrap(), 891.0);
        assert_eq!(Div.apply(7.0, 2.0).unwrap(), 3.5);
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(matches!(*Div.apply(1.0, 0.0).unwrap_err(), EvalError::DivisionByZero));
        assert!(matches!(*Div.apply(0.0, 0.0).unwrap_err(), EvalError::DivisionByZero));
    }

    #[test]
    fn test_precedence_classes() {
        assert!(Mul.is_multiplicative());
        assert!(Div.is_multiplicative());
        assert!(!Add.is_multiplicative());
        assert!(!Sub.is_multiplicative());
    }
}
