//! Enumerates candidate puzzle equations.
//!
//! Two shapes are produced, with non-negative whole results:
//! - `A op B = C`
//! - `A op B op C = D` (standard precedence)
//!
//! Every candidate of the requested length is run through the validator, so
//! everything returned is a guess the game would accept.

use std::collections::BTreeSet;

use crate::equation_char::EQUATION_LENGTH;
use crate::operator::ArithmeticOperator;
use crate::validator::validate_equation_of_length;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Exact length of every generated equation.
    pub length: usize,
    /// Largest operand tried in `A op B = C`.
    pub max_two_operand: u32,
    /// Largest operand tried in `A op B op C = D`.
    pub max_three_operand: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            length: EQUATION_LENGTH,
            max_two_operand: 999,
            max_three_operand: 20,
        }
    }
}

/// Every valid equation of `length` characters, sorted and deduplicated.
#[must_use]
pub fn generate_equations(length: usize) -> Vec<String> {
    generate_with(&GeneratorConfig { length, ..GeneratorConfig::default() })
}

#[must_use]
pub fn generate_with(config: &GeneratorConfig) -> Vec<String> {
    let mut found = BTreeSet::new();
    let mut keep = |lhs: String, result: i64| {
        if result < 0 {
            return;
        }
        let equation = format!("{lhs}={result}");
        if equation.len() == config.length && validate_equation_of_length(&equation, config.length).is_ok() {
            found.insert(equation);
        }
    };

    for a in 0..=i64::from(config.max_two_operand) {
        for b in 0..=i64::from(config.max_two_operand) {
            for op in ArithmeticOperator::ALL {
                if let Some(result) = apply_exact(a, op, b) {
                    keep(format!("{a}{op}{b}"), result);
                }
            }
        }
    }

    let max = i64::from(config.max_three_operand);
    for a in 0..=max {
        for b in 0..=max {
            for c in 0..=max {
                for op1 in ArithmeticOperator::ALL {
                    for op2 in ArithmeticOperator::ALL {
                        if let Some(result) = eval_three(a, op1, b, op2, c) {
                            keep(format!("{a}{op1}{b}{op2}{c}"), result);
                        }
                    }
                }
            }
        }
    }

    log::debug!("generated {} equations of length {}", found.len(), config.length);
    found.into_iter().collect()
}

/// Integer arithmetic; `None` for division by zero or an inexact quotient.
fn apply_exact(x: i64, op: ArithmeticOperator, y: i64) -> Option<i64> {
    match op {
        ArithmeticOperator::Add => x.checked_add(y),
        ArithmeticOperator::Sub => x.checked_sub(y),
        ArithmeticOperator::Mul => x.checked_mul(y),
        ArithmeticOperator::Div => (y != 0 && x % y == 0).then(|| x / y),
    }
}

// `a op1 b op2 c`, binding the multiplicative operator first
fn eval_three(a: i64, op1: ArithmeticOperator, b: i64, op2: ArithmeticOperator, c: i64) -> Option<i64> {
    if op2.is_multiplicative() && !op1.is_multiplicative() {
        apply_exact(a, op1, apply_exact(b, op2, c)?)
    } else {
        apply_exact(apply_exact(a, op1, b)?, op2, c)
    }
}
