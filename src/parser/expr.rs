use crate::equation_char::{EquationChar, OPERATOR_CHARS};
use crate::errors::EvalError;
use crate::operator::ArithmeticOperator;
use nom::{
    branch::alt,
    character::complete::{char, digit1, one_of},
    combinator::{cut, map, map_opt, map_res, verify},
    multi::many0,
    sequence::{preceded, terminated},
    IResult,
    Parser,
};
use std::fmt;
use std::str::FromStr;

/// Parser result type: input, output, with our custom `EvalError`
pub type PResult<'a, O> = IResult<&'a str, O, Box<EvalError>>;

/// Most operators plus parentheses an expression may hold.
///
/// Both the parser's recursion and the height of the resulting tree grow with
/// this count, so it bounds stack use for parsing, evaluating and dropping.
pub const MAX_NESTING: usize = 100;

/// A parsed arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Negate(Box<Expr>),
    Binary {
        op: ArithmeticOperator,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    // shaped for `Iterator::fold` over `(op, operand)` pairs
    fn binary(lhs: Expr, (op, rhs): (ArithmeticOperator, Expr)) -> Expr {
        Expr::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    /// Evaluate the tree with real-number arithmetic.
    ///
    /// # Errors
    /// `EvalError::DivisionByZero` if any divisor evaluates to zero.
    pub fn eval(&self) -> Result<f64, Box<EvalError>> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Negate(inner) => Ok(-inner.eval()?),
            Expr::Binary { op, lhs, rhs } => op.apply(lhs.eval()?, rhs.eval()?),
        }
    }
}

/// Fully parenthesized rendering, so the grouping the parser chose is visible.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Negate(inner) => write!(f, "(-{inner})"),
            Expr::Binary { op, lhs, rhs } => write!(f, "({lhs}{op}{rhs})"),
        }
    }
}

impl FromStr for Expr {
    type Err = Box<EvalError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_expression(s)
    }
}

/// Parse an arithmetic expression into an `Expr` tree.
///
/// Whitespace is stripped before parsing. The whole input must be consumed.
///
/// # Errors
/// - `EmptyExpression` if nothing but whitespace was given.
/// - `UnexpectedChar` / `UnexpectedEnd` for malformed input.
/// - `TrailingInput` if a complete expression is followed by more text.
/// - `TooComplex` beyond [`MAX_NESTING`] operators and parentheses.
pub fn parse_expression(raw: &str) -> Result<Expr, Box<EvalError>> {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(Box::new(EvalError::EmptyExpression));
    }
    let nesting = stripped
        .chars()
        .filter(|&c| c.is_operator() || matches!(c, '(' | ')'))
        .count();
    if nesting > MAX_NESTING {
        return Err(Box::new(EvalError::TooComplex { limit: MAX_NESTING }));
    }

    match expression(&stripped) {
        Ok(("", expr)) => Ok(expr),
        Ok((rest, _)) => Err(Box::new(EvalError::TrailingInput { rest: rest.to_string() })),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
        Err(nom::Err::Incomplete(_)) => Err(Box::new(EvalError::UnexpectedEnd)),
    }
}

// === Grammar ===
//
// expression := term (('+' | '-') term)*
// term       := factor (('*' | '/') factor)*
// factor     := number | '(' expression ')' | ('+' | '-') factor

fn expression(input: &'_ str) -> PResult<'_, Expr> {
    let (input, first) = term(input)?;
    let (input, rest) = many0((additive_op, cut(term))).parse(input)?;
    Ok((input, rest.into_iter().fold(first, Expr::binary)))
}

fn term(input: &'_ str) -> PResult<'_, Expr> {
    let (input, first) = factor(input)?;
    let (input, rest) = many0((multiplicative_op, cut(factor))).parse(input)?;
    Ok((input, rest.into_iter().fold(first, Expr::binary)))
}

fn factor(input: &'_ str) -> PResult<'_, Expr> {
    alt((number, parenthesized, signed)).parse(input)
}

fn number(input: &'_ str) -> PResult<'_, Expr> {
    map(map_opt(digit1, |digits: &str| digits.parse::<f64>().ok()), Expr::Number).parse(input)
}

fn parenthesized(input: &'_ str) -> PResult<'_, Expr> {
    preceded(char('('), cut(terminated(expression, char(')')))).parse(input)
}

fn signed(input: &'_ str) -> PResult<'_, Expr> {
    let (input, sign) = additive_op(input)?;
    let (input, operand) = cut(factor).parse(input)?;
    let expr = match sign {
        ArithmeticOperator::Sub => Expr::Negate(Box::new(operand)),
        _ => operand,
    };
    Ok((input, expr))
}

fn operator(input: &'_ str) -> PResult<'_, ArithmeticOperator> {
    map_res(one_of(OPERATOR_CHARS), ArithmeticOperator::try_from).parse(input)
}

fn additive_op(input: &'_ str) -> PResult<'_, ArithmeticOperator> {
    verify(operator, |op: &ArithmeticOperator| !op.is_multiplicative()).parse(input)
}

fn multiplicative_op(input: &'_ str) -> PResult<'_, ArithmeticOperator> {
    verify(operator, |op: &ArithmeticOperator| op.is_multiplicative()).parse(input)
}
