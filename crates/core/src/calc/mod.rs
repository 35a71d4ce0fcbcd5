//! Safe arithmetic expression evaluation.
//!
//! Calculation records store a user-supplied expression string; the result
//! is derived server-side by this module. Expressions are tokenized,
//! parsed into an explicit [`Expr`] tree, and evaluated over `f64`. The
//! grammar is closed: numbers, `+ - * / % ^`, parentheses, unary minus,
//! the constants `pi` and `e`, and a fixed set of single-argument
//! functions. There is no identifier lookup beyond that set and no
//! statement syntax, so user input cannot reach anything outside this
//! module.

mod parser;
mod token;

pub use parser::{parse, BinaryOp, Constant, Expr, Function, UnaryOp};
pub use token::{tokenize, Token};

/// Maximum length of a calculation expression in characters.
pub const MAX_EXPRESSION_LENGTH: usize = 500;

/// Error produced while tokenizing, parsing, or evaluating an expression.
///
/// The `Display` text is what gets stored in a failed calculation's `error`
/// column, so messages are written for end users.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    #[error("expression is empty")]
    EmptyExpression,

    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),

    #[error("malformed number '{0}'")]
    MalformedNumber(String),

    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("expected '(' after function '{0}'")]
    ExpectedFunctionCall(String),

    #[error("expected ')'")]
    ExpectedClosingParen,

    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    NotFinite,
}

/// Validate a raw expression string before evaluation: non-empty and within
/// the length limit. Syntax errors are reported by [`evaluate`] instead --
/// they fail the enrichment, not the request.
pub fn validate_expression(expression: &str) -> Result<(), String> {
    if expression.trim().is_empty() {
        return Err("Expression cannot be empty".to_string());
    }
    if expression.chars().count() > MAX_EXPRESSION_LENGTH {
        return Err(format!(
            "Expression exceeds maximum length of {MAX_EXPRESSION_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Tokenize, parse, and evaluate an expression.
///
/// Non-finite results (overflow, `sqrt(-1)`, `ln(0)`) are rejected so the
/// stored result is always a plain decimal number.
pub fn evaluate(input: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(input)?;
    let expr = parse(tokens)?;
    let value = eval(&expr)?;
    if !value.is_finite() {
        return Err(CalcError::NotFinite);
    }
    Ok(value)
}

/// Format an evaluated value for storage: integral values print without a
/// fractional part (`4`, not `4.0`).
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // Collapses negative zero.
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Recursively evaluate a parsed expression tree.
fn eval(expr: &Expr) -> Result<f64, CalcError> {
    match expr {
        Expr::Number(n) => Ok(*n),
        Expr::Constant(c) => Ok(match c {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }),
        Expr::Unary { op, operand } => {
            let v = eval(operand)?;
            Ok(match op {
                UnaryOp::Neg => -v,
            })
        }
        Expr::Binary { op, lhs, rhs } => {
            let l = eval(lhs)?;
            let r = eval(rhs)?;
            match op {
                BinaryOp::Add => Ok(l + r),
                BinaryOp::Sub => Ok(l - r),
                BinaryOp::Mul => Ok(l * r),
                BinaryOp::Div => {
                    if r == 0.0 {
                        Err(CalcError::DivisionByZero)
                    } else {
                        Ok(l / r)
                    }
                }
                BinaryOp::Rem => {
                    if r == 0.0 {
                        Err(CalcError::DivisionByZero)
                    } else {
                        Ok(l % r)
                    }
                }
                BinaryOp::Pow => Ok(l.powf(r)),
            }
        }
        Expr::Call { func, arg } => {
            let v = eval(arg)?;
            Ok(match func {
                Function::Sqrt => v.sqrt(),
                Function::Abs => v.abs(),
                Function::Sin => v.sin(),
                Function::Cos => v.cos(),
                Function::Tan => v.tan(),
                Function::Ln => v.ln(),
                Function::Log => v.log10(),
                Function::Exp => v.exp(),
                Function::Floor => v.floor(),
                Function::Ceil => v.ceil(),
                Function::Round => v.round(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_str(input: &str) -> f64 {
        evaluate(input).expect("expression should evaluate")
    }

    #[test]
    fn evaluates_basic_arithmetic() {
        assert_eq!(eval_str("2+2"), 4.0);
        assert_eq!(eval_str("7 - 10"), -3.0);
        assert_eq!(eval_str("6*7"), 42.0);
        assert_eq!(eval_str("9/4"), 2.25);
        assert_eq!(eval_str("10 % 3"), 1.0);
    }

    #[test]
    fn respects_precedence_and_parentheses() {
        assert_eq!(eval_str("2+3*4"), 14.0);
        assert_eq!(eval_str("(2+3)*4"), 20.0);
        assert_eq!(eval_str("2*3^2"), 18.0);
        assert_eq!(eval_str("-2^2"), -4.0);
    }

    #[test]
    fn power_is_right_associative() {
        // 2^(3^2) = 512, not (2^3)^2 = 64.
        assert_eq!(eval_str("2^3^2"), 512.0);
    }

    #[test]
    fn exponent_may_be_signed() {
        assert_eq!(eval_str("2^-3"), 0.125);
        assert_eq!(eval_str("(-2)^2"), 4.0);
    }

    #[test]
    fn evaluates_functions_and_constants() {
        assert_eq!(eval_str("sqrt(16)"), 4.0);
        assert_eq!(eval_str("abs(-5)"), 5.0);
        assert!((eval_str("sin(0)")).abs() < 1e-12);
        assert!((eval_str("cos(pi)") + 1.0).abs() < 1e-12);
        assert!((eval_str("ln(e)") - 1.0).abs() < 1e-12);
        assert_eq!(eval_str("log(1000)"), 3.0);
        assert_eq!(eval_str("floor(2.9)"), 2.0);
        assert_eq!(eval_str("ceil(2.1)"), 3.0);
        assert_eq!(eval_str("round(2.5)"), 3.0);
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(evaluate("1/0"), Err(CalcError::DivisionByZero));
        assert_eq!(evaluate("5 % 0"), Err(CalcError::DivisionByZero));
        // Zero divisor reached through evaluation, not literally written.
        assert_eq!(evaluate("1/(2-2)"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn non_finite_results_are_rejected() {
        assert_eq!(evaluate("sqrt(-1)"), Err(CalcError::NotFinite));
        assert_eq!(evaluate("ln(0)"), Err(CalcError::NotFinite));
        assert_eq!(evaluate("10^1000"), Err(CalcError::NotFinite));
    }

    #[test]
    fn code_injection_payloads_cannot_parse() {
        // Shapes that would have executed under a full-language evaluator.
        assert!(evaluate("__import__('os').system('id')").is_err());
        assert!(evaluate("exec('print(1)')").is_err());
        assert!(evaluate("1; 2").is_err());
        assert!(evaluate("open(\"/etc/passwd\")").is_err());
    }

    #[test]
    fn unknown_identifiers_are_rejected() {
        assert_eq!(
            evaluate("foo(1)"),
            Err(CalcError::UnknownIdentifier("foo".to_string()))
        );
        assert_eq!(
            evaluate("x + 1"),
            Err(CalcError::UnknownIdentifier("x".to_string()))
        );
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert_eq!(evaluate(""), Err(CalcError::EmptyExpression));
        assert_eq!(evaluate("   "), Err(CalcError::EmptyExpression));
        assert!(evaluate("2 +").is_err());
        assert!(evaluate("(1 + 2").is_err());
        assert!(evaluate("1 2").is_err());
        assert!(evaluate("1..2").is_err());
    }

    #[test]
    fn formats_integral_and_fractional_results() {
        assert_eq!(format_value(eval_str("2+2")), "4");
        assert_eq!(format_value(eval_str("9/4")), "2.25");
        assert_eq!(format_value(eval_str("0-0")), "0");
        assert_eq!(format_value(eval_str("-6/2")), "-3");
    }

    #[test]
    fn validates_expression_length() {
        assert!(validate_expression("1+1").is_ok());
        assert!(validate_expression("").is_err());
        assert!(validate_expression(&"1+".repeat(251)).is_err());
    }
}
