//! End-to-end pipeline tests: whole expression strings in, formatted
//! fractions (or error kinds) out.

use super::{CalcError, evaluate};

fn eval_ok(expr: &str) -> String {
    evaluate(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .to_string()
}

fn assert_exact_eq(expr: &str, expected: &str) {
    assert_eq!(eval_ok(expr), expected, "expr={expr:?}");
}

#[test]
fn precedence() {
    assert_exact_eq("2+3*4", "14");
    assert_exact_eq("2*3+4", "10");
    assert_exact_eq("2+3^2*4", "38");
}

#[test]
fn parentheses() {
    assert_exact_eq("(2+3)*4", "20");
    assert_exact_eq("2*(3+4)", "14");
    assert_exact_eq("((1+1))", "2");
}

#[test]
fn caret_is_right_associative() {
    assert_exact_eq("2^3^2", "512");
    assert_exact_eq("(2^3)^2", "64");
}

#[test]
fn exponents() {
    assert_exact_eq("2^-1", "1/2");
    assert_exact_eq("2^0", "1");
    assert_exact_eq("0^0", "1");
    assert_exact_eq("(2/3)^2", "4/9");
    assert_exact_eq("(2/3)^-2", "9/4");
}

#[test]
fn fraction_literal_arithmetic() {
    assert_exact_eq("1/2+1/3", "5/6");
    assert_exact_eq("(1/2+1/3)-5/6", "0");
    assert_exact_eq("2/3*3/4", "1/2");
    assert_exact_eq("1/2/1/4", "2");
    assert_exact_eq("8/(4)/2", "1");
}

#[test]
fn subtraction_between_adjacent_literals() {
    assert_exact_eq("5-3", "2");
    assert_exact_eq("5 - 3", "2");
    assert_exact_eq("-2+3", "1");
    assert_exact_eq("1--2", "3");
}

#[test]
fn results_are_canonical() {
    assert_exact_eq("2/4+2/4", "1");
    assert_exact_eq("1/3-2/3", "-1/3");
    assert_exact_eq("4/6", "2/3");
}

#[test]
fn whitespace_is_tolerated() {
    assert_exact_eq("  2 + 3\t* 4 ", "14");
}

#[test]
fn division_by_zero() {
    assert!(matches!(evaluate("5/0"), Err(CalcError::DivisionByZero)));
    assert!(matches!(evaluate("3/4/0"), Err(CalcError::DivisionByZero)));
    assert!(matches!(evaluate("0^-1"), Err(CalcError::DivisionByZero)));
}

#[test]
fn mismatched_parentheses() {
    assert!(matches!(
        evaluate("(2+3"),
        Err(CalcError::MismatchedParentheses)
    ));
    assert!(matches!(
        evaluate("2+3)"),
        Err(CalcError::MismatchedParentheses)
    ));
}

#[test]
fn non_integer_exponent() {
    assert!(matches!(
        evaluate("2^(1/2)"),
        Err(CalcError::NonIntegerExponent { .. })
    ));
}

#[test]
fn invalid_character() {
    assert!(matches!(
        evaluate("2+x"),
        Err(CalcError::InvalidCharacter { token: 'x', .. })
    ));
}

#[test]
fn incomplete_expressions() {
    assert!(matches!(
        evaluate("2+"),
        Err(CalcError::InsufficientOperands)
    ));
    assert!(matches!(
        evaluate("2 3"),
        Err(CalcError::InsufficientOperands)
    ));
    assert!(matches!(evaluate(""), Err(CalcError::InsufficientOperands)));
}
