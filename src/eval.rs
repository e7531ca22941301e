use crate::error::CalcError;
use crate::fraction::Fraction;
use crate::lex::{Token, TokenKind};

/// Interprets a postfix token sequence on one operand stack, consuming
/// it left to right exactly once. Number literals are parsed into
/// fractions here, not in the lexer.
///
/// Postcondition: exactly one value remains on the stack once the
/// queue is exhausted. An empty or over-full stack means the operator
/// and operand counts never matched, which includes trailing operands
/// after an otherwise complete expression.
pub fn evaluate_postfix(rpn: &[Token<'_>]) -> Result<Fraction, CalcError> {
    let mut stack: Vec<Fraction> = Vec::new();

    for token in rpn {
        match token.kind {
            TokenKind::Number => stack.push(token.literal.parse()?),

            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Caret => {
                // The right operand was pushed last.
                let (rhs, lhs) = match (stack.pop(), stack.pop()) {
                    (Some(rhs), Some(lhs)) => (rhs, lhs),
                    _ => return Err(CalcError::InsufficientOperands),
                };
                let value = match token.kind {
                    TokenKind::Plus => lhs + rhs,
                    TokenKind::Minus => lhs - rhs,
                    TokenKind::Star => lhs * rhs,
                    TokenKind::Slash => lhs.div(rhs)?,
                    TokenKind::Caret => {
                        if !rhs.is_integer() {
                            return Err(CalcError::NonIntegerExponent {
                                exponent: rhs.to_string(),
                            });
                        }
                        lhs.pow(rhs.numerator())?
                    }
                    _ => unreachable!(),
                };
                stack.push(value);
            }

            // Parentheses never survive to_postfix; seeing one here
            // means the caller skipped the rewrite.
            TokenKind::LeftParen | TokenKind::RightParen => {
                return Err(CalcError::MismatchedParentheses);
            }
        }
    }

    let result = stack.pop().ok_or(CalcError::InsufficientOperands)?;
    if !stack.is_empty() {
        return Err(CalcError::InsufficientOperands);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::tokenize;
    use crate::parse::to_postfix;

    fn eval(input: &str) -> Result<Fraction, CalcError> {
        evaluate_postfix(&to_postfix(tokenize(input)?)?)
    }

    #[test]
    fn operands_apply_in_source_order() {
        assert_eq!(eval("8-3").unwrap().to_string(), "5");
        assert_eq!(eval("8/2").unwrap().to_string(), "4");
    }

    #[test]
    fn literal_parsing_is_deferred_to_evaluation() {
        assert_eq!(eval("1/2+1/3").unwrap().to_string(), "5/6");
    }

    #[test]
    fn division_by_zero() {
        assert!(matches!(eval("5/0"), Err(CalcError::DivisionByZero)));
        assert!(matches!(eval("3/4/0"), Err(CalcError::DivisionByZero)));
        assert!(matches!(eval("1/(2-2)"), Err(CalcError::DivisionByZero)));
    }

    #[test]
    fn exponent_must_be_an_integer() {
        assert!(matches!(
            eval("2^(1/2)"),
            Err(CalcError::NonIntegerExponent { .. })
        ));
        // 4/2 reduces to the integer 2, so it is a valid exponent.
        assert_eq!(eval("3^(4/2)").unwrap().to_string(), "9");
    }

    #[test]
    fn operand_and_operator_counts_must_match() {
        assert!(matches!(eval("2+"), Err(CalcError::InsufficientOperands)));
        assert!(matches!(eval("+2"), Err(CalcError::InsufficientOperands)));
        assert!(matches!(eval("2 3"), Err(CalcError::InsufficientOperands)));
        assert!(matches!(eval(""), Err(CalcError::InsufficientOperands)));
    }

    #[test]
    fn stray_parens_in_postfix_input_are_rejected() {
        let tokens = tokenize("(2)").unwrap();
        // Fed directly, without the postfix rewrite.
        assert!(matches!(
            evaluate_postfix(&tokens),
            Err(CalcError::MismatchedParentheses)
        ));
    }
}
