use crate::error::CalcError;
use crate::lex::{Token, TokenKind};

fn precedence(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Caret => 4,
        TokenKind::Star | TokenKind::Slash => 3,
        TokenKind::Plus | TokenKind::Minus => 2,
        _ => 0,
    }
}

fn is_right_associative(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Caret)
}

fn is_operator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash | TokenKind::Caret
    )
}

/// Rewrites an infix token sequence into postfix (RPN) order with the
/// shunting-yard algorithm: one pass, one operator stack, one output
/// queue. Read left to right, the output is a postfix encoding of the
/// infix tree under `^` = 4 (right-associative), `*` `/` = 3 and
/// `+` `-` = 2 (left-associative).
pub fn to_postfix(tokens: Vec<Token<'_>>) -> Result<Vec<Token<'_>>, CalcError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token<'_>> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Number => output.push(token),

            TokenKind::LeftParen => operators.push(token),

            TokenKind::RightParen => loop {
                match operators.pop() {
                    Some(Token {
                        kind: TokenKind::LeftParen,
                        ..
                    }) => break,
                    Some(op) => output.push(op),
                    // Ran out of stack without finding the opener.
                    None => return Err(CalcError::MismatchedParentheses),
                }
            },

            _ => {
                while let Some(&top) = operators.last() {
                    // A '(' on the stack blocks popping.
                    if !is_operator(top.kind) {
                        break;
                    }
                    let outranks = if is_right_associative(token.kind) {
                        precedence(top.kind) > precedence(token.kind)
                    } else {
                        precedence(top.kind) >= precedence(token.kind)
                    };
                    if !outranks {
                        break;
                    }
                    operators.pop();
                    output.push(top);
                }
                operators.push(token);
            }
        }
    }

    while let Some(op) = operators.pop() {
        if op.kind == TokenKind::LeftParen {
            return Err(CalcError::MismatchedParentheses);
        }
        output.push(op);
    }

    Ok(output)
}
