//! Exact-fraction expression evaluation.
//!
//! The pipeline is strictly linear and stateless:
//! string -> tokens ([`lex`]) -> postfix queue ([`parse`]) -> [`Fraction`]
//! ([`eval`]). Each stage is a pure function of its input and fails fast
//! with a [`CalcError`]; no partial results are surfaced.

pub mod error;
pub mod eval;
pub mod fraction;
pub mod lex;
pub mod parse;

pub use error::CalcError;
pub use eval::evaluate_postfix;
pub use fraction::Fraction;
pub use lex::{Lexer, Token, TokenKind, tokenize};
pub use parse::to_postfix;

/// Runs the full pipeline on one expression string.
pub fn evaluate(expression: &str) -> Result<Fraction, CalcError> {
    let tokens = lex::tokenize(expression)?;
    let rpn = parse::to_postfix(tokens)?;
    eval::evaluate_postfix(&rpn)
}

#[cfg(test)]
mod tests_pipeline;
