use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Every way an evaluation can fail. The first error encountered is
/// terminal for the expression in progress; no stage retries.
#[derive(Error, Debug, Diagnostic)]
pub enum CalcError {
    #[error("Unexpected character '{token}'")]
    #[diagnostic(help(
        "expressions may only contain digits, `+ - * / ^`, parentheses and whitespace"
    ))]
    InvalidCharacter {
        #[source_code]
        src: NamedSource<String>,

        #[label("this character")]
        bad_bit: SourceSpan,

        token: char,
    },

    #[error("malformed number `{literal}`")]
    #[diagnostic(help("write whole numbers as `12` and fractions as `3/4`"))]
    MalformedNumber { literal: String },

    #[error("division by zero")]
    DivisionByZero,

    #[error("exponent `{exponent}` is not a whole number")]
    #[diagnostic(help("`^` only accepts integer exponents, like `2^3` or `2^-1`"))]
    NonIntegerExponent { exponent: String },

    #[error("mismatched parentheses")]
    #[diagnostic(help("every `(` must have a matching `)`"))]
    MismatchedParentheses,

    #[error("operators and operands do not match up")]
    #[diagnostic(help("every binary operator needs exactly two operands"))]
    InsufficientOperands,
}

impl CalcError {
    /// 1-based line of the offending character, for errors that carry a span.
    pub fn line(&self) -> Option<usize> {
        match self {
            // The span always starts on a char boundary; slicing up to it
            // (exclusive) stays valid even for a multibyte character.
            CalcError::InvalidCharacter { src, bad_bit, .. } => {
                Some(src.inner()[..bad_bit.offset()].split('\n').count())
            }
            _ => None,
        }
    }
}
