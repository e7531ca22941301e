use std::fmt::Display;

use miette::{NamedSource, SourceSpan};

use crate::error::CalcError;

/// A lexical token borrowing its text from the input expression. A
/// `Number` token keeps the raw `-?digits(/digits)?` substring; it is
/// only parsed into a [`Fraction`](crate::Fraction) at evaluation time,
/// so diagnostics can reuse the literal verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'de> {
    pub kind: TokenKind,
    pub literal: &'de str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LeftParen,
    RightParen,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lit = self.literal;
        match self.kind {
            TokenKind::Number => write!(f, "NUMBER {lit}"),
            TokenKind::Plus => write!(f, "PLUS {lit}"),
            TokenKind::Minus => write!(f, "MINUS {lit}"),
            TokenKind::Star => write!(f, "STAR {lit}"),
            TokenKind::Slash => write!(f, "SLASH {lit}"),
            TokenKind::Caret => write!(f, "CARET {lit}"),
            TokenKind::LeftParen => write!(f, "LEFT_PAREN {lit}"),
            TokenKind::RightParen => write!(f, "RIGHT_PAREN {lit}"),
        }
    }
}

/// Single-pass scanner over one expression string. Implements
/// `Iterator`, yielding tokens left to right and stopping at the first
/// character outside the grammar.
pub struct Lexer<'de> {
    whole: &'de str,
    rest: &'de str,
    byte: usize,
    /// Whether the next token sits where an operand is expected: at the
    /// start of the input, after `(`, or after an operator. Only there
    /// does a `-` followed by a digit sign a number literal; everywhere
    /// else `-` is the binary operator.
    expect_operand: bool,
}

impl<'de> Lexer<'de> {
    pub fn new(input: &'de str) -> Self {
        Lexer {
            whole: input,
            rest: input,
            byte: 0,
            expect_operand: true,
        }
    }

    fn invalid_character(&self, c: char) -> CalcError {
        CalcError::InvalidCharacter {
            src: NamedSource::new("expression", self.whole.to_string()),
            bad_bit: SourceSpan::from(self.byte - c.len_utf8()..self.byte),
            token: c,
        }
    }
}

impl<'de> Iterator for Lexer<'de> {
    type Item = Result<Token<'de>, CalcError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut chars = self.rest.chars();
            let c = chars.next()?;
            let literal = &self.rest[..c.len_utf8()];
            let cur = self.rest;
            self.rest = chars.as_str();
            self.byte += c.len_utf8();

            let starts_number = c.is_ascii_digit()
                || (c == '-'
                    && self.expect_operand
                    && self.rest.starts_with(|ch: char| ch.is_ascii_digit()));

            if starts_number {
                // Digits first, then at most one '/' is absorbed into the
                // literal, and only when a digit follows it immediately.
                // `3/4/0` therefore lexes as NUMBER(3/4) SLASH NUMBER(0),
                // and in `2/(1+1)` the '/' stays an operator.
                let body = &cur[c.len_utf8()..];
                let mut end = c.len_utf8()
                    + body
                        .find(|ch: char| !ch.is_ascii_digit())
                        .unwrap_or(body.len());
                if let Some(denominator) = cur[end..].strip_prefix('/') {
                    let digits = denominator
                        .find(|ch: char| !ch.is_ascii_digit())
                        .unwrap_or(denominator.len());
                    if digits > 0 {
                        end += 1 + digits;
                    }
                }

                let literal = &cur[..end];
                let extra_bytes = literal.len() - c.len_utf8();
                self.byte += extra_bytes;
                self.rest = &cur[end..];
                self.expect_operand = false;

                return Some(Ok(Token {
                    kind: TokenKind::Number,
                    literal,
                }));
            }

            let kind = match c {
                '(' => TokenKind::LeftParen,
                ')' => TokenKind::RightParen,
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Star,
                '/' => TokenKind::Slash,
                '^' => TokenKind::Caret,
                ' ' | '\r' | '\t' | '\n' => continue, // Skip whitespace
                c => return Some(Err(self.invalid_character(c))),
            };
            self.expect_operand = kind != TokenKind::RightParen;

            return Some(Ok(Token { kind, literal }));
        }
    }
}

/// Collects the whole token stream, failing on the first bad character.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, CalcError> {
    Lexer::new(input).collect()
}
