use std::fmt::Display;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::error::CalcError;

/// An exact rational number, always held in canonical form: the
/// denominator is positive and shares no factor with the numerator,
/// and zero is `0/1`. Operations return new values; nothing mutates
/// in place.
///
/// The components are plain `i64`; overflow is not guarded beyond what
/// the host type provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// Builds a canonical fraction, rejecting a zero denominator.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, CalcError> {
        if denominator == 0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    pub fn from_integer(numerator: i64) -> Self {
        Fraction {
            numerator,
            denominator: 1,
        }
    }

    /// Canonicalizes a ratio whose denominator is already known to be
    /// non-zero: the sign moves to the numerator, then both components
    /// are divided by their gcd.
    fn reduced(numerator: i64, denominator: i64) -> Self {
        debug_assert!(denominator != 0);
        let (numerator, denominator) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };
        let g = num_integer::gcd(numerator, denominator);
        Fraction {
            numerator: numerator / g,
            denominator: denominator / g,
        }
    }

    pub fn numerator(self) -> i64 {
        self.numerator
    }

    pub fn denominator(self) -> i64 {
        self.denominator
    }

    pub fn is_integer(self) -> bool {
        self.denominator == 1
    }

    /// Division fails on a zero divisor; otherwise it is multiplication
    /// by the reciprocal.
    pub fn div(self, other: Self) -> Result<Self, CalcError> {
        if other.numerator == 0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(Self::reduced(
            self.numerator * other.denominator,
            self.denominator * other.numerator,
        ))
    }

    /// Raises to an integer exponent. `x^0` is `1` for every `x`,
    /// including zero. A negative exponent takes the reciprocal of the
    /// positive power, which fails for zero.
    pub fn pow(self, exponent: i64) -> Result<Self, CalcError> {
        if exponent == 0 {
            return Ok(Self::from_integer(1));
        }
        let e = exponent.unsigned_abs() as u32;
        let raised = Self::reduced(self.numerator.pow(e), self.denominator.pow(e));
        if exponent > 0 {
            Ok(raised)
        } else if raised.numerator == 0 {
            Err(CalcError::DivisionByZero)
        } else {
            Ok(Self::reduced(raised.denominator, raised.numerator))
        }
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, other: Self) -> Self::Output {
        Self::reduced(
            self.numerator * other.denominator + other.numerator * self.denominator,
            self.denominator * other.denominator,
        )
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, other: Self) -> Self::Output {
        Self::reduced(
            self.numerator * other.denominator - other.numerator * self.denominator,
            self.denominator * other.denominator,
        )
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, other: Self) -> Self::Output {
        Self::reduced(
            self.numerator * other.numerator,
            self.denominator * other.denominator,
        )
    }
}

impl FromStr for Fraction {
    type Err = CalcError;

    /// Accepts `-?digits` or `-?digits/digits`, the same syntax
    /// `Display` produces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CalcError::MalformedNumber {
            literal: s.to_string(),
        };
        match s.split_once('/') {
            None => {
                let numerator = s.parse().map_err(|_| malformed())?;
                Ok(Self::from_integer(numerator))
            }
            Some((numerator, denominator)) => {
                let numerator = numerator.parse().map_err(|_| malformed())?;
                let denominator = denominator.parse().map_err(|_| malformed())?;
                Self::new(numerator, denominator)
            }
        }
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}
