//! Binary operators and their arithmetic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division. Fails on a zero divisor.
    Div,
}

impl Operator {
    /// All operators, in pad order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Symbol used in the expression trace.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "\u{2212}",
            Self::Mul => "\u{00d7}",
            Self::Div => "\u{00f7}",
        }
    }

    /// Short tag used by pad buttons and configuration files.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Sub => "minus",
            Self::Mul => "mul",
            Self::Div => "div",
        }
    }

    /// Applies the operator to two values.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] when dividing by exactly zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div => {
                if rhs == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a string names no operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator: {0:?}")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    /// Accepts pad tags (`plus`, `minus`, `mul`, `div`) and ASCII or trace symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plus" | "add" | "+" => Ok(Self::Add),
            "minus" | "sub" | "-" | "\u{2212}" => Ok(Self::Sub),
            "mul" | "*" | "\u{00d7}" => Ok(Self::Mul),
            "div" | "/" | "\u{00f7}" => Ok(Self::Div),
            other => Err(UnknownOperator(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), Ok(8.0));
        assert_eq!(Operator::Sub.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operator::Mul.apply(5.0, 3.0), Ok(15.0));
        assert_eq!(Operator::Div.apply(6.0, 3.0), Ok(2.0));
    }

    #[test]
    fn test_divide_by_zero_is_error() {
        assert_eq!(Operator::Div.apply(1.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Div.apply(0.0, -0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_parse_tags_and_symbols() {
        for op in Operator::ALL {
            assert_eq!(op.tag().parse::<Operator>(), Ok(op));
            assert_eq!(op.symbol().parse::<Operator>(), Ok(op));
        }
        assert!("modulo".parse::<Operator>().is_err());
    }
}
