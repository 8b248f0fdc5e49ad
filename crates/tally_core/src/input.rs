//! Discrete input events consumed by the engine.
//!
//! Inputs are decoupled from where they came from: a pad button, a key
//! press, or a line in a test all end up as the same [`Input`].

use std::fmt;
use std::str::FromStr;

use crate::operator::Operator;

/// A single decimal digit (0-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Word names of the digits, indexed by value.
    pub const NAMES: [&'static str; 10] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ];

    /// Creates a digit from its value. Returns `None` above 9.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a digit from an ASCII character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|v| u8::try_from(v).ok()).and_then(Self::new)
    }

    /// Numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character of the digit.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Word name (`"zero"` … `"nine"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        Self::NAMES[self.0 as usize]
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// A digit was entered.
    Digit(Digit),
    /// The decimal separator was entered.
    DecimalPoint,
    /// An operator was chosen.
    Operator(Operator),
    /// Evaluate the pending expression.
    Equals,
    /// Reset everything.
    Clear,
    /// Delete the last character of the current operand.
    Backspace,
}

impl Input {
    /// Canonical command name, accepted back by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Digit(d) => d.name(),
            Self::DecimalPoint => "decimal",
            Self::Operator(op) => op.tag(),
            Self::Equals => "equal",
            Self::Clear => "clear",
            Self::Backspace => "backspace",
        }
    }
}

impl From<Digit> for Input {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operator> for Input {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

/// Error returned when a string names no input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown command: {0:?}")]
pub struct UnknownCommand(pub String);

impl FromStr for Input {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(index) = Digit::NAMES.iter().position(|name| *name == s) {
            return u8::try_from(index)
                .ok()
                .and_then(Digit::new)
                .map(Self::Digit)
                .ok_or_else(|| UnknownCommand(s.to_owned()));
        }
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(digit) = Digit::from_char(c) {
                return Ok(Self::Digit(digit));
            }
        }
        match s {
            "decimal" | "." => Ok(Self::DecimalPoint),
            "equal" | "equals" | "=" => Ok(Self::Equals),
            "clear" => Ok(Self::Clear),
            "backspace" => Ok(Self::Backspace),
            other => other
                .parse::<Operator>()
                .map(Self::Operator)
                .map_err(|_| UnknownCommand(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bounds() {
        assert!(Digit::new(9).is_some());
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::from_char('7').map(Digit::value), Some(7));
        assert!(Digit::from_char('x').is_none());
    }

    #[test]
    fn test_command_names_round_trip() {
        let inputs = [
            Input::Digit(Digit(0)),
            Input::Digit(Digit(9)),
            Input::DecimalPoint,
            Input::Operator(Operator::Div),
            Input::Equals,
            Input::Clear,
            Input::Backspace,
        ];
        for input in inputs {
            assert_eq!(input.name().parse::<Input>(), Ok(input));
        }
    }

    #[test]
    fn test_symbols_parse() {
        assert_eq!("5".parse::<Input>(), Ok(Input::Digit(Digit(5))));
        assert_eq!("*".parse::<Input>(), Ok(Input::Operator(Operator::Mul)));
        assert_eq!("=".parse::<Input>(), Ok(Input::Equals));
        assert!("percent".parse::<Input>().is_err());
    }
}
