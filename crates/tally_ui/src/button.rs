//! Calculator pad buttons.
//!
//! Buttons are identified by their class names (`seven`, `plus`, `equal`,
//! …). Each belongs to one of two kinds, number keys or operator keys,
//! and issues exactly one engine input.

use std::fmt;

use tally_core::{Digit, Input, Operator};

/// Button kind, used for styling and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Digits and the decimal point.
    Num,
    /// Operators, equals and clear.
    Operator,
}

/// A button on the calculator pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadButton {
    /// Digit key.
    Digit(Digit),
    /// Decimal point key.
    Decimal,
    /// Operator key.
    Operator(Operator),
    /// Equals key.
    Equal,
    /// Clear key.
    Clear,
}

impl PadButton {
    /// Rows of the pad, top to bottom.
    #[must_use]
    pub fn layout() -> Vec<Vec<Self>> {
        let digit = |v| Digit::new(v).map_or(Self::Decimal, Self::Digit);
        vec![
            vec![
                Self::Clear,
                Self::Operator(Operator::Div),
                Self::Operator(Operator::Mul),
                Self::Operator(Operator::Sub),
            ],
            vec![digit(7), digit(8), digit(9), Self::Operator(Operator::Add)],
            vec![digit(4), digit(5), digit(6), Self::Equal],
            vec![digit(1), digit(2), digit(3), Self::Decimal],
            vec![digit(0)],
        ]
    }

    /// Parses a class name. Unknown names yield `None`.
    #[must_use]
    pub fn from_class_name(name: &str) -> Option<Self> {
        if let Some(value) = Digit::NAMES.iter().position(|n| *n == name) {
            return u8::try_from(value).ok().and_then(Digit::new).map(Self::Digit);
        }
        match name {
            "decimal" => Some(Self::Decimal),
            "equal" => Some(Self::Equal),
            "clear" => Some(Self::Clear),
            other => other.parse::<Operator>().ok().map(Self::Operator),
        }
    }

    /// Class name of the button.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Digit(d) => d.name(),
            Self::Decimal => "decimal",
            Self::Operator(op) => op.tag(),
            Self::Equal => "equal",
            Self::Clear => "clear",
        }
    }

    /// Button kind.
    #[must_use]
    pub fn kind(self) -> ButtonKind {
        match self {
            Self::Digit(_) | Self::Decimal => ButtonKind::Num,
            Self::Operator(_) | Self::Equal | Self::Clear => ButtonKind::Operator,
        }
    }

    /// Face label.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_owned(),
            Self::Operator(op) => op.symbol().to_owned(),
            Self::Equal => "=".to_owned(),
            Self::Clear => "C".to_owned(),
        }
    }

    /// Engine input issued by a click.
    #[must_use]
    pub fn input(self) -> Input {
        match self {
            Self::Digit(d) => Input::Digit(d),
            Self::Decimal => Input::DecimalPoint,
            Self::Operator(op) => Input::Operator(op),
            Self::Equal => Input::Equals,
            Self::Clear => Input::Clear,
        }
    }

    /// Button that issues `input`, if the pad has one.
    #[must_use]
    pub fn for_input(input: Input) -> Option<Self> {
        match input {
            Input::Digit(d) => Some(Self::Digit(d)),
            Input::DecimalPoint => Some(Self::Decimal),
            Input::Operator(op) => Some(Self::Operator(op)),
            Input::Equals => Some(Self::Equal),
            Input::Clear => Some(Self::Clear),
            Input::Backspace => None,
        }
    }
}

impl fmt::Display for PadButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}
