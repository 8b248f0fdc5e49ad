//! # Calculator Error Types
//!
//! All errors that can occur while evaluating an expression.

use thiserror::Error;

/// Errors that can occur in the calculator engine.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// The divisor of a division was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl CalcError {
    /// Message shown on the primary display while the error is active.
    #[must_use]
    pub const fn display_message(self) -> &'static str {
        match self {
            Self::DivisionByZero => "Divide by 0",
        }
    }
}

/// Result type for arithmetic evaluation.
pub type CalcResult<T> = Result<T, CalcError>;
