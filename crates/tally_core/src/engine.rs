//! # Calculator Engine
//!
//! The input state machine behind the calculator widget.
//!
//! ## Phases
//!
//! ```text
//! Empty ──digit──> EnteringFirst ──op──> AwaitingSecond ──digit──> EnteringSecond
//!   ^                   ^                      ^                        │
//!   │                   │                      └──────op (chained)──────┤
//!   │                   └──────digit──── Result <────────equals─────────┘
//!   └──────(delay)────── Error <──── divide by zero (op or equals)
//! ```
//!
//! ## Timing
//!
//! The engine never sleeps. A division by zero returns
//! [`Effect::ScheduleClear`] and the caller fires the reset once the delay
//! has elapsed (see [`crate::session::Session`]).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::format::{format_number, parse_operand};
use crate::input::{Digit, Input};
use crate::operator::Operator;

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How long the error message stays up before the engine resets (ms).
    pub error_clear_ms: u64,
}

impl EngineConfig {
    /// Delay between a division by zero and the automatic reset.
    pub const DEFAULT_ERROR_CLEAR_MS: u64 = 1500;

    /// Error display duration as a [`Duration`].
    #[must_use]
    pub const fn error_clear_delay(&self) -> Duration {
        Duration::from_millis(self.error_clear_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            error_clear_ms: Self::DEFAULT_ERROR_CLEAR_MS,
        }
    }
}

/// The two strings pushed to the presentation layer after every event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Display {
    /// Main readout: the operand being typed, a result, or an error message.
    pub primary: String,
    /// Expression trace shown above the readout.
    pub secondary: String,
}

impl Display {
    /// Display of a freshly cleared engine.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            primary: "0".to_owned(),
            secondary: String::new(),
        }
    }
}

/// Deferred work requested by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Reset the engine once `after` has elapsed.
    ScheduleClear {
        /// Delay before the reset.
        after: Duration,
    },
}

/// Result of feeding one input to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Display after the input.
    pub display: Display,
    /// Deferred work, if any.
    pub effect: Option<Effect>,
}

/// Coarse phase of the state machine, derived from the operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Nothing entered.
    Empty,
    /// Typing the first operand.
    EnteringFirst,
    /// Operator chosen, second operand not started.
    AwaitingSecond,
    /// Typing the second operand.
    EnteringSecond,
    /// Showing the result of `equals`.
    Result,
    /// Showing an error until the scheduled reset fires.
    Error,
}

/// Operand and operator registers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalculatorState {
    current: String,
    pending: String,
    operator: Option<Operator>,
    awaiting_reset: bool,
}

impl CalculatorState {
    /// Operand being typed. Empty means no digits yet.
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    /// Operand committed before the pending operator.
    #[must_use]
    pub fn pending_operand(&self) -> &str {
        &self.pending
    }

    /// Operator awaiting its second operand.
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// True right after `equals`: the next digit starts a fresh operand.
    #[must_use]
    pub fn awaiting_reset(&self) -> bool {
        self.awaiting_reset
    }

    /// Expression trace for the current registers.
    fn trace(&self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }
        let mut trace = self.pending.clone();
        if let Some(op) = self.operator {
            trace.push(' ');
            trace.push_str(op.symbol());
            if !self.current.is_empty() && !self.awaiting_reset {
                trace.push(' ');
                trace.push_str(&self.current);
            }
        }
        trace
    }
}

/// Evaluates `lhs op rhs` on operand strings.
///
/// # Errors
///
/// Returns [`CalcError::DivisionByZero`] when `op` is division and `rhs` is zero.
pub fn evaluate(lhs: &str, op: Operator, rhs: &str) -> CalcResult<f64> {
    op.apply(parse_operand(lhs), parse_operand(rhs))
}

/// The calculator state machine.
///
/// One instance owns all calculator state. Every operation returns the
/// display the presentation layer should show next.
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Operand registers.
    state: CalculatorState,
    /// Configuration.
    config: EngineConfig,
    /// Last emitted display. No-op inputs re-emit it unchanged.
    display: Display,
    /// Set while an error is on screen and a reset is scheduled.
    error: Option<CalcError>,
}

impl Calculator {
    /// Creates a cleared calculator.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            state: CalculatorState::default(),
            config,
            display: Display::initial(),
            error: None,
        }
    }

    /// Returns the registers.
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the last emitted display.
    #[must_use]
    pub fn display(&self) -> &Display {
        &self.display
    }

    /// Returns the error currently on screen, if any.
    #[must_use]
    pub fn error(&self) -> Option<CalcError> {
        self.error
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        let state = &self.state;
        if self.error.is_some() {
            Phase::Error
        } else if state.awaiting_reset {
            Phase::Result
        } else if state.operator.is_some() {
            if state.current.is_empty() {
                Phase::AwaitingSecond
            } else {
                Phase::EnteringSecond
            }
        } else if state.current.is_empty() && state.pending.is_empty() {
            Phase::Empty
        } else {
            Phase::EnteringFirst
        }
    }

    /// Dispatches an input event.
    pub fn apply(&mut self, input: Input) -> Step {
        tracing::debug!(input = input.name(), phase = ?self.phase(), "calculator input");
        match input {
            Input::Digit(d) => self.digit(d),
            Input::DecimalPoint => self.decimal_point(),
            Input::Operator(op) => self.operator(op),
            Input::Equals => self.equals(),
            Input::Clear => self.clear(),
            Input::Backspace => self.backspace(),
        }
    }

    /// Enters a digit.
    pub fn digit(&mut self, digit: Digit) -> Step {
        let state = &mut self.state;
        if state.awaiting_reset {
            state.current = digit.to_string();
            state.awaiting_reset = false;
        } else if state.current == "0" {
            if digit.value() == 0 {
                return self.unchanged();
            }
            state.current = digit.to_string();
        } else {
            state.current.push(digit.as_char());
        }
        self.refresh()
    }

    /// Enters the decimal separator.
    pub fn decimal_point(&mut self) -> Step {
        let state = &mut self.state;
        if state.awaiting_reset {
            state.current = "0.".to_owned();
            state.awaiting_reset = false;
        } else if !state.current.contains('.') {
            if state.current.is_empty() {
                state.current.push('0');
            }
            state.current.push('.');
        }
        self.refresh()
    }

    /// Chooses an operator, evaluating a complete pending expression first.
    ///
    /// On division by zero the operator is discarded and a reset is scheduled.
    pub fn operator(&mut self, op: Operator) -> Step {
        if self.state.current.is_empty() && self.state.pending.is_empty() {
            return self.unchanged();
        }

        let chained = self
            .state
            .operator
            .filter(|_| !self.state.pending.is_empty() && !self.state.current.is_empty());

        if let Some(pending_op) = chained {
            match evaluate(&self.state.pending, pending_op, &self.state.current) {
                Ok(value) => {
                    self.state.pending = format_number(value);
                    self.state.current.clear();
                }
                Err(err) => return self.fail(err),
            }
        } else if !self.state.current.is_empty() {
            self.state.pending = std::mem::take(&mut self.state.current);
        }

        self.state.operator = Some(op);
        self.state.awaiting_reset = false;
        self.refresh()
    }

    /// Evaluates the pending expression.
    pub fn equals(&mut self) -> Step {
        let Some(op) = self.state.operator else {
            return self.unchanged();
        };
        if self.state.pending.is_empty() || self.state.current.is_empty() {
            return self.unchanged();
        }

        let value = match evaluate(&self.state.pending, op, &self.state.current) {
            Ok(value) => value,
            Err(err) => return self.fail(err),
        };

        let equation = format!(
            "{} {} {} =",
            self.state.pending,
            op.symbol(),
            self.state.current
        );
        self.state.current = format_number(value);
        self.state.pending.clear();
        self.state.operator = None;
        self.state.awaiting_reset = true;

        self.display = Display {
            primary: self.state.current.clone(),
            secondary: equation,
        };
        self.emit(None)
    }

    /// Deletes the last character of the current operand.
    pub fn backspace(&mut self) -> Step {
        if self.state.current.pop().is_none() {
            return self.unchanged();
        }
        self.refresh()
    }

    /// Resets every register.
    pub fn clear(&mut self) -> Step {
        self.state = CalculatorState::default();
        self.error = None;
        self.refresh()
    }

    /// Performs the reset scheduled by an error.
    pub fn clear_after_error(&mut self) -> Step {
        if let Some(err) = self.error {
            tracing::info!(error = %err, "error display expired, resetting");
        }
        self.clear()
    }

    /// Enters the error phase and requests a delayed reset.
    fn fail(&mut self, err: CalcError) -> Step {
        tracing::info!(
            error = %err,
            pending = %self.state.pending,
            current = %self.state.current,
            "evaluation failed"
        );
        self.error = Some(err);
        self.display.primary = err.display_message().to_owned();
        self.emit(Some(Effect::ScheduleClear {
            after: self.config.error_clear_delay(),
        }))
    }

    /// Re-renders the display from the registers.
    fn refresh(&mut self) -> Step {
        let primary = if self.state.current.is_empty() {
            "0".to_owned()
        } else {
            self.state.current.clone()
        };
        self.display = Display {
            primary,
            secondary: self.state.trace(),
        };
        self.emit(None)
    }

    fn unchanged(&self) -> Step {
        self.emit(None)
    }

    fn emit(&self, effect: Option<Effect>) -> Step {
        Step {
            display: self.display.clone(),
            effect,
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
