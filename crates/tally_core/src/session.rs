//! Engine plus the timer that executes its deferred effects.

use std::time::Instant;

use crate::engine::{Calculator, Display, Effect, EngineConfig, Phase};
use crate::input::Input;
use crate::timer::Timeline;

/// Transitions the session performs on its own once a deadline passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Reset after an error message has been shown long enough.
    ClearAfterError,
}

/// A calculator driven by an external clock.
///
/// Each error schedules its own reset; a reset scheduled earlier still
/// fires even if input arrived in the meantime.
#[derive(Debug, Clone)]
pub struct Session {
    calculator: Calculator,
    timeline: Timeline<Transition>,
}

impl Session {
    /// Creates a session around a cleared calculator.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            calculator: Calculator::new(config),
            timeline: Timeline::new(),
        }
    }

    /// Feeds one input and schedules any deferred effect relative to `now`.
    pub fn handle(&mut self, input: Input, now: Instant) -> Display {
        let step = self.calculator.apply(input);
        if let Some(Effect::ScheduleClear { after }) = step.effect {
            self.timeline.schedule(now + after, Transition::ClearAfterError);
        }
        step.display
    }

    /// Fires every transition due at `now`.
    ///
    /// Returns the new display if anything fired.
    pub fn advance(&mut self, now: Instant) -> Option<Display> {
        let due = self.timeline.drain_due(now);
        if due.is_empty() {
            return None;
        }
        let mut display = None;
        for transition in due {
            match transition {
                Transition::ClearAfterError => {
                    display = Some(self.calculator.clear_after_error().display);
                }
            }
        }
        display
    }

    /// Deadline of the next automatic transition.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timeline.next_deadline()
    }

    /// Current display.
    #[must_use]
    pub fn display(&self) -> &Display {
        self.calculator.display()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.calculator.phase()
    }

    /// The underlying calculator.
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
