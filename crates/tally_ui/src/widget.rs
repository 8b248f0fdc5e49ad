//! The calculator widget.
//!
//! Glues the engine session to its input sources (pad clicks and key
//! presses) and to its presentation (press highlight, readout fade-in,
//! text frames). All methods take the caller's `now`; the widget never
//! reads a clock itself.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tally_core::{Display, EngineConfig, Input, Phase, Session};

use crate::animation::{Animation, Easing};
use crate::button::PadButton;
use crate::feedback::PressFeedback;
use crate::input::KeyEvent;
use crate::keymap::Keymap;
use crate::render::Frame;

/// Widget timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// How long a pressed button stays highlighted (ms).
    pub press_highlight_ms: u64,
    /// Fade-in duration of a new readout value (ms).
    pub fade_in_ms: u64,
    /// Fade-in curve.
    pub fade_easing: Easing,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            press_highlight_ms: 200,
            fade_in_ms: 300,
            fade_easing: Easing::default(),
        }
    }
}

/// A calculator widget: engine, keymap and visual state.
#[derive(Debug, Clone)]
pub struct CalculatorWidget {
    session: Session,
    keymap: Keymap,
    feedback: PressFeedback,
    fade: Animation,
}

impl CalculatorWidget {
    /// Creates a widget.
    #[must_use]
    pub fn new(engine: EngineConfig, config: WidgetConfig, keymap: Keymap) -> Self {
        Self {
            session: Session::new(engine),
            keymap,
            feedback: PressFeedback::new(Duration::from_millis(config.press_highlight_ms)),
            fade: Animation::fade_in(
                Duration::from_millis(config.fade_in_ms),
                config.fade_easing,
            ),
        }
    }

    /// Handles a click on a pad button.
    pub fn click(&mut self, button: PadButton, now: Instant) -> &Display {
        tracing::debug!(button = %button, kind = ?button.kind(), "button pressed");
        self.feedback.press(button, now);
        self.dispatch(button.input(), now)
    }

    /// Handles a click on the element with the given class name.
    ///
    /// Elements that are not pad buttons are ignored.
    pub fn click_class(&mut self, class_name: &str, now: Instant) -> &Display {
        match PadButton::from_class_name(class_name) {
            Some(button) => self.click(button, now),
            None => self.session.display(),
        }
    }

    /// Handles a key press. Unbound keys are ignored.
    pub fn key_down(&mut self, event: KeyEvent, now: Instant) -> &Display {
        let Some(input) = self.keymap.lookup(event) else {
            tracing::trace!(key = %event.key, "unbound key");
            return self.session.display();
        };
        tracing::debug!(key = %event.key, input = input.name(), "key pressed");
        if let Some(button) = PadButton::for_input(input) {
            self.feedback.press(button, now);
        }
        self.dispatch(input, now)
    }

    /// Fires due timers. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let released = self.feedback.tick(now);
        let reset = match self.session.advance(now) {
            Some(shown) => {
                tracing::debug!(primary = %shown.primary, "automatic reset");
                self.fade.restart(now);
                true
            }
            None => false,
        };
        released || reset
    }

    /// Earliest deadline at which [`Self::tick`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.session.next_deadline(), self.feedback.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Snapshot for rendering.
    #[must_use]
    pub fn frame(&self, now: Instant) -> Frame {
        let display = self.session.display();
        let lit = PadButton::layout()
            .into_iter()
            .flatten()
            .filter(|b| self.feedback.is_lit(*b))
            .collect();
        Frame {
            secondary: display.secondary.clone(),
            primary: display.primary.clone(),
            primary_opacity: self.fade.value(now),
            lit,
        }
    }

    /// Current display.
    #[must_use]
    pub fn display(&self) -> &Display {
        self.session.display()
    }

    /// Current engine phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    fn dispatch(&mut self, input: Input, now: Instant) -> &Display {
        let before = self.session.display().primary.clone();
        let display = self.session.handle(input, now);
        if display.primary != before {
            self.fade.restart(now);
        }
        self.session.display()
    }
}

impl Default for CalculatorWidget {
    fn default() -> Self {
        Self::new(EngineConfig::default(), WidgetConfig::default(), Keymap::default())
    }
}
