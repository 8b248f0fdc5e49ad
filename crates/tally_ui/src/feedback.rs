//! Button press highlight.
//!
//! A pressed button stays highlighted for a short, fixed time. Pressing it
//! again while lit restarts the highlight.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tally_core::{Timeline, TimerId};

use crate::button::PadButton;

/// Tracks which pad buttons are currently lit.
#[derive(Debug, Clone)]
pub struct PressFeedback {
    hold: Duration,
    lit: HashMap<PadButton, TimerId>,
    releases: Timeline<PadButton>,
}

impl PressFeedback {
    /// Default highlight duration.
    pub const DEFAULT_HOLD: Duration = Duration::from_millis(200);

    /// Creates feedback with the given highlight duration.
    #[must_use]
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            lit: HashMap::new(),
            releases: Timeline::new(),
        }
    }

    /// Lights `button` until `now + hold`.
    pub fn press(&mut self, button: PadButton, now: Instant) {
        if let Some(previous) = self.lit.remove(&button) {
            self.releases.cancel(previous);
        }
        let id = self.releases.schedule(now + self.hold, button);
        self.lit.insert(button, id);
    }

    /// Releases every button whose highlight has expired.
    ///
    /// Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let released = self.releases.drain_due(now);
        for button in &released {
            self.lit.remove(button);
        }
        !released.is_empty()
    }

    /// Returns true while `button` is lit.
    #[must_use]
    pub fn is_lit(&self, button: PadButton) -> bool {
        self.lit.contains_key(&button)
    }

    /// Deadline of the next release.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.releases.next_deadline()
    }
}

impl Default for PressFeedback {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOLD)
    }
}
