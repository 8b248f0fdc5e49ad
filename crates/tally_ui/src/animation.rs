//! Display animations.
//!
//! Animations are sampled against the caller's clock instead of being
//! stepped every frame, so a front end that redraws only on input still
//! gets the correct value.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Smooth start and end (CSS `ease`-like).
    #[default]
    Ease,
    /// Exponential ease-out.
    ExponentialOut,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            // Smoothstep: 3t^2 - 2t^3
            Self::Ease => t * t * (3.0 - 2.0 * t),
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }
}

/// A value animated from `from` to `to` over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    from: f32,
    to: f32,
    started: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Animation {
    /// Creates an idle animation resting at `to`.
    #[must_use]
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started: None,
            duration,
            easing,
        }
    }

    /// Fade from transparent to opaque.
    #[must_use]
    pub fn fade_in(duration: Duration, easing: Easing) -> Self {
        Self::new(0.0, 1.0, duration, easing)
    }

    /// Restarts the animation at `now`.
    pub fn restart(&mut self, now: Instant) {
        self.started = Some(now);
    }

    /// Progress in 0-1 at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return 1.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Value at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::Ease, Easing::ExponentialOut] {
            assert!(easing.apply(0.0).abs() < 1e-6, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        }
    }

    #[test]
    fn test_easing_shapes() {
        assert!((Easing::Linear.apply(0.25) - 0.25).abs() < 1e-6);
        assert!(Easing::Ease.apply(0.25) < 0.25);
        assert!(Easing::ExponentialOut.apply(0.25) > 0.8);
    }

    #[test]
    fn test_fade_in_progresses() {
        let t0 = Instant::now();
        let mut fade = Animation::fade_in(Duration::from_millis(300), Easing::Ease);
        assert!((fade.value(t0) - 1.0).abs() < 1e-6, "idle fade rests opaque");

        fade.restart(t0);
        assert!(fade.value(t0).abs() < 1e-6);
        let mid = fade.value(t0 + Duration::from_millis(150));
        assert!(mid > 0.4 && mid < 0.6, "midpoint {mid}");
        assert!(fade.progress(t0 + Duration::from_millis(299)) < 1.0);
        assert!((fade.progress(t0 + Duration::from_millis(300)) - 1.0).abs() < 1e-6);
        assert!((fade.value(t0 + Duration::from_secs(1)) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let t0 = Instant::now();
        let mut fade = Animation::fade_in(Duration::ZERO, Easing::Linear);
        fade.restart(t0);
        assert!((fade.value(t0) - 1.0).abs() < 1e-6);
    }
}
