//! Tick-driven tweening for carousel transitions
//!
//! Transitions advance on a fixed frame tick that the application only
//! subscribes to while some widget reports `is_animating()`. The easing
//! math is pure and unit tested.

use std::time::Duration;

/// Frame tick interval for transition animation (~60 fps).
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Cubic ease-in-out over normalized progress `t` in [0, 1].
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Cubic ease-out over normalized progress `t` in [0, 1].
pub fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Easing curve selector for a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    InOut,
    Out,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Self::InOut => ease_in_out(t),
            Self::Out => ease_out(t),
        }
    }
}

/// A time-bounded interpolation between two values.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Advance by one frame; returns true while still running.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        !self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current eased value.
    pub fn value(&self) -> f32 {
        if self.is_done() {
            return self.to;
        }
        let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
    }

    #[test]
    fn test_easing_midpoint() {
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!(ease_out(0.5) > 0.5);
    }

    #[test]
    fn test_tween_starts_at_from() {
        let tween = Tween::new(2.0, 4.0, Duration::from_millis(500), Easing::InOut);
        assert_eq!(tween.value(), 2.0);
        assert!(!tween.is_done());
    }

    #[test]
    fn test_tween_completes() {
        let mut tween = Tween::new(0.0, 1.0, Duration::from_millis(500), Easing::Out);
        for _ in 0..40 {
            tween.advance(TICK_INTERVAL);
        }
        assert!(tween.is_done());
        assert_eq!(tween.value(), 1.0);
    }

    #[test]
    fn test_tween_zero_duration_is_done() {
        let tween = Tween::new(0.0, 3.0, Duration::ZERO, Easing::InOut);
        assert!(tween.is_done());
        assert_eq!(tween.value(), 3.0);
    }
}
