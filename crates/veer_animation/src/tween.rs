//! Retargetable timed tweens
//!
//! A [`Tween`] interpolates a single value over a fixed duration. Unlike a
//! queued animation system, pointing an active tween at a new target simply
//! restarts it from the value it currently shows - the overriding write is
//! the cancellation mechanism, and no sequence of pending animations exists.

use crate::easing::Easing;

/// A single-value timed transition
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
}

impl Tween {
    /// Create a tween from `from` to `to` over `duration_ms`.
    ///
    /// A non-positive duration produces a tween that is already finished at
    /// its target value.
    pub fn new(from: f32, to: f32, duration_ms: f32, easing: Easing) -> Self {
        let duration_ms = duration_ms.max(0.0);
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// The value the tween is heading toward
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Redirect the tween toward a new target, restarting from the current
    /// value with the same duration and easing. Last write wins.
    pub fn retarget(&mut self, to: f32) {
        tracing::trace!("tween retarget {:.1} -> {:.1}", self.to, to);
        self.from = self.value();
        self.to = to;
        self.elapsed_ms = 0.0;
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        if self.duration_ms <= 0.0 || self.elapsed_ms >= self.duration_ms {
            return self.to;
        }
        let progress = self.elapsed_ms / self.duration_ms;
        let eased = self.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }

    /// Advance the tween by delta time (in milliseconds)
    pub fn tick(&mut self, dt_ms: f32) {
        if self.is_finished() {
            return;
        }
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Jump straight to the target value
    pub fn finish(&mut self) {
        self.elapsed_ms = self.duration_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = Tween::new(0.0, 100.0, 200.0, Easing::Linear);
        assert_eq!(tween.value(), 0.0);
        tween.tick(100.0);
        assert!((tween.value() - 50.0).abs() < 1e-4);
        tween.tick(100.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 100.0);
    }

    #[test]
    fn test_overshooting_tick_clamps_at_target() {
        let mut tween = Tween::new(10.0, 20.0, 50.0, Easing::Ease);
        tween.tick(1000.0);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 20.0);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let tween = Tween::new(5.0, 9.0, 0.0, Easing::Linear);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 9.0);
    }

    #[test]
    fn test_retarget_restarts_from_current_value() {
        let mut tween = Tween::new(0.0, 100.0, 100.0, Easing::Linear);
        tween.tick(50.0);
        let midway = tween.value();
        assert!((midway - 50.0).abs() < 1e-4);

        tween.retarget(0.0);
        assert!(!tween.is_finished());
        assert!((tween.value() - midway).abs() < 1e-4);
        tween.tick(100.0);
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn test_finish_jumps_to_target() {
        let mut tween = Tween::new(0.0, 42.0, 500.0, Easing::EaseInOut);
        tween.finish();
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 42.0);
    }
}
