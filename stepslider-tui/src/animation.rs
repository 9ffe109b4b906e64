//! Knob snap animation — fixed short duration, ease-in-out, interruptible.
//!
//! Time is passed in explicitly so the curve can be sampled
//! deterministically in tests.

use std::time::{Duration, Instant};

/// Duration of one snap transition.
pub const SNAP_DURATION: Duration = Duration::from_millis(100);

/// Cubic ease-in-out over `t` in `[0, 1]`.
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// One knob transition from a track x toward the snapped position.
#[derive(Debug, Clone, Copy)]
pub struct SnapAnimation {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl SnapAnimation {
    pub fn new(from: f64, to: f64, now: Instant) -> Self {
        Self {
            from,
            to,
            started: now,
            duration: SNAP_DURATION,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Knob x at `now`.
    pub fn position(&self, now: Instant) -> f64 {
        self.from + (self.to - self.from) * ease_in_out(self.progress(now))
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interrupt toward a new target, starting from wherever the knob is
    /// currently drawn.
    pub fn retarget(&self, to: f64, now: Instant) -> Self {
        Self::new(self.position(now), to, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_hits_both_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut previous = 0.0;
        for i in 1..=100 {
            let value = ease_in_out(i as f64 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn position_interpolates_from_start_to_target() {
        let start = Instant::now();
        let animation = SnapAnimation::new(10.0, 20.0, start);

        assert_eq!(animation.position(start), 10.0);
        assert!(!animation.is_finished(start));

        let midway = start + SNAP_DURATION / 2;
        assert!((animation.position(midway) - 15.0).abs() < 1e-9);

        let done = start + SNAP_DURATION;
        assert_eq!(animation.position(done), 20.0);
        assert!(animation.is_finished(done));
    }

    #[test]
    fn position_saturates_past_the_end() {
        let start = Instant::now();
        let animation = SnapAnimation::new(0.0, 50.0, start);
        let late = start + SNAP_DURATION * 3;
        assert_eq!(animation.position(late), 50.0);
    }

    #[test]
    fn retarget_starts_from_the_displayed_position() {
        let start = Instant::now();
        let animation = SnapAnimation::new(0.0, 100.0, start);
        let midway = start + SNAP_DURATION / 2;
        let displayed = animation.position(midway);

        let retargeted = animation.retarget(0.0, midway);
        assert_eq!(retargeted.position(midway), displayed);
        assert_eq!(retargeted.target(), 0.0);
        assert!(retargeted.is_finished(midway + SNAP_DURATION));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The eased position never overshoots its endpoints.
            #[test]
            fn position_stays_between_the_endpoints(
                from in -100.0..100.0_f64,
                to in -100.0..100.0_f64,
                fraction in 0.0..=1.0_f64,
            ) {
                let start = Instant::now();
                let animation = SnapAnimation::new(from, to, start);
                let at = start + SNAP_DURATION.mul_f64(fraction);
                let position = animation.position(at);
                let (low, high) = if from <= to { (from, to) } else { (to, from) };
                prop_assert!(position >= low - 1e-9);
                prop_assert!(position <= high + 1e-9);
            }
        }
    }
}
