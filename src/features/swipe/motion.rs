//! One animatable scalar property
//!
//! A layer position or stroke progress is either holding still, riding a
//! tween, or riding a spring. Reading [`Motion::value`] at any instant
//! yields the currently rendered value, including mid-flight interpolation,
//! which is what restarted indicator animations continue from.

use std::time::Instant;

use super::Num;
use super::spring::Spring;
use super::tween::Tween;

/// An animatable scalar: still, tweening, or springing
#[derive(Debug, Clone)]
pub enum Motion {
    Still(Num),
    Tween(Tween),
    Spring(Spring),
}

impl Motion {
    pub fn still(value: Num) -> Self {
        Motion::Still(value)
    }

    /// Currently rendered value at an absolute instant.
    pub fn value(&self, now: Instant) -> Num {
        match self {
            Motion::Still(value) => *value,
            Motion::Tween(tween) => tween.value(now),
            Motion::Spring(spring) => spring.value(now),
        }
    }

    /// Final value this motion settles at.
    pub fn target(&self) -> Num {
        match self {
            Motion::Still(value) => *value,
            Motion::Tween(tween) => tween.target(),
            Motion::Spring(spring) => spring.target(),
        }
    }

    /// Whether an animation is still in flight at `now`.
    pub fn is_active(&self, now: Instant) -> bool {
        match self {
            Motion::Still(_) => false,
            Motion::Tween(tween) => !tween.is_finished(now),
            Motion::Spring(spring) => !spring.is_finished(now),
        }
    }

    /// Collapse a finished animation into a still value. No-op while the
    /// animation is in flight or for values already still.
    pub fn settle(&mut self, now: Instant) {
        if !matches!(self, Motion::Still(_)) && !self.is_active(now) {
            *self = Motion::Still(self.target());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::spring::SpringParams;
    use super::super::tween::Easing;
    use super::*;

    #[test]
    fn test_still_is_inert() {
        let motion = Motion::still(42.0);
        let now = Instant::now();
        assert_eq!(motion.value(now), 42.0);
        assert_eq!(motion.target(), 42.0);
        assert!(!motion.is_active(now));
    }

    #[test]
    fn test_tween_motion_reports_live_value() {
        let start = Instant::now();
        let mut motion = Motion::Tween(Tween::new(
            0.0,
            1.0,
            Duration::from_millis(200),
            Easing::Linear,
            start,
        ));

        let mid = start + Duration::from_millis(100);
        assert!(motion.is_active(mid));
        assert!((motion.value(mid) - 0.5).abs() < 1e-9);

        let end = start + Duration::from_millis(200);
        assert!(!motion.is_active(end));
        motion.settle(end);
        assert!(matches!(motion, Motion::Still(v) if v == 1.0));
    }

    #[test]
    fn test_settle_is_a_no_op_mid_flight() {
        let start = Instant::now();
        let mut motion = Motion::Spring(Spring::new(
            100.0,
            0.0,
            10.0,
            SpringParams::RETURN,
            start,
        ));

        let mid = start + Duration::from_millis(50);
        motion.settle(mid);
        assert!(
            matches!(motion, Motion::Spring(_)),
            "an in-flight spring must not be collapsed"
        );
    }
}
