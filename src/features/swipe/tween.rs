//! Fixed-duration eased animation
//!
//! Drives the commit slide (ease-in) and the confirmation indicator's
//! stroke drawing (linear). Evaluated at absolute instants like
//! [`super::spring::Spring`].

use std::time::{Duration, Instant};

use super::Num;

/// Easing curve applied to tween progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Accelerating cubic curve, `t^3`
    EaseInCubic,
}

impl Easing {
    pub fn apply(self, t: Num) -> Num {
        match self {
            Easing::Linear => t,
            Easing::EaseInCubic => t * t * t,
        }
    }
}

/// One-shot tween from `from` to `to` over a fixed duration
#[derive(Debug, Clone)]
pub struct Tween {
    from: Num,
    to: Num,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(from: Num, to: Num, duration: Duration, easing: Easing, start: Instant) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Raw progress in [0, 1] at an absolute instant.
    pub fn progress(&self, now: Instant) -> Num {
        if now <= self.start {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        ((now - self.start).as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Interpolated value at an absolute instant.
    pub fn value(&self, now: Instant) -> Num {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.start + self.duration
    }

    pub fn target(&self) -> Num {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_endpoints() {
        let start = Instant::now();
        let tween = Tween::new(
            250.0,
            480.0,
            Duration::from_millis(150),
            Easing::EaseInCubic,
            start,
        );

        assert_eq!(tween.value(start), 250.0);
        assert!(!tween.is_finished(start));

        let end = start + Duration::from_millis(150);
        assert_eq!(tween.value(end), 480.0);
        assert!(tween.is_finished(end));

        // Holds the target afterwards
        assert_eq!(tween.value(end + Duration::from_millis(500)), 480.0);
    }

    #[test]
    fn test_ease_in_lags_linear() {
        let start = Instant::now();
        let duration = Duration::from_millis(150);
        let eased = Tween::new(0.0, 1.0, duration, Easing::EaseInCubic, start);
        let linear = Tween::new(0.0, 1.0, duration, Easing::Linear, start);

        for ms in [30u64, 75, 120] {
            let at = start + Duration::from_millis(ms);
            assert!(
                eased.value(at) < linear.value(at),
                "ease-in must trail the linear ramp mid-flight at {ms}ms"
            );
        }
    }

    #[test]
    fn test_linear_midpoint() {
        let start = Instant::now();
        let tween = Tween::new(0.0, 1.0, Duration::from_millis(200), Easing::Linear, start);
        let mid = tween.value(start + Duration::from_millis(100));
        assert!(
            (mid - 0.5).abs() < 1e-9,
            "linear tween must be half way at half time, got {mid}"
        );
    }

    #[test]
    fn test_progress_is_clamped() {
        let start = Instant::now();
        let tween = Tween::new(0.0, 1.0, Duration::from_millis(100), Easing::Linear, start);
        assert_eq!(tween.progress(start), 0.0);
        assert_eq!(tween.progress(start + Duration::from_secs(5)), 1.0);
    }
}
