//! Damped spring for the return-to-rest animation
//!
//! Uses a time-based analytical solution rather than frame-by-frame
//! integration: the solver closure is built once when the animation starts
//! and evaluated at any absolute instant after that.
//!
//! Overdamped condition: `1.0 <= damping / (2.0 * sqrt(stiffness * mass))`
//!
//! ### Overdamped formula
//! ```text
//! angular_frequency = -sqrt(stiffness / mass)
//! leftover = -angular_frequency * delta - velocity
//! position(t) = to - (delta + t * leftover) * e^(t * angular_frequency)
//! ```
//!
//! ### Underdamped formula
//! ```text
//! damping_frequency = sqrt(4 * mass * stiffness - damping^2)
//! leftover = (damping * delta - 2 * mass * velocity) / damping_frequency
//! dfm = 0.5 * damping_frequency / mass
//! dm = -0.5 * damping / mass
//! position(t) = to - (cos(t * dfm) * delta + sin(t * dfm) * leftover) * e^(t * dm)
//! ```

use std::f64::consts::E;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::Num;

/// Numerical derivative step size
const H: Num = 0.001;

/// Amplitude fraction below which the spring counts as settled (Core
/// Animation's 1/1000 convention).
const SETTLE_FRACTION: Num = 0.001;

/// Spring parameters for physics simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub mass: Num,
    pub damping: Num,
    pub stiffness: Num,
}

impl SpringParams {
    /// Return-to-rest spring for released and cancelled swipes
    pub const RETURN: Self = Self {
        mass: 1.0,
        damping: 17.0,
        stiffness: 300.0,
    };

    /// Check if overdamped: 1.0 <= damping / (2.0 * sqrt(stiffness * mass))
    pub fn is_overdamped(&self) -> bool {
        1.0 <= self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Time for the oscillation envelope to decay below [`SETTLE_FRACTION`]
    /// of the initial displacement. Used as the animation duration.
    pub fn settling_duration(&self) -> Duration {
        let decay_rate = if self.is_overdamped() {
            (self.stiffness / self.mass).sqrt()
        } else {
            0.5 * self.damping / self.mass
        };
        Duration::from_secs_f64((1.0 / SETTLE_FRACTION).ln() / decay_rate)
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::RETURN
    }
}

/// Solver function type
type SolverFn = Arc<dyn Fn(Num) -> Num + Send + Sync>;

/// Create solver function for spring animation
fn solve_spring(from: Num, velocity: Num, to: Num, params: &SpringParams) -> SolverFn {
    let stiffness = params.stiffness;
    let damping = params.damping;
    let mass = params.mass;
    let delta = to - from;

    if params.is_overdamped() {
        let angular_frequency = -(stiffness / mass).sqrt();
        let leftover = -angular_frequency * delta - velocity;

        Arc::new(move |t: Num| to - (delta + t * leftover) * E.powf(t * angular_frequency))
    } else {
        let damping_frequency = (4.0 * mass * stiffness - damping.powi(2)).sqrt();
        let leftover = (damping * delta - 2.0 * mass * velocity) / damping_frequency;
        let dfm = 0.5 * damping_frequency / mass;
        let dm = -0.5 * damping / mass;

        Arc::new(move |t: Num| {
            to - ((t * dfm).cos() * delta + (t * dfm).sin() * leftover) * E.powf(t * dm)
        })
    }
}

/// Create velocity function from position function (numerical derivative)
fn derivative(f: SolverFn) -> SolverFn {
    Arc::new(move |t: Num| (f(t + H) - f(t - H)) / (2.0 * H))
}

/// One-shot spring animation with an analytical solution
///
/// Runs from `from` to `to` starting at an absolute instant; after the
/// settling duration has elapsed it reports the target exactly and counts
/// as finished.
pub struct Spring {
    from: Num,
    to: Num,
    start: Instant,
    settling: Duration,
    solver: SolverFn,
    velocity_fn: SolverFn,
}

impl std::fmt::Debug for Spring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spring")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("settling", &self.settling)
            .finish()
    }
}

impl Spring {
    /// Start a spring at `start`.
    ///
    /// `initial_velocity` uses Core Animation semantics: it is normalized
    /// to the travel distance, so 1.0 covers `to - from` in one second and
    /// positive values move toward the target.
    pub fn new(from: Num, to: Num, initial_velocity: Num, params: SpringParams, start: Instant) -> Self {
        let velocity = initial_velocity * (to - from);
        let solver = solve_spring(from, velocity, to, &params);
        let velocity_fn = derivative(Arc::clone(&solver));
        Self {
            from,
            to,
            start,
            settling: params.settling_duration(),
            solver,
            velocity_fn,
        }
    }

    /// Position at an absolute instant.
    pub fn value(&self, now: Instant) -> Num {
        if now <= self.start {
            return self.from;
        }
        if self.is_finished(now) {
            return self.to;
        }
        (self.solver)((now - self.start).as_secs_f64())
    }

    /// Velocity at an absolute instant, in units per second.
    pub fn velocity(&self, now: Instant) -> Num {
        if now <= self.start || self.is_finished(now) {
            return 0.0;
        }
        (self.velocity_fn)((now - self.start).as_secs_f64())
    }

    /// Whether the settling duration has elapsed.
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.start + self.settling
    }

    pub fn target(&self) -> Num {
        self.to
    }

    pub fn settling_duration(&self) -> Duration {
        self.settling
    }
}

impl Clone for Spring {
    fn clone(&self) -> Self {
        Self {
            from: self.from,
            to: self.to,
            start: self.start,
            settling: self.settling,
            solver: Arc::clone(&self.solver),
            velocity_fn: Arc::clone(&self.velocity_fn),
        }
    }
}
