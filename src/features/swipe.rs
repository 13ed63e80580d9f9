//! Swipe interaction core - gesture state machine and animation engine
//!
//! - `geometry`: pure drag-to-position mapping (rubber band, snap, reveal)
//! - `spring`, `tween`, `motion`: time-based animation primitives
//! - `indicator`: checkmark/cross confirmation indicator state
//! - `machine`: the gesture state machine driving all of the above
//!
//! Everything here is toolkit-agnostic: positions are plain numbers in
//! cell-local coordinates and time is `std::time::Instant` passed in by
//! the caller. The widget layer adapts pointer events onto this module.

pub mod geometry;
pub mod indicator;
pub mod machine;
pub mod motion;
pub mod spring;
pub mod tween;

/// Scalar type for the whole engine. Positions are computed in f64 and
/// cast to f32 at the rendering boundary.
pub type Num = f64;

pub use geometry::Side;
pub use machine::{SwipeMachine, SwipePhase};
