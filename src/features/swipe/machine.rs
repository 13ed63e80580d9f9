//! The swipe gesture state machine
//!
//! Maps drag gesture phases onto the content layer, the two side panels,
//! and the confirmation indicators:
//!
//! - `Idle -> Tracking` on begin: panels get their real colors
//! - `Tracking` on change: layers follow the finger through the geometry
//!   mapping; the disengaged panel stays pinned off-screen
//! - `Tracking -> Committing` on release past the snap distance: content
//!   and the winning panel ride an ease-in tween to the committed position
//! - `Tracking -> Returning` on release short of it, or on cancel: spring
//!   back to rest
//! - `Committing/Returning -> Idle` when the animations settle
//!
//! The committed action is emitted from [`SwipeMachine::tick`] exactly once,
//! after the content layer (not the panel) finishes its animation. While
//! committing or returning all gesture input is dropped.
//!
//! The machine is toolkit-free: the caller feeds it translations and absolute
//! instants and reads layer positions back each frame.

use std::time::{Duration, Instant};

use super::Num;
use super::geometry::{self, Side};
use super::indicator::Indicator;
use super::motion::Motion;
use super::spring::{Spring, SpringParams};
use super::tween::{Easing, Tween};

/// Commit animation length
pub const COMMIT_DURATION: Duration = Duration::from_millis(150);

/// Normalized initial velocity handed to the return springs
pub const RETURN_INITIAL_VELOCITY: Num = 10.0;

/// Phase of the swipe interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    /// No gesture and no layer animation
    Idle,
    /// Finger down, layers following the drag
    Tracking,
    /// Release past the snap distance; sliding to the committed position
    Committing,
    /// Springing back to rest
    Returning,
}

/// Gesture state machine for one swipeable row
#[derive(Debug, Clone)]
pub struct SwipeMachine {
    width: Num,
    phase: SwipePhase,
    content_x: Motion,
    accept_x: Motion,
    decline_x: Motion,
    accept_indicator: Indicator,
    decline_indicator: Indicator,
    /// Side engaged by the current gesture
    engaged: Option<Side>,
    /// Action armed by a commit, emitted once from `tick`
    pending: Option<Side>,
    /// Panels show their real colors once a gesture has begun
    colors_revealed: bool,
}

impl SwipeMachine {
    /// Machine at rest for a cell of the given width.
    pub fn new(width: Num) -> Self {
        Self {
            width,
            phase: SwipePhase::Idle,
            content_x: Motion::still(geometry::content_rest(width)),
            accept_x: Motion::still(geometry::side_rest(Side::Accept, width)),
            decline_x: Motion::still(geometry::side_rest(Side::Decline, width)),
            accept_indicator: Indicator::hidden(),
            decline_indicator: Indicator::hidden(),
            engaged: None,
            pending: None,
            colors_revealed: false,
        }
    }

    // ============================================================
    // Gesture inputs
    // ============================================================

    /// Gesture begin. Dropped unless idle with no animation in flight.
    pub fn begin(&mut self, now: Instant) {
        if self.width <= 0.0 || self.phase != SwipePhase::Idle || self.is_animating(now) {
            return;
        }
        self.colors_revealed = true;
        self.engaged = None;
        self.phase = SwipePhase::Tracking;
    }

    /// Gesture change with the current translation.
    pub fn drag(&mut self, dx: Num, now: Instant) {
        if self.phase != SwipePhase::Tracking {
            return;
        }
        let side = Side::from_translation(dx);
        let other = side.opposite();

        // Keep the disengaged panel pinned off-screen with its mark undrawn
        self.set_side(other, Motion::still(geometry::side_rest(other, self.width)));
        self.indicator_mut(other).hide(now);

        self.set_side(
            side,
            Motion::still(geometry::side_position(side, dx, self.width)),
        );
        self.content_x = Motion::still(geometry::content_position(dx, self.width));

        if geometry::reveal_progress(dx, self.width) >= 1.0 {
            self.indicator_mut(side).show(now);
        } else {
            self.indicator_mut(side).hide(now);
        }
        self.engaged = Some(side);
    }

    /// Gesture end: commit past the snap distance, spring back otherwise.
    pub fn release(&mut self, dx: Num, now: Instant) {
        if self.phase != SwipePhase::Tracking {
            return;
        }
        if geometry::is_far_enough_to_snap(dx, self.width) {
            self.commit(Side::from_translation(dx), now);
        } else {
            self.spring_back(now);
        }
    }

    /// Gesture cancelled or failed: spring back regardless of distance.
    pub fn cancel(&mut self, now: Instant) {
        if self.phase != SwipePhase::Tracking {
            return;
        }
        self.spring_back(now);
    }

    /// Advance the machine. Returns the committed action exactly once, after
    /// the content layer finishes its commit animation.
    pub fn tick(&mut self, now: Instant) -> Option<Side> {
        self.accept_indicator.settle(now);
        self.decline_indicator.settle(now);

        match self.phase {
            SwipePhase::Committing if !self.content_x.is_active(now) => {
                self.settle_layers(now);
                self.phase = SwipePhase::Idle;
                self.pending.take()
            }
            SwipePhase::Returning if !self.is_animating(now) => {
                self.settle_layers(now);
                self.phase = SwipePhase::Idle;
                self.engaged = None;
                None
            }
            _ => None,
        }
    }

    // ============================================================
    // Transitions
    // ============================================================

    fn commit(&mut self, side: Side, now: Instant) {
        self.content_x = Motion::Tween(Tween::new(
            self.content_x.value(now),
            geometry::content_commit(side, self.width),
            COMMIT_DURATION,
            Easing::EaseInCubic,
            now,
        ));
        let panel_from = self.side_x(side, now);
        self.set_side(
            side,
            Motion::Tween(Tween::new(
                panel_from,
                geometry::side_commit(self.width),
                COMMIT_DURATION,
                Easing::EaseInCubic,
                now,
            )),
        );
        self.engaged = Some(side);
        self.pending = Some(side);
        self.phase = SwipePhase::Committing;
    }

    fn spring_back(&mut self, now: Instant) {
        self.accept_indicator.hide(now);
        self.decline_indicator.hide(now);

        self.content_x = Motion::Spring(Spring::new(
            self.content_x.value(now),
            geometry::content_rest(self.width),
            RETURN_INITIAL_VELOCITY,
            SpringParams::RETURN,
            now,
        ));
        if let Some(side) = self.engaged {
            let from = self.side_x(side, now);
            self.set_side(
                side,
                Motion::Spring(Spring::new(
                    from,
                    geometry::side_rest(side, self.width),
                    RETURN_INITIAL_VELOCITY,
                    SpringParams::RETURN,
                    now,
                )),
            );
        }
        self.phase = SwipePhase::Returning;
    }

    fn settle_layers(&mut self, now: Instant) {
        self.content_x.settle(now);
        self.accept_x.settle(now);
        self.decline_x.settle(now);
    }

    fn set_side(&mut self, side: Side, motion: Motion) {
        match side {
            Side::Accept => self.accept_x = motion,
            Side::Decline => self.decline_x = motion,
        }
    }

    fn indicator_mut(&mut self, side: Side) -> &mut Indicator {
        match side {
            Side::Accept => &mut self.accept_indicator,
            Side::Decline => &mut self.decline_indicator,
        }
    }

    // ============================================================
    // Queries
    // ============================================================

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn width(&self) -> Num {
        self.width
    }

    /// True while the content layer or either side panel is animating.
    /// Indicator draws do not count and never block input.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.content_x.is_active(now)
            || self.accept_x.is_active(now)
            || self.decline_x.is_active(now)
    }

    /// True while anything on screen is still moving, indicator draws
    /// included. This is the signal to keep scheduling frames.
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.is_animating(now)
            || self.accept_indicator.is_animating(now)
            || self.decline_indicator.is_animating(now)
    }

    /// True when every layer sits at its resting position with nothing in
    /// flight. A row in this state renders exactly like an untouched one.
    pub fn is_at_rest(&self, now: Instant) -> bool {
        self.phase == SwipePhase::Idle
            && !self.has_active_animations(now)
            && self.content_x.target() == geometry::content_rest(self.width)
            && self.accept_x.target() == geometry::side_rest(Side::Accept, self.width)
            && self.decline_x.target() == geometry::side_rest(Side::Decline, self.width)
    }

    /// Center x of the content layer at an absolute instant.
    pub fn content_x(&self, now: Instant) -> Num {
        self.content_x.value(now)
    }

    /// Center x of a side panel at an absolute instant.
    pub fn side_x(&self, side: Side, now: Instant) -> Num {
        match side {
            Side::Accept => self.accept_x.value(now),
            Side::Decline => self.decline_x.value(now),
        }
    }

    /// Stroke progress of a side's confirmation indicator.
    pub fn indicator_progress(&self, side: Side, now: Instant) -> Num {
        match side {
            Side::Accept => self.accept_indicator.progress(now),
            Side::Decline => self.decline_indicator.progress(now),
        }
    }

    /// Whether the panels have been given their real colors yet. False
    /// until the first gesture begins, so a freshly built row never
    /// flashes its panels during unrelated layout passes.
    pub fn colors_revealed(&self) -> bool {
        self.colors_revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: Num = 320.0;

    fn settled(machine: &SwipeMachine, from: Instant) -> Instant {
        let mut at = from;
        while machine.is_animating(at) {
            at += Duration::from_millis(100);
        }
        at
    }

    // ========== Scenario: short drag springs back ==========

    #[test]
    fn test_short_drag_returns_without_action() {
        let t0 = Instant::now();
        let mut machine = SwipeMachine::new(WIDTH);

        machine.begin(t0);
        machine.drag(50.0, t0);
        assert_eq!(machine.content_x(t0), 210.0, "content tracks the finger");

        machine.release(50.0, t0);
        assert_eq!(machine.phase(), SwipePhase::Returning, "50 < 96 springs back");

        let mut fired = Vec::new();
        let mut at = t0;
        for _ in 0..20 {
            at += Duration::from_millis(100);
            fired.extend(machine.tick(at));
        }
        assert!(fired.is_empty(), "a returned gesture must never fire an action");
        assert_eq!(machine.phase(), SwipePhase::Idle);
        assert_eq!(machine.content_x(at), 160.0, "content back at rest");
        assert_eq!(machine.side_x(Side::Accept, at), -160.0, "panel back off-screen");
    }

    // ========== Scenario: full drag commits ==========

    #[test]
    fn test_accept_commit_fires_once_after_content_animation() {
        let t0 = Instant::now();
        let mut machine = SwipeMachine::new(WIDTH);

        machine.begin(t0);
        machine.drag(150.0, t0);
        machine.release(150.0, t0);
        assert_eq!(machine.phase(), SwipePhase::Committing, "150 > 96 commits");

        // Mid-flight: nothing fires yet
        let mid = t0 + Duration::from_millis(75);
        assert_eq!(machine.tick(mid), None);
        assert!(machine.is_animating(mid));

        let end = t0 + COMMIT_DURATION;
        assert_eq!(machine.tick(end), Some(Side::Accept), "action fires on completion");
        assert_eq!(machine.tick(end), None, "and only once");
        assert_eq!(machine.phase(), SwipePhase::Idle);

        // Committed visual state stays put: panel centered, content off-screen
        assert_eq!(machine.side_x(Side::Accept, end), 160.0);
        assert_eq!(machine.content_x(end), 480.0);
    }

    #[test]
    fn test_decline_commit_geometry() {
        let t0 = Instant::now();
        let mut machine = SwipeMachine::new(WIDTH);

        machine.begin(t0);
        machine.drag(-150.0, t0);
        machine.release(-150.0, t0);

        let end = t0 + COMMIT_DURATION;
        assert_eq!(machine.tick(end), Some(Side::Decline));
        assert_eq!(machine.side_x(Side::Decline, end), 160.0, "panel slides to center");
        assert_eq!(machine.content_x(end), -160.0, "content exits the left edge");
    }

    // ========== Scenario: cancel ==========

    #[test]
    fn test_cancel_springs_back_regardless_of_distance() {
        let t0 = Instant::now();
        let mut machine = SwipeMachine::new(WIDTH);

        machine.begin(t0);
        machine.drag(-200.0, t0);
        assert!(
            machine.indicator_progress(Side::Decline, t0 + Duration::from_millis(200)) > 0.99,
            "far drag draws the cross"
        );

        let t1 = t0 + Duration::from_millis(300);
        machine.cancel(t1);
        assert_eq!(machine.phase(), SwipePhase::Returning, "cancel never commits");

        let mut at = t1;
        let mut fired = Vec::new();
        for _ in 0..20 {
            at += Duration::from_millis(100);
            fired.extend(machine.tick(at));
        }
        assert!(fired.is_empty(), "cancelled gesture must not fire");
        assert_eq!(machine.phase(), SwipePhase::Idle);
        assert_eq!(machine.side_x(Side::Decline, at), 480.0);
        assert_eq!(
            machine.indicator_progress(Side::Decline, at),
            0.0,
            "shown indicator fades out on cancel"
        );
    }

    // ========== Input dropped while animating ==========

    #[test]
    fn test_input_is_dropped_while_committing() {
        let t0 = Instant::now();
        let mut machine = SwipeMachine::new(WIDTH);

        machine.begin(t0);
        machine.drag(150.0, t0);
        machine.release(150.0, t0);

        let mid = t0 + Duration::from_millis(50);
        machine.begin(mid);
        machine.drag(-100.0, mid);
        machine.cancel(mid);
        assert_eq!(machine.phase(), SwipePhase::Committing, "pan input is ignored mid-commit");

        let end = t0 + COMMIT_DURATION;
        assert_eq!(machine.tick(end), Some(Side::Accept), "the commit still completes");
    }

    #[test]
    fn test_input_is_dropped_while_returning() {
        let t0 = Instant::now();
        let mut machine = SwipeMachine::new(WIDTH);

        machine.begin(t0);
        machine.drag(50.0, t0);
        machine.release(50.0, t0);

        let mid = t0 + Duration::from_millis(100);
        machine.begin(mid);
        assert_eq!(machine.phase(), SwipePhase::Returning, "begin is dropped mid-return");
        machine.drag(80.0, mid);
        assert_ne!(machine.content_x(mid), 240.0, "drag is dropped mid-return");

        // Once settled, a fresh gesture is accepted again
        let later = settled(&machine, mid);
        machine.tick(later);
        machine.begin(later);
        assert_eq!(machine.phase(), SwipePhase::Tracking);
    }

    // ========== Pin invariant ==========

    #[test]
    fn test_disengaged_panel_is_pinned_off_screen() {
        let t0 = Instant::now();
        let mut machine = SwipeMachine::new(WIDTH);

        machine.begin(t0);
        machine.drag(120.0, t0);
        assert!(machine.side_x(Side::Accept, t0) > -160.0);
        assert_eq!(machine.side_x(Side::Decline, t0), 480.0);

        // Direction flip: accept snaps back to rest and its mark undraws
        let t1 = t0 + Duration::from_millis(16);
        machine.drag(-120.0, t1);
        assert_eq!(machine.side_x(Side::Accept, t1), -160.0);
        assert!(machine.side_x(Side::Decline, t1) < 480.0);
        let drawn_out = t1 + Duration::from_millis(250);
        assert_eq!(machine.indicator_progress(Side::Accept, drawn_out), 0.0);
    }

    // ========== Indicator threshold vs snap threshold ==========

    #[test]
    fn test_indicator_arms_at_snap_but_release_there_returns() {
        let t0 = Instant::now();
        let mut machine = SwipeMachine::new(WIDTH);

        machine.begin(t0);
        machine.drag(95.9, t0);
        assert_eq!(
            machine.indicator_progress(Side::Accept, t0 + Duration::from_secs(1)),
            0.0,
            "below the snap distance the mark stays undrawn"
        );

        machine.drag(96.0, t0);
        assert!(
            machine.indicator_progress(Side::Accept, t0 + Duration::from_millis(200)) > 0.99,
            "exactly at the snap distance the mark draws in"
        );

        // The commit test is strict, so releasing right at the distance returns
        machine.release(96.0, t0);
        assert_eq!(machine.phase(), SwipePhase::Returning);
    }

    // ========== Colors ==========

    #[test]
    fn test_panels_stay_transparent_until_first_gesture() {
        let t0 = Instant::now();
        let mut machine = SwipeMachine::new(WIDTH);
        assert!(!machine.colors_revealed(), "fresh build must not flash panels");

        machine.begin(t0);
        assert!(machine.colors_revealed());
    }

    // ========== Not ready ==========

    #[test]
    fn test_zero_width_machine_ignores_gestures() {
        let t0 = Instant::now();
        let mut machine = SwipeMachine::new(0.0);
        machine.begin(t0);
        assert_eq!(machine.phase(), SwipePhase::Idle, "no layout, no gesture");
    }

    // ========== Tracking geometry ==========

    #[test]
    fn test_tracking_positions_are_instantaneous() {
        let t0 = Instant::now();
        let mut machine = SwipeMachine::new(WIDTH);

        machine.begin(t0);
        machine.drag(96.0, t0);
        assert!(!machine.is_animating(t0), "tracking applies positions without animation");
        assert_eq!(machine.content_x(t0), 256.0);
        assert_eq!(
            machine.side_x(Side::Accept, t0),
            -160.0 + 96.0,
            "at the snap distance the panel has fully caught up"
        );

        // Rubber band past the snap distance
        machine.drag(150.0, t0);
        assert_eq!(machine.content_x(t0), 160.0 + 96.0 + 54.0 / 4.0);
    }
}
