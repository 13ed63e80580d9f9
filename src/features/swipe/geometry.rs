//! Drag-to-position mapping for the swipe gesture
//!
//! Pure functions converting a raw horizontal drag translation into layer
//! positions: a linear 1:1 region up to the snap distance, a rubber-banded
//! remainder past it, and an accelerating reveal curve for the side panels.
//!
//! All positions are layer centers in cell-local coordinates. Layers are
//! cell-sized, so a panel centered at `-width / 2` sits fully off-screen to
//! the left and one centered at `width * 1.5` fully off-screen to the right.

use super::Num;

/// Fraction of the cell width the finger must travel before a release
/// commits the swipe.
pub const SNAP_RATIO: Num = 0.3;

/// Divisor applied to drag travel past the snap distance.
pub const RUBBER_COEFFICIENT: Num = 4.0;

/// Exponent of the reveal curve below the snap distance.
pub const REVEAL_EXPONENT: i32 = 4;

/// Which action a horizontal drag engages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Rightward drag; panel slides in from the left edge.
    Accept,
    /// Leftward drag; panel slides in from the right edge.
    Decline,
}

impl Side {
    /// Side engaged by a drag translation.
    pub fn from_translation(dx: Num) -> Self {
        if dx > 0.0 { Side::Accept } else { Side::Decline }
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Accept => Side::Decline,
            Side::Decline => Side::Accept,
        }
    }
}

/// Distance the finger must travel to arm a commit.
pub fn snap_distance(width: Num) -> Num {
    width * SNAP_RATIO
}

/// Center x of the content layer for a drag translation.
///
/// Linear up to the snap distance; past it the remainder is divided by
/// [`RUBBER_COEFFICIENT`], so the content keeps following the finger with
/// increasing resistance and no hard stop.
pub fn content_position(dx: Num, width: Num) -> Num {
    let snap = snap_distance(width);
    if dx.abs() <= snap {
        width / 2.0 + dx
    } else {
        let signed_snap = snap * dx.signum();
        width / 2.0 + signed_snap + (dx - signed_snap) / RUBBER_COEFFICIENT
    }
}

/// Whether releasing at this translation commits the swipe. Strict: a drag
/// resting exactly on the snap distance springs back.
pub fn is_far_enough_to_snap(dx: Num, width: Num) -> bool {
    dx.abs() > snap_distance(width)
}

/// Progress of the drag toward the snap distance, clamped to [0, 1].
pub fn reveal_progress(dx: Num, width: Num) -> Num {
    let snap = snap_distance(width);
    if snap <= 0.0 {
        return 0.0;
    }
    (dx.abs() / snap).min(1.0)
}

/// How far the engaged side panel has slid into view, in pixels.
///
/// Below the snap distance the panel lags the finger on an accelerating
/// power curve; at and past it the panel tracks the rubber-banded content
/// edge 1:1, which also arms the confirmation indicator.
pub fn side_reveal(dx: Num, width: Num) -> Num {
    let progress = reveal_progress(dx, width);
    if progress < 1.0 {
        snap_distance(width) * progress.powi(REVEAL_EXPONENT)
    } else {
        (content_position(dx, width) - width / 2.0).abs()
    }
}

/// Rest center x of the content layer.
pub fn content_rest(width: Num) -> Num {
    width / 2.0
}

/// Off-screen rest center x of a side panel.
pub fn side_rest(side: Side, width: Num) -> Num {
    match side {
        Side::Accept => -width / 2.0,
        Side::Decline => width * 1.5,
    }
}

/// Center x of the engaged side panel while tracking the finger.
pub fn side_position(side: Side, dx: Num, width: Num) -> Num {
    let reveal = side_reveal(dx, width);
    match side {
        Side::Accept => side_rest(Side::Accept, width) + reveal,
        Side::Decline => side_rest(Side::Decline, width) - reveal,
    }
}

/// Committed center x of the winning side panel: dead center, covering
/// the whole cell.
pub fn side_commit(width: Num) -> Num {
    width / 2.0
}

/// Committed center x of the content layer: fully off the opposite edge.
pub fn content_commit(side: Side, width: Num) -> Num {
    match side {
        Side::Accept => width * 1.5,
        Side::Decline => -width / 2.0,
    }
}
