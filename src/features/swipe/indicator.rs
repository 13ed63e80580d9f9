//! Confirmation indicator - the checkmark / cross drawn over a side panel
//!
//! The indicator is a stroked path revealed by animating stroke progress
//! from the path's start, like drawing it by hand. Show and hide are
//! idempotent and always restart from the currently rendered progress, so
//! a drag reversing direction mid-draw never causes a visible jump.

use std::time::{Duration, Instant};

use super::Num;
use super::geometry::Side;
use super::motion::Motion;
use super::tween::{Easing, Tween};

/// Distance of the indicator from the cell's near edge
pub const INSET: Num = 16.0;

/// Indicator width as a fraction of its height
pub const WIDTH_TO_HEIGHT_RATIO: Num = 0.7;

/// Indicator height as a fraction of cell height
pub const HEIGHT_RATIO: Num = 0.5;

/// Stroke line width
pub const STROKE_WIDTH: Num = 2.0;

/// Time it takes to draw (or undraw) the full path
pub const DRAW_DURATION: Duration = Duration::from_millis(200);

// ============================================================
// State
// ============================================================

/// Visibility state of one confirmation indicator
#[derive(Debug, Clone)]
pub struct Indicator {
    is_showing: bool,
    progress: Motion,
}

impl Indicator {
    pub fn hidden() -> Self {
        Self {
            is_showing: false,
            progress: Motion::still(0.0),
        }
    }

    /// Draw the path in. No-op if already showing.
    pub fn show(&mut self, now: Instant) {
        if self.is_showing {
            return;
        }
        self.is_showing = true;
        let from = self.progress.value(now);
        self.progress = Motion::Tween(Tween::new(from, 1.0, DRAW_DURATION, Easing::Linear, now));
    }

    /// Undraw the path. No-op if already hidden.
    pub fn hide(&mut self, now: Instant) {
        if !self.is_showing {
            return;
        }
        self.is_showing = false;
        let from = self.progress.value(now);
        self.progress = Motion::Tween(Tween::new(from, 0.0, DRAW_DURATION, Easing::Linear, now));
    }

    /// Stroke progress in [0, 1] at an absolute instant.
    pub fn progress(&self, now: Instant) -> Num {
        self.progress.value(now)
    }

    pub fn is_showing(&self) -> bool {
        self.is_showing
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress.is_active(now)
    }

    /// Collapse a finished draw animation into a plain value.
    pub fn settle(&mut self, now: Instant) {
        self.progress.settle(now);
    }
}

// ============================================================
// Path geometry
// ============================================================

/// Placement and stroke paths of one indicator, in cell-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorGeometry {
    /// Top-left corner of the indicator box
    pub origin: (Num, Num),
    /// Width and height of the indicator box
    pub size: (Num, Num),
    /// Polylines in indicator-local coordinates
    pub polylines: Vec<Vec<(Num, Num)>>,
}

/// Compute an indicator's placement and path from the cell bounds.
///
/// The accept checkmark sits inset from the left edge, the decline cross
/// inset from the right edge; both are vertically centered at half the
/// cell height.
pub fn indicator_geometry(side: Side, cell_width: Num, cell_height: Num) -> IndicatorGeometry {
    let height = cell_height * HEIGHT_RATIO;
    let width = height * WIDTH_TO_HEIGHT_RATIO;
    let y = (cell_height - height) / 2.0;

    match side {
        Side::Accept => IndicatorGeometry {
            origin: (INSET, y),
            size: (width, height),
            polylines: vec![vec![
                (0.0, height * 0.6),
                (width / 3.0, height),
                (width, 0.0),
            ]],
        },
        Side::Decline => IndicatorGeometry {
            origin: (cell_width - INSET - width, y),
            size: (width, height),
            polylines: vec![
                vec![(0.0, 0.0), (width, height)],
                vec![(0.0, height), (width, 0.0)],
            ],
        },
    }
}

/// Trim polylines to the leading fraction of their total arc length.
///
/// Progress 0 yields nothing, 1 the full path; in between the path is cut
/// mid-segment, reproducing a stroke-end animation.
pub fn trim_polylines(polylines: &[Vec<(Num, Num)>], progress: Num) -> Vec<Vec<(Num, Num)>> {
    let progress = progress.clamp(0.0, 1.0);
    if progress <= 0.0 {
        return Vec::new();
    }
    if progress >= 1.0 {
        return polylines.to_vec();
    }

    let total: Num = polylines
        .iter()
        .map(|line| {
            line.windows(2)
                .map(|pair| segment_length(pair[0], pair[1]))
                .sum::<Num>()
        })
        .sum();
    let mut remaining = total * progress;

    let mut trimmed = Vec::new();
    for line in polylines {
        if remaining <= 0.0 || line.is_empty() {
            break;
        }
        let mut partial = vec![line[0]];
        for pair in line.windows(2) {
            let length = segment_length(pair[0], pair[1]);
            if length <= remaining {
                partial.push(pair[1]);
                remaining -= length;
            } else {
                let t = remaining / length;
                partial.push((
                    pair[0].0 + (pair[1].0 - pair[0].0) * t,
                    pair[0].1 + (pair[1].1 - pair[0].1) * t,
                ));
                remaining = 0.0;
                break;
            }
        }
        if partial.len() > 1 {
            trimmed.push(partial);
        }
    }
    trimmed
}

fn segment_length(a: (Num, Num), b: (Num, Num)) -> Num {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== Show / hide idempotence ==========

    #[test]
    fn test_show_twice_keeps_one_animation() {
        let start = Instant::now();
        let mut indicator = Indicator::hidden();

        indicator.show(start);
        let mid = start + Duration::from_millis(100);
        let mid_value = indicator.progress(mid);
        assert!((mid_value - 0.5).abs() < 1e-9, "half way through the draw");

        // Second show while the draw is running must not restart it
        indicator.show(mid);
        assert!((indicator.progress(mid) - mid_value).abs() < 1e-9);
        let end = start + DRAW_DURATION;
        assert_eq!(
            indicator.progress(end),
            1.0,
            "draw must finish on the original schedule"
        );
    }

    #[test]
    fn test_hide_twice_keeps_one_animation() {
        let start = Instant::now();
        let mut indicator = Indicator::hidden();
        indicator.show(start);
        let shown = start + DRAW_DURATION;

        indicator.hide(shown);
        let mid = shown + Duration::from_millis(100);
        indicator.hide(mid);
        assert!((indicator.progress(mid) - 0.5).abs() < 1e-9);
        assert_eq!(indicator.progress(shown + DRAW_DURATION), 0.0);
    }

    #[test]
    fn test_show_continues_from_live_value_of_hide() {
        let start = Instant::now();
        let mut indicator = Indicator::hidden();
        indicator.show(start);
        let shown = start + DRAW_DURATION;

        // Hide, then reverse half way through the undraw
        indicator.hide(shown);
        let mid = shown + Duration::from_millis(100);
        let live = indicator.progress(mid);
        assert!((live - 0.5).abs() < 1e-9);

        indicator.show(mid);
        assert!(
            (indicator.progress(mid) - live).abs() < 1e-9,
            "reversal must continue from the rendered value, not jump"
        );
        assert!(indicator.is_showing());
        assert_eq!(indicator.progress(mid + DRAW_DURATION), 1.0);
    }

    #[test]
    fn test_settle_collapses_finished_draw() {
        let start = Instant::now();
        let mut indicator = Indicator::hidden();
        indicator.show(start);

        let end = start + DRAW_DURATION;
        assert!(!indicator.is_animating(end));
        indicator.settle(end);
        assert_eq!(indicator.progress(end), 1.0);
    }

    // ========== Path geometry ==========

    #[test]
    fn test_indicator_placement() {
        let accept = indicator_geometry(Side::Accept, 320.0, 64.0);
        assert_eq!(accept.size, (0.7 * 32.0, 32.0));
        assert_eq!(accept.origin, (16.0, 16.0));

        let decline = indicator_geometry(Side::Decline, 320.0, 64.0);
        assert_eq!(decline.size, (0.7 * 32.0, 32.0));
        assert_eq!(decline.origin.0, 320.0 - 16.0 - 0.7 * 32.0);
        assert_eq!(decline.origin.1, 16.0);
    }

    #[test]
    fn test_checkmark_and_cross_shapes() {
        let accept = indicator_geometry(Side::Accept, 320.0, 64.0);
        assert_eq!(accept.polylines.len(), 1, "checkmark is one polyline");
        assert_eq!(accept.polylines[0].len(), 3);

        let decline = indicator_geometry(Side::Decline, 320.0, 64.0);
        assert_eq!(decline.polylines.len(), 2, "cross is two diagonals");
    }

    // ========== Stroke trimming ==========

    #[test]
    fn test_trim_endpoints() {
        let lines = vec![vec![(0.0, 0.0), (10.0, 0.0)]];
        assert!(trim_polylines(&lines, 0.0).is_empty());
        assert_eq!(trim_polylines(&lines, 1.0), lines);
    }

    #[test]
    fn test_trim_cuts_mid_segment() {
        let lines = vec![vec![(0.0, 0.0), (10.0, 0.0)]];
        let half = trim_polylines(&lines, 0.5);
        assert_eq!(half, vec![vec![(0.0, 0.0), (5.0, 0.0)]]);
    }

    #[test]
    fn test_trim_spans_polylines() {
        // Two equal-length strokes; 75% progress keeps the first whole and
        // half of the second
        let lines = vec![
            vec![(0.0, 0.0), (10.0, 0.0)],
            vec![(0.0, 1.0), (10.0, 1.0)],
        ];
        let trimmed = trim_polylines(&lines, 0.75);
        assert_eq!(trimmed.len(), 2);
        assert_eq!(trimmed[0], lines[0]);
        assert_eq!(trimmed[1], vec![(0.0, 1.0), (5.0, 1.0)]);
    }
}
