use super::container::ScrollAxis;
use crate::data::{EdgeThresholds, Point, Rect, ScrollThresholds};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTier {
    Slow,
    Medium,
    Fast,
}

impl ScrollTier {
    pub fn pixels_per_tick(self) -> f32 {
        match self {
            ScrollTier::Slow => 5.0,
            ScrollTier::Medium => 15.0,
            ScrollTier::Fast => 30.0,
        }
    }
    pub fn from_distance(distance: f32, t: &EdgeThresholds) -> Option<Self> {
        if distance <= t.fast {
            Some(ScrollTier::Fast)
        } else if distance <= t.medium {
            Some(ScrollTier::Medium)
        } else if distance <= t.slow {
            Some(ScrollTier::Slow)
        } else {
            None
        }
    }
}

/// Signed scroll step for the pointer near `rect`, or `None` when nothing should scroll.
/// Only the nearer of the two opposing edges counts.
pub fn edge_velocity(
    pointer: Point,
    rect: &Rect,
    axis: ScrollAxis,
    thresholds: &ScrollThresholds,
    within_bounds: bool,
) -> Option<f32> {
    let (pos, low, high, across, low_t, high_t) = match axis {
        ScrollAxis::Horizontal => (
            pointer.x,
            rect.left,
            rect.right(),
            rect.contains_y(pointer.y),
            &thresholds.left,
            &thresholds.right,
        ),
        ScrollAxis::Vertical => (
            pointer.y,
            rect.top,
            rect.bottom(),
            rect.contains_x(pointer.x),
            &thresholds.top,
            &thresholds.bottom,
        ),
    };
    if within_bounds && !across {
        return None;
    }
    let to_low = pos - low;
    let to_high = high - pos;
    if to_low <= to_high {
        ScrollTier::from_distance(to_low, low_t).map(|t| -t.pixels_per_tick())
    } else {
        ScrollTier::from_distance(to_high, high_t).map(|t| t.pixels_per_tick())
    }
}
