use super::listener::{HorizontalEdge, ResizeEdge, VerticalEdge};
use crate::data::{Bounds, Delta, Point, Size, SizeLimits};

fn clamp_axis(v: f32, current: f32, extent: f32, low: Option<f32>, high: Option<f32>) -> f32 {
    let mut v = v;
    if let Some(high) = high {
        if current + v + extent > high {
            v = high - extent - current;
        }
    }
    // checked last: when the element is larger than the bounds its near edge stays inside
    if let Some(low) = low {
        if current + v < low {
            v = low - current;
        }
    }
    v
}

/// Limits a candidate translation so that an element of `size` rendered at `current`
/// stays inside `bounds`. Works in translation space, so `current` has to be the live offset.
pub fn clamp_translation(candidate: Delta, current: Point, size: Size, bounds: &Bounds) -> Delta {
    Delta::new(
        clamp_axis(candidate.x, current.x, size.width, bounds.left, bounds.right),
        clamp_axis(candidate.y, current.y, size.height, bounds.top, bounds.bottom),
    )
}

/// Grows or shrinks `size` by the pointer movement `d` on the grabbed edges.
/// Returns the clamped size and how far the origin moves (non-zero only for left/top edges).
pub fn resize_from_edge(size: Size, d: Delta, edge: ResizeEdge, limits: &SizeLimits) -> (Size, Delta) {
    let dw = match edge.x {
        HorizontalEdge::Right => d.x,
        HorizontalEdge::Left => -d.x,
    };
    let dh = match edge.y {
        VerticalEdge::Bottom => d.y,
        VerticalEdge::Top => -d.y,
    };
    let new_size = limits.clamp(Size::new(size.width + dw, size.height + dh));
    let shift = Delta::new(
        match edge.x {
            HorizontalEdge::Left => size.width - new_size.width,
            HorizontalEdge::Right => 0.0,
        },
        match edge.y {
            VerticalEdge::Top => size.height - new_size.height,
            VerticalEdge::Bottom => 0.0,
        },
    );
    (new_size, shift)
}
