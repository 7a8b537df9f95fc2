use crate::data::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAxis {
    Horizontal,
    Vertical,
}

impl ScrollAxis {
    pub fn is_vertical(self) -> bool {
        self == ScrollAxis::Vertical
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Auto,
    Scroll,
}

impl Overflow {
    pub fn is_scrollable(self) -> bool {
        matches!(self, Overflow::Auto | Overflow::Scroll)
    }
}

/// Live measurements of a scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// bounding rectangle of the container
    pub rect: Rect,
    /// current scroll position (scrollLeft, scrollTop)
    pub offset: Point,
    pub scroll_size: Size,
    pub client_size: Size,
}

impl ScrollMetrics {
    pub fn offset(&self, axis: ScrollAxis) -> f32 {
        match axis {
            ScrollAxis::Horizontal => self.offset.x,
            ScrollAxis::Vertical => self.offset.y,
        }
    }
    pub fn max_offset(&self, axis: ScrollAxis) -> f32 {
        let max = match axis {
            ScrollAxis::Horizontal => self.scroll_size.width - self.client_size.width,
            ScrollAxis::Vertical => self.scroll_size.height - self.client_size.height,
        };
        max.max(0.0)
    }
    /// The part of `delta` that keeps the offset inside `[0, max_offset]`.
    /// Never points against `delta` nor exceeds it, even when the offset is already out of range.
    pub fn clamp_delta(&self, axis: ScrollAxis, delta: f32) -> f32 {
        let current = self.offset(axis);
        let applied = (current + delta).clamp(0.0, self.max_offset(axis)) - current;
        applied.clamp(delta.min(0.0), delta.max(0.0))
    }
}

/// Resolves and drives the scroll containers around the auto-scroller's anchor.
pub trait ScrollHost {
    type Id: Copy + PartialEq + std::fmt::Debug;
    /// Nearest ancestor of the anchor that scrolls along `axis`.
    fn nearest_scrollable(&self, axis: ScrollAxis) -> Option<Self::Id>;
    /// The document's root scroller, used when no ancestor scrolls.
    fn root(&self) -> Self::Id;
    fn metrics(&self, id: Self::Id) -> Option<ScrollMetrics>;
    fn set_scroll_offset(&mut self, id: Self::Id, axis: ScrollAxis, offset: f32);
}

#[derive(Clone, Debug)]
pub struct ScrollNode {
    pub parent: Option<usize>,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub metrics: ScrollMetrics,
}

/// Container tree kept in memory. Node 0 is the root scroller.
#[derive(Clone, Debug)]
pub struct ScrollTree {
    nodes: Vec<ScrollNode>,
    anchor: usize,
}

impl ScrollTree {
    pub fn new(root: ScrollMetrics) -> Self {
        Self {
            nodes: vec![ScrollNode {
                parent: None,
                overflow_x: Overflow::Auto,
                overflow_y: Overflow::Auto,
                metrics: root,
            }],
            anchor: 0,
        }
    }
    /// Adds a child of `parent` and returns its index. An unknown parent attaches to the root.
    pub fn push(&mut self, parent: usize, overflow_x: Overflow, overflow_y: Overflow, metrics: ScrollMetrics) -> usize {
        let parent = if parent < self.nodes.len() { parent } else { 0 };
        self.nodes.push(ScrollNode {
            parent: Some(parent),
            overflow_x,
            overflow_y,
            metrics,
        });
        self.nodes.len() - 1
    }
    pub fn set_anchor(&mut self, node: usize) {
        if node < self.nodes.len() {
            self.anchor = node;
        }
    }
}

impl ScrollHost for ScrollTree {
    type Id = usize;
    fn nearest_scrollable(&self, axis: ScrollAxis) -> Option<usize> {
        let mut cur = self.nodes.get(self.anchor)?.parent;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            if id == 0 {
                // the root is the fallback, not a match
                return None;
            }
            let overflow = match axis {
                ScrollAxis::Horizontal => node.overflow_x,
                ScrollAxis::Vertical => node.overflow_y,
            };
            if overflow.is_scrollable() {
                return Some(id);
            }
            cur = node.parent;
        }
        None
    }
    fn root(&self) -> usize {
        0
    }
    fn metrics(&self, id: usize) -> Option<ScrollMetrics> {
        self.nodes.get(id).map(|n| n.metrics)
    }
    fn set_scroll_offset(&mut self, id: usize, axis: ScrollAxis, offset: f32) {
        if let Some(n) = self.nodes.get_mut(id) {
            match axis {
                ScrollAxis::Horizontal => n.metrics.offset.x = offset,
                ScrollAxis::Vertical => n.metrics.offset.y = offset,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn metrics(width: f32, height: f32) -> ScrollMetrics {
        ScrollMetrics {
            rect: Rect::new(0.0, 0.0, width, height),
            offset: Point::ZERO,
            scroll_size: Size::new(width * 2.0, height * 2.0),
            client_size: Size::new(width, height),
        }
    }

    #[test]
    fn resolves_nearest_per_axis() {
        let mut tree = ScrollTree::new(metrics(1000.0, 1000.0));
        let vertical = tree.push(0, Overflow::Hidden, Overflow::Scroll, metrics(500.0, 500.0));
        let horizontal = tree.push(vertical, Overflow::Auto, Overflow::Visible, metrics(300.0, 300.0));
        let plain = tree.push(horizontal, Overflow::Visible, Overflow::Visible, metrics(10.0, 10.0));
        tree.set_anchor(plain);
        assert_eq!(tree.nearest_scrollable(ScrollAxis::Horizontal), Some(horizontal));
        assert_eq!(tree.nearest_scrollable(ScrollAxis::Vertical), Some(vertical));
    }

    #[test]
    fn falls_back_to_none_without_scrollers() {
        let mut tree = ScrollTree::new(metrics(1000.0, 1000.0));
        let plain = tree.push(0, Overflow::Visible, Overflow::Hidden, metrics(10.0, 10.0));
        tree.set_anchor(plain);
        assert_eq!(tree.nearest_scrollable(ScrollAxis::Horizontal), None);
        assert_eq!(tree.root(), 0);
    }

    #[test]
    fn clamp_delta_stays_in_range() {
        let mut m = metrics(500.0, 100.0);
        m.offset.x = 20.0;
        assert_eq!(m.clamp_delta(ScrollAxis::Horizontal, -30.0), -20.0);
        assert_eq!(m.clamp_delta(ScrollAxis::Horizontal, 1000.0), 480.0);
        m.scroll_size.height = 50.0;
        assert_eq!(m.max_offset(ScrollAxis::Vertical), 0.0);
        assert_eq!(m.clamp_delta(ScrollAxis::Vertical, 15.0), 0.0);
    }

    #[test]
    fn shrunk_content_never_scrolls_backwards() {
        let mut m = metrics(500.0, 100.0);
        // content shrank below the current offset: max is 500
        m.offset.x = 600.0;
        assert_eq!(m.clamp_delta(ScrollAxis::Horizontal, 30.0), 0.0);
        assert_eq!(m.clamp_delta(ScrollAxis::Horizontal, -30.0), -30.0);
    }
}
