use crate::autoscroll::{ScrollAxis, ScrollHost, ScrollMetrics};
use crate::data::{Point, Size};
use crate::gui;

/// Exposes one `egui::ScrollArea` to the auto-scroller.
///
/// Metrics are captured from the area's output every frame. Offsets written by the scroller
/// are kept as pending and handed to the area when it is built on the next frame.
#[derive(Clone, Debug, Default)]
pub struct ScrollAreaHost {
    metrics: Option<ScrollMetrics>,
    pending: Option<egui::Vec2>,
}

impl ScrollAreaHost {
    pub fn scroll_area(&mut self, id: &str) -> egui::ScrollArea {
        let area = egui::ScrollArea::both()
            .id_source(id)
            .auto_shrink([false, false]);
        match self.pending.take() {
            Some(offset) => area.scroll_offset(offset),
            None => area,
        }
    }

    pub fn update<R>(&mut self, output: &egui::scroll_area::ScrollAreaOutput<R>) {
        let view = output.inner_rect;
        self.metrics = Some(ScrollMetrics {
            rect: gui::to_rect(view),
            offset: Point::new(output.state.offset.x, output.state.offset.y),
            scroll_size: Size::new(output.content_size.x, output.content_size.y),
            client_size: Size::new(view.width(), view.height()),
        });
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl ScrollHost for ScrollAreaHost {
    type Id = ();
    fn nearest_scrollable(&self, _axis: ScrollAxis) -> Option<()> {
        self.metrics.map(|_| ())
    }
    fn root(&self) {}
    fn metrics(&self, _id: ()) -> Option<ScrollMetrics> {
        self.metrics
    }
    fn set_scroll_offset(&mut self, _id: (), axis: ScrollAxis, offset: f32) {
        let Some(m) = self.metrics.as_mut() else {
            return;
        };
        match axis {
            ScrollAxis::Horizontal => m.offset.x = offset,
            ScrollAxis::Vertical => m.offset.y = offset,
        }
        self.pending = Some(egui::vec2(m.offset.x, m.offset.y));
    }
}
