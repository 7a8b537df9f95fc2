use crate::data::{Coordinates, Delta, Size};
use serde::{Deserialize, Serialize};
use std::sync::mpsc;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalEdge {
    Left,
    Right,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerticalEdge {
    Top,
    Bottom,
}

/// The edges a resize handle moves.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeEdge {
    pub x: HorizontalEdge,
    pub y: VerticalEdge,
}

impl ResizeEdge {
    pub const TOP_LEFT: Self = Self::new(HorizontalEdge::Left, VerticalEdge::Top);
    pub const TOP_RIGHT: Self = Self::new(HorizontalEdge::Right, VerticalEdge::Top);
    pub const BOTTOM_LEFT: Self = Self::new(HorizontalEdge::Left, VerticalEdge::Bottom);
    pub const BOTTOM_RIGHT: Self = Self::new(HorizontalEdge::Right, VerticalEdge::Bottom);
    pub const fn new(x: HorizontalEdge, y: VerticalEdge) -> Self {
        Self { x, y }
    }
}

impl Default for ResizeEdge {
    fn default() -> Self {
        Self::BOTTOM_RIGHT
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DragData {
    pub coords: Coordinates,
    pub size: Size,
    /// translation applied on this tick, after clamping
    pub delta: Delta,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ResizeData {
    pub coords: Coordinates,
    pub size: Size,
    /// change of width and height on this tick, after clamping
    pub delta: Delta,
    pub edge: ResizeEdge,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum DnrEvent {
    DragStart(DragData),
    Drag(DragData),
    DragStop(DragData),
    ResizeStart(ResizeData),
    Resize(ResizeData),
    ResizeStop(ResizeData),
}

impl DnrEvent {
    pub fn coords(&self) -> Coordinates {
        match self {
            Self::DragStart(d) | Self::Drag(d) | Self::DragStop(d) => d.coords,
            Self::ResizeStart(r) | Self::Resize(r) | Self::ResizeStop(r) => r.coords,
        }
    }
    pub fn is_stop(&self) -> bool {
        matches!(self, Self::DragStop(_) | Self::ResizeStop(_))
    }
}

/// Receives the progress of gestures. All callbacks default to doing nothing.
pub trait DnrListener {
    fn on_drag_start(&mut self, _data: &DragData) {}
    fn on_drag(&mut self, _data: &DragData) {}
    fn on_drag_stop(&mut self, _data: &DragData) {}
    fn on_resize_start(&mut self, _data: &ResizeData) {}
    fn on_resize(&mut self, _data: &ResizeData) {}
    fn on_resize_stop(&mut self, _data: &ResizeData) {}
}

impl DnrListener for () {}

/// Records every callback, in order.
impl DnrListener for Vec<DnrEvent> {
    fn on_drag_start(&mut self, d: &DragData) {
        self.push(DnrEvent::DragStart(*d));
    }
    fn on_drag(&mut self, d: &DragData) {
        self.push(DnrEvent::Drag(*d));
    }
    fn on_drag_stop(&mut self, d: &DragData) {
        self.push(DnrEvent::DragStop(*d));
    }
    fn on_resize_start(&mut self, r: &ResizeData) {
        self.push(DnrEvent::ResizeStart(*r));
    }
    fn on_resize(&mut self, r: &ResizeData) {
        self.push(DnrEvent::Resize(*r));
    }
    fn on_resize_stop(&mut self, r: &ResizeData) {
        self.push(DnrEvent::ResizeStop(*r));
    }
}

/// Sends callbacks to another part of the application. A closed channel is ignored.
impl DnrListener for mpsc::Sender<DnrEvent> {
    fn on_drag_start(&mut self, d: &DragData) {
        let _ = self.send(DnrEvent::DragStart(*d));
    }
    fn on_drag(&mut self, d: &DragData) {
        let _ = self.send(DnrEvent::Drag(*d));
    }
    fn on_drag_stop(&mut self, d: &DragData) {
        let _ = self.send(DnrEvent::DragStop(*d));
    }
    fn on_resize_start(&mut self, r: &ResizeData) {
        let _ = self.send(DnrEvent::ResizeStart(*r));
    }
    fn on_resize(&mut self, r: &ResizeData) {
        let _ = self.send(DnrEvent::Resize(*r));
    }
    fn on_resize_stop(&mut self, r: &ResizeData) {
        let _ = self.send(DnrEvent::ResizeStop(*r));
    }
}
