//! Drag and resize gestures for rectangular elements.
//!
//! A host feeds pointer events into a [`DragResizeController`]; the controller computes
//! per-tick deltas, applies [`Constraints`](crate::data::Constraints), writes the result to
//! the element's visual layer and reports progress to a [`DnrListener`].

pub mod clamp;
mod controller;
mod element;
pub mod gesture;
mod listener;

pub use controller::DragResizeController;
pub use element::{Element, InlineStyle, StyledElement};
pub use gesture::Mode;
pub use listener::{
    DnrEvent, DnrListener, DragData, HorizontalEdge, ResizeData, ResizeEdge, VerticalEdge,
};
