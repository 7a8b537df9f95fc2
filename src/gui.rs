//! egui host for the gesture engine: draggable timeline regions inside a scroll area.

use crate::data::{Point, Rect};

pub mod region;
pub mod scroll;

pub(crate) const PIXELS_PER_SEC_DEFAULT: f32 = 100.0;

pub(crate) use crate::data::TRACK_HEIGHT;

pub(crate) fn to_point(p: egui::Pos2) -> Point {
    Point::new(p.x, p.y)
}

pub(crate) fn to_rect(r: egui::Rect) -> Rect {
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub(crate) fn pix_to_sec(pix: f32) -> f32 {
    pix / PIXELS_PER_SEC_DEFAULT
}
