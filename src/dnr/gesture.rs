use super::listener::ResizeEdge;
use crate::data::{Delta, Point, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    Dragging,
    Resizing(ResizeEdge),
}

/// State of one pointer-down to pointer-up session.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureState {
    pub mode: Mode,
    /// pointer position seen on the previous tick
    pub origin_pointer: Point,
    /// box size at gesture start
    pub origin_size: Size,
    pub last_delta: Delta,
}

impl GestureState {
    pub fn begin(mode: Mode, pointer: Point, size: Size) -> Self {
        Self {
            mode,
            origin_pointer: pointer,
            origin_size: size,
            last_delta: Delta::ZERO,
        }
    }
    pub fn is_active(&self) -> bool {
        self.mode != Mode::Idle
    }
    /// Movement since the previous tick. Moves the delta base to `pointer`.
    pub fn advance(&mut self, pointer: Point) -> Delta {
        let d = pointer - self.origin_pointer;
        self.origin_pointer = pointer;
        d
    }
}
