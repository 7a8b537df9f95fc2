use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Pointer or element position in pixels.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Movement between two points, or a change of size while resizing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Delta {
    pub x: f32,
    pub y: f32,
}

impl Delta {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
    pub fn scaled(self, scale: f32) -> Self {
        Self::new(self.x / scale, self.y / scale)
    }
}

impl Sub for Point {
    type Output = Delta;
    fn sub(self, rhs: Point) -> Delta {
        Delta::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Delta> for Point {
    type Output = Point;
    fn add(self, rhs: Delta) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle relative to a fixed ancestor.
/// Hosts hand these out fresh on every query; nothing keeps them across ticks.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
    pub fn right(&self) -> f32 {
        self.left + self.width
    }
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
    pub fn contains_x(&self, x: f32) -> bool {
        (self.left..=self.right()).contains(&x)
    }
    pub fn contains_y(&self, y: f32) -> bool {
        (self.top..=self.bottom()).contains(&y)
    }
}

/// The rectangle of a draggable element kept as absolute edges, so that
/// moving and resizing both come down to moving edges.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,
}

impl Coordinates {
    pub fn new(start_x: f32, start_y: f32, end_x: f32, end_y: f32) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width,
            origin.y + size.height,
        )
    }
    pub fn origin(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }
    pub fn width(&self) -> f32 {
        self.end_x - self.start_x
    }
    pub fn height(&self) -> f32 {
        self.end_y - self.start_y
    }
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
    pub fn translate(&self, d: Delta) -> Self {
        Self::from_origin_size(self.origin() + d, self.size())
    }
}
