//! Reading and writing the 2-D offset an element is rendered at.
//! The visual layer stores it as css-like transform text such as `translate(50px, 0px)`.

use crate::data::Point;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

impl Translation {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Parses `translate(..)`, `translateX/Y(..)`, `translate3d(..)`, `matrix(..)`,
    /// `matrix3d(..)` and `none`. Returns `None` for anything else.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim().to_ascii_lowercase();
        if text.is_empty() || text == "none" {
            return Some(Self::ZERO);
        }
        let open = text.find('(')?;
        let close = text.rfind(')')?;
        if close < open || !text[close + 1..].trim().is_empty() {
            return None;
        }
        let name = text[..open].trim();
        let args = text[open + 1..close]
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(parse_length)
            .collect::<Option<Vec<f32>>>()?;
        match (name, args.as_slice()) {
            ("translate", [x]) => Some(Self::new(*x, 0.0)),
            ("translate", [x, y]) => Some(Self::new(*x, *y)),
            ("translatex", [x]) => Some(Self::new(*x, 0.0)),
            ("translatey", [y]) => Some(Self::new(0.0, *y)),
            ("translate3d", [x, y, _z]) => Some(Self::new(*x, *y)),
            ("matrix", [_a, _b, _c, _d, e, f]) => Some(Self::new(*e, *f)),
            ("matrix3d", m) if m.len() == 16 => Some(Self::new(m[12], m[13])),
            _ => None,
        }
    }

    /// Malformed or missing text falls back to no offset.
    pub fn parse_or_zero(text: Option<&str>) -> Self {
        text.and_then(Self::parse).unwrap_or_default()
    }
}

fn parse_length(s: &str) -> Option<f32> {
    let v = s.strip_suffix("px").unwrap_or(s).parse::<f32>().ok()?;
    v.is_finite().then_some(v)
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // + 0.0 turns -0 into 0
        write!(f, "translate({}px, {}px)", self.x + 0.0, self.y + 0.0)
    }
}

impl From<Translation> for Point {
    fn from(t: Translation) -> Self {
        Point::new(t.x, t.y)
    }
}

impl From<Point> for Translation {
    fn from(p: Point) -> Self {
        Translation::new(p.x, p.y)
    }
}
