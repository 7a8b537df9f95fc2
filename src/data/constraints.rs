use super::geometry::{Delta, Size};
use serde::{Deserialize, Serialize};

/// Which axis a gesture is allowed to change.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    #[default]
    Both,
}

impl Axis {
    pub fn filter(self, d: Delta) -> Delta {
        match self {
            Axis::X => Delta::new(d.x, 0.0),
            Axis::Y => Delta::new(0.0, d.y),
            Axis::Both => d,
        }
    }
}

/// Limits for dragging. An edge left as `None` does not constrain anything.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Bounds {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SizeLimits {
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,
}

fn clamp_opt(v: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    // min wins over max so an inconsistent pair never panics
    let v = max.map_or(v, |max| v.min(max));
    min.map_or(v, |min| v.max(min))
}

impl SizeLimits {
    /// Clamps each axis independently. The result is never negative.
    pub fn clamp(&self, size: Size) -> Size {
        Size::new(
            clamp_opt(size.width, self.min_width, self.max_width).max(0.0),
            clamp_opt(size.height, self.min_height, self.max_height).max(0.0),
        )
    }
}

/// Host supplied rules for one draggable element. They do not change during a gesture.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Constraints {
    pub bounds: Bounds,
    #[serde(flatten)]
    pub size: SizeLimits,
    pub drag_axis: Axis,
    pub resize_axis: Axis,
    /// pointer pixels per logical pixel
    pub scale: f32,
    pub can_drag: bool,
    pub can_resize: bool,
    /// accept presses from any pointer button, not only the primary one
    pub any_button: bool,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            size: SizeLimits::default(),
            drag_axis: Axis::Both,
            resize_axis: Axis::Both,
            scale: 1.0,
            can_drag: true,
            can_resize: true,
            any_button: false,
        }
    }
}

impl Constraints {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.scale > 0.0) {
            return Err(format!("scale must be positive, got {}", self.scale));
        }
        let pairs = [
            ("width", self.size.min_width, self.size.max_width),
            ("height", self.size.min_height, self.size.max_height),
            ("horizontal bounds", self.bounds.left, self.bounds.right),
            ("vertical bounds", self.bounds.top, self.bounds.bottom),
        ];
        for (name, lo, hi) in pairs {
            if let (Some(lo), Some(hi)) = (lo, hi) {
                if lo > hi {
                    return Err(format!("{name}: lower limit {lo} exceeds upper limit {hi}"));
                }
            }
        }
        Ok(())
    }
}
