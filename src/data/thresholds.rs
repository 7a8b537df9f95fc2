use serde::{Deserialize, Serialize};

/// Distance bands (in pixels from a container edge) for the three auto-scroll speeds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct EdgeThresholds {
    pub slow: f32,
    pub medium: f32,
    pub fast: f32,
}

impl EdgeThresholds {
    pub fn new(slow: f32, medium: f32, fast: f32) -> Self {
        Self { slow, medium, fast }
    }
}

impl Default for EdgeThresholds {
    fn default() -> Self {
        Self::new(50.0, 25.0, 10.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ScrollThresholds {
    pub top: EdgeThresholds,
    pub right: EdgeThresholds,
    pub bottom: EdgeThresholds,
    pub left: EdgeThresholds,
}

impl ScrollThresholds {
    pub fn uniform(edge: EdgeThresholds) -> Self {
        Self {
            top: edge,
            right: edge,
            bottom: edge,
            left: edge,
        }
    }
}
