//! Layout file of the timeline host. Imported/exported as json via serde.
use super::constraints::Constraints;
use super::geometry::{Coordinates, Size};
use super::thresholds::ScrollThresholds;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationMilliSeconds};
use std::time::Duration;

/// Which document event feeds the auto-scroller.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScrollEventType {
    /// native drag and drop (`dragover`)
    Drag,
    /// pointer drags (`mousemove`)
    #[default]
    Mouse,
}

/// Vertical distance between the timeline lanes of the default layout.
pub const TRACK_HEIGHT: f32 = 130.0;

pub const DEFAULT_SCROLL_INTERVAL: Duration = Duration::from_millis(25);

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoScrollSetting {
    pub event_type: ScrollEventType,
    pub thresholds: ScrollThresholds,
    /// only scroll while the pointer lies inside the container on the other axis
    pub within_bounds: bool,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "intervalMs")]
    pub interval: Duration,
}

impl Default for AutoScrollSetting {
    fn default() -> Self {
        Self {
            event_type: ScrollEventType::Mouse,
            thresholds: ScrollThresholds::default(),
            within_bounds: false,
            interval: DEFAULT_SCROLL_INTERVAL,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RegionLayout {
    pub label: String,
    pub coordinates: Coordinates,
}

impl RegionLayout {
    pub fn new(label: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            label: label.into(),
            coordinates,
        }
    }
}

impl std::fmt::Display for RegionLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "region {}", self.label)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Layout {
    /// size of the scrollable canvas the regions live on
    pub canvas: Size,
    /// unbounded when missing, whatever the canvas size
    #[serde(default)]
    pub constraints: Constraints,
    pub auto_scroll: AutoScrollSetting,
    pub regions: Vec<RegionLayout>,
}

impl Default for Layout {
    fn default() -> Self {
        let track = |i: usize| i as f32 * TRACK_HEIGHT;
        Self {
            canvas: Size::new(4000.0, 1200.0),
            constraints: Constraints {
                bounds: super::Bounds {
                    left: Some(0.0),
                    top: Some(0.0),
                    right: Some(4000.0),
                    bottom: Some(1200.0),
                },
                size: super::SizeLimits {
                    min_width: Some(20.0),
                    max_width: Some(2000.0),
                    min_height: Some(40.0),
                    max_height: Some(300.0),
                },
                ..Default::default()
            },
            auto_scroll: AutoScrollSetting::default(),
            regions: vec![
                RegionLayout::new("region1", Coordinates::new(0.0, track(0), 200.0, track(0) + 100.0)),
                RegionLayout::new("region2", Coordinates::new(300.0, track(1), 450.0, track(1) + 100.0)),
                RegionLayout::new("region3", Coordinates::new(900.0, track(2), 1400.0, track(2) + 100.0)),
            ],
        }
    }
}

impl Layout {
    pub fn validate(&self) -> Result<(), String> {
        self.constraints.validate()?;
        if let Some(region) = self
            .regions
            .iter()
            .find(|r| r.coordinates.width() < 0.0 || r.coordinates.height() < 0.0)
        {
            return Err(format!("{region} has its end before its start"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn default_layout_is_valid() {
        assert!(Layout::default().validate().is_ok());
    }
    #[test]
    fn parse_minimal_file() {
        let json = r#"{
            "autoScroll": {"eventType": "drag", "intervalMs": 40, "withinBounds": true},
            "regions": [{"label": "a", "coordinates": {"startX": 0, "startY": 0, "endX": 10, "endY": 10}}]
        }"#;
        let layout: Layout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.auto_scroll.event_type, ScrollEventType::Drag);
        assert_eq!(layout.auto_scroll.interval, Duration::from_millis(40));
        assert!(layout.auto_scroll.within_bounds);
        assert_eq!(layout.regions.len(), 1);
        assert_eq!(layout.constraints, Constraints::default());
    }
    #[test]
    fn default_regions_sit_on_lanes() {
        for (i, r) in Layout::default().regions.iter().enumerate() {
            assert_eq!(r.coordinates.start_y, i as f32 * TRACK_HEIGHT);
        }
    }
    #[test]
    fn own_canvas_without_constraints_is_unbounded() {
        let layout: Layout = serde_json::from_str(r#"{"canvas":{"width":8000,"height":2000}}"#).unwrap();
        assert_eq!(layout.canvas, Size::new(8000.0, 2000.0));
        assert_eq!(layout.constraints.bounds.right, None);
        assert_eq!(layout.constraints, Constraints::default());
        // regions still come from the built-in layout
        assert_eq!(layout.regions.len(), 3);
    }
    #[test]
    fn reversed_region_is_rejected() {
        let mut layout = Layout::default();
        layout.regions[0].coordinates = Coordinates::new(10.0, 0.0, 0.0, 10.0);
        assert!(layout.validate().is_err());
    }
}
