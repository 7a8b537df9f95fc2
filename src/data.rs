//! Plain data shared between the gesture engine, the scroller and hosts.
//! Everything here is serialized with serde so that layouts can be stored as json.

pub mod constraints;
pub mod geometry;
pub mod layout;
pub mod thresholds;

pub use constraints::{Axis, Bounds, Constraints, SizeLimits};
pub use geometry::{Coordinates, Delta, Point, Rect, Size};
pub use layout::{AutoScrollSetting, Layout, RegionLayout, ScrollEventType, TRACK_HEIGHT};
pub use thresholds::{EdgeThresholds, ScrollThresholds};
