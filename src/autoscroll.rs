//! Edge auto-scrolling while a drag is running.

pub mod container;
mod scroller;
pub mod speed;
pub mod timer;

pub use container::{Overflow, ScrollAxis, ScrollHost, ScrollMetrics, ScrollTree};
pub use scroller::{EdgeAutoScroller, ScrollCallback};
pub use speed::ScrollTier;
