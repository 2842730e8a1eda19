//! Scroll-driven section navigation.
//!
//! - `range` - section range table derived from the viewport height
//! - `controller` - virtual scroll position, hysteresis, discrete stops
//! - `gesture` - swipe recognition from press/release pairs
//! - `visuals` - per-section scale, opacity and offset
//! - `coalesce` - per-frame wheel delta accumulation

mod coalesce;
mod controller;
mod gesture;
mod range;
mod visuals;

pub use coalesce::FrameCoalescer;
pub use controller::{InputContext, NavKey, SectionController};
pub use gesture::{TouchPoint, TouchTracker};
pub use range::Section;
pub use visuals::SectionVisual;
