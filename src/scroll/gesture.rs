//! Swipe recognition.
//!
//! A left-button drag in the terminal stands in for a touch sequence: the
//! button press is the touch start and the release is the touch end.

use std::time::Instant;

/// Minimum travel (exclusive) for a swipe to count.
pub const SWIPE_MIN_DISTANCE_PX: f64 = 50.0;

/// Maximum duration (exclusive) for a swipe to count.
pub const SWIPE_MAX_ELAPSED_MS: f64 = 300.0;

/// A point in virtual pixels with the time it was reported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
    pub at: Instant,
}

/// A completed gesture, start to end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    pub delta_x: f64,
    pub delta_y: f64,
    pub elapsed_ms: f64,
}

impl Swipe {
    pub fn between(start: TouchPoint, end: TouchPoint) -> Self {
        let elapsed = end.at.saturating_duration_since(start.at);
        Self {
            delta_x: end.x - start.x,
            delta_y: end.y - start.y,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }

    pub fn distance(&self) -> f64 {
        self.delta_x.hypot(self.delta_y)
    }

    /// Long enough, fast enough and mostly vertical.
    pub fn qualifies(&self) -> bool {
        if !(self.delta_x.is_finite() && self.delta_y.is_finite() && self.elapsed_ms.is_finite()) {
            return false;
        }
        self.distance() > SWIPE_MIN_DISTANCE_PX
            && self.elapsed_ms < SWIPE_MAX_ELAPSED_MS
            && self.delta_y.abs() > self.delta_x.abs()
    }
}

/// Tracks one touch sequence at a time.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    start: Option<TouchPoint>,
}

impl TouchTracker {
    pub fn begin(&mut self, point: TouchPoint) {
        self.start = Some(point);
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Finish the sequence. Returns `None` when no start was recorded.
    pub fn finish(&mut self, end: TouchPoint) -> Option<Swipe> {
        self.start.take().map(|start| Swipe::between(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn point(x: f64, y: f64, at: Instant) -> TouchPoint {
        TouchPoint { x, y, at }
    }

    #[test]
    fn test_distance_boundary() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(200);

        let short = Swipe::between(point(0.0, 100.0, t0), point(0.0, 51.0, t1));
        assert_eq!(short.distance(), 49.0);
        assert!(!short.qualifies());

        let long = Swipe::between(point(0.0, 100.0, t0), point(0.0, 49.0, t1));
        assert!(long.qualifies());
        assert!(long.delta_y < 0.0);
    }

    #[test]
    fn test_slow_swipe_rejected() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(400);
        let slow = Swipe::between(point(10.0, 100.0, t0), point(10.0, 49.0, t1));
        assert!(!slow.qualifies());
    }

    #[test]
    fn test_diagonal_needs_vertical_dominance() {
        let swipe = Swipe {
            delta_x: 60.0,
            delta_y: -60.0,
            elapsed_ms: 100.0,
        };
        assert!(!swipe.qualifies());
    }

    #[test]
    fn test_tracker_without_start_discards() {
        let mut tracker = TouchTracker::default();
        assert!(tracker.finish(point(0.0, 0.0, Instant::now())).is_none());
    }

    #[test]
    fn test_tracker_consumes_start() {
        let mut tracker = TouchTracker::default();
        let t0 = Instant::now();
        tracker.begin(point(5.0, 200.0, t0));
        let swipe = tracker
            .finish(point(5.0, 100.0, t0 + Duration::from_millis(50)))
            .unwrap();
        assert_eq!(swipe.delta_y, -100.0);
        assert!(tracker.finish(point(5.0, 0.0, t0)).is_none());
    }
}
