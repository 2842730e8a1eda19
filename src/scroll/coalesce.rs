//! Per-frame wheel coalescing.
//!
//! Terminals and trackpads can report many wheel notches between two frames.
//! They are queued here and handed to the controller together on the next
//! frame tick, in arrival order, so the screen updates once per frame while
//! every notch still reaches the hysteresis buffer with its own magnitude.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut coalescer = FrameCoalescer::default();
//!
//! // On each wheel event:
//! coalescer.accumulate(delta);
//!
//! // On each frame tick:
//! for delta in coalescer.flush() {
//!     controller.apply_wheel_delta(delta, &ctx);
//! }
//! ```

/// Queues wheel deltas until the next frame.
#[derive(Debug, Clone, Default)]
pub struct FrameCoalescer {
    /// Deltas received since the last flush, oldest first
    pending: Vec<f64>,
}

impl FrameCoalescer {
    /// Add a delta to the current frame. Zero and non-finite deltas are dropped.
    pub fn accumulate(&mut self, delta: f64) {
        if !delta.is_finite() || delta == 0.0 {
            return;
        }
        self.pending.push(delta);
    }

    /// Whether a flush would yield an update.
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Take the frame's deltas in arrival order.
    pub fn flush(&mut self) -> Vec<f64> {
        std::mem::take(&mut self.pending)
    }

    /// Drop anything pending.
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}
