//! Scroll section controller.
//!
//! Owns the virtual scroll position and turns wheel, swipe and key input into
//! position changes against the current [`RangeTable`]. Continuous wheel input
//! goes through the hysteresis buffer when a section is saturated; discrete
//! navigation (keys, swipes) hops between resting stops and ignores the buffer.

use super::gesture::Swipe;
use super::range::{RangeTable, Section};
use super::visuals::{SectionVisual, compute_section_visuals};

/// Snapshot of state owned by sibling components, read before any mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    /// Pointer is over a widget that handles its own scrolling (the carousel).
    pub pointer_over_excluded: bool,
}

/// Keys understood by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Where the position sits relative to the range table.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Zone {
    Welcome,
    AboutWorking,
    AboutSaturated,
    HelloWorking,
    HelloSaturated,
    /// Between two sections; carries the edge the position snaps to.
    Gap { snap_to: f64 },
}

#[derive(Debug, Clone)]
pub struct SectionController {
    position: f64,
    hysteresis_buffer: f64,
    ranges: RangeTable,
}

impl SectionController {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            position: 0.0,
            hysteresis_buffer: 0.0,
            ranges: RangeTable::new(viewport_height),
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn hysteresis_buffer(&self) -> f64 {
        self.hysteresis_buffer
    }

    pub fn ranges(&self) -> &RangeTable {
        &self.ranges
    }

    /// Section containing the position, `None` while inside a gap.
    pub fn current_section(&self) -> Option<Section> {
        self.ranges.section_at(self.position)
    }

    /// Section shown as active by the dot indicator.
    pub fn indicator_section(&self) -> Section {
        self.ranges.nearest_section(self.position)
    }

    /// Fill level of the hysteresis buffer in `[0, 1]`.
    pub fn buffer_progress(&self) -> f64 {
        (self.hysteresis_buffer / self.ranges.buffer_threshold).clamp(0.0, 1.0)
    }

    pub fn visuals(&self) -> [SectionVisual; 3] {
        compute_section_visuals(self.position, &self.ranges)
    }

    /// Rebuild the range table for a new viewport height and re-clamp.
    pub fn resize(&mut self, viewport_height: f64) {
        self.ranges = RangeTable::new(viewport_height);
        self.position = self.ranges.clamp(self.position);
        self.hysteresis_buffer = 0.0;
    }

    /// Apply a signed wheel delta (positive scrolls forward).
    ///
    /// Returns the new position. Non-finite deltas and input while the
    /// pointer is over an excluded widget leave the state untouched.
    pub fn apply_wheel_delta(&mut self, delta: f64, ctx: &InputContext) -> f64 {
        if ctx.pointer_over_excluded || !delta.is_finite() || delta == 0.0 {
            return self.position;
        }

        let ranges = self.ranges;
        let [welcome, about, hello] = ranges.sections;
        let pos = ranges.clamp(self.position);
        let target = pos + delta;

        let next = match self.zone(pos) {
            Zone::Welcome => {
                self.hysteresis_buffer = 0.0;
                if target > welcome.end {
                    about.start
                } else {
                    target.clamp(0.0, welcome.end)
                }
            }
            Zone::AboutWorking => {
                self.hysteresis_buffer = 0.0;
                if target < about.start {
                    welcome.end
                } else {
                    target.min(about.end)
                }
            }
            Zone::AboutSaturated => {
                if !self.fill_buffer(delta) {
                    pos
                } else if delta > 0.0 {
                    if target > about.end {
                        hello.start
                    } else {
                        target.max(about.start)
                    }
                } else if target < about.start {
                    welcome.end
                } else {
                    target.min(about.end)
                }
            }
            Zone::HelloWorking => {
                self.hysteresis_buffer = 0.0;
                if target < hello.start {
                    about.end
                } else {
                    target.min(hello.end)
                }
            }
            Zone::HelloSaturated => {
                if delta > 0.0 {
                    // terminal: forward input never moves or fills the buffer
                    ranges.max_scroll
                } else if self.fill_buffer(delta) {
                    about.end
                } else {
                    pos
                }
            }
            Zone::Gap { snap_to } => {
                self.hysteresis_buffer = 0.0;
                snap_to
            }
        };

        self.position = ranges.clamp(next);
        self.position
    }

    /// Apply a completed swipe. Returns the new position.
    ///
    /// Only fast, long, vertical-dominant swipes move; finger travelling up
    /// advances one stop, travelling down retreats one stop.
    pub fn apply_touch_swipe(&mut self, swipe: Swipe, ctx: &InputContext) -> f64 {
        if ctx.pointer_over_excluded || !swipe.qualifies() {
            return self.position;
        }
        if swipe.delta_y < 0.0 {
            self.step(Direction::Forward)
        } else {
            self.step(Direction::Backward)
        }
    }

    /// Apply an arrow key. Returns the new position.
    pub fn apply_key_navigation(&mut self, key: NavKey, ctx: &InputContext) -> f64 {
        if ctx.pointer_over_excluded {
            return self.position;
        }
        match key {
            NavKey::ArrowDown => self.step(Direction::Forward),
            NavKey::ArrowUp => self.step(Direction::Backward),
        }
    }

    /// Move to the adjacent resting stop, bypassing the hysteresis buffer.
    fn step(&mut self, direction: Direction) -> f64 {
        let stops = self.ranges.stops();
        let pos = self.ranges.clamp(self.position);
        let next = match direction {
            Direction::Forward => stops
                .iter()
                .copied()
                .find(|&stop| stop > pos)
                .unwrap_or(self.ranges.max_scroll),
            Direction::Backward => stops
                .iter()
                .rev()
                .copied()
                .find(|&stop| stop < pos)
                .unwrap_or(0.0),
        };
        self.hysteresis_buffer = 0.0;
        self.position = self.ranges.clamp(next);
        self.position
    }

    /// Add `|delta|` to the buffer. Returns `true` (and empties the buffer)
    /// once the threshold is reached.
    fn fill_buffer(&mut self, delta: f64) -> bool {
        self.hysteresis_buffer += delta.abs();
        if self.hysteresis_buffer >= self.ranges.buffer_threshold {
            self.hysteresis_buffer = 0.0;
            true
        } else {
            false
        }
    }

    fn zone(&self, pos: f64) -> Zone {
        let ranges = &self.ranges;
        let [welcome, about, hello] = ranges.sections;

        if pos <= welcome.end {
            Zone::Welcome
        } else if pos >= about.start && pos < about.end {
            Zone::AboutWorking
        } else if pos >= about.end && pos <= ranges.about_fade_out_end {
            Zone::AboutSaturated
        } else if pos >= hello.start && pos < hello.end {
            Zone::HelloWorking
        } else if pos >= hello.end {
            Zone::HelloSaturated
        } else if pos < about.start {
            let mid = (welcome.end + about.start) / 2.0;
            Zone::Gap {
                snap_to: if pos < mid { welcome.end } else { about.start },
            }
        } else {
            let mid = (ranges.about_fade_out_end + hello.start) / 2.0;
            Zone::Gap {
                snap_to: if pos < mid { about.end } else { hello.start },
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn set_position(&mut self, position: f64) {
        self.position = position;
    }
}
