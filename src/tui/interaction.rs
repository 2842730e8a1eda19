//! Component-level mouse interactivity system.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the appropriate component before falling through to
//! section navigation.
//!
//! # Example
//!
//! ```ignore
//! // During render, register the carousel as a capturing scroll region:
//! registry.register(
//!     InteractiveRegion::scrollable(
//!         "gallery",
//!         ClickRegion::new(x, y, width, height),
//!         Action::GalleryWheel(-delta),
//!         Action::GalleryWheel(delta),
//!     )
//!     .capturing(),
//! );
//! ```

use crate::events::Action;
use crate::log;

/// Rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

impl From<ratatui::layout::Rect> for ClickRegion {
    fn from(rect: ratatui::layout::Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// While hovered, section navigation ignores wheel and drag input
    pub captures_pointer: bool,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            captures_pointer: false,
            priority: 0,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(
        id: &'static str,
        bounds: ClickRegion,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            captures_pointer: false,
            priority: 0,
        }
    }

    /// Mark the region as owning the pointer while hovered
    pub fn capturing(mut self) -> Self {
        self.captures_pointer = true;
        self
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Register an interactive region
    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a simple clickable region
    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    /// Highest-priority region at (x, y) that has the requested handler,
    /// with that handler's action.
    fn topmost(
        &self,
        x: u16,
        y: u16,
        pick: impl Fn(&InteractiveRegion) -> Option<&Action>,
    ) -> Option<(&'static str, Action)> {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y) && pick(r).is_some())
            .max_by_key(|r| r.priority)
            .and_then(|r| pick(r).map(|action| (r.id, action.clone())))
    }

    /// Find the action to dispatch for a click at (x, y)
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        match self.topmost(x, y, |r| r.on_click.as_ref()) {
            Some((id, action)) => {
                log::log_event(&format!("Click on {}: {:?}", id, action));
                action
            }
            None => Action::None,
        }
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.topmost(x, y, |r| r.on_scroll_up.as_ref())
            .map_or(Action::None, |(_, action)| action)
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.topmost(x, y, |r| r.on_scroll_down.as_ref())
            .map_or(Action::None, |(_, action)| action)
    }

    /// Whether (x, y) is over a region that captures the pointer
    pub fn captures_pointer(&self, x: u16, y: u16) -> bool {
        self.regions
            .iter()
            .any(|r| r.captures_pointer && r.contains(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_contains() {
        let region =
            InteractiveRegion::clickable("test", ClickRegion::new(10, 10, 20, 10), Action::None);

        assert!(region.contains(10, 10)); // top-left corner
        assert!(region.contains(15, 15)); // center
        assert!(region.contains(29, 19)); // just inside bottom-right
        assert!(!region.contains(30, 20)); // just outside
        assert!(!region.contains(9, 10)); // just left
    }

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::default();

        registry.register(
            InteractiveRegion::clickable(
                "background",
                ClickRegion::new(0, 0, 100, 100),
                Action::ToggleHelp,
            )
            .with_priority(0),
        );

        registry.register(
            InteractiveRegion::clickable(
                "popup",
                ClickRegion::new(20, 20, 60, 60),
                Action::CloseOverlay,
            )
            .with_priority(10),
        );

        assert_eq!(registry.handle_click(50, 50), Action::CloseOverlay);
        assert_eq!(registry.handle_click(5, 5), Action::ToggleHelp);
    }

    #[test]
    fn test_capture_only_inside_capturing_regions() {
        let mut registry = InteractionRegistry::default();
        registry.register_click("dot", ClickRegion::new(0, 0, 2, 2), Action::None);
        registry.register(
            InteractiveRegion::scrollable(
                "gallery",
                ClickRegion::new(5, 5, 10, 4),
                Action::GalleryPrev,
                Action::GalleryNext,
            )
            .capturing(),
        );

        assert!(!registry.captures_pointer(1, 1));
        assert!(registry.captures_pointer(6, 6));
        assert_eq!(registry.handle_scroll_down(6, 6), Action::GalleryNext);
        assert_eq!(registry.handle_scroll_down(1, 1), Action::None);

        registry.clear();
        assert!(!registry.captures_pointer(6, 6));
    }
}
