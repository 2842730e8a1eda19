//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or tested
//! without a terminal.

use crate::scroll::{NavKey, TouchPoint};

/// Where the pointer is and whether a widget with its own scrolling owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerState {
    pub column: u16,
    pub row: u16,
    pub over_excluded: bool,
}

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No-op
    None,

    // === Application ===
    /// Quit the application
    Quit,
    /// Terminal resized to (columns, rows)
    Resize(u16, u16),

    // === Section navigation ===
    /// Wheel delta in virtual pixels, coalesced until the next frame
    Wheel { delta: f64, pointer: PointerState },
    /// Move one stop forward or back
    Navigate(NavKey),
    /// Primary button pressed outside the carousel (swipe start)
    TouchStart(TouchPoint),
    /// Primary button dragged
    TouchMove(TouchPoint),
    /// Primary button released (swipe end)
    TouchEnd(TouchPoint),
    /// Pointer moved
    PointerMoved(PointerState),

    // === Carousel ===
    /// Next image
    GalleryNext,
    /// Previous image
    GalleryPrev,
    /// Wheel over the carousel
    GalleryWheel(f64),
    /// Drag on the carousel started at x (virtual px)
    GalleryDragStart(f64),
    /// Focus the current image
    GalleryFocus,

    // === Preferences ===
    /// Cycle EN → KO → ZH
    ToggleLanguage,
    /// Switch dark/light
    ToggleTheme,

    // === Overlays ===
    /// Show or hide the shortcut overlay
    ToggleHelp,
    /// Close the topmost overlay (help, then focused image)
    CloseOverlay,
    /// Copy the page link
    Share,
}
