//! Mouse event handling.
//!
//! Wheel and button events are first offered to the interaction registry,
//! which UI components populate during render. Anything no component claims
//! drives the section controller: the wheel becomes a virtual-pixel delta and
//! a left-button press/release pair becomes a swipe.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;
use crate::scroll::TouchPoint;

use super::{Action, PointerState};

/// Handle mouse events and return the appropriate action.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;
    let wheel = app.config.wheel_delta_px;
    let pointer = PointerState {
        column: x,
        row: y,
        over_excluded: app.interactions.captures_pointer(x, y),
    };

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            let action = app.interactions.handle_scroll_up(x, y);
            if matches!(action, Action::None) {
                Action::Wheel {
                    delta: -wheel,
                    pointer,
                }
            } else {
                action
            }
        }
        MouseEventKind::ScrollDown => {
            let action = app.interactions.handle_scroll_down(x, y);
            if matches!(action, Action::None) {
                Action::Wheel {
                    delta: wheel,
                    pointer,
                }
            } else {
                action
            }
        }
        MouseEventKind::Moved => Action::PointerMoved(pointer),
        MouseEventKind::Down(MouseButton::Left) => {
            let action = app.interactions.handle_click(x, y);
            if !matches!(action, Action::None) {
                action
            } else if pointer.over_excluded {
                Action::GalleryDragStart(app.column_to_px(x))
            } else {
                Action::TouchStart(touch_point(app, x, y))
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => Action::TouchMove(touch_point(app, x, y)),
        MouseEventKind::Up(MouseButton::Left) => Action::TouchEnd(touch_point(app, x, y)),
        _ => Action::None,
    }
}

fn touch_point(app: &App, x: u16, y: u16) -> TouchPoint {
    TouchPoint {
        x: app.column_to_px(x),
        y: app.row_to_px(y),
        at: Instant::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::config::Config;
    use crate::prefs::MemoryStore;
    use crate::tui::interaction::{ClickRegion, InteractiveRegion};

    fn app() -> App {
        App::new(Config::default(), Box::new(MemoryStore::default()), 50)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn with_gallery(app: &mut App) {
        app.interactions.register(
            InteractiveRegion::scrollable(
                "gallery",
                ClickRegion::new(10, 10, 20, 10),
                Action::GalleryWheel(-1.0),
                Action::GalleryWheel(1.0),
            )
            .capturing(),
        );
    }

    #[test]
    fn test_wheel_outside_widgets_scrolls_sections() {
        let app = app();
        let pointer = PointerState {
            column: 0,
            row: 0,
            over_excluded: false,
        };
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::ScrollDown, 0, 0)),
            Action::Wheel {
                delta: 100.0,
                pointer
            }
        );
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::ScrollUp, 0, 0)),
            Action::Wheel {
                delta: -100.0,
                pointer
            }
        );
    }

    #[test]
    fn test_wheel_over_gallery_goes_to_gallery() {
        let mut app = app();
        with_gallery(&mut app);
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::ScrollDown, 15, 15)),
            Action::GalleryWheel(1.0)
        );
    }

    #[test]
    fn test_hover_reports_exclusion() {
        let mut app = app();
        with_gallery(&mut app);
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Moved, 15, 15)),
            Action::PointerMoved(PointerState {
                column: 15,
                row: 15,
                over_excluded: true
            })
        );
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Moved, 2, 2)),
            Action::PointerMoved(PointerState {
                column: 2,
                row: 2,
                over_excluded: false
            })
        );
    }

    #[test]
    fn test_wheel_after_region_vanishes_scrolls_sections() {
        let mut app = app();
        with_gallery(&mut app);
        let now = Instant::now();
        let moved = handle_mouse_event(&app, mouse(MouseEventKind::Moved, 15, 15));
        app.dispatch(moved, now);
        assert!(app.pointer_over_excluded);

        // the carousel is no longer drawn; the pointer has not moved
        app.interactions.clear();
        let wheel = handle_mouse_event(&app, mouse(MouseEventKind::ScrollDown, 15, 15));
        app.dispatch(wheel, now);
        app.on_frame(now);

        assert!(!app.pointer_over_excluded);
        assert_eq!(app.controller.position(), 100.0);
    }

    #[test]
    fn test_press_outside_widgets_clears_stale_hover() {
        let mut app = app();
        app.pointer_over_excluded = true;
        let press = handle_mouse_event(&app, mouse(MouseEventKind::Down(MouseButton::Left), 1, 1));
        app.dispatch(press, Instant::now());
        assert!(!app.pointer_over_excluded);
    }

    #[test]
    fn test_press_on_gallery_starts_drag() {
        let mut app = app();
        with_gallery(&mut app);
        assert_eq!(
            handle_mouse_event(&app, mouse(MouseEventKind::Down(MouseButton::Left), 12, 12)),
            Action::GalleryDragStart(96.0)
        );
        assert!(matches!(
            handle_mouse_event(&app, mouse(MouseEventKind::Down(MouseButton::Left), 1, 1)),
            Action::TouchStart(TouchPoint { x, y, .. }) if x == 8.0 && y == 16.0
        ));
    }
}
