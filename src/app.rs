use std::time::{Duration, Instant};

use crate::clipboard;
use crate::config::Config;
use crate::events::{Action, PointerState};
use crate::gallery::Gallery;
use crate::locale::{Language, Strings};
use crate::log;
use crate::prefs::{self, PreferenceStore};
use crate::scroll::{FrameCoalescer, InputContext, Section, SectionController, TouchTracker};
use crate::toast::Toasts;
use crate::tui::interaction::InteractionRegistry;
use crate::typing::{self, RotatingTyper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal, // Section navigation
    Help,   // Shortcut overlay
}

/// Application state. All mutation happens in [`App::dispatch`] and
/// [`App::on_frame`], both called from the single event loop task.
pub struct App {
    pub config: Config,
    pub input_mode: InputMode,
    pub controller: SectionController,
    pub coalescer: FrameCoalescer,
    pub touch: TouchTracker,
    pub gallery: Gallery,
    pub language: Language,
    pub dark_mode: bool,
    /// Set while the pointer hovers a widget with its own scrolling
    pub pointer_over_excluded: bool,
    /// Last reported pointer cell
    pointer: Option<(u16, u16)>,
    pub interactions: InteractionRegistry,
    pub toasts: Toasts,
    /// Rotating word on the welcome line
    pub typer: RotatingTyper,
    pub should_quit: bool,
    prefs: Box<dyn PreferenceStore>,
}

impl App {
    /// Create the app for a terminal `rows` tall.
    ///
    /// Theme and language come from the store first, then the config file,
    /// then defaults (dark, English).
    pub fn new(config: Config, store: Box<dyn PreferenceStore>, rows: u16) -> Self {
        let language = prefs::load_language(store.as_ref())
            .or(config.language)
            .unwrap_or_default();
        let dark_mode = prefs::load_dark_mode(store.as_ref())
            .or(config.dark_mode)
            .unwrap_or(true);
        let controller = SectionController::new(config.viewport_height(rows));
        let toasts = Toasts::new(Duration::from_millis(config.toast_ms));

        Self {
            config,
            input_mode: InputMode::Normal,
            controller,
            coalescer: FrameCoalescer::default(),
            touch: TouchTracker::default(),
            gallery: Gallery::default(),
            language,
            dark_mode,
            pointer_over_excluded: false,
            pointer: None,
            interactions: InteractionRegistry::default(),
            toasts,
            typer: RotatingTyper::new(&typing::WORDS, Instant::now()),
            should_quit: false,
            prefs: store,
        }
    }

    /// Apply CLI choices for this run without persisting them.
    pub fn apply_overrides(&mut self, language: Option<Language>, dark_mode: Option<bool>) {
        if let Some(language) = language {
            self.language = language;
        }
        if let Some(dark_mode) = dark_mode {
            self.dark_mode = dark_mode;
        }
    }

    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }

    /// Snapshot of sibling-owned flags handed to the controller.
    pub fn input_context(&self) -> InputContext {
        InputContext {
            pointer_over_excluded: self.pointer_over_excluded,
        }
    }

    pub fn column_to_px(&self, column: u16) -> f64 {
        f64::from(column) * self.config.cell_width_px
    }

    pub fn row_to_px(&self, row: u16) -> f64 {
        f64::from(row) * self.config.cell_height_px
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: Action, now: Instant) {
        if !matches!(
            action,
            Action::None | Action::Wheel { .. } | Action::TouchMove(_) | Action::PointerMoved(_)
        ) {
            log::log_event(&format!("{:?}", action));
        }

        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::Resize(_, rows) => self.resize(rows),

            Action::Wheel { delta, pointer } => {
                self.track_pointer(pointer);
                if !self.pointer_over_excluded {
                    self.coalescer.accumulate(delta);
                }
            }
            Action::Navigate(key) => {
                let ctx = self.input_context();
                self.coalescer.reset();
                self.controller.apply_key_navigation(key, &ctx);
            }
            Action::TouchStart(point) => {
                // Only emitted for presses no widget claims
                self.pointer_over_excluded = false;
                self.touch.begin(point);
            }
            Action::TouchMove(point) => {
                if self.gallery.is_dragging() {
                    self.gallery.drag_to(point.x);
                }
            }
            Action::TouchEnd(point) => {
                if self.gallery.is_dragging() {
                    self.gallery.end_drag();
                } else if let Some(swipe) = self.touch.finish(point) {
                    let ctx = self.input_context();
                    self.controller.apply_touch_swipe(swipe, &ctx);
                }
            }
            Action::PointerMoved(pointer) => self.track_pointer(pointer),

            Action::GalleryNext => self.gallery.next(),
            Action::GalleryPrev => self.gallery.prev(),
            Action::GalleryWheel(delta) => self.gallery.wheel(delta),
            Action::GalleryDragStart(x) => {
                self.touch.cancel();
                self.gallery.start_drag(x);
            }
            Action::GalleryFocus => self.gallery.focus_current(),

            Action::ToggleLanguage => self.toggle_language(now),
            Action::ToggleTheme => self.toggle_theme(),

            Action::ToggleHelp => {
                self.input_mode = match self.input_mode {
                    InputMode::Normal => InputMode::Help,
                    InputMode::Help => InputMode::Normal,
                };
            }
            Action::CloseOverlay => {
                if self.input_mode == InputMode::Help {
                    self.input_mode = InputMode::Normal;
                } else {
                    self.gallery.close_focus();
                }
            }
            Action::Share => self.share(now),
        }
    }

    /// Frame tick: apply the queued wheel deltas, advance the typed word and
    /// expire toasts.
    ///
    /// Returns whether anything changed and a redraw is needed.
    pub fn on_frame(&mut self, now: Instant) -> bool {
        let mut changed = false;
        let deltas = self.coalescer.flush();
        if !deltas.is_empty() {
            let ctx = self.input_context();
            let before = self.controller.position();
            let before_buffer = self.controller.hysteresis_buffer();
            for delta in deltas {
                self.controller.apply_wheel_delta(delta, &ctx);
            }
            changed |= before != self.controller.position()
                || before_buffer != self.controller.hysteresis_buffer();
        }
        // Typing only needs a redraw while the welcome section is on screen
        let welcome_visible = self.controller.visuals()[Section::Welcome.index()].is_visible();
        changed |= self.typer.tick(now) && welcome_visible;
        changed |= self.toasts.prune(now);
        changed
    }

    /// Recompute the hover flag against the regions registered by the last
    /// render, so a widget that moved or vanished stops blocking navigation.
    pub fn refresh_hover(&mut self) {
        if let Some((column, row)) = self.pointer {
            let over_excluded = self.interactions.captures_pointer(column, row);
            self.set_hover(over_excluded);
        }
    }

    fn track_pointer(&mut self, pointer: PointerState) {
        self.pointer = Some((pointer.column, pointer.row));
        self.set_hover(pointer.over_excluded);
    }

    fn set_hover(&mut self, over_excluded: bool) {
        if over_excluded && !self.pointer_over_excluded {
            self.touch.cancel();
        }
        self.pointer_over_excluded = over_excluded;
    }

    /// Rebuild the section ranges for a terminal `rows` tall.
    pub fn resize(&mut self, rows: u16) {
        let viewport = self.config.viewport_height(rows);
        self.coalescer.reset();
        self.controller.resize(viewport);
        log::log(&format!(
            "Resize: {} rows -> viewport {}px, max scroll {}",
            rows,
            viewport,
            self.controller.ranges().max_scroll
        ));
    }

    fn toggle_language(&mut self, now: Instant) {
        self.language = self.language.next();
        if let Err(e) = prefs::save_language(self.prefs.as_mut(), self.language) {
            log::log(&format!("Failed to save language: {}", e));
        }
        let message = self.strings().language_changed;
        self.toasts.show(message, now);
    }

    fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        if let Err(e) = prefs::save_dark_mode(self.prefs.as_mut(), self.dark_mode) {
            log::log(&format!("Failed to save theme: {}", e));
        }
    }

    fn share(&mut self, now: Instant) {
        let link = clipboard::localized_link(&self.config.share_url, self.language.code());
        match clipboard::copy_link(&link) {
            Ok(()) => {
                let message = self.strings().link_copied;
                self.toasts.show(message, now);
            }
            Err(e) => {
                log::log(&format!("Share failed: {}", e));
                self.toasts.show(link, now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{DARK_MODE_KEY, LANGUAGE_KEY, MemoryStore};
    use crate::scroll::{NavKey, TouchPoint};

    fn app() -> App {
        // 50 rows * 16px = 800px viewport
        App::new(Config::default(), Box::new(MemoryStore::default()), 50)
    }

    fn point(y: f64, at: Instant) -> TouchPoint {
        TouchPoint { x: 40.0, y, at }
    }

    fn pointer(over_excluded: bool) -> PointerState {
        PointerState {
            column: 20,
            row: 20,
            over_excluded,
        }
    }

    fn wheel(delta: f64) -> Action {
        Action::Wheel {
            delta,
            pointer: pointer(false),
        }
    }

    #[test]
    fn test_defaults_dark_english() {
        let app = app();
        assert!(app.dark_mode);
        assert_eq!(app.language, Language::En);
        assert_eq!(app.controller.ranges().max_scroll, 1360.0);
    }

    #[test]
    fn test_stored_prefs_beat_config() {
        let mut store = MemoryStore::default();
        store.set(DARK_MODE_KEY, "false").unwrap();
        store.set(LANGUAGE_KEY, "zh").unwrap();
        let config = Config {
            language: Some(Language::Ko),
            dark_mode: Some(true),
            ..Config::default()
        };
        let app = App::new(config, Box::new(store), 50);
        assert!(!app.dark_mode);
        assert_eq!(app.language, Language::Zh);
    }

    #[test]
    fn test_toggles_persist() {
        let mut app = app();
        let now = Instant::now();
        app.dispatch(Action::ToggleLanguage, now);
        app.dispatch(Action::ToggleTheme, now);
        assert_eq!(app.language, Language::Ko);
        assert_eq!(app.prefs.get(LANGUAGE_KEY).as_deref(), Some("ko"));
        assert_eq!(app.prefs.get(DARK_MODE_KEY).as_deref(), Some("false"));
        assert!(app.toasts.current().is_some());
    }

    #[test]
    fn test_overrides_not_persisted() {
        let mut app = app();
        app.apply_overrides(Some(Language::Zh), Some(false));
        assert_eq!(app.language, Language::Zh);
        assert!(!app.dark_mode);
        assert!(app.prefs.get(LANGUAGE_KEY).is_none());
    }

    #[test]
    fn test_wheel_applied_once_per_frame() {
        let mut app = app();
        let now = Instant::now();
        app.dispatch(wheel(60.0), now);
        app.dispatch(wheel(60.0), now);
        assert_eq!(app.controller.position(), 0.0);
        assert!(app.on_frame(now));
        assert_eq!(app.controller.position(), 120.0);
        assert!(!app.on_frame(now));
    }

    #[test]
    fn test_hover_blocks_wheel_and_swipe() {
        let mut app = app();
        let now = Instant::now();
        app.dispatch(
            Action::Wheel {
                delta: 100.0,
                pointer: pointer(true),
            },
            now,
        );
        app.on_frame(now);
        assert_eq!(app.controller.position(), 0.0);

        // pointer slides onto the carousel mid-swipe
        app.dispatch(Action::TouchStart(point(400.0, now)), now);
        app.dispatch(Action::PointerMoved(pointer(true)), now);
        app.dispatch(
            Action::TouchEnd(point(200.0, now + Duration::from_millis(100))),
            now,
        );
        assert_eq!(app.controller.position(), 0.0);

        app.dispatch(wheel(100.0), now);
        app.on_frame(now);
        assert_eq!(app.controller.position(), 100.0);
    }

    #[test]
    fn test_mixed_frame_reaches_buffer_in_order() {
        let mut app = app();
        let now = Instant::now();
        app.controller.set_position(800.0);
        for delta in [300.0, -300.0, 300.0] {
            app.dispatch(wheel(delta), now);
        }
        assert!(app.on_frame(now));
        assert_eq!(app.controller.position(), 1120.0);
    }

    #[test]
    fn test_typed_word_redraws_only_on_welcome() {
        let mut app = app();
        let now = Instant::now();
        assert!(app.on_frame(now));
        assert!(!app.typer.text().is_empty());

        app.controller.set_position(1120.0);
        let typed = app.typer.text();
        assert!(!app.on_frame(now + Duration::from_millis(80)));
        assert_ne!(app.typer.text(), typed);
    }

    #[test]
    fn test_refresh_hover_after_region_vanishes() {
        let mut app = app();
        let now = Instant::now();
        app.dispatch(Action::PointerMoved(pointer(true)), now);
        assert!(app.pointer_over_excluded);

        // nothing registered at the pointer any more
        app.refresh_hover();
        assert!(!app.pointer_over_excluded);
        app.dispatch(Action::Navigate(NavKey::ArrowDown), now);
        assert_eq!(app.controller.position(), 360.0);
    }

    #[test]
    fn test_swipe_advances_one_stop() {
        let mut app = app();
        let now = Instant::now();
        app.dispatch(Action::TouchStart(point(400.0, now)), now);
        app.dispatch(
            Action::TouchEnd(point(300.0, now + Duration::from_millis(120))),
            now,
        );
        assert_eq!(app.controller.current_section(), Some(Section::About));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut app = app();
        let now = Instant::now();
        app.dispatch(Action::TouchEnd(point(0.0, now)), now);
        assert_eq!(app.controller.position(), 0.0);
    }

    #[test]
    fn test_gallery_drag_does_not_swipe() {
        let mut app = app();
        let now = Instant::now();
        app.dispatch(Action::GalleryDragStart(100.0), now);
        app.dispatch(
            Action::TouchMove(TouchPoint {
                x: 140.0,
                y: 0.0,
                at: now,
            }),
            now,
        );
        app.dispatch(Action::TouchEnd(point(0.0, now)), now);
        assert_eq!(app.gallery.current_index(), 1);
        assert_eq!(app.controller.position(), 0.0);
    }

    #[test]
    fn test_arrow_navigation_drops_pending_wheel() {
        let mut app = app();
        let now = Instant::now();
        app.dispatch(wheel(100.0), now);
        app.dispatch(Action::Navigate(NavKey::ArrowDown), now);
        app.on_frame(now);
        assert_eq!(app.controller.position(), 360.0);
    }

    #[test]
    fn test_resize_reclamps() {
        let mut app = app();
        let now = Instant::now();
        for _ in 0..4 {
            app.dispatch(Action::Navigate(NavKey::ArrowDown), now);
        }
        assert_eq!(app.controller.position(), 1360.0);
        app.dispatch(Action::Resize(80, 25), now);
        assert_eq!(app.controller.ranges().transition_range, 200.0);
        assert_eq!(app.controller.position(), 680.0);
    }

    #[test]
    fn test_help_overlay_and_escape() {
        let mut app = app();
        let now = Instant::now();
        app.dispatch(Action::GalleryFocus, now);
        app.dispatch(Action::ToggleHelp, now);
        assert_eq!(app.input_mode, InputMode::Help);
        app.dispatch(Action::CloseOverlay, now);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.gallery.focused(), Some(0));
        app.dispatch(Action::CloseOverlay, now);
        assert_eq!(app.gallery.focused(), None);
    }
}
