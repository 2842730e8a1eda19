//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};
use crate::scroll::NavKey;

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_normal_mode(app: &App, key: KeyEvent) -> Action {
    // Only plain keys and shift toggle things; leave other chords alone
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return Action::None;
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::ToggleHelp,

        // Section navigation
        KeyCode::Down | KeyCode::Char('j') => Action::Navigate(NavKey::ArrowDown),
        KeyCode::Up | KeyCode::Char('k') => Action::Navigate(NavKey::ArrowUp),

        // Carousel
        KeyCode::Right => Action::GalleryNext,
        KeyCode::Left => Action::GalleryPrev,
        KeyCode::Enter if app.gallery.focused().is_none() => Action::GalleryFocus,
        KeyCode::Esc => Action::CloseOverlay,

        // Preferences
        KeyCode::Char('l') | KeyCode::Char('L') => Action::ToggleLanguage,
        KeyCode::Char('t') | KeyCode::Char('T') => Action::ToggleTheme,

        KeyCode::Char('s') | KeyCode::Char('S') => Action::Share,

        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc => Action::CloseOverlay,
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}
