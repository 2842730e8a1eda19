//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `sections` - the three page sections, scaled and faded by scroll position
//! - `gallery_stack` - stacked image cards and the focused-image overlay
//! - `section_indicator` - dot navigation with localized labels
//! - `status_bar` - scroll progress, hysteresis meter and hotkeys
//! - `help_popup` - shortcut overlay
//! - `toast` - transient message

mod gallery_stack;
mod help_popup;
mod section_indicator;
mod sections;
mod status_bar;
mod toast;

pub use gallery_stack::{render_focused_image, render_gallery_stack};
pub use help_popup::render_help_popup;
pub use section_indicator::{INDICATOR_WIDTH, render_section_indicator};
pub use sections::render_sections;
pub use status_bar::render_status_bar;
pub use toast::render_toast;

use ratatui::text::Span;

/// Wrap text to fit within `width` display columns.
///
/// Breaks on spaces; words wider than a line (and unspaced CJK runs) are
/// split by character.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let display_width = |s: &str| Span::raw(s).width();
    let mut lines = vec![];
    let mut current = String::new();

    for word in text.split(' ') {
        let needed = if current.is_empty() {
            display_width(word)
        } else {
            display_width(&current) + 1 + display_width(word)
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if display_width(word) <= width {
            current.push_str(word);
            continue;
        }

        for c in word.chars() {
            let mut buf = [0u8; 4];
            let cw = display_width(c.encode_utf8(&mut buf));
            if display_width(&current) + cw > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
