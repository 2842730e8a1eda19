//! Bottom line: hotkeys, scroll progress and the hysteresis meter.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::theme::{palette, rgb};

const BAR_WIDTH: usize = 12;

/// `[####----]` style bar for a ratio in `0..=1`.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let colors = palette(app.dark_mode);
    let dim = Style::new().fg(rgb(colors.dim));
    let key = Style::new().fg(rgb(colors.text));
    let accent = Style::new().fg(rgb(colors.accent));

    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(40)]).areas(area);

    let t = app.strings();
    let mut hints = vec![];
    if app.controller.position() == 0.0 {
        hints.push(Span::styled(format!(" ↓ {}  ", t.scroll_to_explore), accent));
    }
    for (k, label) in t.status_hints {
        hints.push(Span::styled(format!(" {} ", k), key));
        hints.push(Span::styled(format!("{} ", label), dim));
    }
    frame.render_widget(Paragraph::new(Line::from(hints)), left);

    let max = app.controller.ranges().max_scroll;
    let ratio = if max > 0.0 {
        app.controller.position() / max
    } else {
        0.0
    };

    // Blank while between sections
    let label = app
        .controller
        .current_section()
        .map_or("", |section| t.section_labels[section.index()]);
    let mut meter = vec![Span::styled(format!("{} ", label), key)];
    let buffer = app.controller.buffer_progress();
    if buffer > 0.0 {
        meter.push(Span::styled("⇅ ", dim));
        meter.push(Span::styled(progress_bar(buffer, 6), accent));
        meter.push(Span::raw(" "));
    }
    meter.push(Span::styled(progress_bar(ratio, BAR_WIDTH), accent));
    meter.push(Span::styled(format!(" {:>3.0}% ", ratio * 100.0), dim));
    frame.render_widget(
        Paragraph::new(Line::from(meter)).alignment(Alignment::Right),
        right,
    );
}
