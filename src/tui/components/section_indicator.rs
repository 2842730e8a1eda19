//! Dot navigation on the right edge.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::scroll::Section;
use crate::tui::theme::{palette, rgb};

/// Columns needed by the indicator.
pub const INDICATOR_WIDTH: u16 = 14;

pub fn render_section_indicator(frame: &mut Frame, area: Rect, app: &App) {
    let colors = palette(app.dark_mode);
    let active = app.controller.indicator_section();
    let labels = app.strings().section_labels;

    let mut lines = vec![];
    for section in Section::ALL {
        let is_active = section == active;
        let (dot, style) = if is_active {
            (
                "●",
                Style::new()
                    .fg(rgb(colors.accent))
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("○", Style::new().fg(rgb(colors.dim)))
        };
        lines.push(Line::from(vec![
            Span::styled(labels[section.index()], style),
            Span::styled(format!(" {}", dot), style),
        ]));
        lines.push(Line::raw(""));
    }
    lines.pop();

    let height = (lines.len() as u16).min(area.height);
    let rect = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(height) / 2,
        area.width,
        height,
    );
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Right), rect);
}
