//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::events::Action;
use crate::tui::interaction::{ClickRegion, InteractiveRegion};
use crate::tui::theme::{palette, rgb};

/// Render the help popup with the localized keyboard shortcuts.
///
/// While open, a click anywhere closes it.
pub fn render_help_popup(frame: &mut Frame, area: Rect, app: &mut App) {
    let t = app.strings();
    let colors = palette(app.dark_mode);

    let popup_width = 52u16;
    let popup_height = t.shortcuts.len() as u16 + 6;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![
        Line::styled(t.help_title, Style::new().fg(rgb(colors.text)).add_modifier(Modifier::BOLD)),
        Line::raw(""),
    ];
    for (keys, description) in t.shortcuts {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<10}", keys), Style::new().fg(rgb(colors.accent))),
            Span::styled(description, Style::new().fg(rgb(colors.dim))),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("? / Esc  ", Style::new().fg(rgb(colors.text))),
        Span::styled(t.help_close, Style::new().fg(rgb(colors.dim))),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(rgb(colors.secondary)))
        .style(Style::new().bg(rgb(colors.background)));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);

    app.interactions.register(
        InteractiveRegion::clickable("help", ClickRegion::from(area), Action::CloseOverlay)
            .capturing()
            .with_priority(200),
    );
}
