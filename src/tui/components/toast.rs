//! Toast shown near the bottom center.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::tui::theme::{palette, rgb};

pub fn render_toast(frame: &mut Frame, area: Rect, app: &App) {
    let Some(toast) = app.toasts.current() else {
        return;
    };
    let colors = palette(app.dark_mode);

    let text_width = Span::raw(toast.message.as_str()).width() as u16;
    let width = (text_width + 4).min(area.width);
    let height = 3.min(area.height);
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    );

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(toast.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::new().fg(rgb(colors.text)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::new().fg(rgb(colors.accent)))
                    .style(Style::new().bg(rgb(colors.background))),
            ),
        rect,
    );
}
