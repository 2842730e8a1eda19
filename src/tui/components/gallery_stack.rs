//! Stacked image cards in the last section, plus the focused-image overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::events::Action;
use crate::tui::interaction::{ClickRegion, InteractiveRegion};
use crate::tui::theme::{fade, palette, rgb};

/// Cards drawn behind the top one.
const STACK_DEPTH: usize = 3;

/// Below this opacity the stack is decoration only and takes no input.
const INTERACTIVE_OPACITY: f64 = 0.5;

/// Draw the card stack and, when the section is prominent, register it as a
/// region that owns the pointer.
pub fn render_gallery_stack(frame: &mut Frame, area: Rect, app: &mut App, opacity: f64) {
    if area.width < 8 || area.height < 5 {
        return;
    }
    let colors = palette(app.dark_mode);
    let bg = colors.background;
    let images = app.gallery.images();
    if images.is_empty() {
        return;
    }

    let card_width = (area.width / 2).clamp(8, 48);
    let card_height = area.height.saturating_sub(STACK_DEPTH as u16 + 1).clamp(3, 16);
    let base_x = area.x + (area.width - card_width) / 2;
    let base_y = area.y + (area.height.saturating_sub(card_height + STACK_DEPTH as u16)) / 2;

    let drag_cols = if app.config.cell_width_px > 0.0 {
        (app.gallery.drag_offset() / app.config.cell_width_px).round() as i32
    } else {
        0
    };

    // Back to front so the current card ends up on top.
    let depth = STACK_DEPTH.min(images.len());
    for layer in (0..depth).rev() {
        let index = (app.gallery.current_index() + layer) % images.len();
        let image = &images[index];
        let offset = layer as u16;

        let shift = if layer == 0 { drag_cols } else { 0 };
        let max_x = i32::from(area.x + area.width - card_width);
        let x = (i32::from(base_x + offset) + shift).clamp(i32::from(area.x), max_x) as u16;
        let y = (base_y + offset).min(area.y + area.height - card_height);
        let rect = Rect::new(x, y, card_width, card_height);

        let layer_opacity = opacity * (1.0 - 0.3 * layer as f64);
        let border = if layer == 0 { colors.accent } else { colors.dim };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(fade(border, bg, layer_opacity)))
            .style(Style::new().bg(rgb(bg)));

        frame.render_widget(Clear, rect);
        let lines = if layer == 0 {
            vec![
                Line::raw(""),
                Line::styled(
                    image.file,
                    Style::new().fg(fade(colors.dim, bg, layer_opacity)),
                ),
                Line::styled(
                    image.caption(app.language),
                    Style::new()
                        .fg(fade(colors.text, bg, layer_opacity))
                        .add_modifier(Modifier::BOLD),
                ),
                Line::styled(
                    format!("{}/{}", index + 1, images.len()),
                    Style::new().fg(fade(colors.secondary, bg, layer_opacity)),
                ),
            ]
        } else {
            vec![]
        };
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            rect,
        );
    }

    if opacity >= INTERACTIVE_OPACITY {
        let wheel = app.config.wheel_delta_px;
        let stack = Rect::new(
            base_x,
            base_y,
            card_width + depth as u16,
            card_height + depth as u16,
        )
        .intersection(area);
        app.interactions.register(
            InteractiveRegion::scrollable(
                "gallery",
                ClickRegion::from(stack),
                Action::GalleryWheel(-wheel),
                Action::GalleryWheel(wheel),
            )
            .capturing(),
        );
    }
}

/// Full-size view of the focused image. Clicking anywhere closes it.
pub fn render_focused_image(frame: &mut Frame, area: Rect, app: &mut App) {
    let Some(index) = app.gallery.focused() else {
        return;
    };
    let Some(image) = app.gallery.images().get(index) else {
        return;
    };
    let colors = palette(app.dark_mode);

    let width = area.width.saturating_sub(8).max(10).min(area.width);
    let height = area.height.saturating_sub(6).max(5).min(area.height);
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::new().fg(rgb(colors.accent)))
        .style(Style::new().bg(rgb(colors.background)));

    let inner_height = height.saturating_sub(2);
    let mut lines = vec![Line::raw(""); usize::from(inner_height.saturating_sub(3) / 2)];
    lines.push(Line::styled(image.file, Style::new().fg(rgb(colors.dim))));
    lines.push(Line::styled(
        image.caption(app.language),
        Style::new()
            .fg(rgb(colors.text))
            .add_modifier(Modifier::BOLD),
    ));
    lines.push(Line::from(vec![
        Span::styled("Esc ", Style::new().fg(rgb(colors.accent))),
        Span::styled(app.strings().help_close, Style::new().fg(rgb(colors.dim))),
    ]));

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );

    app.interactions.register(
        InteractiveRegion::clickable("focused-image", ClickRegion::from(area), Action::CloseOverlay)
            .capturing()
            .with_priority(100),
    );
}
