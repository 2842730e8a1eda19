//! The three page sections.
//!
//! Each section is drawn into a box scaled around the center of the content
//! area, shifted by its vertical offset, and with colors faded towards the
//! background by its opacity.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};

use crate::app::App;
use crate::scroll::{Section, SectionVisual};
use crate::tui::theme::{Palette, fade, palette, rgb};

use super::{render_gallery_stack, wrap_text};

/// Box for a section: scaled about the center and shifted by `translate_y`.
pub fn section_rect(area: Rect, visual: &SectionVisual, cell_height_px: f64) -> Rect {
    if area.is_empty() {
        return area;
    }
    let scale = visual.scale.clamp(0.0, 1.0);
    let width = ((f64::from(area.width) * scale).round() as u16).clamp(1, area.width.max(1));
    let height = ((f64::from(area.height) * scale).round() as u16).clamp(1, area.height.max(1));

    let shift_rows = if cell_height_px > 0.0 {
        (visual.translate_y / cell_height_px).round() as i32
    } else {
        0
    };

    let x = area.x + (area.width - width) / 2;
    let centered_y = i32::from(area.y) + i32::from((area.height - height) / 2);
    let max_y = i32::from(area.y) + i32::from(area.height - height);
    let y = (centered_y + shift_rows).clamp(i32::from(area.y), max_y) as u16;

    Rect::new(x, y, width, height)
}

/// Render every visible section, faintest first so the dominant one is on top.
pub fn render_sections(frame: &mut Frame, area: Rect, app: &mut App) {
    let visuals = app.controller.visuals();
    let colors = palette(app.dark_mode);

    let mut order: Vec<Section> = Section::ALL
        .into_iter()
        .filter(|s| visuals[s.index()].is_visible())
        .collect();
    order.sort_by(|a, b| visuals[a.index()].opacity.total_cmp(&visuals[b.index()].opacity));

    for section in order {
        let visual = visuals[section.index()];
        let rect = section_rect(area, &visual, app.config.cell_height_px);
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Block::default().style(Style::new().bg(rgb(colors.background))),
            rect,
        );
        match section {
            Section::Welcome => render_welcome(frame, rect, app, colors, visual.opacity),
            Section::About => render_about(frame, rect, app, colors, visual.opacity),
            Section::Hello => render_hello(frame, rect, app, colors, visual.opacity),
        }
    }
}

/// Lines vertically centered in `area`.
fn centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let height = lines.len() as u16;
    let top = area.y + area.height.saturating_sub(height) / 2;
    let rect = Rect::new(area.x, top, area.width, height.min(area.height));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

fn render_welcome(frame: &mut Frame, area: Rect, app: &App, colors: &Palette, opacity: f64) {
    let t = app.strings();
    let bg = colors.background;
    let mut lines = vec![
        Line::styled(
            t.welcome_banner,
            Style::new().fg(fade(colors.secondary, bg, opacity)),
        ),
        Line::raw(""),
        Line::styled(
            t.welcome_title,
            Style::new()
                .fg(fade(colors.accent, bg, opacity))
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                format!("{} ", t.welcome_subtitle),
                Style::new().fg(fade(colors.text, bg, opacity)),
            ),
            Span::styled(
                app.typer.text(),
                Style::new()
                    .fg(fade(colors.accent, bg, opacity))
                    .add_modifier(Modifier::BOLD),
            ),
            // Cursor hides while a finished word is held
            Span::styled(
                if app.typer.is_typing() { "▏" } else { " " },
                Style::new().fg(fade(colors.accent, bg, opacity)),
            ),
        ]),
        Line::raw(""),
    ];
    for line in wrap_text(t.welcome_quote, area.width.saturating_sub(4) as usize) {
        lines.push(Line::styled(
            line,
            Style::new()
                .fg(fade(colors.dim, bg, opacity))
                .add_modifier(Modifier::ITALIC),
        ));
    }
    centered(frame, area, lines);
}

fn render_about(frame: &mut Frame, area: Rect, app: &App, colors: &Palette, opacity: f64) {
    let t = app.strings();
    let bg = colors.background;
    let width = area.width.saturating_sub(6).max(10) as usize;

    let text = Style::new().fg(fade(colors.text, bg, opacity));
    let highlight = Style::new()
        .fg(fade(colors.accent, bg, opacity))
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::styled(t.title, highlight),
        Line::styled(t.subtitle, Style::new().fg(fade(colors.dim, bg, opacity))),
        Line::raw(""),
        Line::styled(
            t.heading,
            Style::new()
                .fg(fade(colors.secondary, bg, opacity))
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];

    for line in wrap_text(t.paragraph, width) {
        lines.push(Line::styled(line, text));
    }

    if !t.highlights.is_empty() {
        let mut spans = vec![];
        for (i, word) in t.highlights.iter().enumerate() {
            if i > 0 {
                let sep = if i + 1 == t.highlights.len() { ", and " } else { ", " };
                spans.push(Span::styled(sep, text));
            }
            spans.push(Span::styled(*word, highlight));
        }
        spans.push(Span::styled(".", text));
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{} ", t.ending), text),
        Span::styled(t.gamer, highlight),
        Span::styled(format!(", {}", t.ending2), text),
    ]));

    centered(frame, area, lines);
}

fn render_hello(frame: &mut Frame, area: Rect, app: &mut App, colors: &Palette, opacity: f64) {
    if area.height < 4 {
        return;
    }
    let heading = app.strings().hello_heading;
    let heading_rect = Rect::new(area.x, area.y + 1, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::styled(
            heading,
            Style::new()
                .fg(fade(colors.accent, colors.background, opacity))
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        heading_rect,
    );

    let stack_area = Rect::new(area.x, area.y + 3, area.width, area.height - 3);
    render_gallery_stack(frame, stack_area, app, opacity);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_scale_fills_area() {
        let area = Rect::new(0, 0, 80, 40);
        let visual = SectionVisual {
            scale: 1.0,
            opacity: 1.0,
            translate_y: 0.0,
        };
        assert_eq!(section_rect(area, &visual, 16.0), area);
    }

    #[test]
    fn test_half_scale_centered_and_shifted() {
        let area = Rect::new(0, 0, 80, 40);
        let visual = SectionVisual {
            scale: 0.5,
            opacity: 0.2,
            translate_y: 32.0,
        };
        // 40x20 box centered at y=10, shifted two rows down
        assert_eq!(section_rect(area, &visual, 16.0), Rect::new(20, 12, 40, 20));
    }

    #[test]
    fn test_shift_stays_inside_area() {
        let area = Rect::new(0, 0, 80, 40);
        let visual = SectionVisual {
            scale: 0.9,
            opacity: 1.0,
            translate_y: 10_000.0,
        };
        let rect = section_rect(area, &visual, 16.0);
        assert!(rect.y + rect.height <= area.y + area.height);
    }
}
