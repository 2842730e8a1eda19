use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{App, InputMode};
use crate::events::Action;
use crate::tui::components::{
    INDICATOR_WIDTH, render_focused_image, render_help_popup, render_section_indicator,
    render_sections, render_status_bar, render_toast,
};
use crate::tui::interaction::ClickRegion;

use super::theme::{palette, rgb};

/// Draw one frame. Interactive regions are rebuilt from scratch every time.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.interactions.clear();

    let area = frame.area();
    let colors = palette(app.dark_mode);
    frame.render_widget(
        Block::default().style(Style::new().bg(rgb(colors.background)).fg(rgb(colors.text))),
        area,
    );

    // Top bar, content, status line
    let [top, content, bottom] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_top_bar(frame, top, app);

    let [sections, indicator] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(INDICATOR_WIDTH),
    ])
    .areas(content);

    render_sections(frame, sections, app);
    render_section_indicator(frame, indicator, app);
    render_status_bar(frame, bottom, app);

    // Overlays, topmost last
    render_focused_image(frame, area, app);
    if app.input_mode == InputMode::Help {
        render_help_popup(frame, area, app);
    }
    render_toast(frame, content, app);

    app.refresh_hover();
}

/// Name on the left; language and theme toggles on the right, both clickable.
fn render_top_bar(frame: &mut Frame, area: Rect, app: &mut App) {
    let colors = palette(app.dark_mode);
    let t = app.strings();

    frame.render_widget(
        Paragraph::new(Line::styled(
            " BYEONGUK",
            Style::new()
                .fg(rgb(colors.accent))
                .add_modifier(Modifier::BOLD),
        )),
        area,
    );

    let language = format!(" {} ", app.language.code().to_uppercase());
    let theme = if app.dark_mode { " ☾ " } else { " ☀ " };
    let toggles_width = (language.len() + 3 + 1) as u16;
    if area.width < toggles_width {
        return;
    }

    let language_rect = Rect::new(
        area.x + area.width - toggles_width,
        area.y,
        language.len() as u16,
        1,
    );
    let theme_rect = Rect::new(language_rect.x + language_rect.width, area.y, 3, 1);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(language, Style::new().fg(rgb(colors.secondary))),
            Span::styled(theme, Style::new().fg(rgb(colors.accent))),
        ]))
        .alignment(Alignment::Left),
        Rect::new(language_rect.x, area.y, language_rect.width + 3, 1),
    );

    app.interactions
        .register_click("language", ClickRegion::from(language_rect), Action::ToggleLanguage);
    app.interactions
        .register_click("theme", ClickRegion::from(theme_rect), Action::ToggleTheme);

    // Tooltip sits left of the toggles when there is room.
    let tooltip_width = Span::raw(t.language_tooltip).width() as u16 + 2;
    if area.width > toggles_width + tooltip_width + 12 {
        frame.render_widget(
            Paragraph::new(Span::styled(t.language_tooltip, Style::new().fg(rgb(colors.dim))))
                .alignment(Alignment::Right),
            Rect::new(
                language_rect.x - tooltip_width,
                area.y,
                tooltip_width - 1,
                1,
            ),
        );
    }
}
