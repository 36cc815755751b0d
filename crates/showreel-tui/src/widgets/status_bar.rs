use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use showreel_core::intro::Viewport;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode = if app.intro.is_locked() { " INTRO " } else { " PAGE " };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else if app.intro.is_locked() {
            let mut text = format!(" {:>3}%", (app.intro.progress() * 100.0).round());
            if let Some(id) = app.intro.pending_navigation() {
                text.push_str(&format!(" | next: {}", id));
            }
            text
        } else {
            format!(" {}px", app.intro.viewport().scroll_offset().round())
        };

        let help_hint = " q:quit 1-4:sections wheel/↑↓:scroll drag:swipe ";
        let used = mode.chars().count() + status_text.chars().count() + help_hint.chars().count();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                mode,
                Style::default()
                    .fg(theme.bg0)
                    .bg(if app.intro.is_locked() { theme.yellow } else { theme.aqua })
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey1).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
