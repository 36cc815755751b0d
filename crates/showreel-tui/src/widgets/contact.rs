use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use super::tracked;
use crate::content::{CONTACT_BODY, CONTACT_CHANNELS, CONTACT_KICKER, CONTACT_TITLE};
use crate::theme::{mix, Theme};

pub struct ContactWidget;

impl ContactWidget {
    pub fn render(buf: &mut Buffer, area: Rect, theme: &Theme) {
        buf.set_style(area, Style::default().bg(theme.bg0));
        let inner = Rect {
            x: area.x + 3,
            y: area.y + 1,
            width: area.width.saturating_sub(6),
            height: area.height.saturating_sub(2),
        };
        let [copy, cards] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .spacing(3)
                .areas(inner);

        let lines = vec![
            Line::from(Span::styled(tracked(CONTACT_KICKER), Style::default().fg(theme.grey1))),
            Line::default(),
            Line::from(Span::styled(
                CONTACT_TITLE,
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(CONTACT_BODY, Style::default().fg(theme.fg1))),
        ];
        Paragraph::new(lines).wrap(Wrap { trim: true }).render(copy, buf);

        let card_height = cards.height.min(9);
        let cards = Rect {
            y: cards.bottom() - card_height,
            height: card_height,
            ..cards
        };
        let columns = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .spacing(2)
            .split(cards);
        for ((channel, handle, blurb), card) in CONTACT_CHANNELS.iter().zip(columns.iter()) {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(mix(theme.bg0, theme.fg0, 0.15)));
            let inner = block.inner(*card);
            block.render(*card, buf);

            let lines = vec![
                Line::from(Span::styled(format!("{} ↗", channel), Style::default().fg(theme.grey1))),
                Line::default(),
                Line::from(Span::styled(
                    *handle,
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                )),
                Line::default(),
                Line::from(Span::styled(*blurb, Style::default().fg(theme.fg1))),
            ];
            Paragraph::new(lines).wrap(Wrap { trim: true }).render(inner, buf);
        }
    }
}
