use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{tracked, CarouselWidget};
use crate::app::{FeatureCarousel, HitRegion};
use crate::content::{FeatureCopy, Side};
use crate::slides::SlideDeck;
use crate::theme::Theme;

/// One feature row: copy on one side, a carousel on the other
pub struct FeatureWidget;

impl FeatureWidget {
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        buf: &mut Buffer,
        area: Rect,
        index: usize,
        copy: &FeatureCopy,
        carousel: &mut FeatureCarousel,
        slides: &mut SlideDeck,
        theme: &Theme,
        cell_width: f64,
        hits: &mut Vec<HitRegion>,
    ) {
        buf.set_style(area, Style::default().bg(theme.bg0));
        let inner = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        };

        let (media, text) = match copy.side {
            Side::Left => {
                let [media, _, text] = Layout::horizontal([
                    Constraint::Percentage(58),
                    Constraint::Length(3),
                    Constraint::Fill(1),
                ])
                .areas(inner);
                (media, text)
            }
            Side::Right => {
                let [text, _, media] = Layout::horizontal([
                    Constraint::Fill(1),
                    Constraint::Length(3),
                    Constraint::Percentage(58),
                ])
                .areas(inner);
                (media, text)
            }
        };

        CarouselWidget::render(buf, media, index, carousel, slides, theme, cell_width, hits);

        let lines = vec![
            Line::from(Span::styled(tracked(copy.kicker), Style::default().fg(theme.grey1))),
            Line::default(),
            Line::from(Span::styled(
                copy.title,
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(copy.body, Style::default().fg(theme.fg1))),
        ];
        let text = Rect {
            y: text.y + text.height.saturating_sub(8) / 2,
            height: text.height.min(8 + text.height / 4),
            ..text
        };
        Paragraph::new(lines).wrap(Wrap { trim: true }).render(text, buf);
    }
}
