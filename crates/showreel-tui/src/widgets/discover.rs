use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Widget},
};

use super::{paint_raster, put, vertical_scrim};
use crate::app::{HitRegion, HitTarget};
use crate::content::{DISCOVER_CARDS, DISCOVER_TITLE};
use crate::slides::SlideDeck;
use crate::theme::{mix, Theme};

const CARD_ROWS: u16 = 4;

/// Full-bleed section whose background follows the hovered card
pub struct DiscoverWidget;

impl DiscoverWidget {
    pub fn render(
        buf: &mut Buffer,
        area: Rect,
        background: usize,
        active_card: usize,
        slides: &mut SlideDeck,
        theme: &Theme,
        hits: &mut Vec<HitRegion>,
    ) {
        buf.set_style(area, Style::default().bg(theme.bg0));
        if area.width == 0 || area.height == 0 {
            return;
        }

        if let Some(raster) = slides.raster(background, area.width, area.height) {
            paint_raster(buf, raster, area.x as i32, area.y, area, |color, t| {
                mix(color, Color::Rgb(0, 0, 0), vertical_scrim(t, 0.35, 0.1, 0.55))
            });
        }

        let title_style = Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD);
        put(buf, area.x + 3, area.y + 1, DISCOVER_TITLE, title_style);

        if area.height < CARD_ROWS + 3 {
            return;
        }
        let cards_area = Rect {
            x: area.x + 3,
            y: area.bottom() - CARD_ROWS - 1,
            width: area.width.saturating_sub(6),
            height: CARD_ROWS,
        };
        let count = DISCOVER_CARDS.len();
        let columns = Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count])
            .spacing(2)
            .split(cards_area);

        for (i, (title, card)) in DISCOVER_CARDS.iter().zip(columns.iter()).enumerate() {
            let border = if i == active_card {
                theme.accent
            } else {
                mix(theme.bg0, theme.fg0, 0.35)
            };
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .render(*card, buf);
            let label = format!("{} ↗", title);
            put(buf, card.x + 2, card.y + 1, &label, Style::default().fg(theme.fg0));
            hits.push(HitRegion {
                area: *card,
                target: HitTarget::DiscoverCard(i),
            });
        }
    }
}
