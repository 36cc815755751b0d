use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
};

use super::{put, tracked};
use crate::app::{HitRegion, HitTarget};
use crate::content::{CONTACT_CHANNELS, FOOTER_LINKS, FOOTER_TAGLINE, LOGO};
use crate::theme::{mix, Theme};

pub struct FooterWidget;

impl FooterWidget {
    pub fn render(buf: &mut Buffer, area: Rect, theme: &Theme, hits: &mut Vec<HitRegion>) {
        buf.set_style(area, Style::default().bg(theme.bg0));
        if area.height < 2 {
            return;
        }

        let rule = "─".repeat(area.width as usize);
        put(buf, area.x, area.y, &rule, Style::default().fg(mix(theme.bg0, theme.fg0, 0.1)));

        let inner = Rect {
            x: area.x + 3,
            y: area.y + 2,
            width: area.width.saturating_sub(6),
            height: area.height.saturating_sub(3),
        };
        let [brand, navigation, connect] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(inner);

        let heading = Style::default().fg(theme.grey0);
        let link = Style::default().fg(theme.fg1);

        put(buf, brand.x, brand.y, LOGO, Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD));
        put(buf, brand.x, brand.y + 2, FOOTER_TAGLINE, Style::default().fg(theme.grey1));

        put(buf, navigation.x, navigation.y, &tracked("Navigation"), heading);
        for (i, item) in FOOTER_LINKS.iter().enumerate() {
            let y = navigation.y + 2 + i as u16;
            let width = put(buf, navigation.x, y, item.label, link);
            if width > 0 {
                hits.push(HitRegion {
                    area: Rect::new(navigation.x, y, width, 1),
                    target: HitTarget::FooterLink(i),
                });
            }
        }

        put(buf, connect.x, connect.y, &tracked("Connect"), heading);
        for (i, (channel, handle, _)) in CONTACT_CHANNELS.iter().enumerate() {
            let text = format!("{}  {}", channel, handle);
            put(buf, connect.x, connect.y + 2 + i as u16, &text, link);
        }
    }
}
