use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
};
use showreel_core::intro::IntroVisuals;

use super::{put, put_centered, tracked};
use crate::app::{HitRegion, HitTarget};
use crate::content::NAV_ITEMS;
use crate::theme::{fade, mix, Theme};

/// Rows above the nav bar: top padding and the logo slot
const NAV_TOP: u16 = 2;

/// Header block in the page flow: logo slot, collapsing nav bar, rule
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(
        buf: &mut Buffer,
        area: Rect,
        visuals: &IntroVisuals,
        nav_rows: u16,
        theme: &Theme,
        cell_height: f64,
        hits: &mut Vec<HitRegion>,
    ) {
        buf.set_style(area, Style::default().bg(theme.bg0));
        if area.height == 0 {
            return;
        }

        let rule = "─".repeat(area.width as usize);
        let rule_style = Style::default().fg(mix(theme.bg0, theme.fg0, 0.1));
        put(buf, area.x, area.bottom() - 1, &rule, rule_style);

        let nav_area = Rect {
            x: area.x + 2,
            y: area.y + NAV_TOP,
            width: area.width.saturating_sub(4),
            height: nav_rows.min(area.height.saturating_sub(NAV_TOP + 1)),
        };
        if nav_area.height == 0 || visuals.nav_opacity <= 0.01 {
            return;
        }

        let shift = (visuals.nav_translate_y / cell_height).round() as i32;
        let row = nav_area.y as i32 + nav_area.height as i32 / 2 + shift;
        if row < nav_area.y as i32 || row >= nav_area.bottom() as i32 {
            return;
        }
        let row = row as u16;

        let style = Style::default().fg(fade(theme.fg0, theme.bg0, visuals.nav_opacity * 0.9));
        let count = NAV_ITEMS.len();
        let columns = Layout::horizontal(vec![Constraint::Ratio(1, count as u32); count]).split(nav_area);
        for (i, (item, column)) in NAV_ITEMS.iter().zip(columns.iter()).enumerate() {
            let label = tracked(item.label);
            let x = put_centered(buf, column.x, column.width, row, &label, style);
            if visuals.nav_interactive() {
                hits.push(HitRegion {
                    area: Rect::new(x, row, label.chars().count() as u16, 1),
                    target: HitTarget::NavLink(i),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(progress: f64) -> (Buffer, Vec<HitRegion>) {
        let visuals = IntroVisuals::from_progress(progress);
        let nav_rows = (visuals.nav_height / 16.0).round() as u16;
        let area = Rect::new(0, 0, 80, 3 + nav_rows);
        let mut buf = Buffer::empty(area);
        let mut hits = Vec::new();
        HeaderWidget::render(&mut buf, area, &visuals, nav_rows, &Theme::default(), 16.0, &mut hits);
        (buf, hits)
    }

    #[test]
    fn test_open_nav_has_clickable_links() {
        let (buf, hits) = render(0.0);
        assert_eq!(hits.len(), 4);
        assert_eq!(hits[1].target, HitTarget::NavLink(1));
        let row: String = (0..80).map(|x| buf[(x, hits[1].area.y)].symbol()).collect();
        assert!(row.contains("F E A T U R E S"));
    }

    #[test]
    fn test_collapsed_nav_draws_only_the_rule() {
        let (buf, hits) = render(1.0);
        assert!(hits.is_empty());
        assert_eq!(buf.area.height, 3);
        assert_eq!(buf[(0, 2)].symbol(), "─");
    }
}
