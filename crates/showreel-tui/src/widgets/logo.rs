use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, Widget},
};

use super::put_centered;
use crate::content::LOGO;
use crate::theme::{mix, Theme};

/// Round badge pinned to the top of the screen, above the scrolling page
pub struct LogoWidget;

impl LogoWidget {
    const WIDTH: u16 = 8;
    const HEIGHT: u16 = 3;

    pub fn render(buf: &mut Buffer, page: Rect, theme: &Theme) {
        if page.width < Self::WIDTH || page.height < Self::HEIGHT + 1 {
            return;
        }
        let badge = Rect {
            x: page.x + (page.width - Self::WIDTH) / 2,
            y: page.y + 1,
            width: Self::WIDTH,
            height: Self::HEIGHT,
        };

        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(mix(theme.bg0, theme.fg0, 0.35)))
            .style(Style::default().bg(theme.bg1))
            .render(badge, buf);

        let style = Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD);
        put_centered(buf, badge.x + 1, badge.width - 2, badge.y + 1, LOGO, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_is_centered_near_top() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        LogoWidget::render(&mut buf, area, &Theme::default());
        assert_eq!(buf[(16, 1)].symbol(), "╭");
        let row: String = (16..24).map(|x| buf[(x, 2)].symbol()).collect();
        assert_eq!(row, "│ LOGO │");
    }
}
