use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Widget},
};
use showreel_core::intro::IntroVisuals;

use super::{paint_raster, put_centered, vertical_scrim};
use crate::content::{HERO_TITLE, SCROLL_HINT};
use crate::slides::SlideDeck;
use crate::theme::{fade, mix, Theme};

/// Corner radius at which the frame border is fully visible
const MAX_CORNER: f64 = 28.0;

/// Full-height hero: an inset image frame that opens up as the intro
/// progresses, with the title fading out over it
pub struct HeroWidget;

impl HeroWidget {
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        buf: &mut Buffer,
        area: Rect,
        visuals: &IntroVisuals,
        locked: bool,
        slides: &mut SlideDeck,
        theme: &Theme,
        cell_width: f64,
        cell_height: f64,
    ) {
        buf.set_style(area, Style::default().bg(theme.bg0));

        let inset_x = (visuals.inset / cell_width).round() as u16;
        let inset_y = (visuals.inset / cell_height).round() as u16;
        let frame = Self::inset(area, inset_x, inset_y);
        if frame.width == 0 || frame.height == 0 {
            return;
        }

        Self::render_shadow(buf, area, frame, visuals.shadow_opacity, theme);

        let overlay = visuals.overlay_opacity;
        if let Some(raster) = slides.raster(0, frame.width, frame.height) {
            paint_raster(buf, raster, frame.x as i32, frame.y, frame, |color, t| {
                let dimmed = mix(color, Color::Rgb(0, 0, 0), overlay);
                mix(dimmed, Color::Rgb(0, 0, 0), vertical_scrim(t, 0.45, 0.0, 0.7))
            });
        }

        if visuals.corner_radius >= 1.0 {
            let strength = (visuals.corner_radius / MAX_CORNER).clamp(0.0, 1.0);
            let border_type = if visuals.corner_radius >= MAX_CORNER / 2.0 {
                BorderType::Rounded
            } else {
                BorderType::Plain
            };
            Block::bordered()
                .border_type(border_type)
                .border_style(Style::default().fg(mix(theme.bg0, theme.grey0, strength)))
                .render(frame, buf);
        }

        let title_shift = (visuals.title_translate_y / cell_height).round() as i32;
        let title_row = frame.y as i32 + frame.height as i32 / 2 + title_shift;
        if visuals.title_opacity > 0.01 && title_row >= area.y as i32 && title_row < area.bottom() as i32 {
            let style = Style::default()
                .fg(fade(theme.accent, theme.bg0, visuals.title_opacity))
                .add_modifier(Modifier::BOLD);
            put_centered(buf, area.x, area.width, title_row as u16, HERO_TITLE, style);
        }

        if locked && area.height > 3 {
            let style = Style::default().fg(fade(theme.fg1, theme.bg0, 0.7));
            put_centered(buf, area.x, area.width, area.bottom() - 2, SCROLL_HINT, style);
        }
    }

    fn inset(area: Rect, x: u16, y: u16) -> Rect {
        let x = x.min(area.width / 2);
        let y = y.min(area.height / 2);
        Rect {
            x: area.x + x,
            y: area.y + y,
            width: area.width - 2 * x,
            height: area.height - 2 * y,
        }
    }

    /// Soft drop shadow below the frame
    fn render_shadow(buf: &mut Buffer, area: Rect, frame: Rect, opacity: f64, theme: &Theme) {
        if opacity <= 0.01 || frame.bottom() >= area.bottom() {
            return;
        }
        let color = mix(theme.bg0, theme.bg2, (opacity / 0.35).clamp(0.0, 1.0));
        let y = frame.bottom();
        for x in frame.x.saturating_add(1)..frame.right().saturating_sub(1) {
            buf[(x, y)].set_symbol("▀").set_fg(color).set_bg(theme.bg0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(progress: f64, locked: bool) -> Buffer {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        let mut slides = SlideDeck::from_paths(&[]);
        let visuals = IntroVisuals::from_progress(progress);
        HeroWidget::render(&mut buf, area, &visuals, locked, &mut slides, &Theme::default(), 8.0, 16.0);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_locked_hero_shows_inset_frame_and_title() {
        let buf = render(0.0, true);
        // 56px inset: 7 columns, 4 rows
        assert_eq!(buf[(7, 4)].symbol(), "╭");
        assert_eq!(buf[(3, 10)].symbol(), " ");
        assert!(row_text(&buf, 10).contains(HERO_TITLE));
        assert!(row_text(&buf, 18).contains(SCROLL_HINT));
    }

    #[test]
    fn test_completed_hero_is_full_bleed() {
        let buf = render(1.0, false);
        assert_eq!(buf[(0, 0)].symbol(), "▀");
        assert!(!row_text(&buf, 10).contains(HERO_TITLE));
        assert!(!row_text(&buf, 18).contains(SCROLL_HINT));
    }
}
