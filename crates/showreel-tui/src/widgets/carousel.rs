use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use super::{paint_raster, put};
use crate::app::{FeatureCarousel, HitRegion, HitTarget};
use crate::slides::SlideDeck;
use crate::theme::Theme;

/// Slide track with dot indicators. The track is laid out horizontally at
/// the carousel's current position so drags and transitions show the
/// neighbouring slide sliding in.
pub struct CarouselWidget;

impl CarouselWidget {
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        buf: &mut Buffer,
        area: Rect,
        index: usize,
        carousel: &mut FeatureCarousel,
        slides: &mut SlideDeck,
        theme: &Theme,
        cell_width: f64,
        hits: &mut Vec<HitRegion>,
    ) {
        let engine = &carousel.engine;
        let dot_rows = u16::from(engine.shows_dots());
        let track = Rect {
            height: area.height.saturating_sub(dot_rows),
            ..area
        };
        if track.width == 0 || track.height == 0 {
            return;
        }

        let count = engine.slide_count().min(slides.len());
        let active = engine.active_index();
        let settled = !engine.is_dragging();
        if count == 0 {
            return;
        }

        carousel.set_slide_width(track.width as f64 * cell_width);
        let position = carousel.track_position() / cell_width;

        let mut caption_at = None;
        for i in 0..count {
            let left = (i as f64 * track.width as f64 - position).round() as i32;
            if left >= track.width as i32 || left + track.width as i32 <= 0 {
                continue;
            }
            if i == active && left == 0 && settled {
                caption_at = Some(i);
            }
            if let Some(raster) = slides.raster(i, track.width, track.height) {
                paint_raster(buf, raster, track.x as i32 + left, track.y, track, |c, _| c);
            }
        }

        if let Some(i) = caption_at {
            let caption = slides
                .get(i)
                .map(|s| format!(" {}/{}  {} ", i + 1, count, s.caption))
                .unwrap_or_default();
            let style = Style::default().fg(theme.fg0).bg(theme.bg0);
            put(buf, track.x + 1, track.bottom() - 1, &caption, style);
        }

        hits.push(HitRegion {
            area: track,
            target: HitTarget::Track(index),
        });

        if dot_rows == 0 {
            return;
        }
        let y = area.bottom() - 1;
        let dots_width = (count * 2 - 1) as u16;
        let mut x = area.x + area.width.saturating_sub(dots_width) / 2;
        for i in 0..count {
            let (symbol, style) = if i == active {
                ("●", Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(theme.grey0))
            };
            if put(buf, x, y, symbol, style) > 0 {
                hits.push(HitRegion {
                    area: Rect::new(x, y, 1, 1),
                    target: HitTarget::Dot {
                        carousel: index,
                        index: i,
                    },
                });
            }
            x = x.saturating_add(2);
        }
    }
}
