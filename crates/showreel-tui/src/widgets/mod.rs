mod carousel;
mod contact;
mod discover;
mod feature;
mod footer;
mod header;
mod hero;
mod logo;
mod status_bar;

pub use carousel::CarouselWidget;
pub use contact::ContactWidget;
pub use discover::DiscoverWidget;
pub use feature::FeatureWidget;
pub use footer::FooterWidget;
pub use header::HeaderWidget;
pub use hero::HeroWidget;
pub use logo::LogoWidget;
pub use status_bar::StatusBarWidget;

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};

use crate::slides::Raster;

/// Write `text` at (x, y), clipped to the buffer
pub(crate) fn put(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style) -> u16 {
    if !buf.area.contains(Position { x, y }) {
        return 0;
    }
    let max = buf.area.right().saturating_sub(x) as usize;
    let (end, _) = buf.set_stringn(x, y, text, max, style);
    end.saturating_sub(x)
}

/// Write `text` centered horizontally between `x` and `x + width`
pub(crate) fn put_centered(buf: &mut Buffer, x: u16, width: u16, y: u16, text: &str, style: Style) -> u16 {
    let len = text.chars().count() as u16;
    let start = x + width.saturating_sub(len) / 2;
    put(buf, start, y, text, style);
    start
}

/// Uppercase with a space between letters, the terminal stand-in for
/// wide tracking
pub(crate) fn tracked(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Paint `raster` with its top-left cell at (x, y), skipping cells outside
/// `clip`. `shade` receives each pixel color and its vertical position in
/// [0, 1].
pub(crate) fn paint_raster(
    buf: &mut Buffer,
    raster: &Raster,
    x: i32,
    y: u16,
    clip: Rect,
    shade: impl Fn(ratatui::style::Color, f64) -> ratatui::style::Color,
) {
    let rows = (raster.height as f64 * 2.0).max(1.0);
    for row in 0..raster.height {
        for col in 0..raster.width {
            let sx = x + col as i32;
            if sx < 0 || sx > u16::MAX as i32 {
                continue;
            }
            let pos = Position {
                x: sx as u16,
                y: y + row,
            };
            if !clip.contains(pos) || !buf.area.contains(pos) {
                continue;
            }
            if let Some((top, bottom)) = raster.cell(col, row) {
                let t_top = (row as f64 * 2.0) / rows;
                let t_bottom = (row as f64 * 2.0 + 1.0) / rows;
                buf[pos]
                    .set_symbol("▀")
                    .set_fg(shade(top, t_top))
                    .set_bg(shade(bottom, t_bottom));
            }
        }
    }
}

/// Three-stop darkening: `top` at 0, `mid` at 0.5, `bottom` at 1
pub(crate) fn vertical_scrim(t: f64, top: f64, mid: f64, bottom: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        top + (mid - top) * (t / 0.5)
    } else {
        mid + (bottom - mid) * ((t - 0.5) / 0.5)
    }
}
