//! Frame composition
//!
//! Every visible page block is drawn into a scratch buffer of its full
//! height and copied onto the screen at its scrolled position, so blocks
//! cut by the screen edge render exactly like the parts that are showing.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::{App, HitRegion};
use crate::content::FEATURES;
use crate::page::{BlockKind, PageBlock, PageLayout};
use crate::widgets::{
    ContactWidget, DiscoverWidget, FeatureWidget, FooterWidget, HeaderWidget, HeroWidget,
    LogoWidget, StatusBarWidget,
};

/// Draw the whole screen and record section geometry and hit regions
pub fn draw(frame: &mut Frame, app: &mut App) {
    let [page, status] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let layout = PageLayout::compute(page.height, app.nav_rows());
    app.intro.viewport_mut().apply_layout(&layout, page.height);
    let offset = app.intro.viewport().offset_rows();

    app.hit_regions.clear();
    for block in layout.visible(offset, page.height) {
        let screen_top = page.y as i32 + block.top as i32 - offset as i32;
        let mut hits = Vec::new();
        let scratch = render_block(app, *block, page.width, &mut hits);
        blit(&scratch, frame.buffer_mut(), page, screen_top);
        app.hit_regions
            .extend(hits.into_iter().filter_map(|h| place(h, page, screen_top)));
    }

    LogoWidget::render(frame.buffer_mut(), page, &app.theme);
    StatusBarWidget::render(frame, status, app);
}

fn render_block(app: &mut App, block: PageBlock, width: u16, hits: &mut Vec<HitRegion>) -> Buffer {
    let area = Rect::new(0, 0, width, block.height);
    let mut buf = Buffer::empty(area);
    let visuals = app.visuals();
    let (cell_width, cell_height) = (app.cell_width(), app.cell_height());

    match block.kind {
        BlockKind::Header => {
            let nav_rows = app.nav_rows();
            HeaderWidget::render(&mut buf, area, &visuals, nav_rows, &app.theme, cell_height, hits);
        }
        BlockKind::Hero => {
            let locked = app.intro.is_locked();
            HeroWidget::render(&mut buf, area, &visuals, locked, &mut app.slides, &app.theme, cell_width, cell_height);
        }
        BlockKind::Feature(i) => {
            if let (Some(copy), Some(carousel)) = (FEATURES.get(i), app.carousels.get_mut(i)) {
                FeatureWidget::render(&mut buf, area, i, copy, carousel, &mut app.slides, &app.theme, cell_width, hits);
            }
        }
        BlockKind::Discover => {
            let background = app.discover_slide();
            DiscoverWidget::render(&mut buf, area, background, app.discover_active, &mut app.slides, &app.theme, hits);
        }
        BlockKind::Contact => ContactWidget::render(&mut buf, area, &app.theme),
        BlockKind::Footer => FooterWidget::render(&mut buf, area, &app.theme, hits),
        BlockKind::Spacer => buf.set_style(area, ratatui::style::Style::default().bg(app.theme.bg0)),
    }
    buf
}

/// Copy `src` (anchored at the origin) onto `dst` with its first row at
/// `screen_top`, clipped to `page`
fn blit(src: &Buffer, dst: &mut Buffer, page: Rect, screen_top: i32) {
    let width = src.area.width.min(page.width);
    for y in 0..src.area.height {
        let sy = screen_top + y as i32;
        if sy < page.y as i32 || sy >= page.bottom() as i32 {
            continue;
        }
        for x in 0..width {
            dst[(page.x + x, sy as u16)] = src[(x, y)].clone();
        }
    }
}

/// Move a block-relative region to the screen; `None` when scrolled away
fn place(hit: HitRegion, page: Rect, screen_top: i32) -> Option<HitRegion> {
    let top = (screen_top + hit.area.y as i32).max(page.y as i32);
    let bottom = (screen_top + hit.area.bottom() as i32).min(page.bottom() as i32);
    if bottom <= top {
        return None;
    }
    Some(HitRegion {
        area: Rect::new(page.x + hit.area.x, top as u16, hit.area.width, (bottom - top) as u16),
        target: hit.target,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Instant;

    use ratatui::{backend::TestBackend, Terminal};
    use showreel_core::intro::{ScrollBehavior, Viewport};
    use showreel_core::AppConfig;

    use super::*;
    use crate::app::HitTarget;
    use crate::theme::Theme;

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(100, 41)).unwrap()
    }

    #[test]
    fn test_draw_records_layout_and_nav_links() {
        let mut app = App::new(Arc::new(AppConfig::default()), Theme::default(), Instant::now());
        assert_eq!(app.intro.viewport().element_top("features"), None);

        let mut terminal = terminal();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        assert_eq!(app.intro.viewport().element_top("features"), Some(40.0 * 16.0));
        let links = app
            .hit_regions
            .iter()
            .filter(|h| matches!(h.target, HitTarget::NavLink(_)))
            .count();
        assert_eq!(links, 4);
    }

    #[test]
    fn test_scrolled_page_shows_feature_tracks() {
        let mut app = App::new(Arc::new(AppConfig::default()), Theme::default(), Instant::now());
        let mut terminal = terminal();
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        app.intro.teardown();
        app.intro.viewport_mut().scroll_to(40.0 * 16.0, ScrollBehavior::Instant);
        terminal.draw(|f| draw(f, &mut app)).unwrap();

        let track = app
            .hit_regions
            .iter()
            .find(|h| h.target == HitTarget::Track(0))
            .map(|h| h.area);
        assert_eq!(track.map(|a| a.y), Some(1));
    }

    #[test]
    fn test_place_clips_to_page() {
        let page = Rect::new(0, 0, 80, 20);
        let hit = HitRegion {
            area: Rect::new(4, 2, 10, 6),
            target: HitTarget::Track(0),
        };
        assert_eq!(place(hit, page, -4).map(|h| h.area), Some(Rect::new(4, 0, 10, 4)));
        assert_eq!(place(hit, page, -10), None);
        assert_eq!(place(hit, page, 17).map(|h| h.area), Some(Rect::new(4, 19, 10, 1)));
    }
}
