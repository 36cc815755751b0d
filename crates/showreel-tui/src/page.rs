//! Page geometry and the scrollable viewport the intro controller drives
//!
//! The page is a vertical stack of blocks measured in terminal rows. Pixel
//! positions handed to the controller are rows times the configured cell
//! height.

use std::collections::HashMap;
use std::time::Instant;

use showreel_core::config::UiConfig;
use showreel_core::intro::{ScrollBehavior, ScrollRoot, Viewport};

use crate::content::FEATURES;
use crate::scroll::ScrollAnimator;

/// Padding row, logo row and the bottom border
const HEADER_BASE_ROWS: u16 = 3;
const MIN_HERO_ROWS: u16 = 8;
const FEATURE_ROWS: u16 = 16;
const DISCOVER_ROWS: u16 = 14;
const CONTACT_ROWS: u16 = 12;
const FOOTER_ROWS: u16 = 8;
/// Trailing spacer below the footer
const SPACER_ROWS: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Header,
    Hero,
    Feature(usize),
    Discover,
    Contact,
    Footer,
    Spacer,
}

impl BlockKind {
    /// Section anchor hosted by this block
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            BlockKind::Hero => Some("top"),
            BlockKind::Feature(0) => Some("features"),
            BlockKind::Discover => Some("discover"),
            BlockKind::Contact => Some("contact"),
            BlockKind::Footer => Some("footer"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBlock {
    pub kind: BlockKind,
    /// First document row
    pub top: u16,
    pub height: u16,
}

impl PageBlock {
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }
}

/// Document layout for one terminal size and nav bar height
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    blocks: Vec<PageBlock>,
    total_rows: u16,
}

impl PageLayout {
    /// Stack the page for a viewport of `viewport_rows` with a nav bar of
    /// `nav_rows`. The hero fills whatever the header leaves of the screen.
    pub fn compute(viewport_rows: u16, nav_rows: u16) -> Self {
        let header_rows = HEADER_BASE_ROWS + nav_rows;
        let hero_rows = viewport_rows.saturating_sub(header_rows).max(MIN_HERO_ROWS);

        let mut kinds = vec![(BlockKind::Header, header_rows), (BlockKind::Hero, hero_rows)];
        kinds.extend((0..FEATURES.len()).map(|i| (BlockKind::Feature(i), FEATURE_ROWS)));
        kinds.extend([
            (BlockKind::Discover, DISCOVER_ROWS),
            (BlockKind::Contact, CONTACT_ROWS),
            (BlockKind::Footer, FOOTER_ROWS),
            (BlockKind::Spacer, SPACER_ROWS),
        ]);

        let mut top = 0u16;
        let blocks = kinds
            .into_iter()
            .map(|(kind, height)| {
                let block = PageBlock { kind, top, height };
                top = top.saturating_add(height);
                block
            })
            .collect();

        Self {
            blocks,
            total_rows: top,
        }
    }

    pub fn blocks(&self) -> &[PageBlock] {
        &self.blocks
    }

    pub fn total_rows(&self) -> u16 {
        self.total_rows
    }

    /// First row of the block carrying section `id`
    pub fn anchor_top(&self, id: &str) -> Option<u16> {
        self.blocks
            .iter()
            .find(|b| b.kind.anchor() == Some(id))
            .map(|b| b.top)
    }

    /// Blocks intersecting document rows `[offset, offset + height)`
    pub fn visible(&self, offset: u16, height: u16) -> impl Iterator<Item = &PageBlock> {
        let end = offset.saturating_add(height);
        self.blocks
            .iter()
            .filter(move |b| b.bottom() > offset && b.top < end)
    }
}

/// Scrollable page surface.
///
/// Section positions are only known once a frame has been laid out with
/// [`PageViewport::apply_layout`]; until then `element_top` reports nothing.
#[derive(Debug)]
pub struct PageViewport {
    cell_height: f64,
    animator: ScrollAnimator,
    viewport_rows: u16,
    content_rows: u16,
    sections: HashMap<&'static str, f64>,
    suppressed: [bool; 2],
    clock: Instant,
}

impl PageViewport {
    pub fn new(config: &UiConfig, now: Instant) -> Self {
        Self {
            cell_height: config.cell_height_px.max(1.0),
            animator: ScrollAnimator::new(config.scroll.clone()),
            viewport_rows: 0,
            content_rows: 0,
            sections: HashMap::new(),
            suppressed: [false; 2],
            clock: now,
        }
    }

    /// Record section geometry after laying out a frame
    pub fn apply_layout(&mut self, layout: &PageLayout, viewport_rows: u16) {
        self.viewport_rows = viewport_rows;
        self.content_rows = layout.total_rows();
        self.sections = layout
            .blocks()
            .iter()
            .filter_map(|b| b.kind.anchor().map(|id| (id, b.top as f64 * self.cell_height)))
            .collect();

        // Content may have shrunk under the current offset
        let max = self.max_offset();
        if self.animator.current() > max {
            self.animator.set_position(max);
        }
    }

    /// Forget the layout, e.g. after a resize, until the next draw
    pub fn invalidate_layout(&mut self) {
        self.sections.clear();
    }

    pub fn has_layout(&self) -> bool {
        !self.sections.is_empty()
    }

    pub fn max_offset(&self) -> f64 {
        self.content_rows.saturating_sub(self.viewport_rows) as f64 * self.cell_height
    }

    pub fn is_suppressed(&self, root: ScrollRoot) -> bool {
        self.suppressed[root_index(root)]
    }

    /// Whether either scroll root currently refuses native scrolling
    pub fn scroll_locked(&self) -> bool {
        self.suppressed.iter().any(|s| *s)
    }

    /// User-driven scroll (wheel, drag, keys). Interrupts a smooth scroll.
    /// Returns false when scrolling is suppressed.
    pub fn native_scroll(&mut self, delta: f64) -> bool {
        if self.scroll_locked() {
            return false;
        }
        let next = (self.animator.current() + delta).clamp(0.0, self.max_offset());
        self.animator.set_position(next);
        true
    }

    /// Jump to the very top or bottom of the page
    pub fn native_jump(&mut self, to_end: bool) -> bool {
        if self.scroll_locked() {
            return false;
        }
        let target = if to_end { self.max_offset() } else { 0.0 };
        self.animator.set_position(target);
        true
    }

    /// Advance the smooth scroll to `now`
    pub fn tick(&mut self, now: Instant) -> f64 {
        self.clock = now;
        let max = self.max_offset();
        self.animator.update(max, now)
    }

    pub fn needs_frame(&self) -> bool {
        self.animator.needs_update()
    }

    /// First document row at the top of the screen
    pub fn offset_rows(&self) -> u16 {
        (self.animator.current() / self.cell_height).round() as u16
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }
}

fn root_index(root: ScrollRoot) -> usize {
    match root {
        ScrollRoot::Document => 0,
        ScrollRoot::Body => 1,
    }
}

impl Viewport for PageViewport {
    fn scroll_offset(&self) -> f64 {
        self.animator.current()
    }

    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let max = self.max_offset();
        match behavior {
            ScrollBehavior::Instant => self.animator.set_position(top.clamp(0.0, max)),
            ScrollBehavior::Smooth => self.animator.scroll_to(top, max, self.clock),
        }
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.sections.get(id).copied()
    }

    fn set_scroll_suppressed(&mut self, root: ScrollRoot, suppressed: bool) {
        self.suppressed[root_index(root)] = suppressed;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn viewport(now: Instant) -> PageViewport {
        let mut vp = PageViewport::new(&UiConfig::default(), now);
        vp.apply_layout(&PageLayout::compute(40, 0), 40);
        vp
    }

    #[test]
    fn test_layout_stacks_blocks() {
        let layout = PageLayout::compute(40, 4);
        let blocks = layout.blocks();
        assert_eq!(blocks[0].kind, BlockKind::Header);
        assert_eq!(blocks[0].height, 7);
        assert_eq!(blocks[1].kind, BlockKind::Hero);
        assert_eq!(blocks[1].height, 33);
        for pair in blocks.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
        assert_eq!(layout.total_rows(), blocks.last().map(|b| b.bottom()).unwrap_or(0));
    }

    #[test]
    fn test_hero_grows_as_nav_collapses() {
        let open = PageLayout::compute(40, 4);
        let closed = PageLayout::compute(40, 0);
        assert_eq!(open.anchor_top("features"), Some(40));
        assert_eq!(closed.anchor_top("features"), Some(40));
        assert_eq!(closed.anchor_top("top"), Some(3));
    }

    #[test]
    fn test_hero_has_minimum_height() {
        let layout = PageLayout::compute(5, 4);
        assert_eq!(layout.blocks()[1].height, MIN_HERO_ROWS);
    }

    #[test]
    fn test_visible_blocks() {
        let layout = PageLayout::compute(40, 0);
        let kinds: Vec<_> = layout.visible(0, 40).map(|b| b.kind).collect();
        assert_eq!(kinds, vec![BlockKind::Header, BlockKind::Hero]);

        let kinds: Vec<_> = layout.visible(39, 2).map(|b| b.kind).collect();
        assert_eq!(kinds, vec![BlockKind::Hero, BlockKind::Feature(0)]);
    }

    #[test]
    fn test_element_top_requires_layout() {
        let mut vp = PageViewport::new(&UiConfig::default(), Instant::now());
        assert_eq!(vp.element_top("features"), None);

        vp.apply_layout(&PageLayout::compute(40, 0), 40);
        assert_eq!(vp.element_top("features"), Some(640.0));
        assert_eq!(vp.element_top("nowhere"), None);

        vp.invalidate_layout();
        assert!(!vp.has_layout());
    }

    #[test]
    fn test_suppression_blocks_native_scroll() {
        let mut vp = viewport(Instant::now());
        vp.set_scroll_suppressed(ScrollRoot::Body, true);
        assert!(!vp.native_scroll(100.0));
        assert_eq!(vp.scroll_offset(), 0.0);

        vp.set_scroll_suppressed(ScrollRoot::Body, false);
        assert!(vp.native_scroll(100.0));
        assert_eq!(vp.scroll_offset(), 100.0);
        assert!(vp.native_scroll(-500.0));
        assert_eq!(vp.scroll_offset(), 0.0);
    }

    #[test]
    fn test_programmatic_scroll_ignores_suppression() {
        let mut vp = viewport(Instant::now());
        vp.set_scroll_suppressed(ScrollRoot::Document, true);
        vp.scroll_to(320.0, ScrollBehavior::Instant);
        assert_eq!(vp.scroll_offset(), 320.0);
    }

    #[test]
    fn test_smooth_scroll_follows_clock() {
        let t0 = Instant::now();
        let mut vp = viewport(t0);
        vp.scroll_to(544.0, ScrollBehavior::Smooth);
        assert!(vp.needs_frame());
        assert_eq!(vp.scroll_offset(), 0.0);

        let mid = vp.tick(t0 + Duration::from_millis(300));
        assert!(mid > 0.0 && mid < 544.0);

        assert_eq!(vp.tick(t0 + Duration::from_millis(600)), 544.0);
        assert!(!vp.needs_frame());
        assert_eq!(vp.offset_rows(), 34);
    }

    #[test]
    fn test_scroll_clamped_to_content() {
        let mut vp = viewport(Instant::now());
        vp.scroll_to(1.0e9, ScrollBehavior::Instant);
        assert_eq!(vp.scroll_offset(), vp.max_offset());

        assert!(vp.native_jump(false));
        assert_eq!(vp.scroll_offset(), 0.0);
    }
}
