use std::sync::Arc;
use std::time::Instant;

use ratatui::layout::Rect;
use showreel_core::carousel::{Carousel, DragRelease, PointerId, PointerTarget};
use showreel_core::intro::{
    InputEvent, IntroController, IntroEvent, IntroVisuals, NavKey, NavigationRequest,
};
use showreel_core::{AppConfig, EasingType, ScrollConfig};

use crate::content::{DISCOVER_CARDS, FEATURES, FOOTER_LINKS, NAV_ITEMS};
use crate::event::SlideLoadResult;
use crate::input::Action;
use crate::page::PageViewport;
use crate::scroll::ScrollAnimator;
use crate::slides::SlideDeck;
use crate::theme::Theme;

/// The terminal has a single mouse
const MOUSE_POINTER: PointerId = 1;
/// Slide transition on the carousel track
const TRACK_TRANSITION_MS: u64 = 700;
/// Rows moved by an arrow key once the page scrolls natively
const ARROW_SCROLL_ROWS: f64 = 3.0;

/// Pointer capture bookkeeping for one carousel track
#[derive(Debug, Default)]
pub struct TrackCapture {
    captured: Option<PointerId>,
}

impl TrackCapture {
    pub fn is_captured(&self) -> bool {
        self.captured.is_some()
    }
}

impl PointerTarget for TrackCapture {
    fn capture_pointer(&mut self, pointer_id: PointerId) {
        self.captured = Some(pointer_id);
    }

    fn release_pointer(&mut self, pointer_id: PointerId) -> showreel_core::Result<()> {
        if self.captured == Some(pointer_id) {
            self.captured = None;
            Ok(())
        } else {
            Err(showreel_core::Error::PointerNotCaptured { pointer_id })
        }
    }
}

/// A carousel engine plus the tween that slides its track
pub struct FeatureCarousel {
    pub engine: Carousel,
    pub capture: TrackCapture,
    track: ScrollAnimator,
    slide_width: f64,
}

impl FeatureCarousel {
    pub fn new(slide_count: usize, config: &AppConfig, now: Instant) -> Self {
        let transition = ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: TRACK_TRANSITION_MS,
            easing: EasingType::EaseOut,
        };
        Self {
            engine: Carousel::new(slide_count, &config.carousel, now),
            capture: TrackCapture::default(),
            track: ScrollAnimator::new(transition),
            slide_width: 0.0,
        }
    }

    /// Resize the track; the position snaps to the active slide
    pub fn set_slide_width(&mut self, width_px: f64) {
        if (width_px - self.slide_width).abs() > f64::EPSILON {
            self.slide_width = width_px;
            self.track
                .set_position(-self.engine.track_offset(width_px));
        }
    }

    fn max_position(&self) -> f64 {
        self.engine.slide_count().saturating_sub(1) as f64 * self.slide_width
    }

    /// Follow the engine: 1:1 while dragging, eased otherwise
    pub fn update_track(&mut self, now: Instant) -> f64 {
        let desired = -self.engine.track_offset(self.slide_width);
        let max = self.max_position();
        if !self.engine.transition_enabled() {
            self.track.set_position(desired.clamp(0.0, max));
        } else if (self.track.target() - desired).abs() > 0.5 {
            self.track.scroll_to(desired, max, now);
        }
        self.track.update(max, now)
    }

    /// Left edge of the visible window along the track, in pixels
    pub fn track_position(&self) -> f64 {
        self.track.current()
    }

    pub fn needs_frame(&self) -> bool {
        self.track.needs_update() || self.engine.is_dragging()
    }
}

/// Clickable or hoverable screen regions recorded during the last draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    NavLink(usize),
    FooterLink(usize),
    Track(usize),
    Dot { carousel: usize, index: usize },
    DiscoverCard(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub area: Rect,
    pub target: HitTarget,
}

/// What the held mouse button is dragging
#[derive(Debug, Clone, Copy, PartialEq)]
enum MouseDrag {
    /// Page drag, emulating a touch gesture
    Page { last_y: f64 },
    Carousel(usize),
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub intro: IntroController<PageViewport>,
    pub carousels: Vec<FeatureCarousel>,
    pub slides: SlideDeck,
    /// Discover card whose image fills the section background
    pub discover_active: usize,
    /// Regions recorded by the last draw, topmost last
    pub hit_regions: Vec<HitRegion>,
    pub should_quit: bool,
    pub status_message: Option<String>,
    drag: Option<MouseDrag>,
    hovered_carousel: Option<usize>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, now: Instant) -> Self {
        let slides = SlideDeck::from_paths(&config.slide_paths());
        let viewport = PageViewport::new(&config.ui, now);
        let intro = IntroController::new(viewport, &config);
        let carousels = FEATURES
            .iter()
            .map(|_| FeatureCarousel::new(slides.len(), &config, now))
            .collect();

        Self {
            config,
            theme,
            intro,
            carousels,
            slides,
            discover_active: 0,
            hit_regions: Vec::new(),
            should_quit: false,
            status_message: None,
            drag: None,
            hovered_carousel: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn visuals(&self) -> IntroVisuals {
        self.intro.visuals()
    }

    pub fn cell_width(&self) -> f64 {
        self.config.ui.cell_width_px.max(1.0)
    }

    pub fn cell_height(&self) -> f64 {
        self.config.ui.cell_height_px.max(1.0)
    }

    /// Nav bar height in rows for the current visuals
    pub fn nav_rows(&self) -> u16 {
        (self.visuals().nav_height / self.cell_height()).round() as u16
    }

    /// Topmost region under a screen cell
    pub fn hit_test(&self, col: u16, row: u16) -> Option<HitTarget> {
        self.hit_regions
            .iter()
            .rev()
            .find(|r| {
                col >= r.area.x
                    && col < r.area.x.saturating_add(r.area.width)
                    && row >= r.area.y
                    && row < r.area.y.saturating_add(r.area.height)
            })
            .map(|r| r.target)
    }

    /// Whether the loop should run at animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.intro.needs_frame()
            || self.intro.viewport().needs_frame()
            || self.drag.is_some()
            || self.carousels.iter().any(|c| c.needs_frame())
    }

    /// Earliest timer the loop must wake for
    pub fn next_deadline(&self) -> Option<Instant> {
        self.carousels
            .iter()
            .filter_map(|c| c.engine.next_deadline())
            .chain(self.intro.next_deadline())
            .min()
    }

    /// Advance every animation and timer to `now`
    pub fn on_frame(&mut self, now: Instant) {
        self.intro.viewport_mut().tick(now);
        for event in self.intro.frame(now) {
            self.on_intro_event(event);
        }
        for carousel in &mut self.carousels {
            carousel.engine.tick(now);
            carousel.update_track(now);
        }
    }

    fn on_intro_event(&mut self, event: IntroEvent) {
        match event {
            IntroEvent::Unlocked => {
                tracing::info!("Intro complete, page scrolling unlocked");
                self.clear_status();
            }
            IntroEvent::Locked => {
                tracing::info!("Intro re-engaged");
            }
            IntroEvent::NavigatedTo { id, top } => {
                tracing::debug!(section = %id, top, "Scrolling to section");
                self.clear_status();
            }
            IntroEvent::NavigationAbandoned { id } => {
                tracing::warn!(section = %id, "Section never appeared, navigation dropped");
                self.set_status(format!("Section '{}' is not available", id));
            }
        }
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Intro(event) => self.handle_page_input(event),
            Action::Navigate(id) => self.navigate(id, now),
            Action::PointerDown { col, row } => self.pointer_down(col, row, now),
            Action::PointerDrag { col, row } => self.pointer_drag(col, row),
            Action::PointerUp => self.pointer_up(),
            Action::Hover { col, row } => self.hover(col, row, now),
            Action::Resize => self.intro.viewport_mut().invalidate_layout(),
            Action::None => {}
        }
    }

    /// Request an in-page scroll to section `id`
    pub fn navigate(&mut self, id: &str, now: Instant) {
        match self.intro.request_navigate(id, now) {
            NavigationRequest::Deferred => self.set_status("Entering..."),
            NavigationRequest::Scrolled => self.clear_status(),
            NavigationRequest::NotFound => {
                tracing::warn!(section = id, "Navigation target not on the page");
                self.set_status(format!("Section '{}' is not available", id));
            }
        }
    }

    /// Wheel and keys: the intro gets the first look, the page scrolls
    /// natively with whatever it passes through
    fn handle_page_input(&mut self, event: InputEvent) {
        if self.intro.handle_input(event).is_intercepted() {
            return;
        }

        let row = self.cell_height();
        let page = self.intro.viewport().viewport_rows().saturating_sub(2).max(1) as f64 * row;
        let viewport = self.intro.viewport_mut();
        match event {
            InputEvent::Wheel { delta_y } => {
                viewport.native_scroll(delta_y);
            }
            InputEvent::Key(key) => match key {
                NavKey::ArrowDown => {
                    viewport.native_scroll(ARROW_SCROLL_ROWS * row);
                }
                NavKey::ArrowUp => {
                    viewport.native_scroll(-ARROW_SCROLL_ROWS * row);
                }
                NavKey::PageDown | NavKey::Space => {
                    viewport.native_scroll(page);
                }
                NavKey::PageUp => {
                    viewport.native_scroll(-page);
                }
                NavKey::Home => {
                    viewport.native_jump(false);
                }
                NavKey::End => {
                    viewport.native_jump(true);
                }
                NavKey::Other => {}
            },
            InputEvent::TouchStart { .. } | InputEvent::TouchMove { .. } => {}
        }
    }

    fn pointer_down(&mut self, col: u16, row: u16, now: Instant) {
        match self.hit_test(col, row) {
            Some(HitTarget::Track(i)) => {
                let x = col as f64 * self.cell_width();
                if let Some(c) = self.carousels.get_mut(i) {
                    if c.engine.pointer_down(&mut c.capture, MOUSE_POINTER, x) {
                        self.drag = Some(MouseDrag::Carousel(i));
                    }
                }
            }
            Some(HitTarget::Dot { carousel, index }) => {
                if let Some(c) = self.carousels.get_mut(carousel) {
                    c.engine.go_to(index as i64);
                }
            }
            Some(HitTarget::NavLink(i)) => {
                if self.visuals().nav_interactive() {
                    self.navigate(NAV_ITEMS[i].target, now);
                }
            }
            Some(HitTarget::FooterLink(i)) => self.navigate(FOOTER_LINKS[i].target, now),
            Some(HitTarget::DiscoverCard(i)) => self.discover_active = i,
            None => {
                let y = row as f64 * self.cell_height();
                self.intro.handle_input(InputEvent::TouchStart { y: Some(y) });
                self.drag = Some(MouseDrag::Page { last_y: y });
            }
        }
    }

    fn pointer_drag(&mut self, col: u16, row: u16) {
        match self.drag {
            Some(MouseDrag::Carousel(i)) => {
                let x = col as f64 * self.cell_width();
                if let Some(c) = self.carousels.get_mut(i) {
                    c.engine.pointer_move(MOUSE_POINTER, x);
                }
            }
            Some(MouseDrag::Page { last_y }) => {
                let y = row as f64 * self.cell_height();
                let disposition = self.intro.handle_input(InputEvent::TouchMove { y: Some(y) });
                if !disposition.is_intercepted() {
                    // Content follows the finger
                    self.intro.viewport_mut().native_scroll(last_y - y);
                }
                self.drag = Some(MouseDrag::Page { last_y: y });
            }
            None => {}
        }
    }

    fn pointer_up(&mut self) {
        if let Some(MouseDrag::Carousel(i)) = self.drag.take() {
            if let Some(c) = self.carousels.get_mut(i) {
                match c.engine.pointer_up(&mut c.capture, MOUSE_POINTER) {
                    Some(DragRelease::SnapBack) | None => {}
                    Some(release) => {
                        tracing::debug!(carousel = i, ?release, index = c.engine.active_index(), "Carousel swiped");
                    }
                }
            }
        }
    }

    fn hover(&mut self, col: u16, row: u16, now: Instant) {
        let target = self.hit_test(col, row);
        let carousel = match target {
            Some(HitTarget::Track(i)) | Some(HitTarget::Dot { carousel: i, .. }) => Some(i),
            _ => None,
        };
        if carousel != self.hovered_carousel {
            if let Some(prev) = self.hovered_carousel.and_then(|i| self.carousels.get_mut(i)) {
                prev.engine.set_hovered(false, now);
            }
            if let Some(next) = carousel.and_then(|i| self.carousels.get_mut(i)) {
                next.engine.set_hovered(true, now);
            }
            self.hovered_carousel = carousel;
        }

        match target {
            Some(HitTarget::DiscoverCard(i)) => self.discover_active = i,
            // Leaving the card row resets the background
            _ if self.discover_active != 0 => self.discover_active = 0,
            _ => {}
        }
    }

    /// Apply a finished background image load
    pub fn apply_slide_result(&mut self, result: SlideLoadResult) {
        match result {
            SlideLoadResult::Success { index, image } => {
                tracing::debug!(slide = index, "Slide image loaded");
                self.slides.set_loaded(index, image);
            }
            SlideLoadResult::Failure { index, error } => {
                self.slides.set_failed(index, error);
            }
        }
    }

    /// Stop every timer and give native scrolling back
    pub fn teardown(&mut self) {
        self.intro.teardown();
        for carousel in &mut self.carousels {
            carousel.engine.unmount();
        }
    }

    /// Discover background slide index
    pub fn discover_slide(&self) -> usize {
        if self.slides.is_empty() {
            0
        } else {
            self.discover_active.min(DISCOVER_CARDS.len() - 1) % self.slides.len()
        }
    }
}
