use std::time::{Duration, Instant};

use tracing::debug;
use uuid::Uuid;

use crate::config::CarouselConfig;

use super::pointer::{DragSession, PointerId, PointerTarget};

/// Wrap any signed index into `[0, n)`. Always 0 for an empty carousel.
#[inline]
pub fn wrap_index(index: i64, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let n = n as i64;
    (((index % n) + n) % n) as usize
}

/// How a drag ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRelease {
    /// Dragged right past the threshold
    Previous,
    /// Dragged left past the threshold
    Next,
    /// Not far enough; slide springs back
    SnapBack,
}

impl DragRelease {
    pub fn from_displacement(dx: f64, threshold: f64) -> Self {
        if dx > threshold {
            DragRelease::Previous
        } else if dx < -threshold {
            DragRelease::Next
        } else {
            DragRelease::SnapBack
        }
    }

    fn delta(self) -> i64 {
        match self {
            DragRelease::Previous => -1,
            DragRelease::Next => 1,
            DragRelease::SnapBack => 0,
        }
    }
}

/// State of one mounted carousel
#[derive(Debug, Clone)]
pub struct Carousel {
    id: Uuid,
    slide_count: usize,
    index: usize,
    hovered: bool,
    interval: Duration,
    threshold: f64,
    /// Next autoplay advance, `None` while autoplay is stopped
    autoplay_due: Option<Instant>,
    drag: Option<DragSession>,
    mounted: bool,
}

impl Carousel {
    /// Mount a carousel; autoplay starts right away when it has something to cycle
    pub fn new(slide_count: usize, config: &CarouselConfig, now: Instant) -> Self {
        let mut carousel = Self {
            id: Uuid::new_v4(),
            slide_count,
            index: 0,
            hovered: false,
            interval: Duration::from_millis(config.interval_ms.max(1)),
            threshold: config.drag_threshold_px,
            autoplay_due: None,
            drag: None,
            mounted: true,
        };
        carousel.restart_autoplay(now);
        carousel
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    #[inline]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    #[inline]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay_due.is_some()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Live drag offset in px, 0 when not dragging
    #[inline]
    pub fn drag_offset(&self) -> f64 {
        self.drag.map(|d| d.dx).unwrap_or(0.0)
    }

    /// Eased transitions are off while the track follows the pointer
    #[inline]
    pub fn transition_enabled(&self) -> bool {
        self.drag.is_none()
    }

    /// Dot indicators are only shown when there is more than one slide
    #[inline]
    pub fn shows_dots(&self) -> bool {
        self.slide_count > 1
    }

    /// Horizontal track translation for slides `slide_width` wide
    pub fn track_offset(&self, slide_width: f64) -> f64 {
        -(self.index as f64) * slide_width + self.drag_offset()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.autoplay_due
    }

    /// Move by `delta` slides with wraparound
    pub fn go(&mut self, delta: i64) -> usize {
        self.go_to(self.index as i64 + delta)
    }

    /// Jump to a slide (dot click); out-of-range indices wrap
    pub fn go_to(&mut self, index: i64) -> usize {
        let next = wrap_index(index, self.slide_count);
        if next != self.index {
            debug!(carousel = %self.id, from = self.index, to = next, "Carousel slide changed");
        }
        self.index = next;
        self.index
    }

    pub fn set_hovered(&mut self, hovered: bool, now: Instant) {
        if self.hovered == hovered {
            return;
        }
        self.hovered = hovered;
        self.restart_autoplay(now);
    }

    pub fn set_slide_count(&mut self, slide_count: usize, now: Instant) {
        if self.slide_count == slide_count {
            return;
        }
        self.slide_count = slide_count;
        self.index = wrap_index(self.index as i64, slide_count);
        if slide_count <= 1 {
            self.drag = None;
        }
        self.restart_autoplay(now);
    }

    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        let interval = interval.max(Duration::from_millis(1));
        if self.interval == interval {
            return;
        }
        self.interval = interval;
        self.restart_autoplay(now);
    }

    /// Advance autoplay if due. Returns true when the slide changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(due) = self.autoplay_due else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.interval;
        if next <= now {
            // Host stalled; drop the missed beats instead of bursting
            next = now + self.interval;
        }
        self.autoplay_due = Some(next);
        self.go(1);
        true
    }

    /// Start a drag. Ignored for single-slide carousels and while another
    /// pointer holds the drag.
    pub fn pointer_down<T: PointerTarget>(&mut self, target: &mut T, pointer_id: PointerId, x: f64) -> bool {
        if !self.mounted || self.slide_count <= 1 || self.drag.is_some() {
            return false;
        }
        self.drag = Some(DragSession::new(pointer_id, x));
        target.capture_pointer(pointer_id);
        true
    }

    /// Follow the pointer 1:1. Returns the live offset for the captured pointer.
    pub fn pointer_move(&mut self, pointer_id: PointerId, x: f64) -> Option<f64> {
        let drag = self.drag.as_mut()?;
        if drag.pointer_id != pointer_id {
            return None;
        }
        Some(drag.track(x))
    }

    /// Finish a drag and commit, or snap back.
    pub fn pointer_up<T: PointerTarget>(&mut self, target: &mut T, pointer_id: PointerId) -> Option<DragRelease> {
        let drag = self.drag?;
        if drag.pointer_id != pointer_id {
            return None;
        }

        if let Err(e) = target.release_pointer(pointer_id) {
            debug!(carousel = %self.id, error = %e, "Ignoring pointer release failure");
        }
        self.drag = None;

        let release = DragRelease::from_displacement(drag.dx, self.threshold);
        self.go(release.delta());
        Some(release)
    }

    /// Pointer cancel behaves like a release
    pub fn pointer_cancel<T: PointerTarget>(&mut self, target: &mut T, pointer_id: PointerId) -> Option<DragRelease> {
        self.pointer_up(target, pointer_id)
    }

    /// Tear down: stop autoplay and abandon any drag
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.autoplay_due = None;
        self.drag = None;
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn restart_autoplay(&mut self, now: Instant) {
        self.autoplay_due = if self.mounted && self.slide_count > 1 && !self.hovered {
            Some(now + self.interval)
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::pointer::NoCapture;

    /// Capture double that fails releases for pointers it never captured
    #[derive(Default)]
    struct StrictTarget {
        captured: Option<PointerId>,
        releases: u32,
    }

    impl PointerTarget for StrictTarget {
        fn capture_pointer(&mut self, pointer_id: PointerId) {
            self.captured = Some(pointer_id);
        }

        fn release_pointer(&mut self, pointer_id: PointerId) -> crate::Result<()> {
            self.releases += 1;
            if self.captured.take() == Some(pointer_id) {
                Ok(())
            } else {
                Err(crate::Error::PointerNotCaptured { pointer_id })
            }
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn carousel(n: usize) -> (Carousel, Instant) {
        let now = Instant::now();
        (Carousel::new(n, &CarouselConfig::default(), now), now)
    }

    fn drag(c: &mut Carousel, dx: f64) -> Option<DragRelease> {
        let mut target = NoCapture;
        c.pointer_down(&mut target, 1, 500.0);
        c.pointer_move(1, 500.0 + dx);
        c.pointer_up(&mut target, 1)
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(3, 3), 0);
        assert_eq!(wrap_index(-1, 3), 2);
        assert_eq!(wrap_index(-7, 3), 2);
        assert_eq!(wrap_index(5, 0), 0);
    }

    #[test]
    fn test_drag_commits_and_snaps_back() {
        let (mut c, _) = carousel(3);
        assert_eq!(drag(&mut c, -80.0), Some(DragRelease::Next));
        assert_eq!(c.active_index(), 1);
        assert_eq!(drag(&mut c, 10.0), Some(DragRelease::SnapBack));
        assert_eq!(c.active_index(), 1);
        assert_eq!(drag(&mut c, 61.0), Some(DragRelease::Previous));
        assert_eq!(c.active_index(), 0);
        assert_eq!(drag(&mut c, 61.0), Some(DragRelease::Previous));
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let (mut c, _) = carousel(4);
        assert_eq!(drag(&mut c, 60.0), Some(DragRelease::SnapBack));
        assert_eq!(drag(&mut c, -60.0), Some(DragRelease::SnapBack));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn test_index_stays_in_range() {
        for n in 1..6 {
            let (mut c, _) = carousel(n);
            for (i, dx) in [-500.0, 90.0, -61.0, 3.0, 200.0, -200.0, 0.0, 75.5].iter().cycle().take(40).enumerate() {
                drag(&mut c, *dx);
                c.go(i as i64 * 7 - 13);
                assert!(c.active_index() < n);
            }
        }
    }

    #[test]
    fn test_live_offset_tracks_pointer() {
        let (mut c, _) = carousel(3);
        c.go_to(1);
        let mut target = StrictTarget::default();
        assert!(c.pointer_down(&mut target, 9, 300.0));
        assert!(!c.transition_enabled());
        assert_eq!(c.pointer_move(9, 250.0), Some(-50.0));
        assert_eq!(c.track_offset(400.0), -450.0);

        // Index does not change mid-drag
        assert_eq!(c.active_index(), 1);

        c.pointer_up(&mut target, 9);
        assert_eq!(c.drag_offset(), 0.0);
        assert!(c.transition_enabled());
        assert_eq!(c.track_offset(400.0), -400.0);
        assert_eq!(target.releases, 1);
    }

    #[test]
    fn test_second_pointer_ignored() {
        let (mut c, _) = carousel(3);
        let mut target = StrictTarget::default();
        assert!(c.pointer_down(&mut target, 1, 0.0));
        assert!(!c.pointer_down(&mut target, 2, 100.0));
        assert_eq!(c.pointer_move(2, 400.0), None);
        assert_eq!(c.pointer_up(&mut target, 2), None);
        assert!(c.is_dragging());
        assert_eq!(c.pointer_move(1, -100.0), Some(-100.0));
        assert_eq!(c.pointer_up(&mut target, 1), Some(DragRelease::Next));
    }

    #[test]
    fn test_release_failure_is_ignored() {
        let (mut c, _) = carousel(3);
        let mut target = StrictTarget::default();
        c.pointer_down(&mut target, 4, 0.0);
        // Host lost capture behind our back
        target.captured = None;
        c.pointer_move(4, -120.0);
        assert_eq!(c.pointer_cancel(&mut target, 4), Some(DragRelease::Next));
        assert_eq!(c.active_index(), 1);
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_single_slide_never_moves() {
        let (mut c, now) = carousel(1);
        assert!(!c.is_autoplaying());
        assert!(!c.shows_dots());
        assert_eq!(drag(&mut c, -300.0), None);
        assert!(!c.tick(now + ms(10_000)));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn test_empty_carousel() {
        let (mut c, now) = carousel(0);
        assert!(c.is_empty());
        assert!(!c.is_autoplaying());
        assert_eq!(c.go(5), 0);
        assert!(!c.tick(now + ms(10_000)));
    }

    #[test]
    fn test_autoplay_advances_on_interval() {
        let (mut c, now) = carousel(3);
        assert!(!c.tick(now + ms(3499)));
        assert!(c.tick(now + ms(3500)));
        assert_eq!(c.active_index(), 1);
        assert!(!c.tick(now + ms(5000)));
        assert!(c.tick(now + ms(7000)));
        assert!(c.tick(now + ms(10_500)));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn test_autoplay_drops_missed_beats() {
        let (mut c, now) = carousel(5);
        assert!(c.tick(now + ms(20_000)));
        assert_eq!(c.active_index(), 1);
        assert_eq!(c.next_deadline(), Some(now + ms(23_500)));
    }

    #[test]
    fn test_hover_pauses_and_restarts() {
        let (mut c, now) = carousel(3);
        c.set_hovered(true, now + ms(1000));
        assert!(!c.is_autoplaying());
        for step in 1..20 {
            assert!(!c.tick(now + ms(step * 1000)));
        }
        assert_eq!(c.active_index(), 0);

        // Leaving restarts the full interval
        c.set_hovered(false, now + ms(20_000));
        assert!(!c.tick(now + ms(23_000)));
        assert!(c.tick(now + ms(23_500)));
        assert_eq!(c.active_index(), 1);
    }

    #[test]
    fn test_interval_and_count_changes_restart_timer() {
        let (mut c, now) = carousel(3);
        c.set_interval(ms(1000), now + ms(3000));
        assert!(!c.tick(now + ms(3500)));
        assert!(c.tick(now + ms(4000)));

        c.go_to(2);
        c.set_slide_count(2, now + ms(4100));
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.next_deadline(), Some(now + ms(5100)));

        c.set_slide_count(1, now + ms(4200));
        assert!(!c.is_autoplaying());
    }

    #[test]
    fn test_go_to_wraps() {
        let (mut c, _) = carousel(4);
        assert_eq!(c.go_to(6), 2);
        assert_eq!(c.go_to(-1), 3);
    }

    #[test]
    fn test_unmount_cancels_autoplay() {
        let (mut c, now) = carousel(3);
        c.unmount();
        assert!(!c.is_mounted());
        assert!(!c.tick(now + ms(60_000)));
        assert!(!c.pointer_down(&mut NoCapture, 1, 0.0));
        c.set_hovered(true, now);
        c.set_hovered(false, now);
        assert!(!c.is_autoplaying());
    }
}
