//! Intro controller: fuses input, progress animation, scroll lock and
//! deferred navigation for one page.
//!
//! The host forwards raw input through [`IntroController::handle_input`],
//! calls [`IntroController::frame`] once per display refresh while
//! [`IntroController::needs_frame`] is true (or a deadline is near), and reads
//! [`IntroController::visuals`] when drawing.

use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::schedule::{Scheduler, TaskHandle};

use super::animator::{ProgressAnimator, StepOutcome};
use super::input::{InputEvent, InputNormalizer};
use super::lock::{GestureState, InputDisposition, LockState, Route, ScrollSuppression};
use super::navigation::{AttemptOutcome, NavigationDeferrer};
use super::viewport::{ScrollBehavior, Viewport};
use super::visuals::IntroVisuals;

/// Work the controller parks on its scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntroTask {
    /// One step of the progress loop
    Frame,
    /// Fixed delay before a navigation attempt elapsed
    NavigationDelay,
    /// Layout had time to settle; look the target up
    NavigationAttempt,
    /// Programmatic smooth scroll should be finished by now
    ReleaseGuard,
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum IntroEvent {
    /// Intro completed; native scrolling is back
    Unlocked,
    /// Reverse gesture re-engaged the intro
    Locked,
    /// A smooth scroll to a section was issued
    NavigatedTo { id: String, top: f64 },
    /// A deferred navigation target never appeared
    NavigationAbandoned { id: String },
}

/// What happened to a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationRequest {
    /// Locked: the intro is finishing and the scroll will follow
    Deferred,
    /// Unlocked: scrolled right away
    Scrolled,
    /// Unlocked but the section is not on the page, or the controller
    /// was torn down
    NotFound,
}

pub struct IntroController<V: Viewport> {
    viewport: V,
    normalizer: InputNormalizer,
    animator: ProgressAnimator,
    gesture: GestureState,
    suppression: ScrollSuppression,
    deferrer: NavigationDeferrer,
    scheduler: Scheduler<IntroTask>,
    guard_duration: Duration,
    guard_timer: Option<TaskHandle>,
    events: Vec<IntroEvent>,
    torn_down: bool,
}

impl<V: Viewport> IntroController<V> {
    /// Create a controller and suppress page scrolling immediately
    pub fn new(viewport: V, config: &AppConfig) -> Self {
        let mut controller = Self {
            viewport,
            normalizer: InputNormalizer::new(&config.intro),
            animator: ProgressAnimator::new(&config.intro),
            gesture: GestureState::default(),
            suppression: ScrollSuppression::default(),
            deferrer: NavigationDeferrer::new(&config.navigation),
            scheduler: Scheduler::new(),
            guard_duration: Duration::from_millis(config.navigation.guard_ms),
            guard_timer: None,
            events: Vec::new(),
            torn_down: false,
        };
        controller.sync_suppression();
        controller
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.animator.current()
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.animator.target()
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.gesture.locked()
    }

    #[inline]
    pub fn lock_state(&self) -> LockState {
        self.gesture.lock_state()
    }

    #[inline]
    pub fn pending_navigation(&self) -> Option<&str> {
        self.gesture.pending_navigation()
    }

    #[inline]
    pub fn programmatic_scroll(&self) -> bool {
        self.gesture.programmatic_scroll()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Style values for the current progress
    pub fn visuals(&self) -> IntroVisuals {
        IntroVisuals::from_progress(self.animator.current())
    }

    /// True while frame-bound work is queued; the host should refresh at full rate
    pub fn needs_frame(&self) -> bool {
        self.scheduler.wants_frames()
    }

    /// Earliest timer that needs a frame boundary to fire
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    /// Route one raw input event
    pub fn handle_input(&mut self, event: InputEvent) -> InputDisposition {
        if self.torn_down {
            return InputDisposition::PassThrough;
        }
        if let InputEvent::TouchStart { .. } = event {
            self.normalizer.normalize(event);
            return InputDisposition::PassThrough;
        }
        let Some(delta) = self.normalizer.normalize(event) else {
            return InputDisposition::PassThrough;
        };

        match self.gesture.route(delta, self.viewport.scroll_offset()) {
            Route::Ignore | Route::PassThrough => InputDisposition::PassThrough,
            Route::Drive => {
                self.add_delta(delta);
                InputDisposition::Intercepted
            }
            Route::Reverse => {
                self.start_reverse(delta);
                InputDisposition::Intercepted
            }
        }
    }

    /// Navigate to an in-page section, finishing the intro first if needed
    pub fn request_navigate(&mut self, id: &str, now: Instant) -> NavigationRequest {
        if self.torn_down {
            return NavigationRequest::NotFound;
        }
        if self.gesture.locked() {
            self.gesture.defer(id);
            self.animator.set_target(1.0);
            self.animator.start(&mut self.scheduler, IntroTask::Frame);
            tracing::debug!(section = id, "Navigation deferred until intro completes");
            return NavigationRequest::Deferred;
        }

        if self.scroll_to_section(id, now) {
            NavigationRequest::Scrolled
        } else {
            NavigationRequest::NotFound
        }
    }

    /// Advance one display frame. Returns the events raised since the last call.
    pub fn frame(&mut self, now: Instant) -> Vec<IntroEvent> {
        for task in self.scheduler.frame(now) {
            match task {
                IntroTask::Frame => self.on_animation_frame(now),
                IntroTask::NavigationDelay => {
                    self.deferrer
                        .on_delay(&mut self.scheduler, IntroTask::NavigationAttempt);
                }
                IntroTask::NavigationAttempt => self.on_navigation_attempt(now),
                IntroTask::ReleaseGuard => {
                    self.guard_timer = None;
                    self.gesture.set_programmatic_scroll(false);
                }
            }
        }
        std::mem::take(&mut self.events)
    }

    /// Cancel every pending callback and give native scrolling back.
    /// Safe to call more than once; also runs on drop.
    pub fn teardown(&mut self) {
        self.animator.cancel(&mut self.scheduler);
        self.deferrer.cancel(&mut self.scheduler);
        self.scheduler.cancel_all();
        self.guard_timer = None;
        self.suppression.release(&mut self.viewport);
        if !self.torn_down {
            tracing::debug!("Intro controller torn down");
        }
        self.torn_down = true;
    }

    fn add_delta(&mut self, delta: f64) {
        self.animator.nudge(delta);
        self.animator.start(&mut self.scheduler, IntroTask::Frame);
    }

    fn start_reverse(&mut self, delta: f64) {
        if !self.gesture.lock() {
            return;
        }
        self.sync_suppression();
        if self.viewport.scroll_offset() != 0.0 {
            self.viewport.scroll_to(0.0, ScrollBehavior::Instant);
        }
        // Reverse runs from wherever the intro visibly is, not from 1
        self.animator.reseed_from_current();
        self.add_delta(delta);
        tracing::debug!(
            progress = self.animator.current(),
            target = self.animator.target(),
            "Reverse gesture re-locked the intro"
        );
        self.events.push(IntroEvent::Locked);
    }

    fn on_animation_frame(&mut self, now: Instant) {
        let StepOutcome::Converged { target } = self.animator.tick(&mut self.scheduler, IntroTask::Frame)
        else {
            return;
        };

        if target >= 1.0 {
            if let Some(pending) = self.gesture.unlock() {
                self.sync_suppression();
                tracing::debug!("Intro complete, page scrolling unlocked");
                self.events.push(IntroEvent::Unlocked);
                if let Some(id) = pending {
                    self.deferrer
                        .begin(id, &mut self.scheduler, now, IntroTask::NavigationDelay);
                }
            }
        } else if target <= 0.0 && self.gesture.lock() {
            self.sync_suppression();
            self.events.push(IntroEvent::Locked);
        }
    }

    fn on_navigation_attempt(&mut self, now: Instant) {
        let found = match self.deferrer.target().map(str::to_owned) {
            Some(id) => self.scroll_to_section(&id, now),
            None => return,
        };
        let outcome = self.deferrer.on_attempt(
            found,
            &mut self.scheduler,
            now,
            IntroTask::NavigationDelay,
        );
        if let Some(AttemptOutcome::Abandoned { id }) = outcome {
            self.events.push(IntroEvent::NavigationAbandoned { id });
        }
    }

    /// Smooth-scroll to a section with the programmatic guard raised.
    /// Returns false when the section is not laid out.
    fn scroll_to_section(&mut self, id: &str, now: Instant) -> bool {
        let Some(element_top) = self.viewport.element_top(id) else {
            return false;
        };
        let top = self.deferrer.scroll_target(element_top);

        self.gesture.set_programmatic_scroll(true);
        if let Some(handle) = self.guard_timer.take() {
            self.scheduler.cancel(handle);
        }
        self.guard_timer = Some(self.scheduler.after(
            now,
            self.guard_duration,
            IntroTask::ReleaseGuard,
        ));

        self.viewport.scroll_to(top, ScrollBehavior::Smooth);
        tracing::debug!(section = id, top, "Scrolling to section");
        self.events.push(IntroEvent::NavigatedTo {
            id: id.to_string(),
            top,
        });
        true
    }

    fn sync_suppression(&mut self) {
        let state = self.gesture.lock_state();
        self.suppression.sync(&mut self.viewport, state);
    }
}

impl<V: Viewport> Drop for IntroController<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intro::input::NavKey;
    use crate::intro::viewport::ScrollRoot;
    use std::collections::HashMap;

    /// Recording page double
    #[derive(Debug, Default)]
    struct FakePage {
        offset: f64,
        sections: HashMap<String, f64>,
        suppressed: HashMap<&'static str, bool>,
        scrolls: Vec<(f64, ScrollBehavior)>,
    }

    impl Viewport for FakePage {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
            self.offset = top;
            self.scrolls.push((top, behavior));
        }

        fn element_top(&self, id: &str) -> Option<f64> {
            self.sections.get(id).copied()
        }

        fn set_scroll_suppressed(&mut self, root: ScrollRoot, suppressed: bool) {
            let key = match root {
                ScrollRoot::Document => "document",
                ScrollRoot::Body => "body",
            };
            self.suppressed.insert(key, suppressed);
        }
    }

    impl FakePage {
        fn is_suppressed(&self) -> bool {
            self.suppressed.get("document") == Some(&true) && self.suppressed.get("body") == Some(&true)
        }

        fn is_released(&self) -> bool {
            self.suppressed.get("document") == Some(&false) && self.suppressed.get("body") == Some(&false)
        }
    }

    fn wheel(delta_y: f64) -> InputEvent {
        InputEvent::Wheel { delta_y }
    }

    /// Run frames until the controller has no frame-bound work
    fn settle(c: &mut IntroController<&mut FakePage>, now: &mut Instant) -> Vec<IntroEvent> {
        let mut events = Vec::new();
        for _ in 0..500 {
            *now += Duration::from_millis(16);
            events.extend(c.frame(*now));
            if !c.needs_frame() && c.next_deadline().is_none() {
                break;
            }
        }
        events
    }

    #[test]
    fn test_starts_locked_and_suppressed() {
        let mut page = FakePage::default();
        let c = IntroController::new(&mut page, &AppConfig::default());
        assert!(c.is_locked());
        assert_eq!(c.progress(), 0.0);
        drop(c);
        assert!(page.is_released());
    }

    #[test]
    fn test_wheel_drives_to_unlock() {
        let mut page = FakePage::default();
        let mut now = Instant::now();
        let mut c = IntroController::new(&mut page, &AppConfig::default());
        assert!(c.viewport().is_suppressed());

        assert_eq!(c.handle_input(wheel(2600.0)), InputDisposition::Intercepted);
        assert!((c.target() - 0.04).abs() < 1e-12);

        for _ in 0..24 {
            c.handle_input(wheel(2600.0));
            assert!((0.0..=1.0).contains(&c.target()));
        }
        assert!((c.target() - 1.0).abs() < 1e-9);
        assert!(c.is_locked(), "must not unlock before convergence");

        // One in-flight loop regardless of how many events arrived
        assert!(c.is_animating());

        let events = settle(&mut c, &mut now);
        assert_eq!(c.progress(), 1.0);
        assert!(!c.is_locked());
        assert_eq!(events, vec![IntroEvent::Unlocked]);
        assert!(c.viewport().is_released());
    }

    fn unlocked_controller<'a>(page: &'a mut FakePage, now: &mut Instant) -> IntroController<&'a mut FakePage> {
        let mut c = IntroController::new(page, &AppConfig::default());
        for _ in 0..30 {
            c.handle_input(wheel(2600.0));
        }
        settle(&mut c, now);
        assert!(!c.is_locked());
        c
    }

    #[test]
    fn test_unlocked_passes_through() {
        let mut page = FakePage::default();
        let mut now = Instant::now();
        let mut c = unlocked_controller(&mut page, &mut now);

        assert_eq!(c.handle_input(wheel(120.0)), InputDisposition::PassThrough);
        c.viewport_mut().offset = 300.0;
        assert_eq!(c.handle_input(wheel(-120.0)), InputDisposition::PassThrough);
        assert!(!c.is_locked());
        assert_eq!(c.target(), 1.0);
    }

    #[test]
    fn test_reverse_gesture_reseeds_from_current() {
        let mut page = FakePage::default();
        let mut now = Instant::now();
        let mut c = unlocked_controller(&mut page, &mut now);
        let before = c.progress();

        assert_eq!(c.handle_input(wheel(-100.0)), InputDisposition::Intercepted);
        assert!(c.is_locked());
        assert!(c.viewport().is_suppressed());
        let expected = before - 100.0 / 2600.0;
        assert!((c.target() - expected).abs() < 1e-12);

        let events = c.frame(now + Duration::from_millis(16));
        assert_eq!(events, vec![IntroEvent::Locked]);
    }

    #[test]
    fn test_reverse_forces_viewport_to_top() {
        let mut page = FakePage::default();
        let mut now = Instant::now();
        let mut c = unlocked_controller(&mut page, &mut now);
        // Overscroll above the top still counts as the top
        c.viewport_mut().offset = -0.5;
        c.handle_input(InputEvent::Key(NavKey::ArrowUp));
        assert!(c.is_locked());
        assert_eq!(c.viewport().offset, 0.0);
        assert_eq!(
            c.viewport().scrolls.last(),
            Some(&(0.0, ScrollBehavior::Instant))
        );
    }

    #[test]
    fn test_unknown_key_not_intercepted() {
        let mut page = FakePage::default();
        let mut c = IntroController::new(&mut page, &AppConfig::default());
        assert_eq!(
            c.handle_input(InputEvent::Key(NavKey::Other)),
            InputDisposition::PassThrough
        );
        assert_eq!(c.target(), 0.0);
        assert!(!c.is_animating());
    }

    #[test]
    fn test_touch_drives_progress() {
        let mut page = FakePage::default();
        let mut c = IntroController::new(&mut page, &AppConfig::default());
        assert_eq!(
            c.handle_input(InputEvent::TouchStart { y: Some(600.0) }),
            InputDisposition::PassThrough
        );
        assert_eq!(
            c.handle_input(InputEvent::TouchMove { y: Some(550.0) }),
            InputDisposition::Intercepted
        );
        assert!((c.target() - 70.0 / 2600.0).abs() < 1e-12);
    }

    #[test]
    fn test_navigation_deferred_until_unlock() {
        let mut page = FakePage::default();
        page.sections.insert("features".into(), 1200.0);
        let mut now = Instant::now();
        let mut c = IntroController::new(&mut page, &AppConfig::default());

        assert_eq!(c.request_navigate("features", now), NavigationRequest::Deferred);
        assert_eq!(c.pending_navigation(), Some("features"));
        assert_eq!(c.target(), 1.0);
        assert!(c.viewport().scrolls.is_empty());

        let events = settle(&mut c, &mut now);
        assert!(!c.is_locked());
        assert_eq!(c.pending_navigation(), None);
        assert_eq!(
            events,
            vec![
                IntroEvent::Unlocked,
                IntroEvent::NavigatedTo {
                    id: "features".into(),
                    top: 1104.0
                }
            ]
        );
        assert_eq!(
            c.viewport().scrolls.last(),
            Some(&(1104.0, ScrollBehavior::Smooth))
        );
        assert!(!c.programmatic_scroll(), "guard released after settling");
    }

    #[test]
    fn test_navigation_waits_for_layout() {
        let mut page = FakePage::default();
        let mut now = Instant::now();
        let mut c = IntroController::new(&mut page, &AppConfig::default());
        c.request_navigate("contact", now);

        // Run until unlocked, then let a couple of attempts miss
        let mut unlocked = false;
        for _ in 0..200 {
            now += Duration::from_millis(16);
            if c.frame(now).contains(&IntroEvent::Unlocked) {
                unlocked = true;
                break;
            }
        }
        assert!(unlocked);

        // Long enough for the first few attempts to miss
        for _ in 0..20 {
            now += Duration::from_millis(16);
            assert!(c.frame(now).is_empty());
        }
        assert!(c.viewport().scrolls.is_empty());

        // Section appears; a later attempt finds it
        c.viewport_mut().sections.insert("contact".into(), 3000.0);
        let events = settle(&mut c, &mut now);
        assert!(events.contains(&IntroEvent::NavigatedTo {
            id: "contact".into(),
            top: 2904.0
        }));
    }

    #[test]
    fn test_navigation_abandoned_silently() {
        let mut page = FakePage::default();
        let mut now = Instant::now();
        let mut c = IntroController::new(&mut page, &AppConfig::default());
        c.request_navigate("nowhere", now);
        let events = settle(&mut c, &mut now);
        assert_eq!(
            events,
            vec![
                IntroEvent::Unlocked,
                IntroEvent::NavigationAbandoned {
                    id: "nowhere".into()
                }
            ]
        );
        assert!(c.viewport().scrolls.is_empty());
    }

    #[test]
    fn test_guard_blocks_reverse_during_smooth_scroll() {
        let mut page = FakePage::default();
        page.sections.insert("top".into(), 0.0);
        let mut now = Instant::now();
        let mut c = unlocked_controller(&mut page, &mut now);

        assert_eq!(c.request_navigate("top", now), NavigationRequest::Scrolled);
        assert!(c.programmatic_scroll());
        assert_eq!(c.handle_input(wheel(-200.0)), InputDisposition::PassThrough);
        assert!(!c.is_locked());

        c.frame(now + Duration::from_millis(899));
        assert!(c.programmatic_scroll());
        c.frame(now + Duration::from_millis(900));
        assert!(!c.programmatic_scroll());

        assert_eq!(c.handle_input(wheel(-200.0)), InputDisposition::Intercepted);
        assert!(c.is_locked());
    }

    #[test]
    fn test_immediate_navigation_not_found() {
        let mut page = FakePage::default();
        let mut now = Instant::now();
        let mut c = unlocked_controller(&mut page, &mut now);
        assert_eq!(c.request_navigate("missing", now), NavigationRequest::NotFound);
        assert!(!c.programmatic_scroll());
    }

    #[test]
    fn test_teardown_cancels_and_releases() {
        let mut page = FakePage::default();
        let mut c = IntroController::new(&mut page, &AppConfig::default());
        c.handle_input(wheel(2600.0));
        assert!(c.is_animating());

        c.teardown();
        assert!(!c.needs_frame());
        assert!(c.viewport().is_released());
        let progress = c.progress();
        assert!(c.frame(Instant::now()).is_empty());
        assert_eq!(c.progress(), progress);

        // Idempotent
        c.teardown();
        assert_eq!(c.handle_input(wheel(2600.0)), InputDisposition::PassThrough);
    }

    #[test]
    fn test_navigation_after_teardown_is_dropped() {
        let mut page = FakePage::default();
        page.sections.insert("features".into(), 1000.0);
        let mut now = Instant::now();
        let mut c = IntroController::new(&mut page, &AppConfig::default());
        c.teardown();

        assert_eq!(c.request_navigate("features", now), NavigationRequest::NotFound);
        assert!(!c.needs_frame());
        assert_eq!(c.next_deadline(), None);
        assert_eq!(c.pending_navigation(), None);
        assert_eq!(c.target(), 0.0);

        for _ in 0..100 {
            now += Duration::from_millis(16);
            assert!(c.frame(now).is_empty());
        }
        assert!(c.viewport().scrolls.is_empty());
    }

    #[test]
    fn test_touch_during_smooth_scroll_is_ignored_but_tracked() {
        let mut page = FakePage::default();
        page.sections.insert("top".into(), 0.0);
        let mut now = Instant::now();
        let mut c = unlocked_controller(&mut page, &mut now);
        assert_eq!(c.request_navigate("top", now), NavigationRequest::Scrolled);

        c.handle_input(InputEvent::TouchStart { y: Some(400.0) });
        assert_eq!(
            c.handle_input(InputEvent::TouchMove { y: Some(500.0) }),
            InputDisposition::PassThrough
        );
        assert!(!c.is_locked());

        // Guard released: the next sample measures from the last one seen
        c.frame(now + Duration::from_millis(900));
        assert_eq!(
            c.handle_input(InputEvent::TouchMove { y: Some(510.0) }),
            InputDisposition::Intercepted
        );
        assert!(c.is_locked());
        assert!((c.target() - (1.0 - 14.0 / 2600.0)).abs() < 1e-12);
    }

    #[test]
    fn test_reverse_round_trip_unlocks_once() {
        let mut page = FakePage::default();
        let mut now = Instant::now();
        let mut c = unlocked_controller(&mut page, &mut now);

        // All the way back to the start: one Locked, none at convergence on 0
        for _ in 0..30 {
            assert_eq!(c.handle_input(wheel(-2600.0)), InputDisposition::Intercepted);
        }
        assert_eq!(c.target(), 0.0);
        let events = settle(&mut c, &mut now);
        assert_eq!(events, vec![IntroEvent::Locked]);
        assert_eq!(c.progress(), 0.0);
        assert!(c.is_locked());
        assert!(c.viewport().is_suppressed());

        // Forward again
        for _ in 0..30 {
            assert_eq!(c.handle_input(wheel(2600.0)), InputDisposition::Intercepted);
        }
        let events = settle(&mut c, &mut now);
        assert_eq!(events, vec![IntroEvent::Unlocked]);
        assert_eq!(c.progress(), 1.0);
        assert!(!c.is_locked());
        assert!(c.viewport().is_released());
    }

    #[test]
    fn test_converging_to_zero_while_locked_raises_nothing() {
        let mut page = FakePage::default();
        let mut now = Instant::now();
        let mut c = IntroController::new(&mut page, &AppConfig::default());
        c.handle_input(wheel(2600.0));
        c.handle_input(wheel(-2600.0));
        assert_eq!(c.target(), 0.0);

        assert!(settle(&mut c, &mut now).is_empty());
        assert!(c.is_locked());
        assert_eq!(c.progress(), 0.0);
    }
}
