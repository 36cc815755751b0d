//! Deferred in-page navigation
//!
//! After the intro unlocks, a navigation requested while locked is retried
//! until the target section has been laid out: fixed delay, then a few frame
//! boundaries, then a lookup. After `max_attempts` misses it is dropped.

use std::time::{Duration, Instant};

use crate::config::NavigationConfig;
use crate::schedule::{Scheduler, TaskHandle};

/// Outcome of one deferred navigation attempt
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// Target found; the scroll was issued
    Scrolled { id: String },
    /// Not found yet; another attempt is scheduled
    Retrying { id: String, attempt: u32 },
    /// Gave up after the last attempt
    Abandoned { id: String },
}

#[derive(Debug, Clone)]
struct Retry {
    id: String,
    attempts: u32,
    handle: Option<TaskHandle>,
}

#[derive(Debug, Clone)]
pub struct NavigationDeferrer {
    offset: f64,
    max_attempts: u32,
    initial_delay: Duration,
    retry_delay: Duration,
    settle_frames: u32,
    active: Option<Retry>,
}

impl Default for NavigationDeferrer {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

impl NavigationDeferrer {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            offset: config.offset_px,
            max_attempts: config.max_attempts.max(1),
            initial_delay: Duration::from_millis(config.initial_delay_ms),
            retry_delay: Duration::from_millis(config.retry_delay_ms),
            settle_frames: config.settle_frames,
            active: None,
        }
    }

    /// Scroll position that puts `element_top` just below the fixed overlay
    #[inline]
    pub fn scroll_target(&self, element_top: f64) -> f64 {
        (element_top - self.offset).max(0.0)
    }

    /// Section currently being retried
    pub fn target(&self) -> Option<&str> {
        self.active.as_ref().map(|r| r.id.as_str())
    }

    pub fn attempts(&self) -> u32 {
        self.active.as_ref().map(|r| r.attempts).unwrap_or(0)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start the retry loop for `id`, replacing any loop already running
    pub fn begin<T>(&mut self, id: String, scheduler: &mut Scheduler<T>, now: Instant, delay_task: T) {
        self.cancel(scheduler);
        tracing::debug!(section = %id, "Deferred navigation scheduled");
        let handle = scheduler.after(now, self.initial_delay, delay_task);
        self.active = Some(Retry {
            id,
            attempts: 0,
            handle: Some(handle),
        });
    }

    /// The fixed delay elapsed: count the attempt and wait for layout to settle
    pub fn on_delay<T>(&mut self, scheduler: &mut Scheduler<T>, attempt_task: T) {
        let settle = self.settle_frames;
        if let Some(retry) = self.active.as_mut() {
            retry.attempts += 1;
            retry.handle = Some(scheduler.after_frames(settle, attempt_task));
        }
    }

    /// Record the lookup result for the current attempt
    pub fn on_attempt<T>(
        &mut self,
        found: bool,
        scheduler: &mut Scheduler<T>,
        now: Instant,
        delay_task: T,
    ) -> Option<AttemptOutcome> {
        let mut retry = self.active.take()?;
        retry.handle = None;

        if found {
            return Some(AttemptOutcome::Scrolled { id: retry.id });
        }

        if retry.attempts >= self.max_attempts {
            tracing::debug!(
                section = %retry.id,
                attempts = retry.attempts,
                "Deferred navigation target never appeared, dropping"
            );
            return Some(AttemptOutcome::Abandoned { id: retry.id });
        }

        tracing::debug!(
            section = %retry.id,
            attempt = retry.attempts,
            max_attempts = self.max_attempts,
            delay_ms = self.retry_delay.as_millis(),
            "Deferred navigation target not laid out, retrying"
        );
        retry.handle = Some(scheduler.after(now, self.retry_delay, delay_task));
        let outcome = AttemptOutcome::Retrying {
            id: retry.id.clone(),
            attempt: retry.attempts,
        };
        self.active = Some(retry);
        Some(outcome)
    }

    /// Stop any retry loop
    pub fn cancel<T>(&mut self, scheduler: &mut Scheduler<T>) {
        if let Some(retry) = self.active.take() {
            if let Some(handle) = retry.handle {
                scheduler.cancel(handle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Task {
        Delay,
        Attempt,
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_scroll_target_clears_overlay() {
        let d = NavigationDeferrer::default();
        assert_eq!(d.scroll_target(1000.0), 904.0);
        assert_eq!(d.scroll_target(40.0), 0.0);
    }

    #[test]
    fn test_delay_then_two_frames() {
        let mut sched = Scheduler::new();
        let mut d = NavigationDeferrer::default();
        let t0 = Instant::now();
        d.begin("features".into(), &mut sched, t0, Task::Delay);

        assert!(sched.frame(t0 + ms(59)).is_empty());
        assert_eq!(sched.frame(t0 + ms(60)), vec![Task::Delay]);
        d.on_delay(&mut sched, Task::Attempt);
        assert_eq!(d.attempts(), 1);

        assert!(sched.frame(t0 + ms(76)).is_empty());
        assert_eq!(sched.frame(t0 + ms(92)), vec![Task::Attempt]);

        let outcome = d.on_attempt(true, &mut sched, t0 + ms(92), Task::Delay);
        assert_eq!(
            outcome,
            Some(AttemptOutcome::Scrolled {
                id: "features".into()
            })
        );
        assert!(!d.is_active());
        assert!(sched.is_empty());
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let mut sched = Scheduler::new();
        let mut d = NavigationDeferrer::default();
        let mut now = Instant::now();
        d.begin("contact".into(), &mut sched, now, Task::Delay);

        let mut last = None;
        for _ in 0..200 {
            now += ms(16);
            for task in sched.frame(now) {
                match task {
                    Task::Delay => d.on_delay(&mut sched, Task::Attempt),
                    Task::Attempt => last = d.on_attempt(false, &mut sched, now, Task::Delay),
                }
            }
            if !d.is_active() {
                break;
            }
        }

        assert_eq!(
            last,
            Some(AttemptOutcome::Abandoned {
                id: "contact".into()
            })
        );
        assert!(sched.is_empty());
    }

    #[test]
    fn test_begin_replaces_running_loop() {
        let mut sched = Scheduler::new();
        let mut d = NavigationDeferrer::default();
        let now = Instant::now();
        d.begin("features".into(), &mut sched, now, Task::Delay);
        d.begin("discover".into(), &mut sched, now, Task::Delay);
        assert_eq!(sched.len(), 1);
        assert_eq!(d.target(), Some("discover"));

        d.cancel(&mut sched);
        assert!(sched.is_empty());
        assert_eq!(d.target(), None);
    }
}
