//! Progress animator: bounded current/target pair with exponential convergence
//!
//! Each frame covers a fixed fraction of the remaining distance. Once the gap
//! drops below the epsilon the value snaps to the target and the loop ends.

use crate::config::IntroConfig;
use crate::schedule::{Scheduler, TaskHandle};

/// Result of advancing the animation by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Still approaching the target; another frame is needed
    Moving { current: f64 },
    /// Snapped onto the target; the loop has stopped
    Converged { target: f64 },
}

/// Convert an input delta into a progress step, clamped per event
#[inline]
pub fn input_step(delta: f64, divisor: f64, max_step: f64) -> f64 {
    (delta / divisor).clamp(-max_step, max_step)
}

#[derive(Debug, Clone)]
pub struct ProgressAnimator {
    current: f64,
    target: f64,
    coefficient: f64,
    epsilon: f64,
    divisor: f64,
    max_step: f64,
    /// The single in-flight frame callback, if the loop is running
    frame: Option<TaskHandle>,
}

impl Default for ProgressAnimator {
    fn default() -> Self {
        Self::new(&IntroConfig::default())
    }
}

impl ProgressAnimator {
    pub fn new(config: &IntroConfig) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            coefficient: config.easing_coefficient,
            epsilon: config.convergence_epsilon,
            divisor: config.delta_divisor,
            max_step: config.max_step,
            frame: None,
        }
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// True while a frame callback is scheduled
    #[inline]
    pub fn is_running(&self) -> bool {
        self.frame.is_some()
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target.clamp(0.0, 1.0);
    }

    /// Add the clamped step for an input delta to the target. Returns the new target.
    pub fn nudge(&mut self, delta: f64) -> f64 {
        let step = input_step(delta, self.divisor, self.max_step);
        self.set_target(self.target + step);
        self.target
    }

    /// Restart from wherever the animation currently is
    pub fn reseed_from_current(&mut self) {
        self.set_target(self.current);
    }

    /// Pure convergence math for one frame
    pub fn advance(&mut self) -> StepOutcome {
        let next = self.current + (self.target - self.current) * self.coefficient;
        self.current = next.clamp(0.0, 1.0);

        if (self.target - self.current).abs() < self.epsilon {
            self.current = self.target;
            StepOutcome::Converged {
                target: self.target,
            }
        } else {
            StepOutcome::Moving {
                current: self.current,
            }
        }
    }

    /// Schedule the frame loop unless one is already in flight.
    ///
    /// Returns false when a loop was already running; that loop picks up the
    /// current target on its next tick.
    pub fn start<T>(&mut self, scheduler: &mut Scheduler<T>, task: T) -> bool {
        if self.frame.is_some() {
            return false;
        }
        self.frame = Some(scheduler.next_frame(task));
        true
    }

    /// Handle the frame callback: advance once and reschedule if not converged
    pub fn tick<T>(&mut self, scheduler: &mut Scheduler<T>, task: T) -> StepOutcome {
        self.frame = None;
        let outcome = self.advance();
        if let StepOutcome::Moving { .. } = outcome {
            self.frame = Some(scheduler.next_frame(task));
        }
        outcome
    }

    /// Stop the loop without touching progress
    pub fn cancel<T>(&mut self, scheduler: &mut Scheduler<T>) {
        if let Some(handle) = self.frame.take() {
            scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_input_step_clamps() {
        assert!((input_step(2600.0, 2600.0, 0.04) - 0.04).abs() < 1e-12);
        assert!((input_step(100_000.0, 2600.0, 0.04) - 0.04).abs() < 1e-12);
        assert!((input_step(-100.0, 2600.0, 0.04) + 100.0 / 2600.0).abs() < 1e-12);
        assert!((input_step(-9000.0, 2600.0, 0.04) + 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_target_saturates_after_25_full_steps() {
        let mut a = ProgressAnimator::default();
        for i in 1..=24 {
            a.nudge(2600.0);
            assert!(a.target() < 1.0, "saturated early at event {}", i);
        }
        a.nudge(2600.0);
        assert!((a.target() - 1.0).abs() < 1e-9);
        a.nudge(2600.0);
        assert_eq!(a.target(), 1.0);
    }

    #[test]
    fn test_values_stay_in_unit_range() {
        let mut a = ProgressAnimator::default();
        let deltas = [5000.0, -300.0, 1e9, -1e9, 42.0, -7.5, 2600.0, -2600.0];
        for round in 0..50 {
            a.nudge(deltas[round % deltas.len()]);
            a.advance();
            assert!((0.0..=1.0).contains(&a.current()));
            assert!((0.0..=1.0).contains(&a.target()));
        }
        a.set_target(7.0);
        assert_eq!(a.target(), 1.0);
        a.set_target(-3.0);
        assert_eq!(a.target(), 0.0);
    }

    #[test]
    fn test_convergence_is_bounded_and_exact() {
        let mut a = ProgressAnimator::default();
        a.set_target(1.0);
        let mut steps = 0;
        loop {
            steps += 1;
            assert!(steps <= 20, "did not converge");
            if let StepOutcome::Converged { target } = a.advance() {
                assert_eq!(target, 1.0);
                break;
            }
        }
        assert_eq!(a.current(), 1.0);
        assert_eq!(steps, 15);
    }

    #[test]
    fn test_first_step_covers_fraction_of_gap() {
        let mut a = ProgressAnimator::default();
        a.set_target(0.5);
        assert_eq!(a.advance(), StepOutcome::Moving { current: 0.175 });
    }

    #[test]
    fn test_single_loop_in_flight() {
        let mut sched = Scheduler::new();
        let mut a = ProgressAnimator::default();
        a.set_target(0.04);

        assert!(a.start(&mut sched, ()));
        assert!(!a.start(&mut sched, ()));
        assert_eq!(sched.len(), 1);

        // Running loop picks up a retarget on its next tick
        a.set_target(0.08);
        let now = Instant::now();
        sched.frame(now);
        match a.tick(&mut sched, ()) {
            StepOutcome::Moving { current } => assert!((current - 0.028).abs() < 1e-12),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(sched.len(), 1);
        assert!(a.is_running());
    }

    #[test]
    fn test_cancel_stops_loop() {
        let mut sched = Scheduler::new();
        let mut a = ProgressAnimator::default();
        a.set_target(1.0);
        a.start(&mut sched, ());
        a.cancel(&mut sched);
        assert!(!a.is_running());
        assert!(sched.is_empty());
    }
}
