//! Molecules: scroll animation controller
//!
//! Combines easing functions and timing utilities to tween a single position.
//! The page viewport uses one for smooth section scrolls and every carousel
//! track uses one for its slide transition.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Scroll animation controller
///
/// Call `scroll_to()` to begin an animation, then `update()` each frame
/// to get the current interpolated position.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    /// Current active animation (if any)
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    /// Current position (always up-to-date)
    current: f64,
    /// Pending delta for batching multiple scroll events
    pending_delta: f64,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
            pending_delta: 0.0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    /// Check if an animation is currently active
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Check if there's pending work (animation or pending delta).
    /// Use this to determine if we need high frame rate.
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0.0
    }

    /// Final position once the running animation completes
    pub fn target(&self) -> f64 {
        self.animation.as_ref().map(|a| a.to).unwrap_or(self.current)
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Set position immediately (no animation)
    pub fn set_position(&mut self, position: f64) {
        self.animation = None;
        self.current = position;
        self.pending_delta = 0.0;
    }

    /// Start an animation from the current visible position to `target`.
    ///
    /// If smooth scrolling is disabled, jumps immediately to target.
    pub fn scroll_to(&mut self, target: f64, max: f64, now: Instant) {
        let target = target.clamp(0.0, max.max(0.0));
        self.pending_delta = 0.0;

        if !self.config.is_smooth() {
            self.current = target;
            self.animation = None;
            return;
        }

        if (self.current - target).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Scroll by a delta (positive = down). Deltas received before the
    /// next `update()` are batched into one animation.
    pub fn scroll_by(&mut self, delta: f64, max: f64) {
        if !self.config.is_smooth() {
            self.current = (self.current + delta).clamp(0.0, max.max(0.0));
            self.animation = None;
            return;
        }
        self.pending_delta += delta;
    }

    /// Advance the animation and return the current position
    pub fn update(&mut self, max: f64, now: Instant) -> f64 {
        let max = max.max(0.0);
        if self.pending_delta != 0.0 {
            let new_target = (self.target() + self.pending_delta).clamp(0.0, max);
            self.pending_delta = 0.0;
            if (new_target - self.current).abs() >= f64::EPSILON {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current,
                    to: new_target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration, now) {
                self.current = anim.to.min(max);
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration, now);
                let eased_t = anim.easing.apply(t);
                self.current = lerp(anim.from, anim.to, eased_t).min(max);
            }
        }

        self.current
    }

    /// Stop at the current position
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0.0;
    }
}
