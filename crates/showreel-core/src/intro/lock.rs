//! Lock state, gesture flags and scroll suppression

use super::viewport::{ScrollRoot, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    /// Native scrolling suppressed, input drives the intro
    Locked,
    /// Intro finished, native scrolling restored
    Unlocked,
}

/// Whether the host should cancel the event's default action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDisposition {
    /// Consumed by the controller; suppress native scrolling for this event
    Intercepted,
    /// Leave the event to the page
    PassThrough,
}

impl InputDisposition {
    #[inline]
    pub fn is_intercepted(self) -> bool {
        self == InputDisposition::Intercepted
    }
}

/// Where an input delta should go given the current flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// A controller scroll is in flight; ignore the input entirely
    Ignore,
    /// Locked: feed the delta to the animator
    Drive,
    /// Unlocked, at the top and scrolling up: re-lock and run backwards
    Reverse,
    /// Unlocked: native scrolling handles it
    PassThrough,
}

/// The three flags that decide every lock boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureState {
    locked: bool,
    programmatic_scroll: bool,
    pending_navigation: Option<String>,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            locked: true,
            programmatic_scroll: false,
            pending_navigation: None,
        }
    }
}

impl GestureState {
    #[inline]
    pub fn locked(&self) -> bool {
        self.locked
    }

    #[inline]
    pub fn lock_state(&self) -> LockState {
        if self.locked {
            LockState::Locked
        } else {
            LockState::Unlocked
        }
    }

    #[inline]
    pub fn programmatic_scroll(&self) -> bool {
        self.programmatic_scroll
    }

    #[inline]
    pub fn pending_navigation(&self) -> Option<&str> {
        self.pending_navigation.as_deref()
    }

    pub fn route(&self, delta: f64, scroll_offset: f64) -> Route {
        if self.programmatic_scroll {
            Route::Ignore
        } else if self.locked {
            Route::Drive
        } else if delta < 0.0 && scroll_offset <= 0.0 {
            Route::Reverse
        } else {
            Route::PassThrough
        }
    }

    /// Remember a navigation target. Only accepted while locked.
    pub fn defer(&mut self, id: impl Into<String>) -> bool {
        if !self.locked {
            return false;
        }
        self.pending_navigation = Some(id.into());
        true
    }

    /// Unlock and hand back the pending target (consumed exactly once).
    /// Returns `None` without side effects if already unlocked.
    pub fn unlock(&mut self) -> Option<Option<String>> {
        if !self.locked {
            return None;
        }
        self.locked = false;
        Some(self.pending_navigation.take())
    }

    /// Re-lock. Returns false if already locked.
    pub fn lock(&mut self) -> bool {
        if self.locked {
            return false;
        }
        self.locked = true;
        true
    }

    pub fn set_programmatic_scroll(&mut self, active: bool) {
        self.programmatic_scroll = active;
    }
}

/// Applies overflow suppression to the page for the current lock state
#[derive(Debug, Default)]
pub struct ScrollSuppression {
    active: bool,
}

impl ScrollSuppression {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Make the page styling match `state`
    pub fn sync<V: Viewport>(&mut self, viewport: &mut V, state: LockState) {
        let suppress = state == LockState::Locked;
        if suppress == self.active {
            return;
        }
        for root in ScrollRoot::ALL {
            viewport.set_scroll_suppressed(root, suppress);
        }
        self.active = suppress;
        tracing::debug!(suppressed = suppress, "Page scroll suppression updated");
    }

    /// Remove suppression regardless of what we think is applied
    pub fn release<V: Viewport>(&mut self, viewport: &mut V) {
        for root in ScrollRoot::ALL {
            viewport.set_scroll_suppressed(root, false);
        }
        self.active = false;
    }
}
