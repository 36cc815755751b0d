//! Cooperative frame/timer scheduling
//!
//! Engines never sleep or spawn. They enqueue a task with a wake condition and
//! the host advances the scheduler once per display frame. Every entry gets a
//! [`TaskHandle`]; cancelling a handle guarantees the task never fires.

use std::time::{Duration, Instant};

/// Cancellation token for a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug, Clone, Copy)]
enum Wake {
    /// Fires after this many more frame boundaries
    Frames(u32),
    /// Fires on the first frame boundary at or after this instant
    At(Instant),
}

#[derive(Debug)]
struct Entry<T> {
    handle: TaskHandle,
    wake: Wake,
    task: T,
}

/// Queue of tasks waiting on frame boundaries or deadlines
#[derive(Debug)]
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, wake: Wake, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { handle, wake, task });
        handle
    }

    /// Run `task` on the next frame boundary
    pub fn next_frame(&mut self, task: T) -> TaskHandle {
        self.after_frames(1, task)
    }

    /// Run `task` after `frames` frame boundaries (at least one)
    pub fn after_frames(&mut self, frames: u32, task: T) -> TaskHandle {
        self.push(Wake::Frames(frames.max(1)), task)
    }

    /// Run `task` on the first frame boundary at or after `when`
    pub fn at(&mut self, when: Instant, task: T) -> TaskHandle {
        self.push(Wake::At(when), task)
    }

    /// Run `task` once `delay` has elapsed since `now`
    pub fn after(&mut self, now: Instant, delay: Duration, task: T) -> TaskHandle {
        self.at(now + delay, task)
    }

    /// Cancel a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        self.entries.len() != before
    }

    /// Drop every pending task
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.entries.iter().any(|e| e.handle == handle)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether a frame-bound task is waiting (the host should render at full rate)
    pub fn wants_frames(&self) -> bool {
        self.entries.iter().any(|e| matches!(e.wake, Wake::Frames(_)))
    }

    /// Earliest timer deadline, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries
            .iter()
            .filter_map(|e| match e.wake {
                Wake::At(when) => Some(when),
                Wake::Frames(_) => None,
            })
            .min()
    }

    /// Advance one frame boundary at `now` and return the tasks that became due,
    /// in the order they were scheduled.
    ///
    /// Tasks scheduled while handling the returned ones wait for a later frame.
    pub fn frame(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        let mut pending = Vec::with_capacity(self.entries.len());

        for mut entry in self.entries.drain(..) {
            let fire = match &mut entry.wake {
                Wake::Frames(remaining) => {
                    *remaining -= 1;
                    *remaining == 0
                }
                Wake::At(when) => now >= *when,
            };
            if fire {
                due.push(entry.task);
            } else {
                pending.push(entry);
            }
        }

        self.entries = pending;
        due
    }
}
