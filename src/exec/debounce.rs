// src/exec/debounce.rs

use std::time::{Duration, Instant};

/// Leading-edge-armed, trailing-edge-fired timer.
///
/// The first request arms a deadline `window` from now; further requests are
/// absorbed until the deadline fires. This gives "run at most once per
/// window" without ever dropping the last change.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// Ask for a run. Returns the new deadline if this request armed the
    /// timer, `None` if it was already armed.
    pub fn request(&mut self, now: Instant) -> Option<Instant> {
        if self.deadline.is_some() {
            return None;
        }
        let deadline = now + self.window;
        self.deadline = Some(deadline);
        Some(deadline)
    }

    /// Pending deadline, if armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Disarm. Returns true if the timer was armed.
    pub fn fire(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}
