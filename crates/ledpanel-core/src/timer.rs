use embassy_time::{Duration, Instant};

/// One-shot auto-shutoff deadline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShutoffTimer {
    deadline: Option<Instant>,
}

impl ShutoffTimer {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `delay` after `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Disarm and return `true` if the deadline has been reached at `now`.
    ///
    /// Returns `true` at most once per [`arm`](Self::arm).
    pub fn take_expired(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
