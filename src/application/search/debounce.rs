//! Cancellable debounce timer
//!
//! The timer is a deadline, not a thread: the owning event loop feeds it
//! values with [`Debouncer::schedule`] and asks [`Debouncer::poll`] whether the
//! latest value has settled. Every `schedule` replaces the pending value and
//! restarts the delay.

use std::time::{Duration, Instant};

/// Default search debounce in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Holds at most one pending value and the instant it becomes due
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending value and restart the delay from `now`
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            due: now + self.delay,
        });
    }

    /// Drop the pending value, returning it if there was one
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending value settles
    pub fn due(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Time left until the pending value settles (zero if already due)
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due().map(|due| due.saturating_duration_since(now))
    }

    /// Take the pending value if it has settled by `now`
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.due()?;
        if now >= due {
            self.cancel()
        } else {
            None
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DEBOUNCE_MS)
    }
}
