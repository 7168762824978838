//! Single-slot cancelable scheduled task.
//!
//! The shell is driven by an external event loop, so nothing here spawns
//! threads or sleeps. A component that needs "run this later" owns one
//! [`ScheduledTask`]; arming it again replaces the pending payload and
//! deadline, and the event loop calls [`ScheduledTask::take_due`] with the
//! current time to collect what has fired.
//!
//! Time comes from a [`Clock`] so timer behaviour can be driven exactly in
//! tests with [`ManualClock`].

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to; clones share the same time
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}

/// At most one pending payload with a deadline
#[derive(Debug)]
pub struct ScheduledTask<T> {
    pending: Option<(Instant, T)>,
}

impl<T> ScheduledTask<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `payload` for `deadline`, dropping anything already pending.
    ///
    /// Returns true if a pending task was replaced.
    pub fn arm(&mut self, deadline: Instant, payload: T) -> bool {
        self.pending.replace((deadline, payload)).is_some()
    }

    /// Drop the pending task, if any. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Remove and return the payload if its deadline has been reached
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.pending {
            Some((deadline, _)) if now >= deadline => self.pending.take().map(|(_, p)| p),
            _ => None,
        }
    }

    /// Remove and return the payload regardless of its deadline
    pub fn take_now(&mut self) -> Option<T> {
        self.pending.take().map(|(_, payload)| payload)
    }

    /// Mutable access to the pending payload without changing its deadline
    pub fn payload_mut(&mut self) -> Option<&mut T> {
        self.pending.as_mut().map(|(_, payload)| payload)
    }
}

impl<T> Default for ScheduledTask<T> {
    fn default() -> Self {
        Self::new()
    }
}
