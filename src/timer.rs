use std::time::{Duration, Instant};

/// One-shot timer that the driver re-arms after every fire.
///
/// The timer never reads the system clock itself; callers pass `now`, which
/// lets tests advance time by adding durations to a fixed `Instant`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickTimer {
    deadline: Option<Instant>,
}

impl TickTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the next fire `interval` after `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant, interval: Duration) {
        self.deadline = Some(now + interval);
    }

    /// Cancels the pending fire.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Fires when due and re-arms relative to `now` with `next_interval`.
    ///
    /// Returns `false` without touching the schedule when not due.
    pub fn fire(&mut self, now: Instant, next_interval: Duration) -> bool {
        if !self.is_due(now) {
            return false;
        }

        self.arm(now, next_interval);
        true
    }

    /// Time left until the next fire, `None` when disarmed.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
