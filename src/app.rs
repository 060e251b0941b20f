use std::time::{Duration, Instant};

use log::info;

use crate::game::{GamePhase, Session, Snapshot};
use crate::input::GameInput;
use crate::timer::TickTimer;

/// Couples a [`Session`] with the timer that drives its ticks.
///
/// The timer is armed whenever a round is in progress and re-armed after each
/// tick with the session's current interval, so speed-ups apply to the very
/// next tick.
#[derive(Debug, Clone)]
pub struct App {
    session: Session,
    timer: TickTimer,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            timer: TickTimer::new(),
        }
    }

    /// Applies input and keeps the timer in step with phase changes.
    pub fn handle_input(&mut self, input: GameInput, now: Instant) {
        let before = self.session.phase;
        let was_paused = self.session.paused;
        self.session.apply_input(input);

        let started = before != GamePhase::Playing && self.session.phase == GamePhase::Playing;
        let resumed = was_paused && !self.session.paused;
        if started || resumed {
            self.timer.arm(now, self.session.tick_interval());
        }

        self.sync_timer(before);
    }

    /// Runs at most one due tick. Returns true when a tick ran.
    pub fn update(&mut self, now: Instant) -> bool {
        if !self.timer.fire(now, self.session.tick_interval()) {
            return false;
        }

        let before = self.session.phase;
        self.session.tick();
        // Re-arm with the interval the tick may just have shortened.
        self.timer.arm(now, self.session.tick_interval());
        self.sync_timer(before);
        true
    }

    fn sync_timer(&mut self, before: GamePhase) {
        if self.session.phase == before {
            return;
        }

        info!("phase {before:?} -> {:?}", self.session.phase);
        if self.session.phase != GamePhase::Playing {
            self.timer.disarm();
        }
    }

    /// How long the frame loop may wait for input before the next tick.
    #[must_use]
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.time_until_due(now)
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    #[must_use]
    pub fn timer_armed(&self) -> bool {
        self.timer.is_armed()
    }
}
