//! Fixed-period tick source

use std::time::{Duration, Instant};

/// Nominal tick period (~60 ticks per second)
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(16);

/// Fires at most once per poll when its deadline has passed.
///
/// Missed periods are dropped rather than replayed, so a stalled event loop
/// produces one tick on wake-up instead of a burst.
pub struct TickTimer {
    period: Duration,
    deadline: Instant,
    /// Total ticks fired since creation
    ticks: u64,
}

impl TickTimer {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            deadline: now + period,
            ticks: 0,
        }
    }

    pub fn with_default_period(now: Instant) -> Self {
        Self::new(DEFAULT_TICK_PERIOD, now)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Next instant at which `poll` will fire
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns true if a tick is due, and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }
        self.deadline = now + self.period;
        self.ticks += 1;
        true
    }

    /// Restart the schedule from `now`
    pub fn reset(&mut self, now: Instant) {
        self.deadline = now + self.period;
    }
}
