use std::time::{Duration, Instant};

/// Decides when the next simulation tick is due.
///
/// The interval is passed in on every query. It only changes during a tick,
/// and every tick is followed by [`TickScheduler::mark`], so a new interval
/// applies from the next wait.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    last_tick: Instant,
}

impl TickScheduler {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { last_tick: now }
    }

    /// Returns true once `interval` has elapsed since the last tick.
    #[must_use]
    pub fn is_due(&self, now: Instant, interval: Duration) -> bool {
        now.saturating_duration_since(self.last_tick) >= interval
    }

    /// Time left before the next tick, zero when already due.
    #[must_use]
    pub fn time_until_due(&self, now: Instant, interval: Duration) -> Duration {
        interval.saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Records a tick (or a resume point) at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last_tick = now;
    }
}
