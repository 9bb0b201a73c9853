//! Fixed-step tick clock.
//!
//! Callers feed wall-clock deltas in; the clock reports how many whole
//! intervals became due and carries the remainder to the next call.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    interval: Duration,
    accumulated: Duration,
}

impl TickClock {
    /// A clock firing every `interval`. A zero interval is clamped to 1ms.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add `elapsed` and return the number of ticks now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let interval = self.interval.as_nanos();
        let due = self.accumulated.as_nanos() / interval;
        if due == 0 {
            return 0;
        }
        let rest = self.accumulated.as_nanos() % interval;
        self.accumulated = Duration::from_nanos(rest as u64);
        u32::try_from(due).unwrap_or(u32::MAX)
    }

    /// Drop any partial interval.
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }

    /// Time left until the next tick is due (a poll timeout for callers).
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }
}
