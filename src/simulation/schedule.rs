//! Fixed-rate scheduling of ticks against wall-clock time
//!
//! The tick function itself is plain and callable on demand; this only
//! answers "how many ticks are due" for a real-time front end.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FixedRate {
    interval: Duration,
    accumulated: Duration,
    max_per_advance: u32,
}

impl FixedRate {
    /// Schedule `hz` ticks per second, catching up at most one second at a time
    pub fn new(hz: u32) -> Self {
        let hz = hz.max(1);
        Self {
            interval: Duration::from_secs(1) / hz,
            accumulated: Duration::ZERO,
            max_per_advance: hz,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add elapsed time and return the number of ticks now due
    ///
    /// Backlog beyond the catch-up cap is dropped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.interval && due < self.max_per_advance {
            self.accumulated -= self.interval;
            due += 1;
        }
        if due == self.max_per_advance {
            self.accumulated = self.accumulated.min(self.interval);
        }
        due
    }
}
