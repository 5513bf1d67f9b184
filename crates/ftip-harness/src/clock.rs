#![forbid(unsafe_code)]

//! Virtual time.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A clock anchored at a fixed `Instant` that advances only on request.
#[derive(Debug, Clone)]
pub struct VirtualClock {
    base: Instant,
    elapsed: Cell<Duration>,
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualClock {
    /// Start at the current instant, elapsed zero.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Start at `base`.
    #[must_use]
    pub fn starting_at(base: Instant) -> Self {
        Self {
            base,
            elapsed: Cell::new(Duration::ZERO),
        }
    }

    /// Current virtual instant.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.base + self.elapsed.get()
    }

    /// The instant `ms` milliseconds after the base, regardless of `now`.
    #[must_use]
    pub fn at_ms(&self, ms: u64) -> Instant {
        self.base + Duration::from_millis(ms)
    }

    /// Move forward by `by`.
    pub fn advance(&self, by: Duration) -> Instant {
        self.elapsed.set(self.elapsed.get() + by);
        self.now()
    }

    pub fn advance_ms(&self, ms: u64) -> Instant {
        self.advance(Duration::from_millis(ms))
    }

    /// Jump to `ms` after the base. Never moves backwards.
    pub fn set_ms(&self, ms: u64) -> Instant {
        let target = Duration::from_millis(ms);
        if target > self.elapsed.get() {
            self.elapsed.set(target);
        }
        self.now()
    }

    /// Time since the base.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_only_on_request() {
        let base = Instant::now();
        let clock = VirtualClock::starting_at(base);
        assert_eq!(clock.now(), base);
        clock.advance_ms(250);
        assert_eq!(clock.now(), base + Duration::from_millis(250));
        assert_eq!(clock.elapsed(), Duration::from_millis(250));
    }

    #[test]
    fn set_is_monotonic() {
        let clock = VirtualClock::new();
        clock.set_ms(500);
        clock.set_ms(100);
        assert_eq!(clock.elapsed(), Duration::from_millis(500));
        assert_eq!(clock.at_ms(100), clock.now() - Duration::from_millis(400));
    }
}
