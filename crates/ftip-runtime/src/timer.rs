#![forbid(unsafe_code)]

//! The single pending-timer slot owned by each scheduler.
//!
//! A show timer and a hide timer are never pending together: both live in
//! one slot, so arming either replaces whatever was pending. Each arm bumps
//! a generation counter; the returned [`TimerToken`] lets a host that maps
//! deadlines onto real timers prove its callback is still current.

use std::time::Instant;

/// Which transition a timer leads to when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Fires into `Open`.
    Show,
    /// Fires into `Closed`.
    Hide,
}

/// Handle for one armed timer.
///
/// Stale once the slot is re-armed, cancelled, or fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    kind: TimerKind,
    generation: u64,
    deadline: Instant,
}

impl TimerToken {
    /// Kind of the armed timer.
    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    /// When the timer is due.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Monotonic arm counter for the owning slot.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// At most one pending timer.
#[derive(Debug, Default)]
pub struct TimerSlot {
    pending: Option<TimerToken>,
    /// Incremented on every arm; never reset.
    generation: u64,
}

impl TimerSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a timer, cancelling any pending one (of either kind).
    pub fn arm(&mut self, kind: TimerKind, deadline: Instant) -> TimerToken {
        if let Some(prev) = self.pending.take() {
            tracing::trace!(kind = ?prev.kind, generation = prev.generation, "timer superseded");
        }
        self.generation += 1;
        let token = TimerToken {
            kind,
            generation: self.generation,
            deadline,
        };
        tracing::trace!(?kind, generation = self.generation, "timer armed");
        self.pending = Some(token);
        token
    }

    /// Cancel the pending timer if it is of `kind`. Returns whether one was cancelled.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        match self.pending {
            Some(token) if token.kind == kind => {
                self.pending = None;
                tracing::trace!(?kind, generation = token.generation, "timer cancelled");
                true
            }
            _ => false,
        }
    }

    /// Cancel whatever is pending, returning its kind.
    pub fn cancel_all(&mut self) -> Option<TimerKind> {
        let token = self.pending.take()?;
        tracing::trace!(kind = ?token.kind, generation = token.generation, "timer cancelled");
        Some(token.kind)
    }

    /// Kind of the pending timer, if any.
    #[inline]
    #[must_use]
    pub fn pending(&self) -> Option<TimerKind> {
        self.pending.map(|t| t.kind)
    }

    /// Token of the pending timer, if any.
    #[inline]
    #[must_use]
    pub fn token(&self) -> Option<TimerToken> {
        self.pending
    }

    /// Deadline of the pending timer, if any.
    #[inline]
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|t| t.deadline)
    }

    /// Fire the pending timer if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<TimerKind> {
        let token = self.pending?;
        if now < token.deadline {
            return None;
        }
        self.pending = None;
        Some(token.kind)
    }

    /// Fire the pending timer if `token` is the one currently armed,
    /// regardless of the clock. Stale tokens are rejected.
    pub fn fire(&mut self, token: TimerToken) -> Option<TimerKind> {
        if self.pending != Some(token) {
            tracing::trace!(
                kind = ?token.kind,
                generation = token.generation,
                "stale timer token rejected"
            );
            return None;
        }
        self.pending = None;
        Some(token.kind)
    }
}
