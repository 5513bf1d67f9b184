#![forbid(unsafe_code)]

//! Trigger scheduling: when a floating panel opens and closes.
//!
//! # State machine
//!
//! ```text
//!            engage (show delay)           fire(show)
//!   Closed ─────────────────────▶ PendingOpen ─────────▶ Open
//!     ▲  ◀───────────────────────────┘ disengage           │ ▲
//!     │                                         disengage  │ │ engage
//!     │            fire(hide)                (hide delay)  ▼ │
//!     └────────────────────────────────────────────── PendingClose
//! ```
//!
//! `hover` engages on pointer-enter and disengages on pointer-leave; `focus`
//! does the same with focus/blur. `click` toggles between `Closed` and `Open`
//! with no timers. `manual` mirrors the flag supplied through
//! [`TriggerScheduler::set_controlled_open`].
//!
//! # Invariants
//!
//! 1. At most one timer is pending, and its kind matches the state:
//!    `PendingOpen` ⇔ show timer, `PendingClose` ⇔ hide timer.
//! 2. Re-engaging while `PendingOpen` (or disengaging while `PendingClose`)
//!    keeps the existing timer rather than stacking a second one.
//! 3. Disabled forces `Closed` and cancels timers; events are then ignored.
//! 4. After [`unmount`](TriggerScheduler::unmount) nothing ever transitions.

use std::fmt;
use std::time::{Duration, Instant};

use ftip_core::event::TriggerEvent;

use crate::timer::{TimerKind, TimerSlot, TimerToken};

/// How the panel is triggered. Fixed for the lifetime of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TriggerMode {
    /// Pointer enter/leave with show/hide delays.
    #[default]
    Hover,
    /// Click toggles immediately.
    Click,
    /// Focus/blur with show/hide delays.
    Focus,
    /// The caller owns the open flag.
    Manual,
}

impl TriggerMode {
    /// Whether this mode reacts to `event`. `Dismiss` is handled by every mode.
    #[must_use]
    pub const fn listens_to(self, event: TriggerEvent) -> bool {
        match self {
            Self::Hover => matches!(event, TriggerEvent::PointerEnter | TriggerEvent::PointerLeave),
            Self::Focus => matches!(event, TriggerEvent::Focus | TriggerEvent::Blur),
            Self::Click => matches!(event, TriggerEvent::Click),
            Self::Manual => false,
        }
    }
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hover => "hover",
            Self::Click => "click",
            Self::Focus => "focus",
            Self::Manual => "manual",
        })
    }
}

/// Scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchedulerState {
    /// Hidden, nothing pending.
    #[default]
    Closed,
    /// Hidden, show timer armed.
    PendingOpen,
    /// Visible, nothing pending.
    Open,
    /// Visible, hide timer armed.
    PendingClose,
}

impl SchedulerState {
    /// Whether the panel is visible in this state.
    #[inline]
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open | Self::PendingClose)
    }
}

/// Observable outcome of feeding the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The panel became visible.
    Opened,
    /// The panel became hidden.
    Closed,
    /// Manual mode only: the user asked to close; the caller decides.
    CloseRequested,
}

/// Per-instance trigger state machine.
#[derive(Debug)]
pub struct TriggerScheduler {
    mode: TriggerMode,
    show_delay: Duration,
    hide_delay: Duration,
    state: SchedulerState,
    timers: TimerSlot,
    disabled: bool,
    /// The caller-supplied flag in manual mode.
    controlled_open: bool,
    mounted: bool,
    /// Diagnostic: Opened/Closed transitions reported.
    transitions: u64,
}

impl TriggerScheduler {
    /// Create a mounted, closed, enabled scheduler.
    #[must_use]
    pub fn new(mode: TriggerMode, show_delay: Duration, hide_delay: Duration) -> Self {
        Self {
            mode,
            show_delay,
            hide_delay,
            state: SchedulerState::Closed,
            timers: TimerSlot::new(),
            disabled: false,
            controlled_open: false,
            mounted: true,
            transitions: 0,
        }
    }

    /// Feed a trigger event.
    ///
    /// Events that do not belong to this instance's mode are ignored.
    pub fn handle(&mut self, event: TriggerEvent, now: Instant) -> Option<Transition> {
        if !self.mounted {
            tracing::trace!(?event, "event after unmount ignored");
            return None;
        }
        if self.disabled {
            return None;
        }
        match event {
            TriggerEvent::Dismiss => self.dismiss(),
            ev if !self.mode.listens_to(ev) => None,
            TriggerEvent::Click => self.toggle(),
            ev if ev.is_engage() => self.engage(now),
            ev if ev.is_disengage() => self.disengage(now),
            _ => None,
        }
    }

    /// Fire the pending timer if it is due at `now`.
    pub fn tick(&mut self, now: Instant) -> Option<Transition> {
        if !self.mounted || self.disabled {
            return None;
        }
        let kind = self.timers.poll(now)?;
        self.timer_fired(kind)
    }

    /// Fire the pending timer by token, for hosts that schedule real timers.
    ///
    /// Superseded, cancelled, or post-unmount tokens do nothing.
    pub fn fire(&mut self, token: TimerToken) -> Option<Transition> {
        if !self.mounted || self.disabled {
            return None;
        }
        let kind = self.timers.fire(token)?;
        self.timer_fired(kind)
    }

    /// Supply the open flag (manual mode only; ignored otherwise).
    pub fn set_controlled_open(&mut self, open: bool) -> Option<Transition> {
        if !self.mounted || self.mode != TriggerMode::Manual {
            return None;
        }
        let changed = open != self.controlled_open;
        self.controlled_open = open;
        if !changed || self.disabled {
            return None;
        }
        if open {
            self.open()
        } else {
            self.close()
        }
    }

    /// Enable or disable the instance.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<Transition> {
        if !self.mounted || disabled == self.disabled {
            return None;
        }
        self.disabled = disabled;
        if disabled {
            self.timers.cancel_all();
            if self.state.is_open() {
                return self.close();
            }
            self.state = SchedulerState::Closed;
            None
        } else if self.mode == TriggerMode::Manual && self.controlled_open {
            self.open()
        } else {
            None
        }
    }

    /// Change delays. Only timers armed afterwards use the new values.
    pub fn set_delays(&mut self, show_delay: Duration, hide_delay: Duration) {
        self.show_delay = show_delay;
        self.hide_delay = hide_delay;
    }

    /// Tear down: cancel timers and ignore everything from now on.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        let cancelled = self.timers.cancel_all();
        tracing::debug!(mode = %self.mode, ?cancelled, "scheduler unmounted");
        self.state = SchedulerState::Closed;
        self.mounted = false;
    }

    /// Whether the panel is visible.
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Current state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Trigger mode.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Kind of the pending timer, if any.
    #[inline]
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerKind> {
        self.timers.pending()
    }

    /// Token of the pending timer, for hosts that schedule real timers.
    #[inline]
    #[must_use]
    pub fn timer_token(&self) -> Option<TimerToken> {
        self.timers.token()
    }

    /// When [`tick`](Self::tick) next needs to be called, if at all.
    #[inline]
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.deadline()
    }

    /// Whether the instance is disabled.
    #[inline]
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether [`unmount`](Self::unmount) has not been called yet.
    #[inline]
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Number of Opened/Closed transitions reported (diagnostic).
    #[inline]
    #[must_use]
    pub fn transition_count(&self) -> u64 {
        self.transitions
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn engage(&mut self, now: Instant) -> Option<Transition> {
        match self.state {
            SchedulerState::Closed if self.show_delay.is_zero() => self.open(),
            SchedulerState::Closed => {
                self.timers.arm(TimerKind::Show, now + self.show_delay);
                self.state = SchedulerState::PendingOpen;
                None
            }
            SchedulerState::PendingClose => {
                self.timers.cancel(TimerKind::Hide);
                self.state = SchedulerState::Open;
                None
            }
            SchedulerState::PendingOpen | SchedulerState::Open => None,
        }
    }

    fn disengage(&mut self, now: Instant) -> Option<Transition> {
        match self.state {
            SchedulerState::PendingOpen => {
                self.timers.cancel(TimerKind::Show);
                self.state = SchedulerState::Closed;
                None
            }
            SchedulerState::Open if self.hide_delay.is_zero() => self.close(),
            SchedulerState::Open => {
                self.timers.arm(TimerKind::Hide, now + self.hide_delay);
                self.state = SchedulerState::PendingClose;
                None
            }
            SchedulerState::Closed | SchedulerState::PendingClose => None,
        }
    }

    fn toggle(&mut self) -> Option<Transition> {
        if self.state.is_open() {
            self.close()
        } else {
            self.open()
        }
    }

    fn dismiss(&mut self) -> Option<Transition> {
        if self.mode == TriggerMode::Manual {
            return self.controlled_open.then_some(Transition::CloseRequested);
        }
        if self.state.is_open() {
            self.close()
        } else {
            self.timers.cancel_all();
            self.state = SchedulerState::Closed;
            None
        }
    }

    fn timer_fired(&mut self, kind: TimerKind) -> Option<Transition> {
        match (kind, self.state) {
            (TimerKind::Show, SchedulerState::PendingOpen) => self.open(),
            (TimerKind::Hide, SchedulerState::PendingClose) => self.close(),
            (kind, state) => {
                // Unreachable while the slot/state invariant holds.
                tracing::warn!(?kind, ?state, "timer fired in unexpected state");
                None
            }
        }
    }

    fn open(&mut self) -> Option<Transition> {
        self.timers.cancel_all();
        let from = self.state;
        self.state = SchedulerState::Open;
        if from.is_open() {
            return None;
        }
        self.transitions += 1;
        tracing::debug!(mode = %self.mode, ?from, "tooltip opened");
        Some(Transition::Opened)
    }

    fn close(&mut self) -> Option<Transition> {
        self.timers.cancel_all();
        let from = self.state;
        self.state = SchedulerState::Closed;
        if !from.is_open() {
            return None;
        }
        self.transitions += 1;
        tracing::debug!(mode = %self.mode, ?from, "tooltip closed");
        Some(Transition::Closed)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
