#![forbid(unsafe_code)]

//! One tooltip/popover instance.
//!
//! [`Tooltip`] owns a [`TriggerScheduler`] and a [`RepositionDriver`] and
//! wires their outcomes to the host:
//!
//! | transition       | effect                                                    |
//! |------------------|-----------------------------------------------------------|
//! | `Opened`         | portal mount, driver start, `on_open_change(true)`        |
//! | `Closed`         | driver stop, portal unmount, `on_open_change(false)`      |
//! | `CloseRequested` | `on_open_change(false)` only (manual mode)                |
//!
//! Every resolved position is pushed to [`Portal::apply_position`].
//!
//! # Teardown
//!
//! [`Tooltip::unmount`] (also run on drop) cancels timers, releases the
//! layout subscription and unmounts the panel. No callback is invoked during
//! or after teardown, even if a show delay would have elapsed.
//!
//! # Example
//!
//! ```ignore
//! let mut tip = Tooltip::mount(TooltipConfig::default(), anchor, host)?;
//! tip.on_open_change(|open| println!("open: {open}"));
//! tip.handle_event(TriggerEvent::PointerEnter, now);
//! // ... host event loop ...
//! if let Some(deadline) = tip.next_deadline() { /* wake at deadline */ }
//! tip.tick(deadline);
//! tip.on_frame(); // after layout: first position
//! ```

use std::fmt;
use std::time::Instant;

use ftip_core::event::{LayoutEvent, TriggerEvent};
use ftip_place::PositionResult;

use crate::config::{ConfigError, TooltipConfig};
use crate::host::{Anchor, Host};
use crate::reposition::RepositionDriver;
use crate::scheduler::{SchedulerState, Transition, TriggerMode, TriggerScheduler};
use crate::timer::{TimerKind, TimerToken};

type OpenChangeFn = Box<dyn FnMut(bool)>;

/// A mounted tooltip.
pub struct Tooltip {
    config: TooltipConfig,
    anchor: Anchor,
    scheduler: TriggerScheduler,
    driver: RepositionDriver,
    host: Host,
    panel_mounted: bool,
    on_open_change: Option<OpenChangeFn>,
}

impl Tooltip {
    /// Validate `config` and mount an instance.
    ///
    /// A `manual` instance whose `open` flag is set opens immediately, before
    /// any callback can be registered.
    pub fn mount(config: TooltipConfig, anchor: Anchor, host: Host) -> Result<Self, ConfigError> {
        config.validate()?;
        let scheduler =
            TriggerScheduler::new(config.trigger, config.show_delay(), config.hide_delay());
        let mut tip = Self {
            config,
            anchor,
            scheduler,
            driver: RepositionDriver::new(),
            host,
            panel_mounted: false,
            on_open_change: None,
        };
        tip.scheduler.set_disabled(tip.config.disabled);
        if tip.config.open {
            let t = tip.scheduler.set_controlled_open(true);
            tip.apply(t);
        }
        tracing::debug!(
            trigger = %tip.anchor.trigger,
            panel = %tip.anchor.panel,
            mode = %tip.config.trigger,
            "tooltip mounted"
        );
        Ok(tip)
    }

    /// Register the open-change callback, replacing any previous one.
    pub fn on_open_change(&mut self, f: impl FnMut(bool) + 'static) {
        self.on_open_change = Some(Box::new(f));
    }

    /// Feed a trigger event from the trigger element.
    pub fn handle_event(&mut self, event: TriggerEvent, now: Instant) -> Option<Transition> {
        let t = self.scheduler.handle(event, now);
        self.apply(t)
    }

    /// Advance virtual time, firing the pending timer if due.
    pub fn tick(&mut self, now: Instant) -> Option<Transition> {
        let t = self.scheduler.tick(now);
        self.apply(t)
    }

    /// Fire a timer scheduled by the host. Stale tokens are ignored.
    pub fn fire_timer(&mut self, token: TimerToken) -> Option<Transition> {
        let t = self.scheduler.fire(token);
        self.apply(t)
    }

    /// Supply the open flag (`manual` mode). Ignored in other modes.
    pub fn set_open(&mut self, open: bool) -> Option<Transition> {
        if self.config.trigger != TriggerMode::Manual {
            return None;
        }
        self.config.open = open;
        let t = self.scheduler.set_controlled_open(open);
        self.apply(t)
    }

    /// Enable or disable the instance.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<Transition> {
        self.config.disabled = disabled;
        let t = self.scheduler.set_disabled(disabled);
        self.apply(t)
    }

    /// Replace the configuration of a mounted instance.
    ///
    /// The trigger mode is fixed at mount. New delays apply to the next
    /// timer armed; placement changes reposition an open panel at once; a
    /// container change remounts an open panel.
    pub fn update_config(&mut self, config: TooltipConfig) -> Result<(), ConfigError> {
        config.validate()?;
        if config.trigger != self.config.trigger {
            return Err(ConfigError::TriggerModeChanged {
                from: self.config.trigger,
                to: config.trigger,
            });
        }
        if !self.scheduler.is_mounted() {
            self.config = config;
            return Ok(());
        }
        self.scheduler
            .set_delays(config.show_delay(), config.hide_delay());

        let container_changed = config.container != self.config.container;
        let geometry_changed = config.placement_options() != self.config.placement_options();
        let (disabled, open) = (config.disabled, config.open);
        self.config = config;

        if container_changed && self.panel_mounted {
            self.host.portal.unmount(self.anchor.panel);
            self.host
                .portal
                .mount(self.anchor.panel, self.config.container);
            self.driver.start(&self.host.layout);
        } else if geometry_changed && self.driver.is_active() {
            self.refresh();
        }

        let t = self.scheduler.set_disabled(disabled);
        self.apply(t);
        if self.config.trigger == TriggerMode::Manual {
            let t = self.scheduler.set_controlled_open(open);
            self.apply(t);
        }
        Ok(())
    }

    /// Post-layout hook: runs the deferred measurement pass after opening.
    pub fn on_frame(&mut self) -> Option<PositionResult> {
        let pos = self.driver.on_frame(
            &*self.host.measure,
            self.anchor,
            self.config.placement_options(),
        )?;
        self.publish(&pos);
        Some(pos)
    }

    /// Scroll/resize notification from the layout source.
    pub fn on_layout_event(&mut self, event: LayoutEvent) -> Option<PositionResult> {
        let pos = self.driver.on_layout_event(
            event,
            &*self.host.measure,
            self.anchor,
            self.config.placement_options(),
        )?;
        self.publish(&pos);
        Some(pos)
    }

    /// Re-measure and re-resolve now, if open.
    pub fn refresh(&mut self) -> Option<PositionResult> {
        let pos = self.driver.reposition(
            &*self.host.measure,
            self.anchor,
            self.config.placement_options(),
        )?;
        self.publish(&pos);
        Some(pos)
    }

    /// Tear down. Idempotent; fires no callbacks.
    pub fn unmount(&mut self) {
        if !self.scheduler.is_mounted() {
            return;
        }
        self.scheduler.unmount();
        self.driver.stop();
        if self.panel_mounted {
            self.host.portal.unmount(self.anchor.panel);
            self.panel_mounted = false;
        }
        self.on_open_change = None;
        tracing::debug!(panel = %self.anchor.panel, "tooltip unmounted");
    }

    /// Whether the panel is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.scheduler.is_open()
    }

    /// Last published position; `None` while closed or before the first pass.
    #[must_use]
    pub fn position(&self) -> Option<PositionResult> {
        self.driver.position()
    }

    /// Current scheduler state.
    #[must_use]
    pub fn state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    /// When the host must next call [`tick`](Self::tick), if ever.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Kind of the pending timer, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerKind> {
        self.scheduler.pending_timer()
    }

    /// Token of the pending timer, for hosts that schedule real timers.
    #[must_use]
    pub fn timer_token(&self) -> Option<TimerToken> {
        self.scheduler.timer_token()
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Trigger and panel this tooltip binds.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Whether [`unmount`](Self::unmount) has not been called yet.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.scheduler.is_mounted()
    }

    /// Whether a layout subscription is currently held.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.driver.is_active()
    }

    fn apply(&mut self, transition: Option<Transition>) -> Option<Transition> {
        match transition? {
            Transition::Opened => {
                if !self.panel_mounted {
                    self.host
                        .portal
                        .mount(self.anchor.panel, self.config.container);
                    self.panel_mounted = true;
                }
                self.driver.start(&self.host.layout);
                self.notify(true);
            }
            Transition::Closed => {
                self.driver.stop();
                if self.panel_mounted {
                    self.host.portal.unmount(self.anchor.panel);
                    self.panel_mounted = false;
                }
                self.notify(false);
            }
            Transition::CloseRequested => self.notify(false),
        }
        transition
    }

    fn publish(&mut self, pos: &PositionResult) {
        self.host.portal.apply_position(self.anchor.panel, pos);
    }

    fn notify(&mut self, open: bool) {
        if let Some(cb) = self.on_open_change.as_mut() {
            cb(open);
        }
    }
}

impl Drop for Tooltip {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl fmt::Debug for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tooltip")
            .field("anchor", &self.anchor)
            .field("config", &self.config)
            .field("state", &self.scheduler.state())
            .field("position", &self.driver.position())
            .field("panel_mounted", &self.panel_mounted)
            .finish_non_exhaustive()
    }
}
