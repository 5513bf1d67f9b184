#![forbid(unsafe_code)]

//! Keeps an open panel's position fresh.
//!
//! The driver is idle while the panel is closed. [`start`](RepositionDriver::start)
//! acquires a layout subscription and schedules one deferred measurement pass;
//! the host runs it from its post-layout hook via
//! [`on_frame`](RepositionDriver::on_frame), after the panel has been laid out.
//! From then on every wanted scroll/resize event re-measures and re-resolves.
//! [`stop`](RepositionDriver::stop) releases the subscription and forgets the
//! position.
//!
//! A pass whose inputs are not measurable (panel missing or zero-size) is
//! skipped. On the deferred pass the driver stays pending and retries on the
//! next frame.

use std::rc::Rc;

use ftip_core::event::{LayoutEvent, LayoutInterest};
use ftip_place::{PlacementOptions, PlacementRequest, PositionResult, resolve};

use crate::host::{Anchor, Measure};
use crate::subscription::{LayoutEventSource, LayoutSubscription};

/// Position maintenance for one panel.
#[derive(Debug)]
pub struct RepositionDriver {
    interest: LayoutInterest,
    subscription: Option<LayoutSubscription>,
    measure_pending: bool,
    position: Option<PositionResult>,
    /// Diagnostic: successful resolves.
    passes: u64,
}

impl Default for RepositionDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositionDriver {
    /// Idle driver listening for scroll and resize once started.
    #[must_use]
    pub fn new() -> Self {
        Self::with_interest(LayoutInterest::REPOSITION)
    }

    /// Idle driver listening for `interest` once started.
    #[must_use]
    pub fn with_interest(interest: LayoutInterest) -> Self {
        Self {
            interest,
            subscription: None,
            measure_pending: false,
            position: None,
            passes: 0,
        }
    }

    /// Begin tracking: subscribe (once) and schedule the deferred pass.
    pub fn start(&mut self, source: &Rc<dyn LayoutEventSource>) {
        if self.subscription.is_none() {
            self.subscription = Some(LayoutSubscription::acquire(source, self.interest));
        }
        self.measure_pending = true;
    }

    /// Stop tracking: release the subscription and drop the position.
    pub fn stop(&mut self) {
        self.subscription = None;
        self.measure_pending = false;
        self.position = None;
    }

    /// Post-layout hook. Runs the deferred pass if one is pending.
    ///
    /// Returns the new position when a resolve happened.
    pub fn on_frame(
        &mut self,
        measure: &dyn Measure,
        anchor: Anchor,
        options: PlacementOptions,
    ) -> Option<PositionResult> {
        if !self.measure_pending {
            return None;
        }
        let pos = self.reposition(measure, anchor, options)?;
        self.measure_pending = false;
        Some(pos)
    }

    /// Scroll/resize notification. Ignored unless subscribed to `event`.
    pub fn on_layout_event(
        &mut self,
        event: LayoutEvent,
        measure: &dyn Measure,
        anchor: Anchor,
        options: PlacementOptions,
    ) -> Option<PositionResult> {
        let wanted = self.subscription.as_ref().is_some_and(|s| s.wants(event));
        if !wanted {
            return None;
        }
        let pos = self.reposition(measure, anchor, options)?;
        self.measure_pending = false;
        Some(pos)
    }

    /// Measure and resolve now, if active and measurable.
    pub fn reposition(
        &mut self,
        measure: &dyn Measure,
        anchor: Anchor,
        options: PlacementOptions,
    ) -> Option<PositionResult> {
        if self.subscription.is_none() {
            return None;
        }
        let (Some(trigger), Some(panel)) = (measure.rect(anchor.trigger), measure.rect(anchor.panel))
        else {
            tracing::trace!(?anchor, "reposition skipped: node not in layout");
            return None;
        };
        let req = PlacementRequest::new(trigger, panel.size(), measure.viewport(), options);
        if !req.is_measurable() {
            tracing::trace!(panel = ?req.panel, "reposition skipped: panel unmeasured");
            return None;
        }
        let pos = resolve(&req);
        self.passes += 1;
        tracing::trace!(
            top = pos.top,
            left = pos.left,
            placement = %pos.placement,
            "panel repositioned"
        );
        self.position = Some(pos);
        Some(pos)
    }

    /// Last resolved position; `None` while closed or not yet measured.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Option<PositionResult> {
        self.position
    }

    /// Whether a layout subscription is held.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Whether the deferred measurement pass is still outstanding.
    #[inline]
    #[must_use]
    pub fn is_measure_pending(&self) -> bool {
        self.measure_pending
    }

    /// Number of successful resolves (diagnostic).
    #[inline]
    #[must_use]
    pub fn pass_count(&self) -> u64 {
        self.passes
    }
}
