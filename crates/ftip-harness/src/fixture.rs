#![forbid(unsafe_code)]

//! A ready-wired host for one tooltip.

use std::rc::Rc;

use ftip_core::geometry::{Rect, Size};
use ftip_core::node::NodeId;
use ftip_runtime::{Anchor, ConfigError, Host, Tooltip, TooltipConfig};

use crate::clock::VirtualClock;
use crate::fakes::{FakeLayoutSource, FakeMeasure, OpenLog, RecordingPortal};

/// Trigger node used by [`Fixture::standard`].
pub const TRIGGER: NodeId = NodeId(1);
/// Panel node used by [`Fixture::standard`].
pub const PANEL: NodeId = NodeId(2);

/// Fakes for one tooltip plus handles to inspect them.
#[derive(Debug)]
pub struct Fixture {
    pub measure: Rc<FakeMeasure>,
    pub layout: Rc<FakeLayoutSource>,
    pub portal: RecordingPortal,
    pub clock: VirtualClock,
    pub opens: OpenLog,
    pub anchor: Anchor,
}

impl Fixture {
    /// Trigger at `(100, 100)` sized `40x20`, panel `80x30`, viewport `800x600`.
    ///
    /// The panel is already laid out, so the first post-layout pass resolves.
    #[must_use]
    pub fn standard() -> Self {
        let fx = Self::empty(Size::new(800.0, 600.0));
        fx.measure
            .set_rect(TRIGGER, Rect::new(100.0, 100.0, 40.0, 20.0));
        fx.measure.set_rect(PANEL, Rect::new(0.0, 0.0, 80.0, 30.0));
        fx
    }

    /// Nothing laid out yet.
    #[must_use]
    pub fn empty(viewport: Size) -> Self {
        Self {
            measure: Rc::new(FakeMeasure::new(viewport)),
            layout: Rc::new(FakeLayoutSource::new()),
            portal: RecordingPortal::new(),
            clock: VirtualClock::new(),
            opens: OpenLog::new(),
            anchor: Anchor::new(TRIGGER, PANEL),
        }
    }

    /// A [`Host`] backed by this fixture's fakes.
    #[must_use]
    pub fn host(&self) -> Host {
        Host::new(
            self.measure.clone(),
            self.layout.clone(),
            Box::new(self.portal.clone()),
        )
    }

    /// Mount a tooltip with `config` and hook its callback to [`Self::opens`].
    pub fn mount(&self, config: TooltipConfig) -> Result<Tooltip, ConfigError> {
        let mut tip = Tooltip::mount(config, self.anchor, self.host())?;
        tip.on_open_change(self.opens.callback());
        Ok(tip)
    }

    /// Set the panel's laid-out size (its position is irrelevant).
    pub fn set_panel_size(&self, width: f64, height: f64) {
        self.measure
            .set_rect(PANEL, Rect::new(0.0, 0.0, width, height));
    }

    /// Move the trigger.
    pub fn set_trigger(&self, rect: Rect) {
        self.measure.set_rect(TRIGGER, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ftip_runtime::Measure;

    #[test]
    fn standard_layout() {
        let fx = Fixture::standard();
        assert_eq!(fx.measure.viewport(), Size::new(800.0, 600.0));
        assert_eq!(
            fx.measure.rect(TRIGGER),
            Some(Rect::new(100.0, 100.0, 40.0, 20.0))
        );
        assert_eq!(fx.measure.rect(PANEL).map(|r| r.size()), Some(Size::new(80.0, 30.0)));
    }

    #[test]
    fn mount_wires_callback() {
        let fx = Fixture::standard();
        let tip = fx.mount(TooltipConfig::default()).unwrap();
        assert!(tip.is_mounted());
        assert!(fx.opens.is_empty());
        assert_eq!(fx.layout.active_count(), 0);
    }
}
