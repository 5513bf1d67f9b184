#![forbid(unsafe_code)]

//! Host collaborators.
//!
//! The engine owns no elements. It asks a [`Measure`] for geometry, a
//! [`Portal`] to place the panel, and a [`LayoutEventSource`] for scroll and
//! resize notifications.

use std::fmt;
use std::rc::Rc;

use ftip_core::geometry::{Rect, Size};
use ftip_core::node::{ContainerId, NodeId};
use ftip_place::PositionResult;

use crate::subscription::LayoutEventSource;

/// Measurement provider.
pub trait Measure {
    /// Current bounds of `node` in viewport coordinates.
    ///
    /// `None` when the node is not in the layout (e.g. before first paint).
    fn rect(&self, node: NodeId) -> Option<Rect>;

    /// Current viewport size.
    fn viewport(&self) -> Size;
}

/// Rendering capability: mount a panel into a host container and place it.
pub trait Portal {
    /// Render `panel` into `container`.
    fn mount(&mut self, panel: NodeId, container: ContainerId);

    /// Remove `panel` from wherever it was mounted.
    fn unmount(&mut self, panel: NodeId);

    /// Publish a resolved position for a mounted panel.
    fn apply_position(&mut self, panel: NodeId, position: &PositionResult);
}

/// The pair of elements one tooltip binds together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// Element the user interacts with.
    pub trigger: NodeId,
    /// Floating element positioned against the trigger.
    pub panel: NodeId,
}

impl Anchor {
    /// Create an anchor.
    #[must_use]
    pub const fn new(trigger: NodeId, panel: NodeId) -> Self {
        Self { trigger, panel }
    }
}

/// Everything a tooltip borrows from its host.
pub struct Host {
    /// Measurement provider, shared by every tooltip in the host.
    pub measure: Rc<dyn Measure>,
    /// Scroll/resize source, shared by every tooltip in the host.
    pub layout: Rc<dyn LayoutEventSource>,
    /// This tooltip's portal.
    pub portal: Box<dyn Portal>,
}

impl Host {
    /// Bundle host collaborators.
    pub fn new(
        measure: Rc<dyn Measure>,
        layout: Rc<dyn LayoutEventSource>,
        portal: Box<dyn Portal>,
    ) -> Self {
        Self {
            measure,
            layout,
            portal,
        }
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host").finish_non_exhaustive()
    }
}
