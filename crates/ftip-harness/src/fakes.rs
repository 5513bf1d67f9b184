#![forbid(unsafe_code)]

//! Scriptable implementations of the host collaborator traits.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use ftip_core::event::LayoutInterest;
use ftip_core::geometry::{Rect, Size};
use ftip_core::node::{ContainerId, NodeId};
use ftip_place::{Placement, PositionResult};
use ftip_runtime::{LayoutEventSource, Measure, Portal, SubId};

// ============================================================================
// Measurement
// ============================================================================

/// In-memory layout.
#[derive(Debug)]
pub struct FakeMeasure {
    rects: RefCell<HashMap<NodeId, Rect>>,
    viewport: Cell<Size>,
    /// Diagnostic: `rect` calls served.
    queries: Cell<u64>,
}

impl FakeMeasure {
    /// Empty layout with the given viewport.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            rects: RefCell::new(HashMap::new()),
            viewport: Cell::new(viewport),
            queries: Cell::new(0),
        }
    }

    /// Place `node` at `rect`.
    pub fn set_rect(&self, node: NodeId, rect: Rect) {
        self.rects.borrow_mut().insert(node, rect);
    }

    /// Take `node` out of the layout.
    pub fn clear(&self, node: NodeId) {
        self.rects.borrow_mut().remove(&node);
    }

    pub fn set_viewport(&self, viewport: Size) {
        self.viewport.set(viewport);
    }

    /// Move every node as if the page scrolled by (`dy`, `dx`).
    pub fn scroll_by(&self, dy: f64, dx: f64) {
        for rect in self.rects.borrow_mut().values_mut() {
            *rect = rect.translate(-dy, -dx);
        }
    }

    /// Number of `rect` queries served.
    #[must_use]
    pub fn query_count(&self) -> u64 {
        self.queries.get()
    }
}

impl Measure for FakeMeasure {
    fn rect(&self, node: NodeId) -> Option<Rect> {
        self.queries.set(self.queries.get() + 1);
        self.rects.borrow().get(&node).copied()
    }

    fn viewport(&self) -> Size {
        self.viewport.get()
    }
}

// ============================================================================
// Layout events
// ============================================================================

/// Records active subscriptions.
#[derive(Debug, Default)]
pub struct FakeLayoutSource {
    next_id: Cell<SubId>,
    active: RefCell<BTreeMap<SubId, LayoutInterest>>,
    subscribes: Cell<u64>,
    unsubscribes: Cell<u64>,
}

impl FakeLayoutSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently registered subscriptions.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.borrow().len()
    }

    /// Interest of every live subscription, by id.
    #[must_use]
    pub fn active(&self) -> Vec<(SubId, LayoutInterest)> {
        self.active.borrow().iter().map(|(&id, &i)| (id, i)).collect()
    }

    #[must_use]
    pub fn subscribe_count(&self) -> u64 {
        self.subscribes.get()
    }

    #[must_use]
    pub fn unsubscribe_count(&self) -> u64 {
        self.unsubscribes.get()
    }
}

impl LayoutEventSource for FakeLayoutSource {
    fn subscribe(&self, interest: LayoutInterest) -> SubId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.active.borrow_mut().insert(id, interest);
        self.subscribes.set(self.subscribes.get() + 1);
        id
    }

    fn unsubscribe(&self, id: SubId) {
        if self.active.borrow_mut().remove(&id).is_some() {
            self.unsubscribes.set(self.unsubscribes.get() + 1);
        }
    }
}

// ============================================================================
// Portal
// ============================================================================

/// One call made on a [`RecordingPortal`].
#[derive(Debug, Clone, PartialEq)]
pub enum PortalOp {
    Mount {
        panel: NodeId,
        container: ContainerId,
    },
    Unmount {
        panel: NodeId,
    },
    Position {
        panel: NodeId,
        top: f64,
        left: f64,
        placement: Placement,
    },
}

/// A portal that only records. Clones share one log.
#[derive(Debug, Clone, Default)]
pub struct RecordingPortal {
    ops: Rc<RefCell<Vec<PortalOp>>>,
}

impl RecordingPortal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every op recorded so far.
    #[must_use]
    pub fn ops(&self) -> Vec<PortalOp> {
        self.ops.borrow().clone()
    }

    /// Whether `panel` is mounted according to the recorded ops.
    #[must_use]
    pub fn is_mounted(&self, panel: NodeId) -> bool {
        let mut mounted = false;
        for op in self.ops.borrow().iter() {
            match *op {
                PortalOp::Mount { panel: p, .. } if p == panel => mounted = true,
                PortalOp::Unmount { panel: p } if p == panel => mounted = false,
                _ => {}
            }
        }
        mounted
    }

    /// Most recent position applied to any panel.
    #[must_use]
    pub fn last_position(&self) -> Option<(f64, f64, Placement)> {
        self.ops.borrow().iter().rev().find_map(|op| match *op {
            PortalOp::Position {
                top,
                left,
                placement,
                ..
            } => Some((top, left, placement)),
            _ => None,
        })
    }

    pub fn clear(&self) {
        self.ops.borrow_mut().clear();
    }
}

impl Portal for RecordingPortal {
    fn mount(&mut self, panel: NodeId, container: ContainerId) {
        self.ops
            .borrow_mut()
            .push(PortalOp::Mount { panel, container });
    }

    fn unmount(&mut self, panel: NodeId) {
        self.ops.borrow_mut().push(PortalOp::Unmount { panel });
    }

    fn apply_position(&mut self, panel: NodeId, position: &PositionResult) {
        self.ops.borrow_mut().push(PortalOp::Position {
            panel,
            top: position.top,
            left: position.left,
            placement: position.placement,
        });
    }
}

// ============================================================================
// Callbacks
// ============================================================================

/// Collects `on_open_change` calls. Clones share one log.
#[derive(Debug, Clone, Default)]
pub struct OpenLog {
    calls: Rc<RefCell<Vec<bool>>>,
}

impl OpenLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends to this log.
    pub fn callback(&self) -> impl FnMut(bool) + 'static {
        let calls = Rc::clone(&self.calls);
        move |open| calls.borrow_mut().push(open)
    }

    #[must_use]
    pub fn calls(&self) -> Vec<bool> {
        self.calls.borrow().clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_scroll_moves_every_node() {
        let m = FakeMeasure::new(Size::new(800.0, 600.0));
        m.set_rect(NodeId(1), Rect::new(100.0, 100.0, 40.0, 20.0));
        m.scroll_by(90.0, 0.0);
        assert_eq!(m.rect(NodeId(1)), Some(Rect::new(10.0, 100.0, 40.0, 20.0)));
        m.clear(NodeId(1));
        assert_eq!(m.rect(NodeId(1)), None);
        assert_eq!(m.query_count(), 2);
    }

    #[test]
    fn layout_source_tracks_active() {
        let src = FakeLayoutSource::new();
        let a = src.subscribe(LayoutInterest::SCROLL);
        let b = src.subscribe(LayoutInterest::RESIZE);
        src.unsubscribe(a);
        src.unsubscribe(a);
        assert_eq!(src.active(), vec![(b, LayoutInterest::RESIZE)]);
        assert_eq!(src.subscribe_count(), 2);
        assert_eq!(src.unsubscribe_count(), 1);
    }

    #[test]
    fn portal_mount_state() {
        let mut portal = RecordingPortal::new();
        let probe = portal.clone();
        portal.mount(NodeId(2), ContainerId::BODY);
        assert!(probe.is_mounted(NodeId(2)));
        portal.unmount(NodeId(2));
        assert!(!probe.is_mounted(NodeId(2)));
        assert_eq!(probe.ops().len(), 2);
        assert_eq!(probe.last_position(), None);
    }

    #[test]
    fn open_log_callback() {
        let log = OpenLog::new();
        let mut cb = log.callback();
        cb(true);
        cb(false);
        assert_eq!(log.calls(), vec![true, false]);
    }
}
