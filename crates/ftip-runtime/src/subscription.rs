#![forbid(unsafe_code)]

//! Layout-notification subscriptions.
//!
//! A [`LayoutSubscription`] is an RAII guard over one registration with the
//! host's [`LayoutEventSource`]. Dropping it unsubscribes, so an open panel
//! that is closed, unmounted, or dropped can never leave a listener behind.
//!
//! # Lifecycle
//!
//! 1. The reposition driver calls [`LayoutSubscription::acquire`] on open.
//! 2. The host delivers scroll/resize events; [`LayoutSubscription::wants`]
//!    filters them by [`LayoutInterest`].
//! 3. On close the guard is dropped and the host sees `unsubscribe(id)`.

use std::fmt;
use std::rc::Rc;

use ftip_core::event::{LayoutEvent, LayoutInterest};

/// Identifier handed out by a [`LayoutEventSource`].
pub type SubId = u64;

/// Host capability: deliver capture-phase scroll and window resize events.
///
/// Methods take `&self`; sources that record registrations use interior
/// mutability, since every open tooltip shares one source.
pub trait LayoutEventSource {
    /// Register interest and return a handle for [`unsubscribe`](Self::unsubscribe).
    fn subscribe(&self, interest: LayoutInterest) -> SubId;

    /// Drop a registration. Unknown ids are ignored.
    fn unsubscribe(&self, id: SubId);
}

/// Live registration with a [`LayoutEventSource`]; unsubscribes on drop.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct LayoutSubscription {
    id: SubId,
    interest: LayoutInterest,
    source: Rc<dyn LayoutEventSource>,
}

impl LayoutSubscription {
    /// Subscribe to `source` for `interest`.
    pub fn acquire(source: &Rc<dyn LayoutEventSource>, interest: LayoutInterest) -> Self {
        let id = source.subscribe(interest);
        tracing::trace!(id, ?interest, "layout subscription acquired");
        Self {
            id,
            interest,
            source: Rc::clone(source),
        }
    }

    /// Handle assigned by the source.
    #[inline]
    #[must_use]
    pub fn id(&self) -> SubId {
        self.id
    }

    /// Events this subscription was registered for.
    #[inline]
    #[must_use]
    pub fn interest(&self) -> LayoutInterest {
        self.interest
    }

    /// Whether `event` is one this subscription asked for.
    #[inline]
    #[must_use]
    pub fn wants(&self, event: LayoutEvent) -> bool {
        self.interest.intersects(event.interest())
    }

    /// Unsubscribe now. Equivalent to dropping.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for LayoutSubscription {
    fn drop(&mut self) {
        self.source.unsubscribe(self.id);
        tracing::trace!(id = self.id, "layout subscription released");
    }
}

impl fmt::Debug for LayoutSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutSubscription")
            .field("id", &self.id)
            .field("interest", &self.interest)
            .finish_non_exhaustive()
    }
}
