#![forbid(unsafe_code)]

//! Deterministic host fakes for driving ftip tooltips in tests and demos.
//!
//! - [`FakeMeasure`]: a scriptable layout: node rects plus viewport size.
//! - [`FakeLayoutSource`]: records subscribe/unsubscribe calls.
//! - [`RecordingPortal`]: records mount, unmount and position ops.
//! - [`VirtualClock`]: an `Instant` that only moves when told to.
//! - [`OpenLog`]: collects `on_open_change` calls.
//! - [`Fixture`]: all of the above wired into a [`Host`].
//!
//! # Quick Start
//!
//! ```ignore
//! use ftip_harness::Fixture;
//!
//! let fx = Fixture::standard();
//! let mut tip = fx.mount(TooltipConfig::default())?;
//! tip.on_open_change(fx.opens.callback());
//! tip.handle_event(TriggerEvent::PointerEnter, fx.clock.now());
//! fx.clock.advance_ms(500);
//! tip.tick(fx.clock.now());
//! assert_eq!(fx.opens.calls(), vec![true]);
//! ```

pub mod clock;
pub mod fakes;
pub mod fixture;

pub use clock::VirtualClock;
pub use fakes::{FakeLayoutSource, FakeMeasure, OpenLog, PortalOp, RecordingPortal};
pub use fixture::{Fixture, PANEL, TRIGGER};

// Re-export types useful for harness users.
pub use ftip_core::geometry::{Rect, Size};
pub use ftip_core::node::{ContainerId, NodeId};
pub use ftip_runtime::Host;
