#![forbid(unsafe_code)]

//! Runtime for one floating panel: when it is open, and where it is.
//!
//! - [`TriggerScheduler`] turns trigger events and timer deadlines into
//!   open/close transitions.
//! - [`RepositionDriver`] keeps the resolved position fresh while open,
//!   holding a [`LayoutSubscription`] for scroll/resize notifications.
//! - [`Tooltip`] binds both to a [`TooltipConfig`] and the host
//!   collaborators in [`Host`].
//!
//! Everything is single-threaded and clock-agnostic: callers pass `Instant`s
//! in and ask for [`Tooltip::next_deadline`] to know when to tick again.

pub mod config;
pub mod host;
pub mod reposition;
pub mod scheduler;
pub mod subscription;
pub mod timer;
pub mod tooltip;

pub use config::{ConfigError, TooltipConfig};
pub use host::{Anchor, Host, Measure, Portal};
pub use reposition::RepositionDriver;
pub use scheduler::{SchedulerState, Transition, TriggerMode, TriggerScheduler};
pub use subscription::{LayoutEventSource, LayoutSubscription, SubId};
pub use timer::{TimerKind, TimerSlot, TimerToken};
pub use tooltip::Tooltip;
