#![forbid(unsafe_code)]

//! Placement: where a floating panel goes relative to its trigger.
//!
//! [`resolve`] is a pure function from trigger/panel/viewport geometry to a
//! [`PositionResult`]. It has no hidden state, performs no I/O and never
//! panics, so it can be called any number of times per frame.

pub mod logging;
pub mod placement;
pub mod resolver;

pub use placement::{Alignment, Axis, Placement, PlacementParseError, Side};
pub use resolver::{PlacementOptions, PlacementRequest, PositionResult, resolve};

// With the feature the macro is re-exported here; without it `#[macro_export]`
// already places it at the crate root.
#[cfg(feature = "tracing")]
pub use logging::trace;
