#![forbid(unsafe_code)]

//! Logging for the resolver.
//!
//! With the `tracing` feature `trace!` is the `tracing` macro, so flip
//! decisions show up under the `ftip_place` target. Without it the macro
//! expands to nothing and the resolver stays dependency-free at runtime.

#[cfg(feature = "tracing")]
pub use tracing::trace;

/// No-op trace macro when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}
