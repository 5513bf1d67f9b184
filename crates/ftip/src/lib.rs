#![forbid(unsafe_code)]

//! ftip public facade crate.
//!
//! Re-exports the placement resolver and the tooltip runtime, and offers a
//! prelude for day-to-day usage.
//!
//! ```
//! use ftip::prelude::*;
//!
//! let pos = resolve(&PlacementRequest::new(
//!     Rect::new(100.0, 100.0, 40.0, 20.0),
//!     Size::new(80.0, 30.0),
//!     Size::new(800.0, 600.0),
//!     PlacementOptions::default(),
//! ));
//! assert_eq!((pos.top, pos.left), (62.0, 80.0));
//! ```

// --- Core re-exports -------------------------------------------------------

pub use ftip_core::event::{LayoutEvent, LayoutInterest, TriggerEvent};
pub use ftip_core::geometry::{Rect, Size};
pub use ftip_core::node::{ContainerId, NodeId};

// --- Placement re-exports --------------------------------------------------

pub use ftip_place::{
    Alignment, Axis, Placement, PlacementOptions, PlacementParseError, PlacementRequest,
    PositionResult, Side, resolve,
};

// --- Runtime re-exports ----------------------------------------------------

#[cfg(feature = "runtime")]
pub use ftip_runtime::{
    Anchor, ConfigError, Host, LayoutEventSource, LayoutSubscription, Measure, Portal,
    SchedulerState, TimerKind, TimerToken, Tooltip, TooltipConfig, Transition, TriggerMode,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for ftip users.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A placement name did not parse.
    #[error(transparent)]
    Placement(#[from] PlacementParseError),
    /// A tooltip configuration was rejected.
    #[cfg(feature = "runtime")]
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Standard result type for ftip APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Error, Placement, PlacementOptions, PlacementRequest, PositionResult, Rect, Result, Size,
        TriggerEvent, resolve,
    };

    #[cfg(feature = "runtime")]
    pub use crate::{Anchor, Host, Tooltip, TooltipConfig, TriggerMode};

    pub use crate::{core, place};

    #[cfg(feature = "runtime")]
    pub use crate::runtime;
}

pub use ftip_core as core;
pub use ftip_place as place;
#[cfg(feature = "runtime")]
pub use ftip_runtime as runtime;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str) -> Result<Placement> {
        Ok(name.parse::<Placement>()?)
    }

    #[test]
    fn placement_error_converts() {
        let err = parse("sideways").unwrap_err();
        assert!(matches!(err, Error::Placement(_)));
        assert!(err.to_string().contains("sideways"));
        assert_eq!(parse("left-start").unwrap(), Placement::LEFT_START);
    }

    // Must stay exhaustive over `Error`.
    fn layer(err: &Error) -> &'static str {
        match err {
            Error::Placement(_) => "place",
            #[cfg(feature = "runtime")]
            Error::Config(_) => "runtime",
        }
    }

    #[test]
    fn every_variant_comes_from_a_library_layer() {
        let err = parse("sideways").unwrap_err();
        assert_eq!(layer(&err), "place");
        #[cfg(feature = "runtime")]
        {
            let err = Error::from(ConfigError::InvalidOffset(f64::INFINITY));
            assert_eq!(layer(&err), "runtime");
        }
    }

    #[cfg(feature = "runtime")]
    #[test]
    fn config_error_converts() {
        fn check(config: &TooltipConfig) -> Result<()> {
            config.validate()?;
            Ok(())
        }
        let err = check(&TooltipConfig::new().offset(f64::NAN)).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::InvalidOffset(_))));
        assert!(check(&TooltipConfig::default()).is_ok());
    }
}
