#![forbid(unsafe_code)]

//! Per-instance configuration.
//!
//! ```
//! use ftip_place::Placement;
//! use ftip_runtime::{TooltipConfig, TriggerMode};
//!
//! let config = TooltipConfig::new()
//!     .placement(Placement::BOTTOM_START)
//!     .trigger(TriggerMode::Click)
//!     .offset(4.0);
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use ftip_core::node::ContainerId;
use ftip_place::{Placement, PlacementOptions};

use crate::scheduler::TriggerMode;

/// Configuration rejected at mount or update time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `offset` is NaN or infinite.
    #[error("offset must be finite, got {0}")]
    InvalidOffset(f64),

    /// `boundary_padding` is negative, NaN or infinite.
    #[error("boundary padding must be finite and non-negative, got {0}")]
    InvalidBoundaryPadding(f64),

    /// The trigger mode of a mounted instance cannot change.
    #[error("trigger mode cannot change after mount ({from} -> {to})")]
    TriggerModeChanged {
        /// Mode the instance was mounted with.
        from: TriggerMode,
        /// Mode the update asked for.
        to: TriggerMode,
    },
}

/// Tooltip configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TooltipConfig {
    /// Preferred placement.
    pub placement: Placement,
    /// Main-axis gap between trigger and panel.
    pub offset: f64,
    /// Minimum cross-axis distance to the viewport edge.
    pub boundary_padding: f64,
    /// Delay before opening in hover/focus mode.
    pub show_delay_ms: u64,
    /// Delay before closing in hover/focus mode.
    pub hide_delay_ms: u64,
    /// How the panel is triggered.
    pub trigger: TriggerMode,
    /// Ignore all triggers and keep the panel closed.
    pub disabled: bool,
    /// Open flag for `manual` mode. Ignored otherwise.
    pub open: bool,
    /// Where the panel is mounted.
    pub container: ContainerId,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            placement: Placement::TOP,
            offset: 8.0,
            boundary_padding: 8.0,
            show_delay_ms: 500,
            hide_delay_ms: 200,
            trigger: TriggerMode::Hover,
            disabled: false,
            open: false,
            container: ContainerId::BODY,
        }
    }
}

impl TooltipConfig {
    /// Default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred placement.
    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the main-axis offset.
    #[must_use]
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the cross-axis boundary padding.
    #[must_use]
    pub fn boundary_padding(mut self, padding: f64) -> Self {
        self.boundary_padding = padding;
        self
    }

    /// Set the show delay in milliseconds.
    #[must_use]
    pub fn show_delay_ms(mut self, ms: u64) -> Self {
        self.show_delay_ms = ms;
        self
    }

    /// Set the hide delay in milliseconds.
    #[must_use]
    pub fn hide_delay_ms(mut self, ms: u64) -> Self {
        self.hide_delay_ms = ms;
        self
    }

    /// Set the trigger mode.
    #[must_use]
    pub fn trigger(mut self, trigger: TriggerMode) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the manual-mode open flag.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Set the mount container.
    #[must_use]
    pub fn container(mut self, container: ContainerId) -> Self {
        self.container = container;
        self
    }

    /// Resolver parameters.
    #[must_use]
    pub fn placement_options(&self) -> PlacementOptions {
        PlacementOptions {
            placement: self.placement,
            offset: self.offset,
            boundary_padding: self.boundary_padding,
        }
    }

    #[must_use]
    pub fn show_delay(&self) -> Duration {
        Duration::from_millis(self.show_delay_ms)
    }

    #[must_use]
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }

    /// Check numeric fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.offset.is_finite() {
            return Err(ConfigError::InvalidOffset(self.offset));
        }
        if !self.boundary_padding.is_finite() || self.boundary_padding < 0.0 {
            return Err(ConfigError::InvalidBoundaryPadding(self.boundary_padding));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = TooltipConfig::default();
        assert_eq!(c.placement, Placement::TOP);
        assert_eq!(c.offset, 8.0);
        assert_eq!(c.boundary_padding, 8.0);
        assert_eq!(c.show_delay(), Duration::from_millis(500));
        assert_eq!(c.hide_delay(), Duration::from_millis(200));
        assert_eq!(c.trigger, TriggerMode::Hover);
        assert!(!c.disabled);
        assert!(!c.open);
        assert_eq!(c.container, ContainerId::BODY);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn builder_sets_fields() {
        let c = TooltipConfig::new()
            .placement(Placement::LEFT_END)
            .offset(0.0)
            .boundary_padding(2.0)
            .show_delay_ms(0)
            .hide_delay_ms(1000)
            .trigger(TriggerMode::Manual)
            .disabled(true)
            .open(true)
            .container(ContainerId(7));
        assert_eq!(c.placement, Placement::LEFT_END);
        assert_eq!(
            c.placement_options(),
            PlacementOptions {
                placement: Placement::LEFT_END,
                offset: 0.0,
                boundary_padding: 2.0,
            }
        );
        assert_eq!(c.show_delay(), Duration::ZERO);
        assert_eq!(c.hide_delay(), Duration::from_secs(1));
        assert_eq!(c.trigger, TriggerMode::Manual);
        assert!(c.disabled && c.open);
        assert_eq!(c.container, ContainerId(7));
    }

    #[test]
    fn negative_offset_is_allowed() {
        assert!(TooltipConfig::new().offset(-4.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_numbers() {
        assert!(matches!(
            TooltipConfig::new().offset(f64::NAN).validate(),
            Err(ConfigError::InvalidOffset(_))
        ));
        assert_eq!(
            TooltipConfig::new().boundary_padding(-1.0).validate(),
            Err(ConfigError::InvalidBoundaryPadding(-1.0))
        );
        assert!(TooltipConfig::new()
            .boundary_padding(f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn error_messages() {
        let err = ConfigError::TriggerModeChanged {
            from: TriggerMode::Hover,
            to: TriggerMode::Click,
        };
        assert_eq!(
            err.to_string(),
            "trigger mode cannot change after mount (hover -> click)"
        );
        assert!(ConfigError::InvalidOffset(f64::NAN).to_string().contains("NaN"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_partial_json() {
        let c: TooltipConfig = serde_json::from_str(
            r#"{ "placement": "bottom-end", "trigger": "click", "show_delay_ms": 0 }"#,
        )
        .unwrap();
        assert_eq!(c.placement, Placement::BOTTOM_END);
        assert_eq!(c.trigger, TriggerMode::Click);
        assert_eq!(c.show_delay_ms, 0);
        assert_eq!(c.hide_delay_ms, 200);
        assert_eq!(c.offset, 8.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_rejects_unknown_placement() {
        assert!(serde_json::from_str::<TooltipConfig>(r#"{ "placement": "middle" }"#).is_err());
    }
}
