#![forbid(unsafe_code)]

//! Canonical trigger and layout event types.
//!
//! Hosts translate their native input (pointer, focus, keyboard) into
//! [`TriggerEvent`]s scoped to one trigger element, and their scroll/resize
//! notifications into [`LayoutEvent`]s.
//!
//! # Design Notes
//!
//! - Events carry no coordinates; geometry is always re-measured through the
//!   measurement provider so a stale event can never carry a stale rect.
//! - `LayoutInterest` uses bitflags for easy combination.

use bitflags::bitflags;

/// An input event scoped to a single trigger element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TriggerEvent {
    /// Pointer entered the trigger element.
    PointerEnter,

    /// Pointer left the trigger element.
    PointerLeave,

    /// Trigger element gained focus.
    Focus,

    /// Trigger element lost focus.
    Blur,

    /// Trigger element was clicked (pointer or keyboard activation).
    Click,

    /// The user asked for the panel to go away (escape key, outside press).
    Dismiss,
}

impl TriggerEvent {
    /// Whether this event signals intent to show the panel.
    #[must_use]
    pub const fn is_engage(self) -> bool {
        matches!(self, Self::PointerEnter | Self::Focus)
    }

    /// Whether this event signals intent to hide the panel.
    #[must_use]
    pub const fn is_disengage(self) -> bool {
        matches!(self, Self::PointerLeave | Self::Blur)
    }
}

/// A notification that geometry may have changed without any trigger event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum LayoutEvent {
    /// Some scroll container (the window or any ancestor) scrolled.
    Scroll,

    /// The viewport was resized.
    Resize,
}

impl LayoutEvent {
    /// The interest flag a subscriber needs to receive this event.
    #[must_use]
    pub const fn interest(self) -> LayoutInterest {
        match self {
            Self::Scroll => LayoutInterest::SCROLL,
            Self::Resize => LayoutInterest::RESIZE,
        }
    }
}

bitflags! {
    /// Layout notifications a subscriber wants to receive.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct LayoutInterest: u8 {
        /// Capture-phase scroll on the window or any ancestor scroller.
        const SCROLL = 0b01;
        /// Viewport resize.
        const RESIZE = 0b10;
    }
}

impl LayoutInterest {
    /// Everything a floating panel needs to stay anchored.
    pub const REPOSITION: Self = Self::SCROLL.union(Self::RESIZE);
}

impl Default for LayoutInterest {
    fn default() -> Self {
        Self::REPOSITION
    }
}
