#![forbid(unsafe_code)]

//! Placement vocabulary: side, alignment, and their kebab-case names.

use std::fmt;
use std::str::FromStr;

/// The side of the trigger the panel sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Above the trigger.
    #[default]
    Top,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
    /// Right of the trigger.
    Right,
}

/// Layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Top-to-bottom.
    Vertical,
    /// Left-to-right.
    Horizontal,
}

impl Side {
    /// The side across the trigger on the same axis.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The axis the panel is offset along (the main axis).
    #[must_use]
    pub const fn main_axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// The axis the panel is aligned along (the cross axis).
    #[must_use]
    pub const fn cross_axis(self) -> Axis {
        match self.main_axis() {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Cross-axis alignment of the panel against the trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Centred on the trigger.
    #[default]
    Center,
    /// Leading edges aligned (left edges for top/bottom, top edges for left/right).
    Start,
    /// Trailing edges aligned.
    End,
}

/// Side plus alignment, e.g. `bottom-start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Placement {
    /// Side of the trigger.
    pub side: Side,
    /// Alignment along the cross axis.
    pub align: Alignment,
}

impl Placement {
    pub const TOP: Self = Self::new(Side::Top, Alignment::Center);
    pub const TOP_START: Self = Self::new(Side::Top, Alignment::Start);
    pub const TOP_END: Self = Self::new(Side::Top, Alignment::End);
    pub const BOTTOM: Self = Self::new(Side::Bottom, Alignment::Center);
    pub const BOTTOM_START: Self = Self::new(Side::Bottom, Alignment::Start);
    pub const BOTTOM_END: Self = Self::new(Side::Bottom, Alignment::End);
    pub const LEFT: Self = Self::new(Side::Left, Alignment::Center);
    pub const LEFT_START: Self = Self::new(Side::Left, Alignment::Start);
    pub const LEFT_END: Self = Self::new(Side::Left, Alignment::End);
    pub const RIGHT: Self = Self::new(Side::Right, Alignment::Center);
    pub const RIGHT_START: Self = Self::new(Side::Right, Alignment::Start);
    pub const RIGHT_END: Self = Self::new(Side::Right, Alignment::End);

    /// Every placement, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::TOP,
        Self::TOP_START,
        Self::TOP_END,
        Self::BOTTOM,
        Self::BOTTOM_START,
        Self::BOTTOM_END,
        Self::LEFT,
        Self::LEFT_START,
        Self::LEFT_END,
        Self::RIGHT,
        Self::RIGHT_START,
        Self::RIGHT_END,
    ];

    /// Create a placement.
    #[inline]
    pub const fn new(side: Side, align: Alignment) -> Self {
        Self { side, align }
    }

    /// Same alignment on the opposite side.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self::new(self.side.opposite(), self.align)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.side.as_str())?;
        match self.align {
            Alignment::Center => Ok(()),
            Alignment::Start => f.write_str("-start"),
            Alignment::End => f.write_str("-end"),
        }
    }
}

/// A placement name that is not one of the twelve known values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown placement `{input}` (expected e.g. `top`, `bottom-start`, `right-end`)")]
pub struct PlacementParseError {
    input: String,
}

impl PlacementParseError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Placement {
    type Err = PlacementParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || PlacementParseError {
            input: s.to_string(),
        };
        let normalized = s.trim().to_ascii_lowercase();
        let (side, align) = match normalized.split_once('-') {
            Some((side, "start")) => (side, Alignment::Start),
            Some((side, "end")) => (side, Alignment::End),
            Some(_) => return Err(err()),
            None => (normalized.as_str(), Alignment::Center),
        };
        let side = match side {
            "top" => Side::Top,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            "right" => Side::Right,
            _ => return Err(err()),
        };
        Ok(Self::new(side, align))
    }
}

impl TryFrom<String> for Placement {
    type Error = PlacementParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Placement> for String {
    fn from(placement: Placement) -> Self {
        placement.to_string()
    }
}
