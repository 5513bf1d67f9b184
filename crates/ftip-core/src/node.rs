#![forbid(unsafe_code)]

//! Opaque handles for host-owned elements.
//!
//! The engine never touches host elements directly; it names them by id and
//! hands the ids back to the measurement and portal collaborators.

use std::fmt;

/// Identifies an element owned by the host (trigger or floating panel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u64);

/// Identifies a host container that a floating panel can be mounted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerId(pub u64);

impl ContainerId {
    /// The document body, the default host container.
    pub const BODY: Self = Self(0);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::BODY {
            f.write_str("body")
        } else {
            write!(f, "container#{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(NodeId(7).to_string(), "node#7");
        assert_eq!(ContainerId::BODY.to_string(), "body");
        assert_eq!(ContainerId(3).to_string(), "container#3");
    }

    #[test]
    fn default_container_is_body() {
        assert_eq!(ContainerId::default(), ContainerId::BODY);
    }
}
