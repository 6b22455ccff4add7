//! Identifier newtypes for drones and ground users.
//!
//! An id is the element's position in its run's input order; the engine
//! never reorders or removes agents, so it stays stable for a whole run.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $name:ident, $label:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "-{}"), self.0)
            }
        }
    };
}

typed_id! {
    /// A drone, numbered in the order of the initial configuration.
    AgentId, "drone"
}

typed_id! {
    /// A ground user, numbered in scenario order.
    TargetId, "user"
}
