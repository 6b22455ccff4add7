//! Ground users.

use sc_core::{Position, TargetId};

/// A fixed point to be covered.  Immutable for the duration of a run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub id:       TargetId,
    pub position: Position,
}

impl Target {
    #[inline]
    pub fn new(id: TargetId, position: Position) -> Self {
        Self { id, position }
    }
}

/// Positions of `targets`, in order.  Evaluators work on plain positions.
pub fn target_positions(targets: &[Target]) -> Vec<Position> {
    targets.iter().map(|t| t.position).collect()
}
