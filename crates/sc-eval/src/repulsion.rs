//! Pairwise repulsion between agents.
//!
//! For each unordered pair `(i, j)` with separation `d < distance`, a force of
//! magnitude `factor · (distance − d)` pushes `i` away from `j` and the exact
//! negation is added to `j`.  Magnitude is largest at contact and falls
//! linearly to zero at the threshold.
//!
//! Coincident agents have no defined direction; the pair is then split along
//! the x-axis, lower index towards +x.  The magnitude at `d == 0` is the
//! finite value `factor · distance`, so no division by zero can occur.

use sc_core::{Position, RepulsionParams};

/// Linear-falloff separation force.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RepulsionModel {
    pub distance: f64,
    pub factor:   f64,
}

impl RepulsionModel {
    pub fn new(distance: f64, factor: f64) -> Self {
        Self { distance, factor }
    }

    pub fn from_params(params: RepulsionParams) -> Self {
        Self::new(params.distance, params.factor)
    }

    /// Force on the first agent of a pair at `a` due to a second at `b`.
    ///
    /// The second agent receives the negation.  Zero when out of range.
    pub fn pair_force(&self, a: Position, b: Position) -> Position {
        let offset = a - b;
        let d = offset.norm();
        if d >= self.distance {
            return Position::ORIGIN;
        }
        let direction = if d > 0.0 { offset * (1.0 / d) } else { Position::UNIT_X };
        direction * (self.factor * (self.distance - d))
    }

    /// Net force on every agent, summed over all pairs.  O(n²).
    pub fn forces(&self, agents: &[Position]) -> Vec<Position> {
        let mut forces = vec![Position::ORIGIN; agents.len()];
        for i in 0..agents.len() {
            for j in (i + 1)..agents.len() {
                let f = self.pair_force(agents[i], agents[j]);
                forces[i] += f;
                forces[j] -= f;
            }
        }
        forces
    }
}
