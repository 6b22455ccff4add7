//! Uniform random scenario construction.
//!
//! # Usage
//!
//! ```rust
//! use sc_core::Area;
//! use sc_population::ScenarioBuilder;
//!
//! let mut scenario = ScenarioBuilder::new(Area::new(100.0), /*seed=*/ 42);
//! let users = scenario.targets(50);
//! let drones = scenario.configuration(8);
//!
//! assert_eq!(users.len(), 50);
//! assert_eq!(drones.len(), 8);
//! ```
//!
//! Users and drones draw from separate child streams of the seed, so
//! changing the drone count leaves the user layout untouched and vice versa.

use sc_core::{Area, Position, SwarmRng, TargetId};

use crate::{Configuration, Target};

const TARGET_STREAM: u64 = 1;
const AGENT_STREAM:  u64 = 2;

/// Scatters users and drones uniformly over a service area.
pub struct ScenarioBuilder {
    area:       Area,
    target_rng: SwarmRng,
    agent_rng:  SwarmRng,
}

impl ScenarioBuilder {
    pub fn new(area: Area, seed: u64) -> Self {
        let mut root = SwarmRng::new(seed);
        let target_rng = root.child(TARGET_STREAM);
        let agent_rng = root.child(AGENT_STREAM);
        Self { area, target_rng, agent_rng }
    }

    pub fn area(&self) -> Area {
        self.area
    }

    /// `count` users with ids `0..count`.
    pub fn targets(&mut self, count: usize) -> Vec<Target> {
        (0..count as u32)
            .map(|i| Target::new(TargetId(i), self.target_rng.point_in(self.area)))
            .collect()
    }

    /// `count` drone positions.
    pub fn configuration(&mut self, count: usize) -> Configuration {
        scatter(&mut self.agent_rng, self.area, count)
    }
}

/// `count` points drawn uniformly from `area`.
pub fn scatter(rng: &mut SwarmRng, area: Area, count: usize) -> Configuration {
    (0..count)
        .map(|_| rng.point_in(area))
        .collect::<Vec<Position>>()
        .into()
}
