//! Weighted fitness: `w1 · coverage + w2 · resource_efficiency`.

use sc_core::{FitnessWeights, Position, SwarmConfig};

use crate::{coverage, resource_efficiency};

/// The two metric terms plus their weighted combination.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub coverage:   f64,
    pub efficiency: f64,
    pub fitness:    f64,
}

/// Scores configurations against a fixed set of targets.
///
/// Cheap to copy; holds only the radius and weights.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitnessEvaluator {
    pub coverage_radius: f64,
    pub weights:         FitnessWeights,
}

impl FitnessEvaluator {
    pub fn new(coverage_radius: f64, weights: FitnessWeights) -> Self {
        Self { coverage_radius, weights }
    }

    pub fn from_config(config: &SwarmConfig) -> Self {
        Self::new(config.coverage_radius, config.weights)
    }

    /// Coverage term only.
    #[inline]
    pub fn coverage(&self, agents: &[Position], targets: &[Position]) -> f64 {
        coverage(agents, targets, self.coverage_radius)
    }

    /// Full breakdown for one configuration.
    pub fn score(&self, agents: &[Position], targets: &[Position]) -> Score {
        let coverage = self.coverage(agents, targets);
        let efficiency = resource_efficiency(agents, targets, self.coverage_radius);
        Score {
            coverage,
            efficiency,
            fitness: self.weights.coverage * coverage + self.weights.efficiency * efficiency,
        }
    }

    /// Scalar ranking signal.
    #[inline]
    pub fn fitness(&self, agents: &[Position], targets: &[Position]) -> f64 {
        self.score(agents, targets).fitness
    }
}
