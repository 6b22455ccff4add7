//! Read-only per-run evaluation context.

use sc_core::{Area, Position, SwarmConfig};
use sc_eval::{FitnessEvaluator, RepulsionModel};

/// Everything an update strategy reads but never mutates: the users, the
/// service area, and the scoring/force models.
///
/// Borrowed fresh for every step so the engine can hand out `&mut` access
/// to its population state at the same time.
#[derive(Copy, Clone, Debug)]
pub struct EvalContext<'a> {
    pub targets:   &'a [Position],
    pub area:      Area,
    pub fitness:   FitnessEvaluator,
    pub repulsion: RepulsionModel,
}

impl<'a> EvalContext<'a> {
    pub fn new(targets: &'a [Position], config: &SwarmConfig) -> Self {
        Self {
            targets,
            area:      config.area(),
            fitness:   FitnessEvaluator::from_config(config),
            repulsion: RepulsionModel::from_params(config.repulsion),
        }
    }
}
