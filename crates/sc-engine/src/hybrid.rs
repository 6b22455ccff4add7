//! Hybrid update: personal best + global best + repulsion with decay.
//!
//! # One iteration
//!
//! 1. Score the current layout by coverage.  Every agent treats that single
//!    number as its own signal and updates its personal best with it.  All
//!    agents therefore share the same best score; only the positions they
//!    remember differ by when they last moved.
//! 2. The leading personal best replaces the global best if strictly better.
//!    The global best keeps the whole layout it came from.
//! 3. Every agent moves by the sum of four terms, all taken from its
//!    pre-move position:
//!      `γ·w·(personal − p)` + `α·U(−½, ½)²` + `β·(global − p)` + repulsion
//!    and is clamped into the area.
//! 4. `α`, `β`, `γ` shrink by `(1 − δ)`; `w` shrinks by its own decay.
//! 5. Early stop when the swarm centroid is within the tolerance of the
//!    global best point.

use sc_core::{HybridParams, Position, SwarmConfig, SwarmRng, Variant};
use sc_population::{Configuration, GlobalBest, Swarm};

use crate::{EngineResult, EvalContext, PopulationState, StepOutcome, UpdateStrategy};

/// The advanced update rule.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HybridSwarm {
    pub params:               HybridParams,
    /// `None` disables the centroid test.
    pub early_stop_tolerance: Option<f64>,
}

/// Coefficients that decay over the run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HybridCoefficients {
    pub alpha:          f64,
    pub beta:           f64,
    pub gamma:          f64,
    pub inertia_weight: f64,
}

impl HybridCoefficients {
    pub fn from_params(params: &HybridParams) -> Self {
        Self {
            alpha:          params.alpha,
            beta:           params.beta,
            gamma:          params.gamma,
            inertia_weight: params.inertia_weight,
        }
    }

    /// Apply one iteration of multiplicative decay.  Never goes negative.
    pub fn decay(&mut self, delta: f64, inertia_decay: f64) {
        let keep = (1.0 - delta).max(0.0);
        self.alpha *= keep;
        self.beta *= keep;
        self.gamma *= keep;
        self.inertia_weight *= inertia_decay.max(0.0);
    }
}

/// Best point together with the layout that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct HybridBest {
    pub point:         Position,
    pub configuration: Configuration,
}

/// Live agents, decaying coefficients, and the global best (scored by
/// coverage).
#[derive(Clone, Debug)]
pub struct HybridState {
    pub swarm:        Swarm,
    pub coefficients: HybridCoefficients,
    pub global:       GlobalBest<HybridBest>,
}

impl HybridSwarm {
    pub fn new(params: HybridParams, early_stop_tolerance: Option<f64>) -> Self {
        Self { params, early_stop_tolerance }
    }

    pub fn from_config(config: &SwarmConfig) -> Self {
        Self::new(config.hybrid, config.early_stop_tolerance)
    }

    fn converged(&self, state: &HybridState) -> bool {
        let (Some(tol), Some(centroid)) = (self.early_stop_tolerance, state.swarm.centroid()) else {
            return false;
        };
        centroid.distance(state.global.value.point) < tol
    }
}

impl UpdateStrategy for HybridSwarm {
    type State = HybridState;

    fn variant(&self) -> Variant {
        Variant::Hybrid
    }

    fn initialise(
        &self,
        initial: Configuration,
        _ctx:    &EvalContext<'_>,
        _rng:    &mut SwarmRng,
    ) -> EngineResult<HybridState> {
        let swarm = Swarm::from_positions(&initial);
        let (point, score) = swarm
            .leader()
            .map(|a| (a.best_position, a.best_score))
            .unwrap_or((Position::ORIGIN, 0.0));

        Ok(HybridState {
            swarm,
            coefficients: HybridCoefficients::from_params(&self.params),
            global:       GlobalBest::new(HybridBest { point, configuration: initial }, score),
        })
    }

    fn step(
        &self,
        state: &mut HybridState,
        ctx:   &EvalContext<'_>,
        rng:   &mut SwarmRng,
    ) -> StepOutcome {
        // ── Score and personal bests ──────────────────────────────────────
        let layout = state.swarm.configuration();
        let coverage = ctx.fitness.coverage(&layout, ctx.targets);
        for agent in &mut state.swarm.agents {
            agent.observe(coverage);
        }

        // ── Global best ───────────────────────────────────────────────────
        let improved = match state.swarm.leader().map(|a| (a.best_position, a.best_score)) {
            Some((point, score)) => state.global.offer_with(score, || HybridBest {
                point,
                configuration: layout.clone(),
            }),
            None => false,
        };

        // ── Move ──────────────────────────────────────────────────────────
        let forces = ctx.repulsion.forces(&layout);
        let k = state.coefficients;
        let global = state.global.value.point;

        for (agent, force) in state.swarm.agents.iter_mut().zip(forces) {
            let p = agent.position;
            let inertia = (agent.best_position - p) * (k.gamma * k.inertia_weight);
            let explore = rng.symmetric(0.5) * k.alpha;
            let attract = (global - p) * k.beta;
            agent.position = ctx.area.clamp(p + inertia + explore + attract + force);
        }

        state.coefficients.decay(self.params.delta, self.params.inertia_decay);

        StepOutcome { improved, converged: self.converged(state) }
    }
}

impl PopulationState for HybridState {
    fn best_score(&self) -> f64 {
        self.global.score
    }

    fn best_configuration(&self) -> &Configuration {
        &self.global.value.configuration
    }

    fn best_point(&self) -> Option<Position> {
        Some(self.global.value.point)
    }

    fn snapshot(&self) -> Configuration {
        self.swarm.configuration()
    }
}
