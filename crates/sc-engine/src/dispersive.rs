//! Dispersive random walk over a population of whole configurations.
//!
//! Each iteration every member takes an independent random step of
//! `σ · U(−1, 1)` per coordinate.  With probability `α` it is additionally
//! pulled towards the best configuration by `α · (best − previous)`, where
//! `previous` is the member before this iteration's walk.  Members are
//! clamped into the area and the whole generation is re-scored; its top
//! member replaces the running best only if strictly better.
//!
//! This variant has no early stop: it always runs to the budget unless
//! cancelled.

use sc_core::{DispersiveParams, SwarmConfig, SwarmRng, Variant};
use sc_population::{Configuration, GlobalBest, Population, scatter};

use crate::{EngineResult, EvalContext, PopulationState, StepOutcome, UpdateStrategy};

/// The basic update rule.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DispersiveWalk {
    pub params: DispersiveParams,
}

/// Population plus its running best (scored by fitness).
#[derive(Clone, Debug)]
pub struct DispersiveState {
    pub population: Population,
    pub best:       GlobalBest<Configuration>,
}

impl DispersiveWalk {
    pub fn new(params: DispersiveParams) -> Self {
        Self { params }
    }

    pub fn from_config(config: &SwarmConfig) -> Self {
        Self::new(config.dispersive)
    }

    /// One perturbed copy of `prev`.  Draw order: every coordinate of the
    /// walk, then the attraction coin.
    fn perturb(
        &self,
        prev: &Configuration,
        best: &Configuration,
        ctx:  &EvalContext<'_>,
        rng:  &mut SwarmRng,
    ) -> Configuration {
        let DispersiveParams { sigma, alpha, .. } = self.params;

        let mut fly = prev.clone();
        for p in fly.iter_mut() {
            *p += rng.symmetric(1.0) * sigma;
        }
        if rng.gen_bool(alpha) {
            for ((p, &b), &q) in fly.iter_mut().zip(best.iter()).zip(prev.iter()) {
                *p += (b - q) * alpha;
            }
        }
        fly.clamp_into(ctx.area);
        fly
    }
}

impl UpdateStrategy for DispersiveWalk {
    type State = DispersiveState;

    fn variant(&self) -> Variant {
        Variant::Dispersive
    }

    /// `initial` becomes member 0; the rest are scattered over the area.
    fn initialise(
        &self,
        initial: Configuration,
        ctx:     &EvalContext<'_>,
        rng:     &mut SwarmRng,
    ) -> EngineResult<DispersiveState> {
        let agent_count = initial.len();
        let size = self.params.population_size.max(1);

        let mut members = Vec::with_capacity(size);
        members.push(initial);
        for _ in 1..size {
            members.push(scatter(rng, ctx.area, agent_count));
        }

        let scores = score_all(&members, ctx);
        let (top, top_score) = argmax(&scores);
        let best = GlobalBest::new(members[top].clone(), top_score);

        let population = Population::new(members)?;
        Ok(DispersiveState { population, best })
    }

    fn step(
        &self,
        state: &mut DispersiveState,
        ctx:   &EvalContext<'_>,
        rng:   &mut SwarmRng,
    ) -> StepOutcome {
        let next: Vec<Configuration> = state
            .population
            .members()
            .iter()
            .map(|prev| self.perturb(prev, &state.best.value, ctx, rng))
            .collect();

        let scores = score_all(&next, ctx);
        let (top, top_score) = argmax(&scores);
        let improved = state.best.offer_with(top_score, || next[top].clone());

        // One perturbed copy per member, each the same length as its source.
        let replaced = state.population.replace(next);
        debug_assert!(replaced.is_ok(), "{replaced:?}");
        StepOutcome { improved, converged: false }
    }
}

impl PopulationState for DispersiveState {
    fn best_score(&self) -> f64 {
        self.best.score
    }

    fn best_configuration(&self) -> &Configuration {
        &self.best.value
    }

    fn snapshot(&self) -> Configuration {
        self.best.value.clone()
    }
}

// ── Scoring helpers ───────────────────────────────────────────────────────────

/// Fitness of every member, in member order.
fn score_all(members: &[Configuration], ctx: &EvalContext<'_>) -> Vec<f64> {
    #[cfg(not(feature = "parallel"))]
    {
        members.iter().map(|c| ctx.fitness.fitness(c, ctx.targets)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        members.par_iter().map(|c| ctx.fitness.fitness(c, ctx.targets)).collect()
    }
}

/// Index and value of the first maximum.  `scores` must be non-empty.
fn argmax(scores: &[f64]) -> (usize, f64) {
    scores
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(bi, bs), (i, s)| if s > bs { (i, s) } else { (bi, bs) })
}
