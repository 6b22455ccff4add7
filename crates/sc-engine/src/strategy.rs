//! The `UpdateStrategy` trait — the seam between the engine loop and the
//! two update rules.

use sc_core::{Iteration, Position, SwarmRng, Variant};
use sc_population::Configuration;

use crate::{EngineResult, EvalContext};

/// What a single strategy step observed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// The best-so-far record was replaced this step.
    pub improved:  bool,
    /// The strategy's own early-stop test fired.
    pub converged: bool,
}

/// Per-iteration summary handed to observers and step-wise callers.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    /// The iteration just completed (1-based).
    pub iteration:  Iteration,
    /// Best score after this iteration.  Never lower than the previous one.
    pub best_score: f64,
    pub improved:   bool,
    pub converged:  bool,
}

/// Read access to a strategy's evolving state.
pub trait PopulationState {
    /// Best score observed so far (fitness or coverage, per variant).
    fn best_score(&self) -> f64;

    /// Drone layout that earned [`best_score`][Self::best_score].
    fn best_configuration(&self) -> &Configuration;

    /// Single best point, for variants that track one.
    fn best_point(&self) -> Option<Position> {
        None
    }

    /// Layout recorded into the replay trajectory after each iteration.
    fn snapshot(&self) -> Configuration;

    /// Layout a live display should show right now.
    fn current(&self) -> Configuration {
        self.snapshot()
    }
}

/// Pluggable update rule.
///
/// A strategy holds only immutable parameters; everything that changes over
/// a run lives in [`State`][Self::State], so the same strategy value can
/// drive any number of independent runs.
pub trait UpdateStrategy {
    type State: PopulationState;

    /// Which configured variant this strategy implements.
    fn variant(&self) -> Variant;

    /// Build the starting state from the caller's initial drone layout.
    fn initialise(
        &self,
        initial: Configuration,
        ctx:     &EvalContext<'_>,
        rng:     &mut SwarmRng,
    ) -> EngineResult<Self::State>;

    /// Advance `state` by exactly one iteration.
    fn step(
        &self,
        state: &mut Self::State,
        ctx:   &EvalContext<'_>,
        rng:   &mut SwarmRng,
    ) -> StepOutcome;
}
