//! Fluent builder for constructing an [`Engine`].

use sc_core::{Iteration, SwarmConfig, SwarmRng};
use sc_population::{Configuration, Target, target_positions};

use crate::{
    CancelToken, Engine, EngineError, EngineResult, EvalContext, TerminationPolicy,
    UpdateStrategy,
};

/// Fluent builder for [`Engine<S>`].
///
/// # Required inputs
///
/// - [`SwarmConfig`] — radius, weights, coefficients, budget, seed, …
/// - `Vec<Target>` — the users to cover
/// - [`Configuration`] — one starting position per drone
/// - `S: UpdateStrategy` — [`DispersiveWalk`][crate::DispersiveWalk] or
///   [`HybridSwarm`][crate::HybridSwarm]
///
/// # Optional inputs
///
/// | Method               | Default             |
/// |----------------------|---------------------|
/// | `.cancel_token(t)`   | A fresh, unset flag |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(config, users, drones, HybridSwarm::from_config(&config))
///     .cancel_token(token.clone())
///     .build()?;
/// while let Some(report) = engine.tick() {
///     publish(engine.snapshot());
/// }
/// ```
pub struct EngineBuilder<S: UpdateStrategy> {
    config:   SwarmConfig,
    targets:  Vec<Target>,
    initial:  Configuration,
    strategy: S,
    cancel:   Option<CancelToken>,
}

impl<S: UpdateStrategy> EngineBuilder<S> {
    /// Create a builder with all required inputs.
    pub fn new(config: SwarmConfig, targets: Vec<Target>, initial: Configuration, strategy: S) -> Self {
        Self { config, targets, initial, strategy, cancel: None }
    }

    /// Share a cancellation flag with the caller.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Validate every input, initialise the strategy's state, and return a
    /// ready-to-run [`Engine`].  Nothing is validated after this point.
    pub fn build(self) -> EngineResult<Engine<S>> {
        self.config.validate()?;

        if self.initial.is_empty() {
            return Err(EngineError::NoAgents);
        }
        if self.targets.is_empty() {
            return Err(EngineError::NoTargets);
        }

        let area = self.config.area();
        if let Some(index) = self.initial.iter().position(|&p| !(p.is_finite() && area.contains(p))) {
            return Err(EngineError::OutOfBounds { what: "drone", index });
        }
        if let Some(index) = self
            .targets
            .iter()
            .position(|t| !(t.position.is_finite() && area.contains(t.position)))
        {
            return Err(EngineError::OutOfBounds { what: "user", index });
        }

        let positions = target_positions(&self.targets);
        let mut rng = SwarmRng::new(self.config.seed);
        let state = {
            let ctx = EvalContext::new(&positions, &self.config);
            self.strategy.initialise(self.initial, &ctx, &mut rng)?
        };

        Ok(Engine {
            policy:           TerminationPolicy::from_config(&self.config),
            cancel:           self.cancel.unwrap_or_default(),
            target_positions: positions,
            config:           self.config,
            targets:          self.targets,
            strategy:         self.strategy,
            state,
            rng,
            iteration:        Iteration::ZERO,
            converged:        false,
            termination:      None,
            trajectory:       Vec::new(),
        })
    }
}
