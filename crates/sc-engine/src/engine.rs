//! The `Engine` struct and its iteration loop.

use sc_core::{Iteration, Position, SwarmConfig, SwarmRng, Variant};
use sc_eval::Score;
use sc_population::{Configuration, Target};
use tracing::{debug, info, warn};

use crate::{
    CancelToken, EngineObserver, EvalContext, PopulationState, StepReport, Termination,
    TerminationPolicy, UpdateStrategy,
};

// ── Results ───────────────────────────────────────────────────────────────────

/// Everything a finished run hands back to its caller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunOutcome {
    pub variant:       Variant,
    /// Best layout found.
    pub best:          Configuration,
    /// Full metric breakdown of `best`.
    pub score:         Score,
    /// The strategy's own best score (fitness for dispersive, coverage for
    /// hybrid).
    pub best_score:    f64,
    /// Hybrid global-best point; `None` for the dispersive variant.
    pub best_point:    Option<Position>,
    /// One layout per completed iteration (empty if recording is off).
    pub trajectory:    Vec<Configuration>,
    /// Completed iterations.
    pub iterations:    u64,
    pub termination:   Termination,
}

/// Whether a polled engine is still iterating.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RunStatus {
    Running,
    Finished,
}

/// Intermediate state exposed to polling clients between ticks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PollSnapshot {
    pub status:    RunStatus,
    pub iteration: u64,
    pub positions: Vec<Position>,
    /// Fraction of users covered by `positions`.
    pub coverage:  f64,
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Owns one optimisation run: users, strategy, evolving state, RNG, and the
/// replay trajectory.
///
/// The engine is single-threaded and never blocks.  It assumes exclusive
/// access; an orchestration layer that ticks it from a timer must serialise
/// its calls.  Independent runs share nothing and may proceed concurrently.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder].
pub struct Engine<S: UpdateStrategy> {
    /// Validated by the builder; read-only from outside the crate.
    pub(crate) config: SwarmConfig,

    /// The users, in id order.
    pub targets: Vec<Target>,

    /// The update rule.
    pub strategy: S,

    /// Evolving population.  Mutated in place by every step.
    pub state: S::State,

    /// Run-level RNG seeded from `config.seed`.
    pub rng: SwarmRng,

    pub(crate) target_positions: Vec<Position>,
    pub(crate) policy:           TerminationPolicy,
    pub(crate) cancel:           CancelToken,
    pub(crate) iteration:        Iteration,
    pub(crate) converged:        bool,
    pub(crate) termination:      Option<Termination>,
    pub(crate) trajectory:       Vec<Configuration>,
}

impl<S: UpdateStrategy> Engine<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// The configuration this run was built with.
    #[inline]
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// Completed iterations so far.
    #[inline]
    pub fn iteration(&self) -> Iteration {
        self.iteration
    }

    /// Why the run stopped, once it has.
    #[inline]
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.termination.is_some()
    }

    /// A handle to this run's cancellation flag.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Recorded layouts so far, one per completed iteration.
    pub fn trajectory(&self) -> &[Configuration] {
        &self.trajectory
    }

    /// Advance exactly one iteration, ignoring budget and cancellation.
    ///
    /// Useful for tests and for callers that apply their own stop rules.
    pub fn step(&mut self) -> StepReport {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let ctx = EvalContext::new(&self.target_positions, &self.config);
        let outcome = self.strategy.step(&mut self.state, &ctx, &mut self.rng);

        self.iteration = self.iteration.next();
        self.converged = outcome.converged;
        if self.config.record_trajectory {
            self.trajectory.push(self.state.snapshot());
        }

        let report = StepReport {
            iteration:  self.iteration,
            best_score: self.state.best_score(),
            improved:   outcome.improved,
            converged:  outcome.converged,
        };
        if report.improved {
            debug!(iteration = report.iteration.0, best = report.best_score, "global best improved");
        }
        report
    }

    /// Advance one iteration unless the run is over.
    ///
    /// Checks cancellation, convergence, and the budget first; returns
    /// `None` (and records the reason) once any of them fires.  This is the
    /// call an external ticking loop makes once per time unit.
    pub fn tick(&mut self) -> Option<StepReport> {
        if self.termination.is_some() {
            return None;
        }
        if let Some(reason) = self.policy.check(self.iteration, self.converged, &self.cancel) {
            self.finish_with(reason);
            return None;
        }
        Some(self.step())
    }

    /// Run until terminated, calling observer hooks at every iteration
    /// boundary.  Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    pub fn run<O: EngineObserver>(mut self, observer: &mut O) -> RunOutcome {
        loop {
            if self.termination.is_some() {
                break;
            }
            if let Some(reason) = self.policy.check(self.iteration, self.converged, &self.cancel) {
                self.finish_with(reason);
                break;
            }

            observer.on_iteration_start(self.iteration.next());
            let report = self.step();
            observer.on_iteration_end(&report);
            match self.trajectory.last() {
                Some(layout) if self.config.record_trajectory => {
                    observer.on_snapshot(report.iteration, layout);
                }
                _ => observer.on_snapshot(report.iteration, &self.state.snapshot()),
            }
        }

        let termination = self.termination.unwrap_or(Termination::Cancelled);
        observer.on_run_end(self.iteration, termination);
        self.finish()
    }

    /// Current layout plus its coverage, for polling clients.
    pub fn snapshot(&self) -> PollSnapshot {
        let current = self.state.current();
        let coverage = sc_eval::coverage(&current, &self.target_positions, self.config.coverage_radius);
        PollSnapshot {
            status:    if self.is_finished() { RunStatus::Finished } else { RunStatus::Running },
            iteration: self.iteration.0,
            positions: current.into_inner(),
            coverage,
        }
    }

    /// Stop and collect the result.
    ///
    /// A run abandoned before any stop rule fired is reported as
    /// [`Termination::Cancelled`].
    pub fn finish(mut self) -> RunOutcome {
        if self.termination.is_none() {
            let reason = self
                .policy
                .check(self.iteration, self.converged, &self.cancel)
                .unwrap_or(Termination::Cancelled);
            self.finish_with(reason);
        }

        let best = self.state.best_configuration().clone();
        let score = sc_eval::FitnessEvaluator::from_config(&self.config)
            .score(&best, &self.target_positions);

        RunOutcome {
            variant:     self.strategy.variant(),
            score,
            best_score:  self.state.best_score(),
            best_point:  self.state.best_point(),
            best,
            trajectory:  self.trajectory,
            iterations:  self.iteration.0,
            termination: self.termination.unwrap_or(Termination::Cancelled),
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn finish_with(&mut self, reason: Termination) {
        if self.termination.is_some() {
            return;
        }
        self.termination = Some(reason);
        if reason == Termination::Cancelled {
            warn!(iteration = self.iteration.0, "run cancelled");
        }
        info!(
            variant = %self.strategy.variant(),
            iterations = self.iteration.0,
            termination = %reason,
            best = self.state.best_score(),
            "run finished"
        );
    }
}
