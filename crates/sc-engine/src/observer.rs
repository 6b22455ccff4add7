//! Engine observer trait for progress reporting and data collection.

use sc_core::Iteration;
use sc_population::Configuration;

use crate::{StepReport, Termination};

/// Callbacks invoked by [`Engine::run`][crate::Engine::run] at key points in
/// the iteration loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl EngineObserver for ProgressPrinter {
///     fn on_iteration_end(&mut self, report: &StepReport) {
///         if report.iteration.0 % self.interval == 0 {
///             println!("{}: best {:.4}", report.iteration, report.best_score);
///         }
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Called before each iteration with the iteration about to run.
    fn on_iteration_start(&mut self, _iteration: Iteration) {}

    /// Called after each iteration.
    fn on_iteration_end(&mut self, _report: &StepReport) {}

    /// Called after each iteration with the layout recorded for replay
    /// (running best for the dispersive variant, live agents for hybrid).
    fn on_snapshot(&mut self, _iteration: Iteration, _configuration: &Configuration) {}

    /// Called once when the run stops.
    fn on_run_end(&mut self, _completed: Iteration, _termination: Termination) {}
}

/// An [`EngineObserver`] that does nothing.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
