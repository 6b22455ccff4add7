//! `TrajectoryObserver<W>` — bridges `EngineObserver` to an `OutputWriter`.

use sc_core::Iteration;
use sc_engine::{EngineObserver, StepReport, Termination};
use sc_population::Configuration;
use tracing::warn;

use crate::row::{IterationRow, TrajectoryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// An [`EngineObserver`] that streams every recorded layout and iteration
/// summary to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TrajectoryObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TrajectoryObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> EngineObserver for TrajectoryObserver<W> {
    fn on_iteration_end(&mut self, report: &StepReport) {
        let result = self.writer.write_iteration(&IterationRow::from(report));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, iteration: Iteration, configuration: &Configuration) {
        let rows = TrajectoryRow::from_layout(iteration, configuration);
        if !rows.is_empty() {
            let result = self.writer.write_trajectory(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _completed: Iteration, _termination: Termination) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
