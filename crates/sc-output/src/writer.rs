//! The `OutputWriter` trait implemented by all backend writers.

use crate::{IterationRow, OutputResult, TrajectoryRow};

/// Sink for replay data.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`TrajectoryObserver::take_error`][crate::TrajectoryObserver::take_error].
pub trait OutputWriter {
    /// Write the positions of every drone for one iteration.
    fn write_trajectory(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()>;

    /// Write one iteration summary row.
    fn write_iteration(&mut self, row: &IterationRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
