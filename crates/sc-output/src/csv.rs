//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trajectory.csv`
//! - `iterations.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{IterationRow, OutputResult, TrajectoryRow};

pub const TRAJECTORY_FILE: &str = "trajectory.csv";
pub const ITERATIONS_FILE: &str = "iterations.csv";

/// Writes run output to two CSV files.
pub struct CsvWriter {
    trajectory: Writer<File>,
    iterations: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (or truncate) both files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut trajectory = Writer::from_path(dir.join(TRAJECTORY_FILE))?;
        trajectory.write_record(["iteration", "agent_id", "x", "y"])?;

        let mut iterations = Writer::from_path(dir.join(ITERATIONS_FILE))?;
        iterations.write_record(["iteration", "best_score", "improved"])?;

        Ok(Self {
            trajectory,
            iterations,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trajectory(&mut self, rows: &[TrajectoryRow]) -> OutputResult<()> {
        for row in rows {
            self.trajectory.write_record(&[
                row.iteration.to_string(),
                row.agent_id.0.to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_iteration(&mut self, row: &IterationRow) -> OutputResult<()> {
        self.iterations.write_record(&[
            row.iteration.to_string(),
            row.best_score.to_string(),
            (row.improved as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trajectory.flush()?;
        self.iterations.flush()?;
        Ok(())
    }
}
