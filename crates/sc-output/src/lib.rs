//! `sc-output` — replay export for `swarm_cover` runs.
//!
//! | Backend  | Files created                        |
//! |----------|--------------------------------------|
//! | CSV      | `trajectory.csv`, `iterations.csv`   |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`TrajectoryObserver`], which implements `sc_engine::EngineObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sc_output::{CsvWriter, TrajectoryObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = TrajectoryObserver::new(writer);
//! let outcome = sc_engine::run(users, drones, config, token, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrajectoryObserver;
pub use row::{IterationRow, TrajectoryRow};
pub use writer::OutputWriter;
