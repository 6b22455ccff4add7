//! Plain data row types written by output backends.

use sc_core::{AgentId, Iteration};
use sc_engine::StepReport;
use sc_population::Configuration;

/// One drone's position after a given iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRow {
    pub iteration: u64,
    pub agent_id:  AgentId,
    pub x:         f64,
    pub y:         f64,
}

impl TrajectoryRow {
    /// One row per drone of `layout`, in agent order.
    pub fn from_layout(iteration: Iteration, layout: &Configuration) -> Vec<TrajectoryRow> {
        layout
            .iter()
            .enumerate()
            .map(|(i, p)| TrajectoryRow { iteration: iteration.0, agent_id: AgentId(i as u32), x: p.x, y: p.y })
            .collect()
    }
}

/// Best-score progress for one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRow {
    pub iteration:  u64,
    pub best_score: f64,
    pub improved:   bool,
}

impl From<&StepReport> for IterationRow {
    fn from(report: &StepReport) -> Self {
        Self {
            iteration:  report.iteration.0,
            best_score: report.best_score,
            improved:   report.improved,
        }
    }
}
