//! Iteration budget, early stop, and cooperative cancellation.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sc_core::{Iteration, SwarmConfig};

/// Why a run stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Termination {
    /// The iteration budget was consumed.  The normal ending.
    BudgetExhausted,
    /// The strategy's early-stop test fired.
    Converged,
    /// The cancellation token was set between iterations.
    Cancelled,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Termination::BudgetExhausted => "budget exhausted",
            Termination::Converged       => "converged",
            Termination::Cancelled       => "cancelled",
        };
        f.write_str(s)
    }
}

// ── CancelToken ───────────────────────────────────────────────────────────────

/// Shared stop flag.
///
/// Clone it, hand one copy to the engine and keep the other; calling
/// [`cancel`][Self::cancel] from any thread makes the engine stop before its
/// next iteration.  Each run gets its own token, so concurrent runs never
/// interfere.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

// ── TerminationPolicy ─────────────────────────────────────────────────────────

/// Decides, between iterations, whether the run is over.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TerminationPolicy {
    pub max_iterations: u64,
}

impl TerminationPolicy {
    pub fn from_config(config: &SwarmConfig) -> Self {
        Self { max_iterations: config.max_iterations }
    }

    /// `completed` iterations have run; `converged` is the last step's
    /// early-stop flag.  Cancellation wins over convergence, which wins
    /// over the budget.
    pub fn check(
        &self,
        completed: Iteration,
        converged: bool,
        cancel:    &CancelToken,
    ) -> Option<Termination> {
        if cancel.is_cancelled() {
            Some(Termination::Cancelled)
        } else if converged {
            Some(Termination::Converged)
        } else if completed.0 >= self.max_iterations {
            Some(Termination::BudgetExhausted)
        } else {
            None
        }
    }
}
