//! Optimisation iteration counter.

use std::fmt;

/// A monotonically increasing iteration index.
///
/// `Iteration(0)` is the state before any update step; the engine advances
/// the counter once per completed step.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iteration(pub u64);

impl Iteration {
    pub const ZERO: Iteration = Iteration(0);

    /// The next iteration.
    #[inline]
    pub fn next(self) -> Iteration {
        Iteration(self.0 + 1)
    }
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
