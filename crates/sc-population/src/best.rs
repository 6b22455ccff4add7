//! Best-so-far bookkeeping.

/// A value together with the score that earned it.
///
/// Replacement requires a strictly greater score, so `score` is
/// non-decreasing over the lifetime of the record and ties keep the value
/// that was found first.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalBest<T> {
    pub value: T,
    pub score: f64,
}

impl<T> GlobalBest<T> {
    pub fn new(value: T, score: f64) -> Self {
        Self { value, score }
    }

    /// Offer a candidate.  `make` is only called when `score` wins, so
    /// callers can defer cloning a large value.  Returns `true` on
    /// replacement.
    pub fn offer_with(&mut self, score: f64, make: impl FnOnce() -> T) -> bool {
        if score > self.score {
            self.value = make();
            self.score = score;
            true
        } else {
            false
        }
    }
}
