//! Coverage evaluator.

use sc_core::Position;

/// Number of targets within `radius` of at least one agent.
///
/// The boundary is inclusive: a target at exactly `radius` is covered.
pub fn covered_count(agents: &[Position], targets: &[Position], radius: f64) -> usize {
    targets
        .iter()
        .filter(|&&t| agents.iter().any(|&a| a.distance(t) <= radius))
        .count()
}

/// Fraction of targets covered, in `[0, 1]`.
///
/// Zero targets yields `0.0` rather than `NaN`.
pub fn coverage(agents: &[Position], targets: &[Position], radius: f64) -> f64 {
    if targets.is_empty() {
        return 0.0;
    }
    covered_count(agents, targets, radius) as f64 / targets.len() as f64
}
