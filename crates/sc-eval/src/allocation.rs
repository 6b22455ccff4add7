//! Resource allocation evaluator.
//!
//! Each target attaches to its nearest agent (lowest index wins ties).  The
//! attachment only counts as load when that nearest agent is within the
//! coverage radius; a target whose nearest agent is out of range is simply
//! unserved, even if it lies equidistant from another agent.

use sc_core::Position;

/// Per-agent count of targets served.  Length equals `agents.len()`.
pub fn assign_loads(agents: &[Position], targets: &[Position], radius: f64) -> Vec<u32> {
    let mut loads = vec![0u32; agents.len()];
    for &t in targets {
        let mut nearest: Option<(usize, f64)> = None;
        for (i, &a) in agents.iter().enumerate() {
            let d = a.distance(t);
            // Strict `<` keeps the lowest index on ties.
            if nearest.is_none_or(|(_, best)| d < best) {
                nearest = Some((i, d));
            }
        }
        if let Some((i, d)) = nearest {
            if d <= radius {
                loads[i] += 1;
            }
        }
    }
    loads
}

/// `Σ (1 / load)` over loaded agents, divided by the total agent count.
///
/// Rewards spreading users across many drones: one user per drone scores 1,
/// everything piled on one drone of many scores close to 0.  Idle agents
/// contribute nothing.  Zero agents yields `0.0`.
pub fn resource_efficiency(agents: &[Position], targets: &[Position], radius: f64) -> f64 {
    if agents.is_empty() {
        return 0.0;
    }
    let sum: f64 = assign_loads(agents, targets, radius)
        .into_iter()
        .filter(|&n| n > 0)
        .map(|n| 1.0 / n as f64)
        .sum();
    sum / agents.len() as f64
}
