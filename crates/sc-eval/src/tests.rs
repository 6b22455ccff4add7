//! Unit tests for sc-eval.

use sc_core::{FitnessWeights, Position};

fn p(x: f64, y: f64) -> Position {
    Position::new(x, y)
}

// ── Coverage ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod coverage_tests {
    use super::*;
    use crate::{coverage, covered_count};

    #[test]
    fn zero_targets_is_zero_not_nan() {
        let c = coverage(&[p(1.0, 1.0)], &[], 10.0);
        assert_eq!(c, 0.0);
    }

    #[test]
    fn no_agents_covers_nothing() {
        let targets = [p(1.0, 1.0), p(5.0, 5.0)];
        assert_eq!(coverage(&[], &targets, 10.0), 0.0);
    }

    #[test]
    fn boundary_is_inclusive() {
        let agents = [p(0.0, 0.0)];
        let targets = [p(3.0, 4.0)]; // exactly 5 away
        assert_eq!(coverage(&agents, &targets, 5.0), 1.0);
        assert_eq!(coverage(&agents, &targets, 4.999), 0.0);
    }

    #[test]
    fn partial_coverage_fraction() {
        let agents = [p(0.0, 0.0)];
        let targets = [p(1.0, 0.0), p(2.0, 0.0), p(50.0, 0.0), p(60.0, 0.0)];
        assert_eq!(covered_count(&agents, &targets, 10.0), 2);
        assert_eq!(coverage(&agents, &targets, 10.0), 0.5);
    }

    #[test]
    fn target_covered_once_by_overlapping_agents() {
        let agents = [p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)];
        let targets = [p(1.0, 1.0)];
        assert_eq!(covered_count(&agents, &targets, 10.0), 1);
    }

    #[test]
    fn agent_on_uncovered_target_increases_coverage() {
        let mut agents = vec![p(0.0, 0.0)];
        let targets = [p(1.0, 1.0), p(80.0, 80.0)];
        let before = coverage(&agents, &targets, 5.0);
        agents.push(targets[1]);
        let after = coverage(&agents, &targets, 5.0);
        assert!(after > before, "{before} -> {after}");

        // Dropping a drone onto an already-covered user changes nothing.
        agents.push(targets[0]);
        assert_eq!(coverage(&agents, &targets, 5.0), after);
    }
}

// ── Resource allocation ───────────────────────────────────────────────────────

#[cfg(test)]
mod allocation_tests {
    use super::*;
    use crate::{assign_loads, resource_efficiency};

    #[test]
    fn nearest_agent_takes_the_target() {
        let agents = [p(0.0, 0.0), p(10.0, 0.0)];
        let targets = [p(1.0, 0.0), p(9.0, 0.0), p(8.0, 0.0)];
        assert_eq!(assign_loads(&agents, &targets, 20.0), vec![1, 2]);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let agents = [p(0.0, 0.0), p(10.0, 0.0)];
        let targets = [p(5.0, 0.0)];
        assert_eq!(assign_loads(&agents, &targets, 20.0), vec![1, 0]);
    }

    #[test]
    fn out_of_range_nearest_is_not_counted() {
        let agents = [p(0.0, 0.0), p(100.0, 0.0)];
        let targets = [p(30.0, 0.0)];
        assert_eq!(assign_loads(&agents, &targets, 20.0), vec![0, 0]);
    }

    #[test]
    fn even_spread_beats_concentration() {
        let targets = [p(0.0, 0.0), p(50.0, 0.0)];
        let spread = [p(0.0, 0.0), p(50.0, 0.0)];
        let piled = [p(25.0, 0.0), p(90.0, 90.0)];
        let e_spread = resource_efficiency(&spread, &targets, 30.0);
        let e_piled = resource_efficiency(&piled, &targets, 30.0);
        assert_eq!(e_spread, 1.0);
        assert_eq!(e_piled, 0.25); // (1/2) / 2 agents
    }

    #[test]
    fn idle_agents_contribute_zero() {
        let agents = [p(0.0, 0.0), p(90.0, 90.0)];
        let targets = [p(1.0, 1.0)];
        assert_eq!(resource_efficiency(&agents, &targets, 10.0), 0.5);
    }

    #[test]
    fn zero_agents_is_zero() {
        assert_eq!(resource_efficiency(&[], &[p(1.0, 1.0)], 10.0), 0.0);
    }
}

// ── Fitness ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fitness_tests {
    use super::*;
    use crate::FitnessEvaluator;

    #[test]
    fn single_agent_single_target_in_range() {
        // One drone, one user 5 away, radius 10.
        let eval = FitnessEvaluator::new(10.0, FitnessWeights::default());
        let s = eval.score(&[p(0.0, 0.0)], &[p(3.0, 4.0)]);
        assert_eq!(s.coverage, 1.0);
        assert_eq!(s.efficiency, 1.0);
        assert!((s.fitness - 1.0).abs() < 1e-12, "got {}", s.fitness);
    }

    #[test]
    fn weights_are_applied() {
        let w = FitnessWeights { coverage: 0.25, efficiency: 0.75 };
        let eval = FitnessEvaluator::new(5.0, w);
        // Two users on one of two drones: coverage 1, efficiency (1/2)/2.
        let s = eval.score(&[p(0.0, 0.0), p(90.0, 90.0)], &[p(1.0, 0.0), p(0.0, 1.0)]);
        assert_eq!(s.coverage, 1.0);
        assert_eq!(s.efficiency, 0.25);
        assert!((s.fitness - (0.25 + 0.75 * 0.25)).abs() < 1e-12);
    }

    #[test]
    fn more_coverage_never_lowers_fitness_at_equal_load() {
        let eval = FitnessEvaluator::new(5.0, FitnessWeights::default());
        let targets = [p(0.0, 0.0), p(50.0, 50.0)];
        // Both layouts serve one user per loaded drone; the second serves two.
        let one = eval.score(&[p(0.0, 0.0), p(90.0, 0.0)], &targets);
        let two = eval.score(&[p(0.0, 0.0), p(50.0, 50.0)], &targets);
        assert!(two.coverage > one.coverage);
        assert!(two.fitness > one.fitness);
    }

    #[test]
    fn fitness_is_bounded() {
        let eval = FitnessEvaluator::new(30.0, FitnessWeights::default());
        let agents = [p(10.0, 10.0), p(40.0, 40.0), p(41.0, 40.0)];
        let targets = [p(12.0, 9.0), p(38.0, 44.0), p(99.0, 1.0)];
        let s = eval.score(&agents, &targets);
        assert!((0.0..=1.0).contains(&s.coverage));
        assert!((0.0..=1.0).contains(&s.efficiency));
        assert!((0.0..=1.0).contains(&s.fitness));
    }
}

// ── Repulsion ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod repulsion_tests {
    use super::*;
    use crate::RepulsionModel;

    #[test]
    fn out_of_range_pairs_feel_nothing() {
        let model = RepulsionModel::new(10.0, 1.5);
        let f = model.forces(&[p(0.0, 0.0), p(20.0, 0.0)]);
        assert_eq!(f, vec![Position::ORIGIN, Position::ORIGIN]);
    }

    #[test]
    fn linear_magnitude_along_connecting_line() {
        let model = RepulsionModel::new(10.0, 1.5);
        let f = model.forces(&[p(0.0, 0.0), p(4.0, 0.0)]);
        // (10 - 4) * 1.5 = 9, agent 0 pushed to -x.
        assert_eq!(f[0], p(-9.0, 0.0));
        assert_eq!(f[1], p(9.0, 0.0));
    }

    #[test]
    fn pairwise_antisymmetry() {
        let model = RepulsionModel::new(10.0, 2.0);
        let a = p(3.0, 7.0);
        let b = p(5.5, 4.0);
        let fa = model.pair_force(a, b);
        let fb = model.pair_force(b, a);
        assert!((fa.x + fb.x).abs() < 1e-12);
        assert!((fa.y + fb.y).abs() < 1e-12);
    }

    #[test]
    fn net_forces_cancel() {
        let model = RepulsionModel::new(10.0, 1.5);
        let agents = [p(0.0, 0.0), p(3.0, 1.0), p(1.0, 4.0), p(50.0, 50.0)];
        let f = model.forces(&agents);
        let total = f.iter().fold(Position::ORIGIN, |acc, &v| acc + v);
        assert!(total.norm() < 1e-9, "net force {total}");
    }

    #[test]
    fn coincident_agents_use_fallback_direction() {
        let model = RepulsionModel::new(10.0, 1.5);
        let f = model.forces(&[p(5.0, 5.0), p(5.0, 5.0)]);
        assert!(f[0].is_finite() && f[1].is_finite());
        assert_eq!(f[0], p(15.0, 0.0));
        assert_eq!(f[1], -f[0]);
    }

    #[test]
    fn zero_threshold_disables_repulsion() {
        let model = RepulsionModel::new(0.0, 1.5);
        let f = model.forces(&[p(5.0, 5.0), p(5.0, 5.0)]);
        assert_eq!(f, vec![Position::ORIGIN, Position::ORIGIN]);
    }
}
