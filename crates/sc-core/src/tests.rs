//! Unit tests for sc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, TargetId};

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(TargetId(100) > TargetId(99));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "drone-7");
        assert_eq!(TargetId(3).to_string(), "user-3");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Area, Position};

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn vector_arithmetic() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(0.5, -1.0);
        assert_eq!(a + b, Position::new(1.5, 1.0));
        assert_eq!(a - b, Position::new(0.5, 3.0));
        assert_eq!(a * 2.0, Position::new(2.0, 4.0));
        assert_eq!(-a, Position::new(-1.0, -2.0));
    }

    #[test]
    fn centroid_of_square_corners() {
        let pts = [
            Position::new(0.0, 0.0),
            Position::new(10.0, 0.0),
            Position::new(10.0, 10.0),
            Position::new(0.0, 10.0),
        ];
        assert_eq!(Position::centroid(pts), Some(Position::new(5.0, 5.0)));
        assert_eq!(Position::centroid(std::iter::empty()), None);
    }

    #[test]
    fn clamp_into_area() {
        let area = Area::new(100.0);
        assert_eq!(area.clamp(Position::new(-5.0, 150.0)), Position::new(0.0, 100.0));
        assert_eq!(area.clamp(Position::new(20.0, 30.0)), Position::new(20.0, 30.0));
        assert_eq!(area.clamp(Position::new(f64::NAN, 1.0)), Position::new(0.0, 1.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let area = Area::new(10.0);
        assert!(area.contains(Position::new(0.0, 10.0)));
        assert!(!area.contains(Position::new(10.0001, 5.0)));
        assert!(!area.contains(Position::new(f64::NAN, 5.0)));
    }
}

#[cfg(test)]
mod iteration {
    use crate::Iteration;

    #[test]
    fn next_and_display() {
        let i = Iteration(10);
        assert_eq!(i.next(), Iteration(11));
        assert_eq!(Iteration::ZERO.next().next(), Iteration(2));
        assert_eq!(i.to_string(), "#10");
    }
}

#[cfg(test)]
mod rng {
    use crate::{Area, SwarmRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SwarmRng::new(12345);
        let mut r2 = SwarmRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SwarmRng::new(1);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b);
    }

    #[test]
    fn symmetric_in_bounds() {
        let mut rng = SwarmRng::new(0);
        for _ in 0..1000 {
            let v = rng.symmetric(0.5);
            assert!((-0.5..0.5).contains(&v.x));
            assert!((-0.5..0.5).contains(&v.y));
        }
    }

    #[test]
    fn point_in_area() {
        let mut rng = SwarmRng::new(9);
        let area = Area::new(250.0);
        for _ in 0..1000 {
            assert!(area.contains(rng.point_in(area)));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SwarmRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod config {
    use crate::{ConfigError, SwarmConfig};

    #[test]
    fn defaults_are_valid() {
        assert_eq!(SwarmConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_non_positive_radius() {
        let cfg = SwarmConfig { coverage_radius: 0.0, ..SwarmConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::CoverageRadius(0.0)));
    }

    #[test]
    fn rejects_bad_area() {
        let cfg = SwarmConfig { area_side: f64::INFINITY, ..SwarmConfig::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::AreaSide(_))));
    }

    #[test]
    fn rejects_weights_not_summing_to_one() {
        let mut cfg = SwarmConfig::default();
        cfg.weights.coverage = 0.5;
        cfg.weights.efficiency = 0.4;
        assert!(matches!(cfg.validate(), Err(ConfigError::WeightSum(_))));
    }

    #[test]
    fn rejects_negative_weight() {
        let mut cfg = SwarmConfig::default();
        cfg.weights.coverage = 1.5;
        cfg.weights.efficiency = -0.5;
        assert!(matches!(cfg.validate(), Err(ConfigError::NegativeWeight { .. })));
    }

    #[test]
    fn rejects_empty_population() {
        let mut cfg = SwarmConfig::default();
        cfg.dispersive.population_size = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyPopulation));
    }

    #[test]
    fn rejects_probability_above_one() {
        let mut cfg = SwarmConfig::default();
        cfg.dispersive.alpha = 1.5;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::OutsideUnit { name: "dispersive.alpha", value: 1.5 })
        );
    }

    #[test]
    fn rejects_negative_hybrid_coefficient() {
        let mut cfg = SwarmConfig::default();
        cfg.hybrid.beta = -0.1;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Negative { name: "hybrid.beta", value: -0.1 })
        );
    }

    #[test]
    fn rejects_negative_tolerance() {
        let cfg = SwarmConfig { early_stop_tolerance: Some(-1.0), ..SwarmConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SwarmConfig { early_stop_tolerance: None, ..SwarmConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn error_messages_are_descriptive() {
        let msg = ConfigError::CoverageRadius(-2.0).to_string();
        assert!(msg.contains("coverage radius"), "got {msg}");
    }
}
