//! Run configuration.
//!
//! # Design
//!
//! `SwarmConfig` is a flat bag of public fields grouped into small parameter
//! structs, one per engine component.  `Default` reproduces the reference
//! constants so applications only override what they care about, and with
//! the `serde` feature a partial JSON file deserialises on top of the
//! defaults.
//!
//! Validation is eager: [`SwarmConfig::validate`] is called by the engine
//! builder before any iteration runs, and nothing downstream re-checks.

use crate::{Area, ConfigError, ConfigResult};

/// Tolerance for the `w1 + w2 == 1` check.
const WEIGHT_SUM_EPSILON: f64 = 1e-9;

// ── Variant ───────────────────────────────────────────────────────────────────

/// Which update rule drives the run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variant {
    /// Population of whole configurations, random walk plus best attraction.
    Dispersive,
    /// Individual agents with personal/global best, repulsion and decay.
    #[default]
    Hybrid,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Variant::Dispersive => "dispersive",
            Variant::Hybrid     => "hybrid",
        };
        f.write_str(s)
    }
}

// ── Parameter groups ──────────────────────────────────────────────────────────

/// Weights of the two fitness terms.  Must be non-negative and sum to 1.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FitnessWeights {
    pub coverage:   f64,
    pub efficiency: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self { coverage: 0.7, efficiency: 0.3 }
    }
}

/// Pairwise separation force parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RepulsionParams {
    /// Pairs closer than this push each other apart.
    pub distance: f64,
    /// Force per unit of intrusion below `distance`.
    pub factor:   f64,
}

impl Default for RepulsionParams {
    fn default() -> Self {
        Self { distance: 10.0, factor: 1.5 }
    }
}

/// Parameters of the dispersive random-walk variant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DispersiveParams {
    /// Number of candidate configurations in the population.
    pub population_size: usize,
    /// Random-walk amplitude per coordinate.
    pub sigma:           f64,
    /// Probability of, and scale for, the pull towards the best configuration.
    pub alpha:           f64,
}

impl Default for DispersiveParams {
    fn default() -> Self {
        Self { population_size: 20, sigma: 0.1, alpha: 0.5 }
    }
}

/// Parameters of the hybrid personal/global-best variant.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HybridParams {
    /// Exploration amplitude.
    pub alpha:          f64,
    /// Attraction to the global best.
    pub beta:           f64,
    /// Scale of the inertia term.
    pub gamma:          f64,
    /// Per-iteration multiplicative decay of `alpha`, `beta`, `gamma`.
    pub delta:          f64,
    /// Initial pull towards the personal best.
    pub inertia_weight: f64,
    /// Per-iteration multiplier applied to `inertia_weight`.
    pub inertia_decay:  f64,
}

impl Default for HybridParams {
    fn default() -> Self {
        Self {
            alpha:          2.0,
            beta:           0.5,
            gamma:          1.0,
            delta:          0.01,
            inertia_weight: 0.9,
            inertia_decay:  0.99,
        }
    }
}

// ── SwarmConfig ───────────────────────────────────────────────────────────────

/// Top-level configuration of one optimisation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwarmConfig {
    /// Update rule.
    pub variant: Variant,

    /// Side length `L` of the square service area `[0, L]²`.
    pub area_side: f64,

    /// A user is covered when some drone is within this distance (inclusive).
    pub coverage_radius: f64,

    pub weights:    FitnessWeights,
    pub repulsion:  RepulsionParams,
    pub dispersive: DispersiveParams,
    pub hybrid:     HybridParams,

    /// Iteration budget.  Exhausting it is the normal way a run ends.
    pub max_iterations: u64,

    /// Hybrid early stop: distance between global best and swarm centroid.
    /// `None` disables the test.
    pub early_stop_tolerance: Option<f64>,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Keep one configuration snapshot per iteration for replay.
    pub record_trajectory: bool,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            variant:              Variant::default(),
            area_side:            100.0,
            coverage_radius:      20.0,
            weights:              FitnessWeights::default(),
            repulsion:            RepulsionParams::default(),
            dispersive:           DispersiveParams::default(),
            hybrid:               HybridParams::default(),
            max_iterations:       100,
            early_stop_tolerance: Some(1e-3),
            seed:                 42,
            record_trajectory:    true,
        }
    }
}

impl SwarmConfig {
    /// The service area described by `area_side`.
    #[inline]
    pub fn area(&self) -> Area {
        Area::new(self.area_side)
    }

    /// Reject any configuration the engine cannot run meaningfully.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.area_side.is_finite() && self.area_side > 0.0) {
            return Err(ConfigError::AreaSide(self.area_side));
        }
        if !(self.coverage_radius.is_finite() && self.coverage_radius > 0.0) {
            return Err(ConfigError::CoverageRadius(self.coverage_radius));
        }

        let w = self.weights;
        if !(w.coverage >= 0.0 && w.efficiency >= 0.0) {
            return Err(ConfigError::NegativeWeight {
                coverage:   w.coverage,
                efficiency: w.efficiency,
            });
        }
        let sum = w.coverage + w.efficiency;
        if !((sum - 1.0).abs() <= WEIGHT_SUM_EPSILON) {
            return Err(ConfigError::WeightSum(sum));
        }

        non_negative("repulsion.distance", self.repulsion.distance)?;
        non_negative("repulsion.factor", self.repulsion.factor)?;

        if self.dispersive.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        non_negative("dispersive.sigma", self.dispersive.sigma)?;
        unit_interval("dispersive.alpha", self.dispersive.alpha)?;

        let h = self.hybrid;
        non_negative("hybrid.alpha", h.alpha)?;
        non_negative("hybrid.beta", h.beta)?;
        non_negative("hybrid.gamma", h.gamma)?;
        non_negative("hybrid.inertia_weight", h.inertia_weight)?;
        unit_interval("hybrid.delta", h.delta)?;
        unit_interval("hybrid.inertia_decay", h.inertia_decay)?;

        if let Some(tol) = self.early_stop_tolerance {
            non_negative("early_stop_tolerance", tol)?;
        }
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { name, value })
    }
}

fn unit_interval(name: &'static str, value: f64) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutsideUnit { name, value })
    }
}
