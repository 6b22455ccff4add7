//! Deterministic run-level RNG.
//!
//! # Determinism strategy
//!
//! One optimisation run owns exactly one `SwarmRng`, seeded from
//! `SwarmConfig::seed`.  The update engine draws from it in a fixed order
//! (agent-major, `x` before `y`), so the same seed and inputs always produce a
//! bit-identical trajectory.
//!
//! Independent streams (e.g. for scattering initial positions) are derived
//! with [`SwarmRng::child`], which mixes an offset into a fresh draw using the
//! 64-bit fractional golden ratio.  Deriving a child consumes one value from
//! the parent, so derivation order is part of the reproducibility contract.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Area, Position};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Run-level seeded RNG.
///
/// Not `Sync` by design of the inner `SmallRng`: give each concurrent run its
/// own instance.
#[derive(Clone, Debug)]
pub struct SwarmRng(SmallRng);

impl SwarmRng {
    pub fn new(seed: u64) -> Self {
        SwarmRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SwarmRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SwarmRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SwarmRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Vector with both components drawn uniformly from `[-half, half)`.
    ///
    /// Draws `x` then `y`.
    #[inline]
    pub fn symmetric(&mut self, half: f64) -> Position {
        let x: f64 = self.random();
        let y: f64 = self.random();
        Position::new((2.0 * x - 1.0) * half, (2.0 * y - 1.0) * half)
    }

    /// A point drawn uniformly from `area`.
    #[inline]
    pub fn point_in(&mut self, area: Area) -> Position {
        let x: f64 = self.random();
        let y: f64 = self.random();
        Position::new(x * area.side, y * area.side)
    }
}
