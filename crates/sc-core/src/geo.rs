//! Planar geometry: the `Position` vector and the square service `Area`.
//!
//! Positions use `f64`.  The optimiser accumulates many small displacements
//! per run, and the coverage test is an inclusive `distance <= radius`
//! comparison, so single precision would make boundary cases noisy.

use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A point (or displacement) in the plane.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    /// Unit vector along +x.  Used wherever a direction is undefined.
    pub const UNIT_X: Position = Position { x: 1.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        (self - other).norm()
    }

    /// `true` if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Arithmetic mean of `points`, or `None` for an empty iterator.
    pub fn centroid<I>(points: I) -> Option<Position>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut sum = Position::ORIGIN;
        let mut n = 0usize;
        for p in points {
            sum += p;
            n += 1;
        }
        (n > 0).then(|| sum * (1.0 / n as f64))
    }
}

impl Add for Position {
    type Output = Position;
    #[inline]
    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Position {
    #[inline]
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Position {
    type Output = Position;
    #[inline]
    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Position {
    #[inline]
    fn sub_assign(&mut self, rhs: Position) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Position {
    type Output = Position;
    #[inline]
    fn mul(self, k: f64) -> Position {
        Position::new(self.x * k, self.y * k)
    }
}

impl Neg for Position {
    type Output = Position;
    #[inline]
    fn neg(self) -> Position {
        Position::new(-self.x, -self.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Area ──────────────────────────────────────────────────────────────────────

/// The square service area `[0, side] × [0, side]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub side: f64,
}

impl Area {
    #[inline]
    pub fn new(side: f64) -> Self {
        Self { side }
    }

    /// `true` if `p` lies inside the closed square.
    #[inline]
    pub fn contains(self, p: Position) -> bool {
        (0.0..=self.side).contains(&p.x) && (0.0..=self.side).contains(&p.y)
    }

    /// Hard clamp of each coordinate into `[0, side]`.
    ///
    /// A NaN coordinate is mapped to 0 so the bounds invariant holds even if
    /// a caller feeds pathological parameters.
    #[inline]
    pub fn clamp(self, p: Position) -> Position {
        Position::new(clamp_axis(p.x, self.side), clamp_axis(p.y, self.side))
    }
}

#[inline]
fn clamp_axis(v: f64, side: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, side) }
}
