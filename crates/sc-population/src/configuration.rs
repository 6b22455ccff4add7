//! Candidate drone layouts.

use std::ops::{Deref, DerefMut};

use sc_core::{Area, Position};

use crate::{PopulationError, PopulationResult};

// ── Configuration ─────────────────────────────────────────────────────────────

/// One position per drone, indexed by `AgentId`.
///
/// Length never changes after construction; the update engine only mutates
/// elements in place.  Derefs to `[Position]` (not `Vec`) for that reason.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Configuration(Vec<Position>);

impl Configuration {
    pub fn new(positions: Vec<Position>) -> Self {
        Self(positions)
    }

    /// Clamp every position into `area`.
    pub fn clamp_into(&mut self, area: Area) {
        for p in &mut self.0 {
            *p = area.clamp(*p);
        }
    }

    /// `true` if every position is finite and inside `area`.
    pub fn within(&self, area: Area) -> bool {
        self.0.iter().all(|&p| p.is_finite() && area.contains(p))
    }

    /// Mean drone position, or `None` when there are no drones.
    pub fn centroid(&self) -> Option<Position> {
        Position::centroid(self.0.iter().copied())
    }

    pub fn into_inner(self) -> Vec<Position> {
        self.0
    }
}

impl From<Vec<Position>> for Configuration {
    fn from(positions: Vec<Position>) -> Self {
        Self(positions)
    }
}

impl Deref for Configuration {
    type Target = [Position];
    fn deref(&self) -> &[Position] {
        &self.0
    }
}

impl DerefMut for Configuration {
    fn deref_mut(&mut self) -> &mut [Position] {
        &mut self.0
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// A fixed-size set of configurations, all with the same drone count.
///
/// Member order carries no meaning except as a deterministic tie-breaker
/// when two members score equally.
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    members:     Vec<Configuration>,
    agent_count: usize,
}

impl Population {
    /// Validate that `members` is non-empty and uniformly sized.
    pub fn new(members: Vec<Configuration>) -> PopulationResult<Self> {
        let agent_count = members.first().ok_or(PopulationError::Empty)?.len();
        if let Some((index, c)) = members.iter().enumerate().find(|(_, c)| c.len() != agent_count) {
            return Err(PopulationError::LengthMismatch {
                index,
                expected: agent_count,
                got:      c.len(),
            });
        }
        Ok(Self { members, agent_count })
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agent_count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Configuration] {
        &self.members
    }

    /// Swap in a whole new generation.
    ///
    /// The generation must keep the population size and every member's
    /// length; otherwise the current members are left untouched.
    pub fn replace(&mut self, next: Vec<Configuration>) -> PopulationResult<()> {
        if next.len() != self.members.len() {
            return Err(PopulationError::SizeChanged {
                expected: self.members.len(),
                got:      next.len(),
            });
        }
        if let Some((index, c)) = next.iter().enumerate().find(|(_, c)| c.len() != self.agent_count) {
            return Err(PopulationError::LengthMismatch {
                index,
                expected: self.agent_count,
                got:      c.len(),
            });
        }
        self.members = next;
        Ok(())
    }
}
