//! Individual drones for the hybrid variant.

use sc_core::{AgentId, Position};

use crate::Configuration;

/// A drone with personal-best memory.
///
/// `best_score` only ever increases; `best_position` is where the agent
/// stood when that score was observed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:            AgentId,
    pub position:      Position,
    pub best_position: Position,
    pub best_score:    f64,
}

impl Agent {
    /// A fresh agent whose personal best is its starting point, scored 0.
    pub fn new(id: AgentId, position: Position) -> Self {
        Self { id, position, best_position: position, best_score: 0.0 }
    }

    /// Record `score` at the current position if it strictly beats the
    /// personal best.  Returns `true` on improvement.
    pub fn observe(&mut self, score: f64) -> bool {
        if score > self.best_score {
            self.best_score = score;
            self.best_position = self.position;
            true
        } else {
            false
        }
    }
}

/// All agents of one hybrid run, indexed by `AgentId`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Swarm {
    pub agents: Vec<Agent>,
}

impl Swarm {
    /// One agent per position, ids assigned in order.
    pub fn from_positions(positions: &[Position]) -> Self {
        let agents = positions
            .iter()
            .enumerate()
            .map(|(i, &p)| Agent::new(AgentId(i as u32), p))
            .collect();
        Self { agents }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Current positions as a configuration snapshot.
    pub fn configuration(&self) -> Configuration {
        self.agents.iter().map(|a| a.position).collect::<Vec<_>>().into()
    }

    /// Agent with the highest personal best; the lowest index wins ties.
    pub fn leader(&self) -> Option<&Agent> {
        self.agents
            .iter()
            .fold(None, |best: Option<&Agent>, a| match best {
                Some(b) if b.best_score >= a.best_score => Some(b),
                _ => Some(a),
            })
    }

    /// Mean current position.
    pub fn centroid(&self) -> Option<Position> {
        Position::centroid(self.agents.iter().map(|a| a.position))
    }
}
