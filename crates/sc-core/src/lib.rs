//! `sc-core` — foundational types for the `swarm_cover` drone placement
//! optimiser.
//!
//! This crate is a dependency of every other `sc-*` crate.  It has no `sc-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `TargetId`                                 |
//! | [`geo`]         | `Position` (2-D vector), `Area` (square service area) |
//! | [`iteration`]   | `Iteration` counter                                   |
//! | [`rng`]         | `SwarmRng` (seeded, run-level)                        |
//! | [`config`]      | `SwarmConfig` and its parameter groups                |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod iteration;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    DispersiveParams, FitnessWeights, HybridParams, RepulsionParams, SwarmConfig, Variant,
};
pub use error::{ConfigError, ConfigResult};
pub use geo::{Area, Position};
pub use ids::{AgentId, TargetId};
pub use iteration::Iteration;
pub use rng::SwarmRng;
