//! `sc-population` — optimisation state for the `swarm_cover` engine.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                  |
//! |-------------------|-----------------------------------------------------------|
//! | [`target`]        | `Target` (a ground user)                                  |
//! | [`agent`]         | `Agent` (a drone with personal-best memory), `Swarm`      |
//! | [`configuration`] | `Configuration` (one position per drone), `Population`    |
//! | [`best`]          | `GlobalBest<T>` — monotone best-so-far record             |
//! | [`builder`]       | `ScenarioBuilder` — uniform random scattering             |
//! | [`error`]         | `PopulationError`, `PopulationResult<T>`                  |
//!
//! The dispersive variant evolves a [`Population`] of whole configurations;
//! the hybrid variant evolves a single [`Swarm`] of individual agents.  Both
//! expose their drones' positions as a [`Configuration`] so the scoring and
//! output layers never need to know which variant produced them.

pub mod agent;
pub mod best;
pub mod builder;
pub mod configuration;
pub mod error;
pub mod target;


pub use agent::{Agent, Swarm};
pub use best::GlobalBest;
pub use builder::{ScenarioBuilder, scatter};
pub use configuration::{Configuration, Population};
pub use error::{PopulationError, PopulationResult};
pub use target::{Target, target_positions};
