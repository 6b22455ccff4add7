//! `sc-engine` — the iterative swarm optimiser for drone placement.
//!
//! # Iteration loop
//!
//! ```text
//! until terminated:
//!   ① Check   — cancellation token, convergence flag, iteration budget.
//!   ② Step    — UpdateStrategy::step mutates the population in place:
//!                 dispersive: random walk + best attraction, re-score,
//!                             strictly-better best replaces the old one.
//!                 hybrid:     coverage → personal bests → global best →
//!                             inertia + exploration + attraction +
//!                             repulsion → clamp → decay coefficients.
//!   ③ Record  — push the iteration's snapshot onto the trajectory.
//! ```
//!
//! # Entry points
//!
//! - [`run`] — validate, build, and run a whole optimisation; returns a
//!   [`RunOutcome`] with the best configuration and the trajectory.
//! - [`EngineBuilder`] + [`Engine::tick`] — drive one iteration at a time
//!   from an external loop and poll [`Engine::snapshot`] in between.
//! - [`DispersiveWalk::step`] / [`HybridSwarm::step`] — the raw state
//!   transitions, for callers that manage their own state.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Scores the dispersive population on Rayon's thread pool. |
//! | `serde`    | Derives `Serialize`/`Deserialize` on outcomes/snapshots. |
//!
//! # Quick-start
//!
//! ```rust
//! use sc_core::{Area, SwarmConfig};
//! use sc_engine::{CancelToken, NoopObserver, Termination, run};
//! use sc_population::ScenarioBuilder;
//!
//! let config = SwarmConfig { max_iterations: 20, ..SwarmConfig::default() };
//! let mut scenario = ScenarioBuilder::new(Area::new(config.area_side), 1);
//! let users = scenario.targets(40);
//! let drones = scenario.configuration(5);
//!
//! let outcome = run(users, drones, config, CancelToken::new(), &mut NoopObserver).unwrap();
//! assert!(outcome.iterations <= 20);
//! assert_ne!(outcome.termination, Termination::Cancelled);
//! ```

pub mod builder;
pub mod context;
pub mod dispersive;
pub mod engine;
pub mod error;
pub mod hybrid;
pub mod observer;
pub mod run;
pub mod strategy;
pub mod termination;


pub use builder::EngineBuilder;
pub use context::EvalContext;
pub use dispersive::{DispersiveState, DispersiveWalk};
pub use engine::{Engine, PollSnapshot, RunOutcome, RunStatus};
pub use error::{EngineError, EngineResult};
pub use hybrid::{HybridBest, HybridCoefficients, HybridState, HybridSwarm};
pub use observer::{EngineObserver, NoopObserver};
pub use run::run;
pub use strategy::{PopulationState, StepOutcome, StepReport, UpdateStrategy};
pub use termination::{CancelToken, Termination, TerminationPolicy};
