//! `sc-eval` — pure scoring functions for drone configurations.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`coverage`]    | Fraction of users within radius of some drone               |
//! | [`allocation`]  | Nearest-drone load counts and resource efficiency           |
//! | [`fitness`]     | `FitnessEvaluator`, `Score` (weighted combination)          |
//! | [`repulsion`]   | `RepulsionModel` — pairwise separation forces               |
//!
//! Every function here is side-effect free and O(agents × targets) or
//! O(agents²).  Counts are small (tens to low hundreds), so plain nested
//! loops beat any spatial index.

pub mod allocation;
pub mod coverage;
pub mod fitness;
pub mod repulsion;

#[cfg(test)]
mod tests;

pub use allocation::{assign_loads, resource_efficiency};
pub use coverage::{coverage, covered_count};
pub use fitness::{FitnessEvaluator, Score};
pub use repulsion::RepulsionModel;
