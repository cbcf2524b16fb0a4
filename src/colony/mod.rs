//! The ant colony optimization solver.
//!
//! - [`AcoConfig`] — Tunable run parameters, validated up front
//! - [`PheromoneMatrix`] — Learned edge weights (evaporate / deposit / fuse)
//! - [`construct_solution`] — One agent building one candidate solution
//! - [`Colony`] — The controller: parallel agent batches, one pheromone
//!   update per iteration, stagnation handling
//! - [`RunResult`] — Best solution, cost history, and run metadata

mod ant;
mod config;
mod controller;
mod pheromone;
mod result;

pub use ant::construct_solution;
pub use config::AcoConfig;
pub use controller::Colony;
pub use pheromone::PheromoneMatrix;
pub use result::RunResult;
