//! Error types for configuration, agent, and solver failures.

use thiserror::Error;

/// A constructor constraint violation.
///
/// Raised by [`Colony::new`](crate::colony::Colony::new) before any run
/// starts; nothing is solved on bad input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The instance needs a depot plus at least one customer.
    #[error("instance must contain a depot and at least one customer")]
    NoCustomers,
    /// Customer ids must be their positions: `customers[i].id() == i`.
    #[error("customer ids must be dense indices (position {position} has id {id})")]
    NonDenseIds {
        /// Position in the customer list.
        position: usize,
        /// The id found at that position.
        id: usize,
    },
    /// `truck_count` must be positive.
    #[error("truck_count must be positive")]
    NoTrucks,
    /// `truck_capacity` must be positive.
    #[error("truck_capacity must be positive (got {0})")]
    NonPositiveCapacity(i32),
    /// `pheromone_importance` (alpha) must be finite and non-negative.
    #[error("pheromone_importance must be finite and non-negative (got {0})")]
    InvalidPheromoneImportance(f64),
    /// `heuristic_importance` (beta) must be finite and non-negative.
    #[error("heuristic_importance must be finite and non-negative (got {0})")]
    InvalidHeuristicImportance(f64),
    /// `evaporation_rate` (rho) must lie in `[0, 1]`.
    #[error("evaporation_rate must lie in [0, 1] (got {0})")]
    InvalidEvaporationRate(f64),
    /// `pheromone_init` must be positive and finite.
    #[error("pheromone_init must be positive and finite (got {0})")]
    NonPositivePheromoneInit(f64),
    /// `iterations` must be positive.
    #[error("iterations must be positive")]
    NoIterations,
    /// `ants_count` must be positive.
    #[error("ants_count must be positive")]
    NoAnts,
    /// `fusion_weight` must lie in `[0, 1]`.
    #[error("fusion_weight must lie in [0, 1] (got {0})")]
    InvalidFusionWeight(f64),
}

/// An unexpected failure inside one construction agent.
///
/// Isolated per iteration: the failing agent is logged and excluded from
/// the candidate pool; the iteration proceeds with the rest.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgentError {
    /// The selection weights over the feasible set did not form a valid
    /// probability distribution (all zero or non-finite).
    #[error("selection weights over the feasible set are not a valid distribution")]
    InvalidSelectionWeights,
}

/// Total solver failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Not a single agent in the entire run produced a candidate solution.
    #[error("no agent produced a valid candidate solution in the entire run")]
    NoValidCandidate,
}
