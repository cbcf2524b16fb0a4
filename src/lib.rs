//! # aco-routing
//!
//! Ant colony optimization for the capacitated vehicle routing problem
//! with time windows (CVRPTW): given a depot, customers with demands and
//! service time windows, and a fleet of capacity-limited trucks, find
//! depot-rooted routes that serve the customers while minimizing total
//! travel distance.
//!
//! Construction agents build candidate solutions in parallel against a
//! shared read-only pheromone snapshot; the colony controller reduces
//! each batch at a barrier and performs the single pheromone update per
//! iteration.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Customer, TimeWindow, Truck, Route, Solution)
//! - [`distance`] — Dense Euclidean distance matrix
//! - [`evaluation`] — Cost evaluation, result reduction, summary metrics
//! - [`colony`] — The solver: configuration, pheromone trails, agents, controller
//! - [`constructive`] — Greedy nearest-neighbor baseline comparator
//! - [`error`] — Configuration, agent, and solver error types

pub mod colony;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
