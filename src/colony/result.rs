//! Run results.

use crate::distance::DistanceMatrix;
use crate::evaluation::{self, RunSummary};
use crate::models::{Customer, Solution};

/// The outcome of one colony run.
///
/// Carries the best solution found, the append-only cost history (one
/// entry per agent evaluation across all iterations), and the partial
/// feasibility and failure metadata the run accumulated. Everything
/// downstream consumers need is here; the internal matrices are not
/// exposed.
#[derive(Debug, Clone)]
pub struct RunResult {
    best: Solution,
    costs: Vec<f64>,
    unserved_history: Vec<usize>,
    failed_agents: usize,
    no_op_iterations: usize,
}

impl RunResult {
    pub(crate) fn new(
        best: Solution,
        costs: Vec<f64>,
        unserved_history: Vec<usize>,
        failed_agents: usize,
        no_op_iterations: usize,
    ) -> Self {
        Self {
            best,
            costs,
            unserved_history,
            failed_agents,
            no_op_iterations,
        }
    }

    /// The best solution found, degenerate routes included.
    pub fn best(&self) -> &Solution {
        &self.best
    }

    /// The best solution with degenerate routes stripped.
    pub fn reduced_best(&self) -> Solution {
        evaluation::reduce(&self.best)
    }

    /// Cost of every evaluated candidate, in evaluation order.
    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Unserved-customer count of every evaluated candidate, parallel to
    /// [`costs`](RunResult::costs).
    pub fn unserved_history(&self) -> &[usize] {
        &self.unserved_history
    }

    /// Returns `true` if the best solution leaves customers unserved.
    pub fn best_is_partial(&self) -> bool {
        self.best.num_unserved() > 0
    }

    /// Returns `true` if the best solution serves no customers at all.
    pub fn best_is_degenerate(&self) -> bool {
        self.best.is_degenerate()
    }

    /// Number of agents that failed and were excluded over the whole run.
    pub fn failed_agents(&self) -> usize {
        self.failed_agents
    }

    /// Number of iterations in which every agent failed (evaporation only,
    /// no reinforcement).
    pub fn no_op_iterations(&self) -> usize {
        self.no_op_iterations
    }

    /// Summary metrics over the reduced best solution.
    pub fn summarize(
        &self,
        customers: &[Customer],
        distances: &DistanceMatrix,
    ) -> RunSummary {
        evaluation::summarize(&self.best, customers, distances)
    }
}
