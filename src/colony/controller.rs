//! Colony controller.
//!
//! Owns the run context (customers, distance matrix, pheromone matrix)
//! and orchestrates iterations: each iteration spawns a batch of
//! construction agents, runs them in parallel against the current
//! pheromone snapshot, collects their candidates at the barrier, and then
//! performs the single pheromone update (evaporation plus elite
//! reinforcement). The matrix has exactly one writer window per iteration,
//! strictly after every agent of that iteration has returned and strictly
//! before the next iteration's agents start reading.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use super::ant;
use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use super::result::RunResult;
use crate::distance::DistanceMatrix;
use crate::error::{ConfigError, SolveError};
use crate::evaluation;
use crate::models::{Customer, Solution};

/// The ACO solver for one problem instance.
///
/// # Examples
///
/// ```
/// use aco_routing::colony::{AcoConfig, Colony};
/// use aco_routing::models::Customer;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0, 100.0),
///     Customer::new(1, 1.0, 0.0, 10, 2.0, 0.0, 100.0).unwrap(),
///     Customer::new(2, 2.0, 0.0, 10, 2.0, 0.0, 100.0).unwrap(),
/// ];
/// let config = AcoConfig::new(1, 100).with_iterations(5).with_ants_count(4);
///
/// let mut colony = Colony::new(customers, config).unwrap();
/// let result = colony.run().unwrap();
/// assert_eq!(result.costs().len(), 20);
/// assert!(!result.best_is_partial());
/// ```
pub struct Colony {
    customers: Vec<Customer>,
    distances: DistanceMatrix,
    pheromone: PheromoneMatrix,
    config: AcoConfig,
}

impl Colony {
    /// Builds the run context for the given instance.
    ///
    /// `customers[0]` is the depot. Fails fast on any constructor
    /// constraint violation; nothing runs on bad input.
    pub fn new(customers: Vec<Customer>, config: AcoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if customers.len() < 2 {
            return Err(ConfigError::NoCustomers);
        }
        for (position, customer) in customers.iter().enumerate() {
            if customer.id() != position {
                return Err(ConfigError::NonDenseIds {
                    position,
                    id: customer.id(),
                });
            }
        }
        let distances = DistanceMatrix::from_customers(&customers);
        let pheromone = PheromoneMatrix::new(customers.len(), config.pheromone_init);
        Ok(Self {
            customers,
            distances,
            pheromone,
            config,
        })
    }

    /// The problem nodes (depot first).
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// The precomputed distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Read-only view of the current pheromone matrix.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// The configuration this colony was built with.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Runs the configured number of iterations and returns the best
    /// solution found together with the full cost history.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoValidCandidate`] only if not a single agent
    /// in the entire run produced a candidate. Individual agent failures
    /// are logged, counted, and excluded from the iteration's pool.
    pub fn run(&mut self) -> Result<RunResult, SolveError> {
        let mut costs = Vec::with_capacity(self.config.iterations * self.config.ants_count);
        let mut unserved_history = Vec::with_capacity(costs.capacity());
        let mut best: Option<(f64, Solution)> = None;
        let mut stagnation = 0usize;
        let mut failed_agents = 0usize;
        let mut no_op_iterations = 0usize;
        let stagnation_limit = (self.config.iterations / 10).max(1);
        let elite_count = self.config.ants_count / 2;

        for iteration in 0..self.config.iterations {
            // Parallel phase: every agent reads the same pheromone
            // snapshot. The collect is the barrier.
            let customers = &self.customers;
            let distances = &self.distances;
            let pheromone = &self.pheromone;
            let config = &self.config;
            let outcomes: Vec<_> = (0..config.ants_count)
                .into_par_iter()
                .map(|index| {
                    let seed = config
                        .seed
                        .wrapping_add((iteration * config.ants_count + index) as u64);
                    let mut rng = StdRng::seed_from_u64(seed);
                    ant::construct_solution(customers, distances, pheromone, config, &mut rng)
                        .map(|mut solution| {
                            let cost = evaluation::solution_cost(&solution, distances);
                            solution.set_total_cost(cost);
                            (cost, solution)
                        })
                })
                .collect();

            // Single-threaded from here: histories, best tracking, and the
            // one writer window for the pheromone matrix.
            let mut pool: Vec<(f64, Solution)> = Vec::with_capacity(outcomes.len());
            for outcome in outcomes {
                match outcome {
                    Ok((cost, solution)) => {
                        costs.push(cost);
                        unserved_history.push(solution.num_unserved());
                        pool.push((cost, solution));
                    }
                    Err(error) => {
                        failed_agents += 1;
                        log::warn!("iteration {iteration}: agent excluded: {error}");
                    }
                }
            }

            let mut iteration_best: Option<&(f64, Solution)> = None;
            for candidate in &pool {
                if iteration_best.is_none_or(|(best_cost, _)| candidate.0 < *best_cost) {
                    iteration_best = Some(candidate);
                }
            }

            let mut improved = false;
            match iteration_best {
                Some((cost, solution)) => {
                    log::debug!(
                        "iteration {iteration}: best candidate {cost:.2}, {} unserved",
                        solution.num_unserved()
                    );
                    if best.as_ref().is_none_or(|(best_cost, _)| cost < best_cost) {
                        best = Some((*cost, solution.clone()));
                        improved = true;
                    }
                }
                None => {
                    no_op_iterations += 1;
                    log::warn!("iteration {iteration}: every agent failed, evaporating only");
                }
            }
            if improved {
                stagnation = 0;
            } else {
                stagnation += 1;
            }

            self.pheromone.evaporate(self.config.evaporation_rate);
            self.reinforce(&pool, elite_count);

            if self.config.stagnation_fuse && stagnation >= stagnation_limit {
                log::debug!(
                    "iteration {iteration}: stagnated for {stagnation} iterations, fusing pheromone"
                );
                self.pheromone
                    .fuse(self.config.fusion_weight, self.config.pheromone_init);
                stagnation = 0;
            }
        }

        let (_, best_solution) = best.ok_or(SolveError::NoValidCandidate)?;
        if best_solution.is_degenerate() {
            log::warn!("run finished with a degenerate best solution (no customers served)");
        }
        Ok(RunResult::new(
            best_solution,
            costs,
            unserved_history,
            failed_agents,
            no_op_iterations,
        ))
    }

    /// Deposits `1 / cost` on every consecutive edge of the elite
    /// candidates (the best half of the iteration's pool, ties broken by
    /// completion order). Zero-cost candidates deposit nothing.
    fn reinforce(&mut self, pool: &[(f64, Solution)], elite_count: usize) {
        let mut order: Vec<usize> = (0..pool.len()).collect();
        order.sort_by(|&a, &b| pool[a].0.partial_cmp(&pool[b].0).unwrap_or(Ordering::Equal));

        for &k in order.iter().take(elite_count) {
            let (cost, solution) = &pool[k];
            if *cost <= 0.0 {
                continue;
            }
            let amount = 1.0 / cost;
            for route in solution.routes() {
                for (u, v) in route.edges() {
                    self.pheromone.deposit(u, v, amount);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_customers() -> Vec<Customer> {
        vec![
            Customer::depot(0.0, 0.0, 1000.0),
            Customer::new(1, 1.0, 0.0, 10, 5.0, 0.0, 1000.0).expect("valid"),
            Customer::new(2, 2.0, 0.0, 10, 5.0, 0.0, 1000.0).expect("valid"),
            Customer::new(3, 3.0, 0.0, 10, 5.0, 0.0, 1000.0).expect("valid"),
        ]
    }

    #[test]
    fn test_rejects_instance_without_customers() {
        let depot_only = vec![Customer::depot(0.0, 0.0, 100.0)];
        assert_eq!(
            Colony::new(depot_only, AcoConfig::new(1, 100)).err(),
            Some(ConfigError::NoCustomers)
        );
    }

    #[test]
    fn test_rejects_sparse_ids() {
        let customers = vec![
            Customer::depot(0.0, 0.0, 100.0),
            Customer::new(5, 1.0, 0.0, 10, 0.0, 0.0, 100.0).expect("valid"),
        ];
        assert_eq!(
            Colony::new(customers, AcoConfig::new(1, 100)).err(),
            Some(ConfigError::NonDenseIds { position: 1, id: 5 })
        );
    }

    #[test]
    fn test_rejects_invalid_config_before_running() {
        assert!(matches!(
            Colony::new(line_customers(), AcoConfig::new(1, 100).with_ants_count(0)),
            Err(ConfigError::NoAnts)
        ));
    }

    #[test]
    fn test_run_serves_all_reachable_customers() {
        let config = AcoConfig::new(2, 20).with_iterations(10).with_ants_count(6);
        let mut colony = Colony::new(line_customers(), config).expect("valid");
        let result = colony.run().expect("solves");

        assert_eq!(result.costs().len(), 60);
        assert_eq!(result.unserved_history().len(), 60);
        assert!(!result.best_is_partial());
        assert!(!result.best_is_degenerate());
        assert_eq!(result.failed_agents(), 0);
        assert_eq!(result.no_op_iterations(), 0);
    }

    #[test]
    fn test_best_cost_matches_history_minimum() {
        let config = AcoConfig::new(2, 20).with_iterations(8).with_ants_count(5);
        let mut colony = Colony::new(line_customers(), config).expect("valid");
        let result = colony.run().expect("solves");
        let minimum = result.costs().iter().cloned().fold(f64::INFINITY, f64::min);
        assert!((result.best().total_cost() - minimum).abs() < 1e-9);
    }

    #[test]
    fn test_run_is_deterministic_for_fixed_seed() {
        let config = AcoConfig::new(2, 20)
            .with_iterations(6)
            .with_ants_count(4)
            .with_seed(123);
        let mut a = Colony::new(line_customers(), config.clone()).expect("valid");
        let mut b = Colony::new(line_customers(), config).expect("valid");
        let ra = a.run().expect("solves");
        let rb = b.run().expect("solves");
        assert_eq!(ra.costs(), rb.costs());
        assert_eq!(ra.best().routes(), rb.best().routes());
    }

    #[test]
    fn test_capacity_split_served_by_two_trucks() {
        let customers = vec![
            Customer::depot(0.0, 0.0, 1000.0),
            Customer::new(1, 1.0, 0.0, 6, 0.0, 0.0, 1000.0).expect("valid"),
            Customer::new(2, -1.0, 0.0, 6, 0.0, 0.0, 1000.0).expect("valid"),
        ];
        let config = AcoConfig::new(2, 10).with_iterations(5).with_ants_count(4);
        let mut colony = Colony::new(customers.clone(), config).expect("valid");
        let result = colony.run().expect("solves");

        assert!(!result.best_is_partial());
        for route in result.best().routes() {
            let load: i32 = route.customers().iter().map(|&c| customers[c].demand()).sum();
            assert!(load <= 10);
        }
    }

    #[test]
    fn test_unreachable_instance_reports_degenerate_best() {
        // The only customer cannot be reached within the depot deadline.
        let customers = vec![
            Customer::depot(0.0, 0.0, 5.0),
            Customer::new(1, 100.0, 0.0, 1, 1.0, 0.0, 5.0).expect("valid"),
        ];
        let config = AcoConfig::new(1, 10).with_iterations(3).with_ants_count(2);
        let mut colony = Colony::new(customers, config).expect("valid");
        let result = colony.run().expect("still returns a result");

        assert!(result.best_is_degenerate());
        assert!(result.best_is_partial());
        assert!(result.unserved_history().iter().all(|&u| u == 1));
        assert_eq!(result.best().total_cost(), 0.0);
    }

    #[test]
    fn test_pheromone_stays_non_negative_after_run() {
        for rho in [0.0, 0.5, 1.0] {
            let config = AcoConfig::new(2, 20)
                .with_iterations(12)
                .with_ants_count(4)
                .with_evaporation_rate(rho);
            let mut colony = Colony::new(line_customers(), config).expect("valid");
            colony.run().expect("solves");
            let ph = colony.pheromone();
            for i in 0..ph.size() {
                for j in 0..ph.size() {
                    assert!(ph.get(i, j) >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_stagnation_fuse_run_completes() {
        let config = AcoConfig::new(2, 20)
            .with_iterations(20)
            .with_ants_count(4)
            .with_stagnation_fuse(true);
        let mut colony = Colony::new(line_customers(), config).expect("valid");
        let result = colony.run().expect("solves");
        assert!(!result.best_is_partial());
    }

    #[test]
    fn test_summary_over_best() {
        let config = AcoConfig::new(3, 30).with_iterations(10).with_ants_count(6);
        let mut colony = Colony::new(line_customers(), config).expect("valid");
        let result = colony.run().expect("solves");
        let summary = result.summarize(colony.customers(), colony.distances());
        assert!(summary.active_trucks >= 1);
        assert!(summary.total_distance > 0.0);
        // Total time adds 5.0 service per served customer.
        let served = result.best().num_served() as f64;
        assert!((summary.total_time - (summary.total_distance + 5.0 * served)).abs() < 1e-9);
    }
}
