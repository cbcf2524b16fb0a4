//! Construction agent.
//!
//! One agent builds one complete candidate solution by probabilistic
//! greedy selection: trucks are processed in order, and each truck extends
//! its route by sampling the next customer from the feasible set with
//! weight `pheromone^alpha * (1/distance)^beta`. The agent only reads the
//! pheromone and distance matrices; it touches no shared mutable state.
//!
//! # Reference
//!
//! Dorigo, M. & Gambardella, L.M. (1997). "Ant Colony System: A
//! Cooperative Learning Approach to the Traveling Salesman Problem",
//! *IEEE Transactions on Evolutionary Computation* 1(1), 53-66.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use crate::distance::DistanceMatrix;
use crate::error::AgentError;
use crate::models::{Customer, Solution, Truck};

/// Guards the inverse-distance heuristic against division by zero.
const HEURISTIC_EPSILON: f64 = 1e-6;

/// Builds one candidate solution from the current pheromone snapshot.
///
/// Trucks are filled one at a time. A customer is feasible for the current
/// truck when its demand fits the remaining capacity and the truck can
/// still visit it and be back at the depot by the depot's due date. When
/// no feasible customer remains, the route closes and the next truck
/// starts; customers left over after the last truck are recorded on the
/// solution as unserved.
///
/// # Errors
///
/// Returns [`AgentError::InvalidSelectionWeights`] if the weights over a
/// non-empty feasible set do not form a distribution (for instance after
/// the pheromone trail has fully evaporated to zero).
///
/// # Examples
///
/// ```
/// use aco_routing::colony::{construct_solution, AcoConfig, PheromoneMatrix};
/// use aco_routing::distance::DistanceMatrix;
/// use aco_routing::models::Customer;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0, 100.0),
///     Customer::new(1, 1.0, 0.0, 10, 2.0, 0.0, 100.0).unwrap(),
///     Customer::new(2, 2.0, 0.0, 10, 2.0, 0.0, 100.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_customers(&customers);
/// let pheromone = PheromoneMatrix::new(customers.len(), 1.0);
/// let config = AcoConfig::new(1, 100);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let solution = construct_solution(&customers, &dm, &pheromone, &config, &mut rng).unwrap();
/// assert_eq!(solution.num_served(), 2);
/// assert!(solution.unserved().is_empty());
/// ```
pub fn construct_solution<R: Rng>(
    customers: &[Customer],
    distances: &DistanceMatrix,
    pheromone: &PheromoneMatrix,
    config: &AcoConfig,
    rng: &mut R,
) -> Result<Solution, AgentError> {
    let depot = customers[0].id();
    let deadline = customers[0].time_window().due();
    let mut unvisited: Vec<usize> = (1..customers.len()).collect();
    let mut solution = Solution::new();

    for _ in 0..config.truck_count {
        let mut truck = Truck::new(config.truck_capacity, depot);
        while !unvisited.is_empty() {
            let feasible =
                feasible_set(&truck, &unvisited, customers, distances, depot, deadline);
            if feasible.is_empty() {
                break;
            }
            let probabilities = selection_probabilities(
                truck.position(),
                &feasible,
                distances,
                pheromone,
                config,
            )?;
            let index = WeightedIndex::new(&probabilities)
                .map_err(|_| AgentError::InvalidSelectionWeights)?
                .sample(rng);
            let chosen = feasible[index];
            let customer = &customers[chosen];
            let elapsed = truck.elapsed()
                + distances.get(truck.position(), chosen)
                + customer.service_time();
            truck.advance(chosen, customer.demand(), elapsed);
            unvisited.retain(|&c| c != chosen);
        }
        solution.add_route(truck.finish(depot));
    }

    for &customer in &unvisited {
        solution.add_unserved(customer);
    }
    Ok(solution)
}

/// Unvisited customers the current truck can serve and still make it back
/// to the depot by the deadline.
fn feasible_set(
    truck: &Truck,
    unvisited: &[usize],
    customers: &[Customer],
    distances: &DistanceMatrix,
    depot: usize,
    deadline: f64,
) -> Vec<usize> {
    let position = truck.position();
    unvisited
        .iter()
        .copied()
        .filter(|&c| {
            let customer = &customers[c];
            truck.can_carry(customer.demand())
                && truck.elapsed()
                    + distances.get(position, c)
                    + customer.service_time()
                    + distances.get(c, depot)
                    <= deadline
        })
        .collect()
}

/// Normalized selection probabilities over the feasible set.
fn selection_probabilities(
    from: usize,
    feasible: &[usize],
    distances: &DistanceMatrix,
    pheromone: &PheromoneMatrix,
    config: &AcoConfig,
) -> Result<Vec<f64>, AgentError> {
    let mut weights = Vec::with_capacity(feasible.len());
    for &c in feasible {
        let trail = pheromone.get(from, c).powf(config.pheromone_importance);
        let heuristic = (1.0 / (distances.get(from, c) + HEURISTIC_EPSILON))
            .powf(config.heuristic_importance);
        weights.push(trail * heuristic);
    }
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(AgentError::InvalidSelectionWeights);
    }
    for weight in &mut weights {
        *weight /= total;
    }
    Ok(weights)
}
