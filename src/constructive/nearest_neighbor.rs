//! Greedy nearest-neighbor heuristic.
//!
//! # Algorithm
//!
//! For each truck in turn, repeatedly visit the nearest unvisited customer
//! whose demand fits the remaining capacity and whose own due date is
//! still reachable, waiting at the customer when arriving before its ready
//! time. Used as a feasibility and quality comparator for the colony, not
//! as a solver in its own right.
//!
//! # Complexity
//!
//! O(n²) where n = number of customers.

use crate::distance::DistanceMatrix;
use crate::evaluation;
use crate::models::{Customer, Solution, Truck};

/// Constructs a baseline solution by greedy nearest-neighbor selection.
///
/// # Arguments
///
/// * `customers` — All nodes (index 0 = depot)
/// * `distances` — Distance matrix over the node set
/// * `truck_count` — Fleet size
/// * `truck_capacity` — Per-truck load capacity
///
/// # Examples
///
/// ```
/// use aco_routing::models::Customer;
/// use aco_routing::distance::DistanceMatrix;
/// use aco_routing::constructive::nearest_neighbor;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0, 1000.0),
///     Customer::new(1, 1.0, 0.0, 10, 2.0, 0.0, 1000.0).unwrap(),
///     Customer::new(2, 2.0, 0.0, 10, 2.0, 0.0, 1000.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_customers(&customers);
///
/// let solution = nearest_neighbor(&customers, &dm, 1, 30);
/// assert_eq!(solution.num_served(), 2);
/// ```
pub fn nearest_neighbor(
    customers: &[Customer],
    distances: &DistanceMatrix,
    truck_count: usize,
    truck_capacity: i32,
) -> Solution {
    let depot = customers[0].id();
    let mut unvisited: Vec<usize> = (1..customers.len()).collect();
    let mut solution = Solution::new();

    for _ in 0..truck_count {
        let mut truck = Truck::new(truck_capacity, depot);
        while !unvisited.is_empty() {
            let feasible: Vec<usize> = unvisited
                .iter()
                .copied()
                .filter(|&c| {
                    let customer = &customers[c];
                    truck.can_carry(customer.demand())
                        && truck.elapsed() + distances.get(truck.position(), c)
                            <= customer.time_window().due()
                })
                .collect();
            let Some(nearest) = distances.nearest_among(truck.position(), &feasible) else {
                break;
            };
            let customer = &customers[nearest];
            let arrival = truck.elapsed() + distances.get(truck.position(), nearest);
            let service_start = arrival + customer.time_window().waiting_time(arrival);
            truck.advance(
                nearest,
                customer.demand(),
                service_start + customer.service_time(),
            );
            unvisited.retain(|&c| c != nearest);
        }
        solution.add_route(truck.finish(depot));
    }

    for &customer in &unvisited {
        solution.add_unserved(customer);
    }
    let total = evaluation::solution_cost(&solution, distances);
    solution.set_total_cost(total);
    solution
}
