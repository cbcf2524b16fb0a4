//! Cost evaluation and result reduction.
//!
//! Pure functions over immutable inputs: travel distance along routes,
//! solution cost, and the reducer that strips degenerate routes and
//! derives summary metrics from a best solution.

use serde::Serialize;

use crate::distance::DistanceMatrix;
use crate::models::{Customer, Route, Solution};

/// Sum of consecutive pairwise distances along the route, including the
/// closing return to the depot.
pub fn route_distance(route: &Route, distances: &DistanceMatrix) -> f64 {
    route.edges().map(|(u, v)| distances.get(u, v)).sum()
}

/// Total travel distance over all routes of a solution.
pub fn solution_cost(solution: &Solution, distances: &DistanceMatrix) -> f64 {
    solution
        .routes()
        .iter()
        .map(|route| route_distance(route, distances))
        .sum()
}

/// Drops every degenerate (depot-to-depot only) route.
///
/// Unserved customers and the cached cost carry over unchanged; degenerate
/// routes contribute zero distance.
pub fn reduce(solution: &Solution) -> Solution {
    let mut reduced = Solution::new();
    for route in solution.routes() {
        if !route.is_degenerate() {
            reduced.add_route(route.clone());
        }
    }
    for &customer in solution.unserved() {
        reduced.add_unserved(customer);
    }
    reduced.set_total_cost(solution.total_cost());
    reduced
}

/// Aggregate metrics derived from a best solution.
///
/// This is the outward-facing tuple consumed by reporting and plotting
/// collaborators, alongside the routes and the cost history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Number of routes that serve at least one customer.
    pub active_trucks: usize,
    /// Total travel distance over the surviving routes.
    pub total_distance: f64,
    /// Total distance plus service time over all served customers.
    pub total_time: f64,
}

/// Computes summary metrics over the non-degenerate routes of a solution.
///
/// # Examples
///
/// ```
/// use aco_routing::models::{Customer, Route, Solution};
/// use aco_routing::distance::DistanceMatrix;
/// use aco_routing::evaluation::summarize;
///
/// let customers = vec![
///     Customer::depot(0.0, 0.0, 100.0),
///     Customer::new(1, 3.0, 4.0, 10, 2.0, 0.0, 100.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_customers(&customers);
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::new(vec![0, 1, 0]));
/// sol.add_route(Route::new(vec![0, 0]));
///
/// let summary = summarize(&sol, &customers, &dm);
/// assert_eq!(summary.active_trucks, 1);
/// assert!((summary.total_distance - 10.0).abs() < 1e-10);
/// assert!((summary.total_time - 12.0).abs() < 1e-10);
/// ```
pub fn summarize(
    solution: &Solution,
    customers: &[Customer],
    distances: &DistanceMatrix,
) -> RunSummary {
    let reduced = reduce(solution);
    let total_distance = solution_cost(&reduced, distances);
    let service_time: f64 = reduced
        .routes()
        .iter()
        .flat_map(|route| route.customers().iter())
        .map(|&c| customers[c].service_time())
        .sum();
    RunSummary {
        active_trucks: reduced.routes().len(),
        total_distance,
        total_time: total_distance + service_time,
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
    fn test_route_distance() {
        let customers = line_customers();
        let dm = DistanceMatrix::from_customers(&customers);
        let route = Route::new(vec![0, 1, 2, 3, 0]);
        // 1 + 1 + 1 + 3 back to depot
        assert!((route_distance(&route, &dm) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_distance_degenerate() {
        let customers = line_customers();
        let dm = DistanceMatrix::from_customers(&customers);
        let route = Route::new(vec![0, 0]);
        assert_eq!(route_distance(&route, &dm), 0.0);
    }

    #[test]
    fn test_solution_cost_sums_routes() {
        let customers = line_customers();
        let dm = DistanceMatrix::from_customers(&customers);
        let mut sol = Solution::new();
        sol.add_route(Route::new(vec![0, 1, 0]));
        sol.add_route(Route::new(vec![0, 3, 0]));
        assert!((solution_cost(&sol, &dm) - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_reduce_drops_degenerate_routes() {
        let mut sol = Solution::new();
        sol.add_route(Route::new(vec![0, 1, 0]));
        sol.add_route(Route::new(vec![0, 0]));
        sol.add_route(Route::new(vec![0, 2, 3, 0]));
        sol.add_unserved(9);
        sol.set_total_cost(14.0);

        let reduced = reduce(&sol);
        assert_eq!(reduced.routes().len(), 2);
        assert!(reduced.routes().iter().all(|r| !r.is_degenerate()));
        assert_eq!(reduced.unserved(), &[9]);
        assert!((reduced.total_cost() - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_summarize() {
        let customers = line_customers();
        let dm = DistanceMatrix::from_customers(&customers);
        let mut sol = Solution::new();
        sol.add_route(Route::new(vec![0, 1, 2, 3, 0]));
        sol.add_route(Route::new(vec![0, 0]));

        let summary = summarize(&sol, &customers, &dm);
        assert_eq!(summary.active_trucks, 1);
        assert!((summary.total_distance - 6.0).abs() < 1e-10);
        // 6.0 distance + 3 customers x 5.0 service
        assert!((summary.total_time - 21.0).abs() < 1e-10);
    }

    #[test]
    fn test_summarize_empty_solution() {
        let customers = line_customers();
        let dm = DistanceMatrix::from_customers(&customers);
        let summary = summarize(&Solution::new(), &customers, &dm);
        assert_eq!(summary.active_trucks, 0);
        assert_eq!(summary.total_distance, 0.0);
        assert_eq!(summary.total_time, 0.0);
    }
}
