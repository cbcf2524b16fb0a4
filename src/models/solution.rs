//! Candidate solution type.

use super::Route;

/// A complete candidate solution: one route per truck plus the customers
/// no truck could serve.
///
/// Produced by one construction agent per call, consumed immediately for
/// cost evaluation, and possibly retained as the iteration or global best.
/// A customer appears in at most one route; customers left in `unserved`
/// are a first-class outcome, not an error.
///
/// # Examples
///
/// ```
/// use aco_routing::models::{Route, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_route(Route::new(vec![0, 1, 2, 0]));
/// sol.add_route(Route::new(vec![0, 0]));
/// sol.add_unserved(3);
///
/// assert_eq!(sol.num_served(), 2);
/// assert_eq!(sol.num_unserved(), 1);
/// assert!(!sol.is_degenerate());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solution {
    routes: Vec<Route>,
    unserved: Vec<usize>,
    total_cost: f64,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route to this solution.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Marks a customer as unserved.
    pub fn add_unserved(&mut self, customer: usize) {
        self.unserved.push(customer);
    }

    /// Routes in this solution, one per truck, degenerate ones included.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Customers no truck could serve within capacity and deadline.
    pub fn unserved(&self) -> &[usize] {
        &self.unserved
    }

    /// Number of unserved customers.
    pub fn num_unserved(&self) -> usize {
        self.unserved.len()
    }

    /// Number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.num_customers()).sum()
    }

    /// Returns `true` if this solution serves no customers at all.
    pub fn is_degenerate(&self) -> bool {
        self.num_served() == 0
    }

    /// Total travel distance, as cached by the controller.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Caches the total travel distance.
    pub fn set_total_cost(&mut self, cost: f64) {
        self.total_cost = cost;
    }
}
