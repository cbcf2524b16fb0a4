//! Per-agent truck state.

use super::Route;

/// Mutable state of one truck while a construction agent builds its route.
///
/// A truck is created fresh for every agent in every iteration and
/// discarded after the agent's solution is scored. The route under
/// construction always starts at the depot; [`finish`](Truck::finish)
/// appends the closing depot stop.
///
/// # Examples
///
/// ```
/// use aco_routing::models::Truck;
///
/// let mut truck = Truck::new(30, 0);
/// assert!(truck.can_carry(25));
/// truck.advance(3, 25, 12.5);
/// assert!(!truck.can_carry(10));
/// assert_eq!(truck.position(), 3);
///
/// let route = truck.finish(0);
/// assert_eq!(route.stops(), &[0, 3, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Truck {
    capacity: i32,
    stops: Vec<usize>,
    load: i32,
    elapsed: f64,
}

impl Truck {
    /// Creates an empty truck positioned at the depot with no load and no
    /// elapsed time.
    pub fn new(capacity: i32, depot: usize) -> Self {
        Self {
            capacity,
            stops: vec![depot],
            load: 0,
            elapsed: 0.0,
        }
    }

    /// Fixed load capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Cumulative demand assigned so far.
    pub fn load(&self) -> i32 {
        self.load
    }

    /// Cumulative travel plus service time since leaving the depot.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// The stop the truck currently sits at.
    pub fn position(&self) -> usize {
        *self.stops.last().expect("route always holds the depot")
    }

    /// Stops visited so far, starting with the depot.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Returns `true` if the given demand still fits.
    pub fn can_carry(&self, demand: i32) -> bool {
        self.load + demand <= self.capacity
    }

    /// Moves the truck to `customer`, taking on its demand and setting the
    /// elapsed time to `elapsed`.
    pub fn advance(&mut self, customer: usize, demand: i32, elapsed: f64) {
        self.stops.push(customer);
        self.load += demand;
        self.elapsed = elapsed;
    }

    /// Closes the route by returning to the depot.
    pub fn finish(mut self, depot: usize) -> Route {
        self.stops.push(depot);
        Route::new(self.stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truck_fresh() {
        let truck = Truck::new(100, 0);
        assert_eq!(truck.capacity(), 100);
        assert_eq!(truck.load(), 0);
        assert_eq!(truck.elapsed(), 0.0);
        assert_eq!(truck.position(), 0);
        assert_eq!(truck.stops(), &[0]);
    }

    #[test]
    fn test_truck_advance() {
        let mut truck = Truck::new(100, 0);
        truck.advance(2, 40, 7.5);
        truck.advance(5, 30, 20.0);
        assert_eq!(truck.load(), 70);
        assert!((truck.elapsed() - 20.0).abs() < 1e-10);
        assert_eq!(truck.position(), 5);
    }

    #[test]
    fn test_truck_can_carry() {
        let mut truck = Truck::new(50, 0);
        assert!(truck.can_carry(50));
        truck.advance(1, 30, 1.0);
        assert!(truck.can_carry(20));
        assert!(!truck.can_carry(21));
    }

    #[test]
    fn test_truck_finish_empty_is_degenerate() {
        let route = Truck::new(50, 0).finish(0);
        assert_eq!(route.stops(), &[0, 0]);
        assert!(route.is_degenerate());
    }
}
