//! Customer and time window types.

/// A service time window at a customer location.
///
/// The window opens at `ready` and closes at `due`, with `ready <= due`.
/// For the depot, `due` acts as the global route-closing deadline: every
/// truck must be back before it.
///
/// # Examples
///
/// ```
/// use aco_routing::models::TimeWindow;
///
/// let tw = TimeWindow::new(100.0, 200.0).unwrap();
/// assert!(tw.ready() <= tw.due());
/// assert!((tw.waiting_time(50.0) - 50.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    ready: f64,
    due: f64,
}

impl TimeWindow {
    /// Creates a new time window.
    ///
    /// Returns `None` if `ready > due` or either value is non-finite.
    pub fn new(ready: f64, due: f64) -> Option<Self> {
        if !ready.is_finite() || !due.is_finite() || ready > due {
            return None;
        }
        Some(Self { ready, due })
    }

    /// Earliest allowable service start.
    pub fn ready(&self) -> f64 {
        self.ready
    }

    /// Latest allowable arrival time.
    pub fn due(&self) -> f64 {
        self.due
    }

    /// Returns the waiting time if arriving at the given time.
    ///
    /// Zero if the vehicle arrives within or after the window.
    pub fn waiting_time(&self, arrival: f64) -> f64 {
        if arrival < self.ready {
            self.ready - arrival
        } else {
            0.0
        }
    }

    /// Returns `true` if arriving at the given time violates this window.
    pub fn is_violated(&self, arrival: f64) -> bool {
        arrival > self.due
    }
}

/// A customer (or depot) in a routing instance.
///
/// Customer 0 is the depot. Each customer has a location, a demand, a time
/// window, and a service duration. Customers are immutable for the lifetime
/// of a run; their id doubles as the index into the distance and pheromone
/// matrices.
///
/// # Examples
///
/// ```
/// use aco_routing::models::Customer;
///
/// let depot = Customer::depot(35.0, 35.0, 230.0);
/// assert_eq!(depot.id(), 0);
/// assert_eq!(depot.demand(), 0);
/// assert_eq!(depot.time_window().due(), 230.0);
///
/// let c = Customer::new(1, 41.0, 49.0, 10, 10.0, 0.0, 200.0).unwrap();
/// assert_eq!(c.id(), 1);
/// assert_eq!(c.demand(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Customer {
    id: usize,
    x: f64,
    y: f64,
    demand: i32,
    service_time: f64,
    time_window: TimeWindow,
}

impl Customer {
    /// Creates a new customer.
    ///
    /// Returns `None` if `ready > due`, either is non-finite, or the
    /// service time is negative.
    pub fn new(
        id: usize,
        x: f64,
        y: f64,
        demand: i32,
        service_time: f64,
        ready: f64,
        due: f64,
    ) -> Option<Self> {
        if service_time < 0.0 {
            return None;
        }
        let time_window = TimeWindow::new(ready, due)?;
        Some(Self {
            id,
            x,
            y,
            demand,
            service_time,
            time_window,
        })
    }

    /// Creates a depot at the given coordinates (id 0, no demand, no
    /// service time). `deadline` is the route-closing due date shared by
    /// every truck.
    pub fn depot(x: f64, y: f64, deadline: f64) -> Self {
        Self {
            id: 0,
            x,
            y,
            demand: 0,
            service_time: 0.0,
            time_window: TimeWindow {
                ready: 0.0,
                due: deadline,
            },
        }
    }

    /// Customer id (0 = depot); index into the distance and pheromone
    /// matrices.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Demand at this customer.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Service duration at this customer.
    pub fn service_time(&self) -> f64 {
        self.service_time
    }

    /// Service time window.
    pub fn time_window(&self) -> &TimeWindow {
        &self.time_window
    }

    /// Euclidean distance to another customer.
    pub fn distance_to(&self, other: &Customer) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
