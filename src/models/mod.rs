//! Domain model types for the routing problem.
//!
//! Provides the core abstractions: customers with demands and time windows,
//! per-agent truck state, depot-bounded routes, and candidate solutions
//! that track unserved customers explicitly.

mod customer;
mod route;
mod solution;
mod truck;

pub use customer::{Customer, TimeWindow};
pub use route::Route;
pub use solution::Solution;
pub use truck::Truck;
