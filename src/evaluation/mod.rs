//! Solution cost evaluation and result reduction.

mod cost;

pub use cost::{reduce, route_distance, solution_cost, summarize, RunSummary};
