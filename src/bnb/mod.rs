//! Route optimization via branch & bound.
//!
//! Best-first search for the minimum-cost route visiting all given
//! stops exactly once (optionally returning to the origin) under a
//! cost ceiling and a distance ceiling. The frontier is ordered by
//! accumulated cost plus a nearest-visited-neighbor lower bound.
//!
//! # Bound admissibility
//!
//! The lower bound sums, for each unvisited stop, the cheapest edge
//! into it from any already-visited stop. This is not an admissible
//! bound in general: whenever the cheapest entry to an unvisited stop
//! comes from another still-unvisited stop, the estimate exceeds the
//! true remaining cost and the search may prune the true optimum —
//! even on matrices satisfying the triangle inequality, once more
//! than one stop remains open past the frontier tail. The result is
//! therefore a high-quality heuristic with an exactness guarantee
//! only for very small instances (three stops or fewer); callers
//! needing certified optimality should verify against exhaustive
//! search at these sizes.

mod config;
mod runner;
mod types;

pub use config::RouteConfig;
pub use runner::RouteRunner;
pub use types::{RouteProblem, RouteSolution};
