//! Greedy allocation utilities.
//!
//! Fast heuristics for the divisible cases where greedy is actually
//! optimal: fractional budget allocation across projects by
//! benefit/cost ratio, and distribution of an integer amount (fuel,
//! cargo units) over container sizes, largest first. The indivisible
//! case belongs to the [`crate::knapsack`] DP solver.

mod runner;
mod types;

pub use runner::GreedyPlanner;
pub use types::{Assignment, FractionalAllocation, Project, UnitDistribution};
