//! Resource allocation via 0/1 knapsack dynamic programming.
//!
//! Selects a subset of investment items maximizing total benefit
//! without exceeding an integer budget; each item is taken whole or
//! not at all. Two equivalent solvers are provided — the standard
//! `O(n x budget)` table and a space-optimized single-array form —
//! plus a greedy-ratio comparison utility demonstrating that the DP
//! optimum is never worse than the heuristic.
//!
//! Table memory is `O(items x budget)`; callers are expected to cap
//! the budget magnitude.

mod runner;
mod types;

pub use runner::KnapsackSolver;
pub use types::{AllocationSolution, GreedyComparison, Item};
