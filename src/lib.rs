//! Route and resource optimization core for small logistics networks.
//!
//! Provides the combinatorial optimization and graph algorithms behind
//! a distribution-center network (centers, trucks, inter-center
//! routes):
//!
//! - **Graph algorithms**: Kruskal and Prim minimum spanning trees,
//!   Dijkstra shortest paths with path reconstruction, BFS/DFS
//!   traversal, and exhaustive simple-path enumeration.
//! - **Sequence planning (backtracking)**: the visiting order over a
//!   stop set that maximizes accumulated priority under cost and
//!   distance ceilings.
//! - **Route optimization (branch & bound)**: the minimum-cost route
//!   visiting all stops exactly once, optionally returning to the
//!   origin, with explored/pruned diagnostics.
//! - **Resource allocation (0/1 knapsack DP)**: the item subset
//!   maximizing benefit under an integer budget, in standard and
//!   space-optimized forms, plus a greedy comparison.
//! - **Greedy allocation**: fractional budget splitting and unit
//!   distribution for the divisible cases where greedy is optimal.
//!
//! # Architecture
//!
//! This crate is a pure computation library: callers (typically a
//! thin service layer over persisted centers and routes) build a
//! request-local graph, cost matrix, or item list, invoke one
//! component, and receive a self-contained, optionally
//! serde-serializable solution object. Components are independent of
//! each other except for the leaf utilities ([`union_find`],
//! [`frontier`]) and the shared request-local data model ([`model`]).
//! Everything is synchronous and single-threaded; independent
//! invocations may run concurrently with no coordination, and the
//! exponential searches accept a cooperative cancellation token.

pub mod backtrack;
pub mod bnb;
pub mod frontier;
pub mod graph;
pub mod greedy;
pub mod knapsack;
pub mod model;
pub mod union_find;
