//! Graph algorithms over small in-memory logistics networks.
//!
//! Vertices are plain indices `0..V`; mapping an index to a real
//! distribution center is the caller's concern. Provided algorithms:
//!
//! - **Kruskal / Prim**: minimum spanning tree (forest on disconnected
//!   input, reported explicitly via [`MstSolution::components`]).
//! - **Dijkstra**: single-source shortest distances and explicit path
//!   reconstruction, non-negative weights only.
//! - **BFS / DFS**: level-order and depth-first traversal, plus
//!   exhaustive simple-path enumeration for small graphs.
//!
//! # References
//!
//! - Kruskal (1956), "On the Shortest Spanning Subtree of a Graph"
//! - Prim (1957), "Shortest Connection Networks and Some Generalizations"
//! - Dijkstra (1959), "A Note on Two Problems in Connexion with Graphs"

mod mst;
mod shortest_path;
mod traversal;
mod types;

pub use mst::{kruskal, prim, MstSolution};
pub use shortest_path::{dijkstra, dijkstra_path, PathResult, ShortestPaths};
pub use traversal::{all_simple_paths, bfs, dfs, BfsResult, DfsResult};
pub use types::{adjacency_from_edges, Adjacency, Edge, UNREACHABLE};
