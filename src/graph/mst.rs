//! Minimum spanning tree: Kruskal and Prim.

use super::types::{validate_adjacency, validate_edges, Adjacency, Edge};
use crate::frontier::MinFrontier;
use crate::union_find::UnionFind;

/// Result of an MST computation.
///
/// On a disconnected graph this is a spanning forest rather than a
/// tree; `components` makes that explicit so callers do not have to
/// infer it from the edge count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MstSolution {
    /// Accepted edges, in acceptance order.
    pub edges: Vec<Edge>,

    /// Sum of accepted edge weights.
    pub total_weight: f64,

    /// Number of connected components spanned (1 = a true tree).
    pub components: usize,
}

impl MstSolution {
    /// Whether the result spans the whole graph as a single tree.
    pub fn is_tree(&self) -> bool {
        self.components == 1
    }
}

/// Kruskal's MST over an edge list. `O(E log E)`.
///
/// Edges are sorted ascending by weight (stable: ties keep input
/// order) and accepted greedily whenever their endpoints lie in
/// different Union-Find components. Stops once `V - 1` edges are
/// accepted.
///
/// # Examples
///
/// ```
/// use transopt::graph::{kruskal, Edge};
///
/// let edges = [Edge::new(0, 1, 10.0), Edge::new(1, 2, 5.0), Edge::new(0, 2, 8.0)];
/// let mst = kruskal(3, &edges).unwrap();
/// assert!(mst.is_tree());
/// assert_eq!(mst.total_weight, 13.0);
/// ```
pub fn kruskal(vertices: usize, edges: &[Edge]) -> Result<MstSolution, String> {
    validate_edges(vertices, edges)?;

    let mut sorted: Vec<Edge> = edges.to_vec();
    sorted.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut sets = UnionFind::new(vertices);
    let mut accepted = Vec::new();
    let mut total_weight = 0.0;

    for edge in sorted {
        if sets.union(edge.from, edge.to) {
            total_weight += edge.weight;
            accepted.push(edge);
            if accepted.len() == vertices - 1 {
                break;
            }
        }
    }

    Ok(MstSolution {
        total_weight,
        components: vertices - accepted.len(),
        edges: accepted,
    })
}

/// Prim's MST over an adjacency list, seeded at vertex 0. `O(E log V)`.
///
/// Maintains a min frontier of candidate edges keyed by weight with
/// lazy deletion: popped entries whose target is already in the tree
/// are skipped. On a disconnected graph only the component of vertex
/// 0 is spanned; the remaining vertices count as singleton components.
pub fn prim(vertices: usize, adjacency: &Adjacency) -> Result<MstSolution, String> {
    validate_adjacency(vertices, adjacency)?;

    let mut visited = vec![false; vertices];
    let mut accepted = Vec::new();
    let mut total_weight = 0.0;

    // Frontier payload: (from, to); `from` is usize::MAX for the seed
    let mut frontier = MinFrontier::new();
    frontier.push(0.0, (usize::MAX, 0usize));

    while let Some((weight, (from, to))) = frontier.pop() {
        if visited[to] {
            continue; // stale entry
        }
        visited[to] = true;

        if from != usize::MAX {
            total_weight += weight;
            accepted.push(Edge::new(from, to, weight));
            if accepted.len() == vertices - 1 {
                break;
            }
        }

        for &(neighbor, edge_weight) in &adjacency[to] {
            if !visited[neighbor] {
                frontier.push(edge_weight, (to, neighbor));
            }
        }
    }

    Ok(MstSolution {
        total_weight,
        components: vertices - accepted.len(),
        edges: accepted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::adjacency_from_edges;

    fn triangle() -> Vec<Edge> {
        vec![
            Edge::new(0, 1, 10.0),
            Edge::new(1, 2, 5.0),
            Edge::new(0, 2, 8.0),
        ]
    }

    #[test]
    fn test_kruskal_triangle() {
        let mst = kruskal(3, &triangle()).unwrap();
        assert!(mst.is_tree());
        assert_eq!(mst.edges.len(), 2);
        assert!((mst.total_weight - 13.0).abs() < 1e-9);
        // Cheapest two edges win; the (0,1,10) edge would close a cycle
        assert_eq!(mst.edges[0], Edge::new(1, 2, 5.0));
        assert_eq!(mst.edges[1], Edge::new(0, 2, 8.0));
    }

    #[test]
    fn test_prim_triangle_matches_kruskal_weight() {
        let adjacency = adjacency_from_edges(3, &triangle(), false).unwrap();
        let mst = prim(3, &adjacency).unwrap();
        assert!(mst.is_tree());
        assert_eq!(mst.edges.len(), 2);
        assert!((mst.total_weight - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_kruskal_disconnected_is_forest() {
        // Two components: {0,1} and {2,3}
        let edges = [Edge::new(0, 1, 1.0), Edge::new(2, 3, 2.0)];
        let mst = kruskal(4, &edges).unwrap();
        assert!(!mst.is_tree());
        assert_eq!(mst.components, 2);
        assert_eq!(mst.edges.len(), 2);
        assert!((mst.total_weight - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_prim_disconnected_spans_seed_component_only() {
        let edges = [Edge::new(0, 1, 1.0), Edge::new(2, 3, 2.0)];
        let adjacency = adjacency_from_edges(4, &edges, false).unwrap();
        let mst = prim(4, &adjacency).unwrap();
        assert_eq!(mst.edges.len(), 1);
        assert_eq!(mst.components, 3); // {0,1}, {2}, {3}
        assert!(!mst.is_tree());
    }

    #[test]
    fn test_kruskal_no_cycles() {
        let edges = [
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 2.0),
            Edge::new(2, 3, 3.0),
            Edge::new(3, 0, 4.0),
            Edge::new(0, 2, 5.0),
        ];
        let mst = kruskal(4, &edges).unwrap();
        assert_eq!(mst.edges.len(), 3);

        let mut sets = UnionFind::new(4);
        for edge in &mst.edges {
            assert!(sets.union(edge.from, edge.to), "MST edge closed a cycle");
        }
    }

    #[test]
    fn test_duplicate_edges_compete() {
        let edges = [Edge::new(0, 1, 9.0), Edge::new(0, 1, 2.0)];
        let mst = kruskal(2, &edges).unwrap();
        assert_eq!(mst.edges.len(), 1);
        assert!((mst.total_weight - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_vertex() {
        let mst = kruskal(1, &[]).unwrap();
        assert!(mst.is_tree());
        assert!(mst.edges.is_empty());

        let mst = prim(1, &vec![Vec::new()]).unwrap();
        assert!(mst.is_tree());
        assert!(mst.edges.is_empty());
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(kruskal(0, &[]).is_err());
        assert!(kruskal(2, &[Edge::new(0, 1, -1.0)]).is_err());
        assert!(prim(2, &vec![Vec::new()]).is_err()); // length mismatch
    }
}
